use jobtrail_adapter::{BillingCycle, Plan};

/// Plans slice: the plan chosen before signup and its loaded metadata
#[derive(Debug, Default)]
pub struct PlansState {
    pub selected_id: Option<String>,
    pub billing_cycle: BillingCycle,
    pub selected: Option<Plan>,
    pub load_error: Option<String>,
}

impl PlansState {
    pub fn select(&mut self, plan_id: Option<String>, billing_cycle: BillingCycle) {
        self.selected_id = plan_id;
        self.billing_cycle = billing_cycle;
        self.selected = None;
        self.load_error = None;
    }

    pub fn plan_loaded(&mut self, plan: Plan) {
        self.selected = Some(plan);
        self.load_error = None;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.selected = None;
        self.load_error = Some(message.into());
    }

    /// Free-tier assumption: only a loaded plan whose name differs from
    /// "free" makes the selection paid.
    pub fn is_paid(&self) -> bool {
        self.selected.as_ref().is_some_and(|plan| !plan.is_free())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrail_adapter::PlanPrice;
    use rust_decimal::Decimal;

    fn plan(name: &str) -> Plan {
        Plan {
            name: name.to_string(),
            price: PlanPrice {
                monthly: Decimal::new(999, 0),
                yearly: Decimal::new(9990, 0),
            },
        }
    }

    #[test]
    fn test_unloaded_selection_is_not_paid() {
        let mut state = PlansState::default();
        state.select(Some("plan_pro".to_string()), BillingCycle::Yearly);
        // Metadata not loaded yet: free-tier assumption holds.
        assert!(!state.is_paid());

        state.load_failed("Unable to load plan details. Please try again.");
        assert!(!state.is_paid());
        assert!(state.load_error.is_some());
    }

    #[test]
    fn test_loaded_paid_plan() {
        let mut state = PlansState::default();
        state.select(Some("plan_pro".to_string()), BillingCycle::Monthly);
        state.plan_loaded(plan("pro"));
        assert!(state.is_paid());
    }

    #[test]
    fn test_loaded_free_plan_is_not_paid() {
        let mut state = PlansState::default();
        state.select(Some("plan_free".to_string()), BillingCycle::Monthly);
        state.plan_loaded(plan("free"));
        assert!(!state.is_paid());
    }
}
