/// UI slice: the single error/success slots, the busy flag that
/// serializes user-initiated transitions, and the active route.
#[derive(Debug, Default)]
pub struct UiState {
    error: Option<String>,
    success: Option<String>,
    pub busy: bool,
    pub route: Option<String>,
}

impl UiState {
    /// One error at a time: showing an error clears any success message
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    /// Called at the start of every operation (and on fresh user input)
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_message_at_a_time() {
        let mut ui = UiState::default();
        ui.show_success("created");
        ui.show_error("boom");
        assert_eq!(ui.error(), Some("boom"));
        assert!(ui.success().is_none());

        ui.show_success("ok now");
        assert!(ui.error().is_none());
        assert_eq!(ui.success(), Some("ok now"));

        ui.clear_messages();
        assert!(ui.error().is_none());
        assert!(ui.success().is_none());
    }
}
