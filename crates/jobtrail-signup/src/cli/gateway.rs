/*
[INPUT]:  A payment order and interactive terminal input
[OUTPUT]: A gateway response assembled from pasted confirmation fields
[POS]:    CLI layer - manual checkout stand-in for the real gateway SDK
[UPDATE]: When the gateway contract or prompt flow changes
*/

use async_trait::async_trait;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use jobtrail_adapter::{
    ApiError, CustomerInfo, GatewayResponse, PaymentGateway, PaymentOrder, Result,
    format_minor_units,
};

/// Manual-entry gateway for development.
///
/// Prompts for the three confirmation identifiers the real checkout would
/// hand back; leaving a field blank reproduces an interrupted payment,
/// declining the confirm reproduces a user cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptGateway;

#[async_trait]
impl PaymentGateway for PromptGateway {
    async fn process_payment(
        &self,
        order: &PaymentOrder,
        customer: &CustomerInfo,
    ) -> Result<GatewayResponse> {
        let order = order.clone();
        let customer = customer.clone();

        tokio::task::spawn_blocking(move || prompt_checkout(&order, &customer))
            .await
            .map_err(|err| ApiError::Gateway(format!("checkout prompt aborted: {err}")))?
    }
}

fn prompt_checkout(order: &PaymentOrder, customer: &CustomerInfo) -> Result<GatewayResponse> {
    let theme = ColorfulTheme::default();

    println!(
        "\n{} {} for {} ({})",
        style("Checkout:").bold(),
        format_minor_units(order.amount, &order.currency),
        style(&customer.name).cyan(),
        customer.email
    );

    let proceed = Confirm::with_theme(&theme)
        .with_prompt("Proceed with checkout?")
        .default(true)
        .interact()
        .map_err(|err| ApiError::Gateway(err.to_string()))?;
    if !proceed {
        return Err(ApiError::Gateway("Payment cancelled by user".to_string()));
    }

    let order_id = prompt_field(&theme, "Gateway order id", Some(&order.order_id))?;
    let payment_id = prompt_field(&theme, "Gateway payment id", None)?;
    let signature = prompt_field(&theme, "Gateway signature", None)?;

    Ok(GatewayResponse {
        order_id,
        payment_id,
        signature,
    })
}

fn prompt_field(
    theme: &ColorfulTheme,
    prompt: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(format!("{prompt} (blank = missing)"))
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let value = input
        .interact_text()
        .map_err(|err| ApiError::Gateway(err.to_string()))?;

    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}
