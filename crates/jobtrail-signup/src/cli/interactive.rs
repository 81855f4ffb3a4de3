/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: A completed signup flow (free tier or paid)
[POS]:    CLI interaction layer
[UPDATE]: When the flow steps or prompt copy change
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use jobtrail_adapter::{format_currency, format_minor_units};

use crate::flow::{FlowError, FlowState, SignupFlowController, SignupForm};

/// Drive the two-step signup interaction to a terminal state
pub async fn run_signup(controller: &mut SignupFlowController) -> Result<()> {
    println!("{}", style("Create your jobtrail account").bold().cyan());
    print_plan_summary(controller);

    // Step 1: account creation. Loops until registration goes through.
    loop {
        let form = prompt_form().await?;
        match controller.submit_account_info(&form).await {
            Ok(()) => break,
            // Registration itself succeeded; the payment step below offers
            // an order retry or the free-tier fallback.
            Err(FlowError::OrderCreation(_)) => break,
            Err(err) => println!("{}", style(err.message()).red()),
        }
    }

    // Step 2: payment, when a paid plan was selected.
    while matches!(
        controller.state(),
        FlowState::AwaitingPayment | FlowState::Failed(_)
    ) {
        if matches!(controller.state(), FlowState::Failed(_)) {
            print_current_error(controller);
            let choice = prompt_choice(
                "Order setup failed",
                &["Retry order setup", "Continue with free plan"],
            )
            .await?;
            match choice {
                0 => {
                    if let Err(err) = controller.retry_order().await {
                        println!("{}", style(err.message()).red());
                    }
                }
                _ => {
                    controller.skip_payment().await.context("skip payment")?;
                }
            }
            continue;
        }

        print_order_summary(controller);
        let choice = prompt_choice(
            "Complete your subscription",
            &["Complete payment", "Continue with free plan"],
        )
        .await?;
        match choice {
            0 => {
                if let Err(err) = controller.pay_now().await {
                    println!("{}", style(err.message()).red());
                }
            }
            _ => {
                controller.skip_payment().await.context("skip payment")?;
            }
        }
    }

    {
        let store = controller.store();
        let store = store.read().unwrap();
        if let Some(message) = store.ui.success() {
            println!("\n{}", style(message).green().bold());
        }
    }

    if let Some(navigation) = controller.take_pending_navigation() {
        println!("{}", style(format!("Redirecting to {}...", navigation.target())).dim());
        navigation.wait().await;
    }

    Ok(())
}

async fn prompt_form() -> Result<SignupForm> {
    tokio::task::spawn_blocking(|| {
        let theme = ColorfulTheme::default();
        let name: String = Input::with_theme(&theme)
            .with_prompt("Full name")
            .interact_text()?;
        let email: String = Input::with_theme(&theme)
            .with_prompt("Email address")
            .interact_text()?;
        let password = Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?;
        let confirm_password = Password::with_theme(&theme)
            .with_prompt("Confirm password")
            .interact()?;
        Ok(SignupForm::new(&name, &email, &password, &confirm_password))
    })
    .await
    .context("form prompt aborted")?
}

async fn prompt_choice(prompt: &str, items: &[&str]) -> Result<usize> {
    let prompt = prompt.to_string();
    let items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        let theme = ColorfulTheme::default();
        let choice = Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()?;
        Ok(choice)
    })
    .await
    .context("selection prompt aborted")?
}

fn print_plan_summary(controller: &SignupFlowController) {
    let store = controller.store();
    let store = store.read().unwrap();

    if let Some(plan) = &store.plans.selected {
        if plan.is_free() {
            println!("Selected plan: {} (free)", style(&plan.name).bold());
        } else {
            let price = plan.price_for(store.plans.billing_cycle);
            println!(
                "Selected plan: {} — {}/{}",
                style(&plan.name).bold(),
                format_currency(price, jobtrail_adapter::currency::DEFAULT_CURRENCY),
                store.plans.billing_cycle
            );
        }
    } else if let Some(error) = &store.plans.load_error {
        println!("{}", style(error).yellow());
    }
}

fn print_order_summary(controller: &SignupFlowController) {
    print_current_error(controller);
    if let Some(order) = controller.payment_order() {
        let store = controller.store();
        let store = store.read().unwrap();
        println!("\n{}", style("Order summary").bold());
        if let Some(plan) = &store.plans.selected {
            println!("  Plan:    {}", plan.name);
        }
        println!("  Billing: {}", store.plans.billing_cycle);
        println!(
            "  Amount:  {}",
            format_minor_units(order.amount, &order.currency)
        );
    }
}

fn print_current_error(controller: &SignupFlowController) {
    let store = controller.store();
    let store = store.read().unwrap();
    if let Some(error) = store.ui.error() {
        println!("{}", style(error).red());
    }
}
