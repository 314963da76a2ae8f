use super::ui;
use crate::core::config::AppConfig;
use crate::core::format::Summary;
use crate::core::{Catalog, ConversionController};
use crate::providers::FrankfurterProvider;
use anyhow::Result;
use std::sync::Arc;

/// Builds a controller wired to the configured Frankfurter endpoint.
pub fn new_controller(
    config: &AppConfig,
    from: &str,
    to: &str,
) -> Result<ConversionController<FrankfurterProvider>> {
    let frankfurter = &config.providers.frankfurter;
    let provider = Arc::new(FrankfurterProvider::new(
        &frankfurter.base_url,
        frankfurter.timeout(),
    ));
    let controller = ConversionController::with_currencies(provider, Catalog::new(), from, to)?
        .with_debounce(config.debounce());
    Ok(controller)
}

/// Performs a single conversion. `None` means the service gave no usable answer.
pub async fn convert(
    config: &AppConfig,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<Option<Summary>> {
    let mut controller = new_controller(config, from, to)?;

    let spinner = ui::new_spinner("Fetching exchange rate...");
    controller.set_amount(amount);
    controller.settled().await;
    spinner.finish_and_clear();

    Ok(controller.summary())
}

pub async fn run(config: &AppConfig, amount: &str, from: &str, to: &str, swap: bool) -> Result<()> {
    let (from, to) = if swap { (to, from) } else { (from, to) };

    match convert(config, amount, from, to).await? {
        Some(summary) => println!("{}", ui::render_summary(&summary)),
        None => println!(
            "{}",
            ui::style_text(
                &format!("No conversion available for {amount} {from} to {to}"),
                ui::StyleType::Subtle
            )
        ),
    }
    Ok(())
}
