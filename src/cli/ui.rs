use crate::core::currency::CurrencyRecord;
use crate::core::format::{ATTRIBUTION_NOTICE, Summary};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Result,
    Warning,
    Notice,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Result => style(text).green().bold(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Notice => style(text).green(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Table of currencies as offered by the pickers.
pub fn currency_table(records: &[CurrencyRecord]) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell(""),
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Symbol"),
    ]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.flag),
            Cell::new(record.code).add_attribute(Attribute::Bold),
            Cell::new(record.name),
            Cell::new(record.symbol),
        ]);
    }
    table
}

/// Renders the summary area: headline, converted amount with a faded tail,
/// both unit rates and the footer.
pub fn render_summary(summary: &Summary) -> String {
    let converted = format!(
        "{}{} {}",
        style_text(&summary.converted.head(), StyleType::Result),
        style_text(summary.converted.tail(), StyleType::Subtle),
        summary.to_name
    );

    [
        summary.headline.clone(),
        converted,
        String::new(),
        summary.unit_rates.forward.clone(),
        summary.unit_rates.backward.clone(),
        String::new(),
        style_text(&format!("ⓘ {}", summary.footer), StyleType::Subtle),
        style_text(ATTRIBUTION_NOTICE, StyleType::Notice),
    ]
    .join("\n")
}

/// Amount prompt hint shown while no amount is entered.
pub fn amount_hint(from: &CurrencyRecord) -> String {
    style_text(
        &format!("Enter an amount in {} ({}) to calculate the currency", from.code, from.symbol),
        StyleType::Warning,
    )
}

/// Creates a spinner shown while a conversion request is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
