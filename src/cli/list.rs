use super::ui;
use crate::core::currency::list_supported_currencies;
use anyhow::Result;

pub fn run() -> Result<()> {
    let currencies = list_supported_currencies();
    println!(
        "{}\n",
        ui::style_text("Supported currencies", ui::StyleType::Title)
    );
    println!("{}", ui::currency_table(&currencies));
    Ok(())
}
