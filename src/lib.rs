pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
        swap: bool,
    },
    List,
    Interactive,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency widget starting...");

    let config = match config_path {
        Some(path) => crate::core::config::AppConfig::load_from_path(path)?,
        None => crate::core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            swap,
        } => {
            let from = from.as_deref().unwrap_or(&config.defaults.from);
            let to = to.as_deref().unwrap_or(&config.defaults.to);
            cli::convert::run(&config, &amount, from, to, swap).await
        }
        AppCommand::List => cli::list::run(),
        AppCommand::Interactive => cli::interactive::run(&config).await,
    }
}
