use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxw::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount of the source currency
        amount: String,
        /// Source currency code (defaults to the configured one)
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency code (defaults to the configured one)
        #[arg(short, long)]
        to: Option<String>,
        /// Exchange source and target before converting
        #[arg(short, long)]
        swap: bool,
    },
    /// List supported currencies
    List,
    /// Start an interactive conversion session
    Interactive,
}

impl From<Commands> for fxw::AppCommand {
    fn from(cmd: Commands) -> fxw::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                swap,
            } => fxw::AppCommand::Convert {
                amount,
                from,
                to,
                swap,
            },
            Commands::List => fxw::AppCommand::List,
            Commands::Interactive => fxw::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxw::cli::setup::setup(),
        Some(cmd) => fxw::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
