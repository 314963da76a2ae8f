//! Line-oriented conversion session: each line edits the conversion state and
//! the summary is re-rendered once the resulting request settles.

use super::{convert, ui};
use crate::core::config::AppConfig;
use crate::core::{ConversionController, RateProvider};
use anyhow::{Result, anyhow};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  amount <number>   set the amount (a bare number works too)
  from <CODE>       set the source currency
  to <CODE>         set the target currency
  swap              exchange source and target
  show              print the current conversion
  list              list supported currencies
  help              print this help
  quit              leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Amount(String),
    From(String),
    To(String),
    Swap,
    Show,
    List,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let argument = |name: &str| {
            if rest.is_empty() {
                Err(anyhow!("Missing currency code for '{}'", name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "amount" | "a" => Ok(SessionCommand::Amount(rest.to_string())),
            "from" | "f" => argument("from").map(SessionCommand::From),
            "to" | "t" => argument("to").map(SessionCommand::To),
            "swap" | "s" => Ok(SessionCommand::Swap),
            "show" => Ok(SessionCommand::Show),
            "list" | "ls" => Ok(SessionCommand::List),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ if line.parse::<f64>().is_ok() => Ok(SessionCommand::Amount(line.to_string())),
            _ => Err(anyhow!("Unknown command: {} (type 'help')", word)),
        }
    }
}

fn render_state<P: RateProvider + 'static, W: Write>(
    controller: &ConversionController<P>,
    out: &mut W,
) -> Result<()> {
    let state = controller.snapshot();
    writeln!(
        out,
        "{} {}  ->  {} {}",
        state.from.flag,
        state.from.label(),
        state.to.flag,
        state.to.label()
    )?;

    match controller.summary() {
        Some(summary) => writeln!(out, "{}", ui::render_summary(&summary))?,
        None if state.amount_text.trim().is_empty() => {
            writeln!(out, "{}", ui::amount_hint(&state.from))?
        }
        None => writeln!(
            out,
            "{}",
            ui::style_text("No conversion available", ui::StyleType::Subtle)
        )?,
    }
    Ok(())
}

pub async fn run_session<P, R, W>(
    controller: &mut ConversionController<P>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    P: RateProvider + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{HELP}")?;
    render_state(controller, out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Warning))?;
                continue;
            }
        };

        let edited = match command {
            SessionCommand::Amount(text) => {
                controller.set_amount(text);
                Ok(())
            }
            SessionCommand::From(code) => controller.set_from_currency(&code),
            SessionCommand::To(code) => controller.set_to_currency(&code),
            SessionCommand::Swap => {
                controller.swap();
                Ok(())
            }
            SessionCommand::Show => Ok(()),
            SessionCommand::List => {
                writeln!(out, "{}", ui::currency_table(controller.catalog().records()))?;
                continue;
            }
            SessionCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            SessionCommand::Quit => break,
        };

        if let Err(e) = edited {
            writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Warning))?;
            continue;
        }

        if controller.is_fetching() {
            let spinner = ui::new_spinner("Fetching exchange rate...");
            controller.settled().await;
            spinner.finish_and_clear();
        }
        render_state(controller, out)?;
    }
    Ok(())
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let mut controller =
        convert::new_controller(config, &config.defaults.from, &config.defaults.to)?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(&mut controller, stdin, &mut stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, ConversionRequest, ConversionResult, RateError};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct FixedRateProvider;

    #[async_trait]
    impl RateProvider for FixedRateProvider {
        async fn convert(
            &self,
            request: &ConversionRequest,
        ) -> Result<ConversionResult, RateError> {
            let amount = crate::core::rate::parse_amount(&request.amount_text)?;
            let rate = if request.from == "USD" { 0.5 } else { 2.0 };
            Ok(ConversionResult {
                base: request.from.clone(),
                as_of_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                rate_value: amount * rate,
            })
        }
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(
            "amount 100".parse::<SessionCommand>().unwrap(),
            SessionCommand::Amount("100".to_string())
        );
        assert_eq!(
            "amount".parse::<SessionCommand>().unwrap(),
            SessionCommand::Amount(String::new())
        );
        assert_eq!(
            "42.5".parse::<SessionCommand>().unwrap(),
            SessionCommand::Amount("42.5".to_string())
        );
        assert_eq!(
            "FROM gbp".parse::<SessionCommand>().unwrap(),
            SessionCommand::From("gbp".to_string())
        );
        assert_eq!("swap".parse::<SessionCommand>().unwrap(), SessionCommand::Swap);
        assert_eq!("q".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
        assert!("to".parse::<SessionCommand>().is_err());
        assert!("convert everything".parse::<SessionCommand>().is_err());
    }

    #[tokio::test]
    async fn test_session_converts_and_swaps() {
        console::set_colors_enabled(false);
        let mut controller =
            ConversionController::new(Arc::new(FixedRateProvider), Catalog::new()).unwrap();
        let input = BufReader::new(&b"amount 10\nswap\nfrom XXX\nbogus\nquit\namount 99\n"[..]);
        let mut out = Vec::new();

        run_session(&mut controller, input, &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Enter an amount in USD"));
        assert!(out.contains("10 United States Dollar ="));
        assert!(out.contains("5 Euro"));
        assert!(out.contains("10 Euro ="));
        assert!(out.contains("20 United States Dollar"));
        assert!(out.contains("Unsupported currency: XXX"));
        assert!(out.contains("Unknown command: bogus"));
        assert!(!out.contains("99"));
        assert_eq!(controller.snapshot().amount_text, "10");
    }
}
