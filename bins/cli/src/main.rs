//! Ledgerdesk statement report.
//!
//! Loads a workbook, derives the balance sheet, profit and loss, and
//! receivables summary, and prints them.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerdesk_core::{
    ReportService, Workbook,
    reports::{KeywordCostPolicy, StatementAssumptions},
};
use ledgerdesk_shared::{AppConfig, AppError};

/// Derive financial statements from a Ledgerdesk workbook.
#[derive(Parser, Debug)]
#[command(name = "ledgerdesk", version)]
struct Args {
    /// Print the statements as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Workbook JSON file; defaults to `report.workbook_path` from config
    workbook: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().ok();
            // --help and --version land here too, on stdout.
            if !err.use_stderr() {
                return ExitCode::SUCCESS;
            }
            return ExitCode::from(usage_error(&err).exit_code());
        }
    };

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerdesk=info,ledgerdesk_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn usage_error(err: &clap::Error) -> AppError {
    AppError::Validation(err.to_string().trim_end().to_string())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    let path = args
        .workbook
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.report.workbook_path));
    let json = std::fs::read_to_string(&path)
        .map_err(|e| AppError::NotFound(format!("{}: {e}", path.display())))?;
    let workbook = Workbook::from_json(&json)
        .map_err(AppError::from)
        .with_context(|| format!("loading workbook {}", path.display()))?;
    info!(path = %path.display(), accounts = workbook.accounts.len(), "Workbook loaded");

    print!("{}", build_output(workbook, &config, args.json)?);
    Ok(())
}

/// Derives the statements and formats them as JSON or a text report.
fn build_output(workbook: Workbook, config: &AppConfig, json: bool) -> anyhow::Result<String> {
    let assumptions = StatementAssumptions::from_config(&config.statements).map_err(AppError::from)?;
    let policy = KeywordCostPolicy::from_config(&config.statements).map_err(AppError::from)?;

    let workbook = workbook.with_default_currency(config.report.currency);
    let statements = ReportService::generate_statements(&workbook, &policy, &assumptions);

    if json {
        let mut out = serde_json::to_string_pretty(&statements)?;
        out.push('\n');
        Ok(out)
    } else {
        let chart = workbook.chart().map_err(AppError::from)?;
        Ok(render::Report::new(&statements, &chart).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const BOOKS: &str = r#"{ "accounts": [
        { "code": "1000", "name": "Operating", "type": "Asset", "subtype": "Bank", "balance": "1000" }
    ] }"#;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["ledgerdesk"]).unwrap();
        assert!(!args.json);
        assert!(args.workbook.is_none());
    }

    #[test]
    fn test_args_json_and_path() {
        let args = Args::try_parse_from(["ledgerdesk", "--json", "books.json"]).unwrap();
        assert!(args.json);
        assert_eq!(args.workbook, Some(PathBuf::from("books.json")));
    }

    #[test]
    fn test_args_rejects_unknown_flag() {
        let err = Args::try_parse_from(["ledgerdesk", "--csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let app_err = usage_error(&err);
        assert_eq!(app_err.error_code(), "VALIDATION_ERROR");
        assert_eq!(app_err.exit_code(), 65);
    }

    #[test]
    fn test_args_rejects_second_path() {
        let err = Args::try_parse_from(["ledgerdesk", "a.json", "b.json"]).unwrap_err();
        assert!(err.use_stderr());
        assert_eq!(usage_error(&err).exit_code(), 65);
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = Args::try_parse_from(["ledgerdesk", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_configured_currency_reaches_report() {
        temp_env::with_var("LEDGERDESK__REPORT__CURRENCY", Some("EUR"), || {
            let config = AppConfig::load().unwrap();
            let workbook = Workbook::from_json(BOOKS).unwrap();

            let text = build_output(workbook, &config, false).unwrap();

            assert!(text.contains("BALANCE SHEET (EUR)"));
            assert!(text.contains("€1,000.00"));
        });
    }

    #[test]
    fn test_workbook_currency_wins_over_config() {
        temp_env::with_var("LEDGERDESK__REPORT__CURRENCY", Some("EUR"), || {
            let config = AppConfig::load().unwrap();
            let workbook = Workbook::from_json(r#"{ "currency": "SGD" }"#).unwrap();

            let out = build_output(workbook, &config, true).unwrap();
            let value: serde_json::Value = serde_json::from_str(&out).unwrap();

            assert_eq!(value["currency"], "SGD");
        });
    }
}
