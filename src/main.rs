use clap::Parser;
use tracing_subscriber::EnvFilter;

use lesson_import::cli::app::{Cli, Commands, LogLevel, ReportFormat};
use lesson_import::wizard::state::ImportMethod;
use lesson_import::wizard::validate::{validate_for_method, Validation};
use lesson_import::{ImportError, Result};

/// Diagnostics go to stderr so they never mix with command output.
fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    match cli.command {
        Commands::Import {
            method,
            extension_installed,
        } => {
            let method = method.as_deref().map(parse_method).transpose()?;
            run_import(method, extension_installed).await?;
        }
        Commands::Validate {
            method,
            input,
            format,
        } => {
            let method = parse_method(&method)?;
            let report = Validation::from_result(&validate_for_method(method, &input));
            match format {
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                ReportFormat::Text => match &report.reason {
                    Some(reason) => println!("invalid: {reason}"),
                    None => println!("valid"),
                },
            }
        }
        Commands::Methods => print_methods(),
    }

    Ok(())
}

fn parse_method(tag: &str) -> Result<ImportMethod> {
    ImportMethod::from_tag(tag)
        .ok_or_else(|| ImportError::Cli(format!("unknown import method: {tag}")))
}

#[cfg(feature = "tui")]
async fn run_import(method: Option<ImportMethod>, extension_installed: bool) -> Result<()> {
    lesson_import::cli::tui::import::run(method, extension_installed).await
}

#[cfg(not(feature = "tui"))]
async fn run_import(_method: Option<ImportMethod>, _extension_installed: bool) -> Result<()> {
    Err(ImportError::Cli(
        "this build was compiled without the `tui` feature".to_string(),
    ))
}

fn print_methods() {
    for method in ImportMethod::ALL {
        let config = method.config();
        println!(
            "{:<14} {:<16} {:?}",
            method.tag(),
            method.label(),
            config.flow
        );
    }
}
