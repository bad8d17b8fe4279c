use clap::{Parser, Subcommand, ValueEnum};

/// lesson-import: multi-step content-import wizard prototype
#[derive(Parser)]
#[command(name = "lesson-import")]
#[command(version = "0.1.0")]
#[command(about = "Turn text, links, files and platform content into lessons")]
#[command(
    long_about = "lesson-import is a terminal prototype of a lesson-creation flow: pick a \
content source, add your content, and generate a lesson. All data is session-local; nothing \
is uploaded or persisted."
)]
pub struct Cli {
    /// Log level for diagnostic output on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output format for machine-readable reports
#[derive(Debug, Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive import wizard
    Import {
        /// Start at Add Content with this source preselected (see `methods`)
        #[arg(short, long)]
        method: Option<String>,

        /// Treat the companion browser extension as installed
        #[arg(long)]
        extension_installed: bool,
    },

    /// Validate input for an import method without running the wizard
    Validate {
        /// Import method tag (see `methods`)
        #[arg(short, long)]
        method: String,

        /// Raw input to validate (text or URL)
        input: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// List the available import methods and their flows
    Methods,
}
