pub mod app;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{Cli, Commands};
