pub mod cli;
pub mod error;
pub mod wizard;

pub use error::{ImportError, Result};
