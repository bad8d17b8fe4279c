//! Terminal front-ends
pub mod import;
