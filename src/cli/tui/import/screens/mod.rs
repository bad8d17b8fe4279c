//! Screen renderers for the import wizard

pub mod add_content;
pub mod generating;
pub mod review;
pub mod select_source;
pub mod step_indicator;
