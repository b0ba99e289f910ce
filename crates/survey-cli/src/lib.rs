//! CLI library components for the survey report generator.

pub mod logging;
pub mod summary;
pub mod types;
