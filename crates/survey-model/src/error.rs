//! Error types for survey report generation.

use thiserror::Error;

/// Errors that can end a report generation.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// The record source could not be opened or decoded.
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(String),

    /// One question label was declared with two different answer-type tags.
    /// Never resolved silently; the caller decides what to do with the data.
    #[error("question '{question}' declares conflicting answer types '{first}' and '{second}'")]
    ConflictingAnswerTypes {
        question: String,
        first: String,
        second: String,
    },

    /// A table operation failed while building or composing frames.
    #[error("frame operation failed: {0}")]
    Frame(String),

    /// The workbook could not be written. The render is all-or-nothing, so
    /// no partial file exists when this is returned.
    #[error("workbook render failed: {0}")]
    RenderFailure(String),
}

impl SurveyError {
    /// Create a DataSourceUnavailable error.
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSourceUnavailable(message.into())
    }

    /// Create a Frame error.
    pub fn frame(message: impl Into<String>) -> Self {
        Self::Frame(message.into())
    }

    /// Create a RenderFailure error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::RenderFailure(message.into())
    }
}

/// Result type alias for report generation.
pub type Result<T> = std::result::Result<T, SurveyError>;
