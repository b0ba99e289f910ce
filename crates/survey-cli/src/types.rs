//! Result types surfaced by the CLI commands.

use std::path::PathBuf;

use serde::Serialize;

use survey_model::AnswerType;
use survey_transform::QuestionOutcome;

/// Outcome of one completed export run. Serialized as-is when
/// `--summary-json` is given.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub data_folder: PathBuf,
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub respondents: usize,
    pub columns: usize,
    pub questions: Vec<QuestionOutcome>,
}

/// One row of the `questions` listing.
#[derive(Debug)]
pub struct QuestionListing {
    pub label: String,
    pub tag: String,
    pub kind: Option<AnswerType>,
    pub events: usize,
}
