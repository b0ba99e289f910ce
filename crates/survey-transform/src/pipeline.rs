//! End-to-end transform pipeline from raw records to the report table.

use serde::Serialize;
use tracing::{debug, info};

use survey_model::{AnswerEvent, AnswerType, Result, SurveyRecords};

use crate::assemble::assemble_answer_events;
use crate::compose::compose_report;
use crate::frame::ReportTable;
use crate::questions::collect_question_specs;
use crate::strategies::encode_question;

/// Per-question outcome of one pipeline run, for summaries and logs.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutcome {
    /// Question label as it appears in the detail records.
    pub label: String,
    /// Raw answer-type tag the question declared.
    pub tag: String,
    /// Recognized answer type, `None` when the question was skipped.
    pub kind: Option<AnswerType>,
    /// Number of answer events that fed the question.
    pub events: usize,
    /// Number of report columns the question produced.
    pub columns: usize,
}

/// A composed report table plus the per-question outcomes behind it.
#[derive(Debug, Clone)]
pub struct ReportBuild {
    pub table: ReportTable,
    pub questions: Vec<QuestionOutcome>,
}

/// Run the whole transform: assemble answer events, collect question
/// specs, encode each question with its strategy, and compose the
/// aligned report table.
pub fn build_report_table(records: &SurveyRecords) -> Result<ReportBuild> {
    let events = assemble_answer_events(records);
    debug!(events = events.len(), "assembled answer events");

    let specs = collect_question_specs(&events)?;
    let mut frames = Vec::with_capacity(specs.len());
    let mut questions = Vec::with_capacity(specs.len());
    for spec in &specs {
        let matching: Vec<&AnswerEvent> = events
            .iter()
            .filter(|event| event.question.as_deref() == Some(spec.label.as_str()))
            .collect();
        let frame = encode_question(spec, &matching)?;
        questions.push(QuestionOutcome {
            label: spec.label.clone(),
            tag: spec.tag.clone(),
            kind: spec.kind(),
            events: matching.len(),
            columns: frame.as_ref().map_or(0, |frame| frame.headers.len()),
        });
        if let Some(frame) = frame {
            frames.push(frame);
        }
    }

    let table = compose_report(&frames, &events)?;
    info!(
        questions = questions.len(),
        encoded = frames.len(),
        respondents = table.height(),
        columns = table.width(),
        "built report table"
    );
    Ok(ReportBuild { table, questions })
}
