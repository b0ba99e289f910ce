//! Transformation of normalized survey records into an aligned,
//! header-annotated report table.
//!
//! The pipeline runs in three steps: [`assemble_answer_events`] flattens
//! the four record files into one denormalized event stream,
//! [`strategies::encode_question`] turns each question's events into a
//! per-question table, and [`compose_report`] aligns those tables on a
//! shared respondent index. [`build_report_table`] wires the steps
//! together.

pub mod assemble;
pub mod compose;
mod data_utils;
pub mod frame;
pub mod labels;
pub mod pipeline;
pub mod questions;
pub mod strategies;

pub use assemble::assemble_answer_events;
pub use compose::compose_report;
pub use frame::{ColumnHeader, INDEX_LABEL, QuestionFrame, ReportTable};
pub use pipeline::{QuestionOutcome, ReportBuild, build_report_table};
pub use questions::collect_question_specs;
