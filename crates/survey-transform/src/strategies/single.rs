//! Single-select encoding: one integer-coded column.

use std::collections::{BTreeSet, HashMap, HashSet};

use polars::prelude::{Column, NamedFrom, Series};
use survey_model::{AnswerEvent, Result};

use crate::data_utils::weight_or_zero;
use crate::frame::{ColumnHeader, QuestionFrame};
use crate::labels::{NO_ANSWER_LINE, OTHER_CHOICE};

/// Encode one single-select question. The choice dictionary covers every
/// observed value, before any selection filtering, sorted with codes from
/// 1; code 0 stays reserved for no answer. Only weight-1 events select,
/// and each respondent keeps the first surviving one.
pub fn encode_single(label: &str, events: &[&AnswerEvent]) -> Result<QuestionFrame> {
    let section = events
        .first()
        .and_then(|event| event.section_name.clone())
        .unwrap_or_default();

    let choices: Vec<&str> = events
        .iter()
        .map(|event| event.option_text.as_deref().unwrap_or(OTHER_CHOICE))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .collect();
    let code_of: HashMap<&str, i64> = choices
        .iter()
        .enumerate()
        .map(|(idx, choice)| (*choice, idx as i64 + 1))
        .collect();
    let legend = choices
        .iter()
        .enumerate()
        .map(|(idx, choice)| format!("{}={choice}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n");
    let legend = format!("{legend}\n{NO_ANSWER_LINE}");

    let mut seen: HashSet<&str> = HashSet::new();
    let mut codes: Vec<String> = Vec::new();
    let mut values: Vec<i64> = Vec::new();
    for event in events {
        if weight_or_zero(event.weight) != 1.0 {
            continue;
        }
        if !seen.insert(event.response_code.as_str()) {
            continue;
        }
        codes.push(event.response_code.clone());
        values.push(code_of[event.option_text.as_deref().unwrap_or(OTHER_CHOICE)]);
    }

    let column: Column = Series::new(label.into(), values).into();
    let headers = vec![ColumnHeader::new(section, label, legend)];
    QuestionFrame::new(codes, headers, vec![column])
}
