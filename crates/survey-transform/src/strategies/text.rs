//! Free-text encoding with whole-column integer coercion.

use std::collections::HashSet;

use polars::prelude::{Column, NamedFrom, Series};
use survey_model::{AnswerEvent, Result};

use crate::data_utils::parse_all_i64;
use crate::frame::{ColumnHeader, QuestionFrame};
use crate::labels::FREE_TEXT_LEGEND;

/// Encode one free-text question: first event per respondent, null text
/// as the empty string. The column converts to integers only when every
/// value parses as one; a single non-numeric answer keeps the whole
/// column textual.
pub fn encode_text(label: &str, events: &[&AnswerEvent]) -> Result<QuestionFrame> {
    let section = events
        .first()
        .and_then(|event| event.section_name.clone())
        .unwrap_or_default();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut codes: Vec<String> = Vec::new();
    let mut values: Vec<String> = Vec::new();
    for event in events {
        if !seen.insert(event.response_code.as_str()) {
            continue;
        }
        codes.push(event.response_code.clone());
        values.push(event.free_text.clone().unwrap_or_default());
    }

    let column: Column = match parse_all_i64(&values) {
        Some(numbers) => Series::new(label.into(), numbers).into(),
        None => Series::new(label.into(), values).into(),
    };
    let headers = vec![ColumnHeader::new(section, label, FREE_TEXT_LEGEND)];
    QuestionFrame::new(codes, headers, vec![column])
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    fn event(code: &str, text: Option<&str>) -> AnswerEvent {
        AnswerEvent {
            response_code: code.to_string(),
            question: Some("Age".to_string()),
            answer_type: Some("ans_t".to_string()),
            free_text: text.map(str::to_string),
            ..AnswerEvent::default()
        }
    }

    #[test]
    fn fully_numeric_answers_become_integers() {
        let events = vec![event("R1", Some("21")), event("R2", Some(" 35 "))];
        let refs: Vec<&AnswerEvent> = events.iter().collect();
        let frame = encode_text("Age", &refs).unwrap();
        let column = frame.data.column("Age").unwrap();
        assert_eq!(column.dtype(), &DataType::Int64);
        let values: Vec<Option<i64>> = column
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some(21), Some(35)]);
        assert_eq!(frame.headers[0].legend, FREE_TEXT_LEGEND);
    }

    #[test]
    fn one_textual_answer_keeps_the_column_text() {
        let events = vec![event("R1", Some("21")), event("R2", Some("about 30"))];
        let refs: Vec<&AnswerEvent> = events.iter().collect();
        let frame = encode_text("Age", &refs).unwrap();
        let column = frame.data.column("Age").unwrap();
        assert_eq!(column.dtype(), &DataType::String);
        let values = column.as_materialized_series().str().unwrap().get(1);
        assert_eq!(values, Some("about 30"));
    }

    #[test]
    fn null_text_defaults_to_empty_and_blocks_coercion() {
        let events = vec![event("R1", Some("21")), event("R2", None)];
        let refs: Vec<&AnswerEvent> = events.iter().collect();
        let frame = encode_text("Age", &refs).unwrap();
        assert_eq!(frame.data.column("Age").unwrap().dtype(), &DataType::String);
        let column = frame.data.column("Age").unwrap();
        assert_eq!(column.as_materialized_series().str().unwrap().get(1), Some(""));
    }

    #[test]
    fn respondent_keeps_first_answer() {
        let events = vec![event("R1", Some("first")), event("R1", Some("second"))];
        let refs: Vec<&AnswerEvent> = events.iter().collect();
        let frame = encode_text("Age", &refs).unwrap();
        assert_eq!(frame.codes, vec!["R1"]);
        let column = frame.data.column("Age").unwrap();
        assert_eq!(
            column.as_materialized_series().str().unwrap().get(0),
            Some("first")
        );
    }
}
