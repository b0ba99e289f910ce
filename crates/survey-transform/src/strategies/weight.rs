//! Rating-weight encoding on the fixed five-point scale.

use std::collections::HashSet;

use survey_model::{AnswerEvent, Result};

use crate::data_utils::{downcast_numeric_column, weight_or_zero};
use crate::frame::{ColumnHeader, QuestionFrame};
use crate::labels::WEIGHT_SCALE_LEGEND;

/// Encode one rating question: the first event per respondent carries the
/// rating, null weight counts as 0, and the column narrows to the
/// smallest integer type that holds it.
pub fn encode_weight(label: &str, events: &[&AnswerEvent]) -> Result<QuestionFrame> {
    let section = events
        .first()
        .and_then(|event| event.section_name.clone())
        .unwrap_or_default();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut codes: Vec<String> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    for event in events {
        if !seen.insert(event.response_code.as_str()) {
            continue;
        }
        codes.push(event.response_code.clone());
        values.push(weight_or_zero(event.weight));
    }

    let column = downcast_numeric_column(label, &values);
    let headers = vec![ColumnHeader::new(section, label, WEIGHT_SCALE_LEGEND)];
    QuestionFrame::new(codes, headers, vec![column])
}
