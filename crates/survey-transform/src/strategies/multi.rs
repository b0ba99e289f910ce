//! Multi-select encoding: one weighted column per observed choice.

use std::collections::{BTreeSet, HashMap, HashSet};

use polars::prelude::Column;
use survey_model::{AnswerEvent, Result};

use crate::data_utils::{downcast_numeric_column, weight_or_zero};
use crate::frame::{ColumnHeader, QuestionFrame};
use crate::labels::{MULTI_SELECT_LEGEND, OTHER_CHOICE};

/// Pivot one multi-select question. Every distinct observed choice text
/// becomes one column, in lexicographic order; a null choice text lands
/// in the other-category bucket first. Cell value is the selecting
/// event's weight, 0 for null weights and unselected combinations; the
/// first event wins a duplicated (respondent, choice) pair. Each column
/// narrows to the smallest integer type that holds it.
pub fn encode_multi(
    label: &str,
    events: &[&AnswerEvent],
    legend: Option<String>,
) -> Result<QuestionFrame> {
    let legend = legend.unwrap_or_else(|| MULTI_SELECT_LEGEND.to_string());

    let mut codes: Vec<String> = Vec::new();
    let mut row_of: HashMap<&str, usize> = HashMap::new();
    let mut choice_set: BTreeSet<&str> = BTreeSet::new();
    for event in events {
        let code = event.response_code.as_str();
        if !row_of.contains_key(code) {
            row_of.insert(code, codes.len());
            codes.push(event.response_code.clone());
        }
        choice_set.insert(event.option_text.as_deref().unwrap_or(OTHER_CHOICE));
    }
    let choices: Vec<&str> = choice_set.into_iter().collect();
    let col_of: HashMap<&str, usize> = choices
        .iter()
        .enumerate()
        .map(|(idx, choice)| (*choice, idx))
        .collect();

    let mut grid: Vec<Vec<f64>> = vec![vec![0.0; codes.len()]; choices.len()];
    let mut filled: HashSet<(usize, usize)> = HashSet::new();
    for event in events {
        let row = row_of[event.response_code.as_str()];
        let col = col_of[event.option_text.as_deref().unwrap_or(OTHER_CHOICE)];
        if filled.insert((row, col)) {
            grid[col][row] = weight_or_zero(event.weight);
        }
    }

    let mut headers = Vec::with_capacity(choices.len());
    let mut columns: Vec<Column> = Vec::with_capacity(choices.len());
    for (idx, choice) in choices.iter().enumerate() {
        headers.push(ColumnHeader::new(label, *choice, legend.clone()));
        columns.push(downcast_numeric_column(choice, &grid[idx]));
    }
    QuestionFrame::new(codes, headers, columns)
}
