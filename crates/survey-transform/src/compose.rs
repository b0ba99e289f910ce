//! Horizontal composition of per-question tables into the report.

use std::collections::{HashMap, HashSet};

use polars::prelude::{Column, DataType, NamedFrom, Series};
use tracing::debug;

use survey_model::{AnswerEvent, Result};

use crate::data_utils::frame_error;
use crate::frame::{ColumnHeader, INDEX_LABEL, QuestionFrame, ReportTable};
use crate::labels::GROUP_COLUMN;

/// Align all per-question tables on one outer respondent index and
/// prepend the synthetic group column. Row order is first appearance in
/// the event stream, restricted to respondents present in at least one
/// frame; numeric columns fill alignment gaps with 0, text columns keep
/// nulls. Zero frames produce the empty report.
pub fn compose_report(frames: &[QuestionFrame], events: &[AnswerEvent]) -> Result<ReportTable> {
    if frames.is_empty() {
        return Ok(ReportTable::empty());
    }

    let mut members: HashSet<&str> = HashSet::new();
    for frame in frames {
        for code in &frame.codes {
            members.insert(code.as_str());
        }
    }

    let mut codes: Vec<String> = Vec::new();
    let mut row_of: HashMap<&str, usize> = HashMap::new();
    for event in events {
        let code = event.response_code.as_str();
        if members.contains(code) && !row_of.contains_key(code) {
            row_of.insert(code, codes.len());
            codes.push(event.response_code.clone());
        }
    }
    // Frames fed events the stream never produced still keep their rows.
    for frame in frames {
        for code in &frame.codes {
            if !row_of.contains_key(code.as_str()) {
                row_of.insert(code.as_str(), codes.len());
                codes.push(code.clone());
            }
        }
    }

    let mut group_of: HashMap<&str, &str> = HashMap::new();
    for event in events {
        if let Some(group) = event.group.as_deref() {
            group_of.entry(event.response_code.as_str()).or_insert(group);
        }
    }
    let group_values: Vec<Option<String>> = codes
        .iter()
        .map(|code| group_of.get(code.as_str()).map(|group| (*group).to_string()))
        .collect();

    let width = 1 + frames.iter().map(|frame| frame.headers.len()).sum::<usize>();
    let mut headers: Vec<ColumnHeader> = Vec::with_capacity(width);
    let mut columns: Vec<Column> = Vec::with_capacity(width);
    headers.push(ColumnHeader::unified(GROUP_COLUMN));
    columns.push(Series::new(GROUP_COLUMN.into(), group_values).into());

    for frame in frames {
        let mut frame_row: HashMap<&str, usize> = HashMap::new();
        for (idx, code) in frame.codes.iter().enumerate() {
            frame_row.entry(code.as_str()).or_insert(idx);
        }
        let take: Vec<Option<usize>> = codes
            .iter()
            .map(|code| frame_row.get(code.as_str()).copied())
            .collect();
        for (header, column) in frame.headers.iter().zip(frame.data.get_columns()) {
            headers.push(header.clone());
            columns.push(align_column(column, &take)?);
        }
    }

    debug!(
        respondents = codes.len(),
        columns = columns.len(),
        "composed report table"
    );
    Ok(ReportTable {
        index_name: INDEX_LABEL.to_string(),
        codes,
        headers,
        columns,
    })
}

/// Rebuild one frame column on the report index. `take[report_row]` is
/// the frame row feeding that report row, `None` for an alignment gap.
/// Numeric gaps become 0 and the column keeps its dtype; text gaps stay
/// null.
fn align_column(column: &Column, take: &[Option<usize>]) -> Result<Column> {
    let name = column.name().clone();
    let series = column.as_materialized_series();
    let dtype = series.dtype().clone();
    if dtype.is_integer() {
        let cast = series.cast(&DataType::Int64).map_err(frame_error)?;
        let values = cast.i64().map_err(frame_error)?;
        let filled: Vec<i64> = take
            .iter()
            .map(|slot| slot.and_then(|idx| values.get(idx)).unwrap_or(0))
            .collect();
        let aligned = Series::new(name, filled).cast(&dtype).map_err(frame_error)?;
        Ok(aligned.into())
    } else if dtype.is_numeric() {
        let cast = series.cast(&DataType::Float64).map_err(frame_error)?;
        let values = cast.f64().map_err(frame_error)?;
        let filled: Vec<f64> = take
            .iter()
            .map(|slot| slot.and_then(|idx| values.get(idx)).unwrap_or(0.0))
            .collect();
        Ok(Series::new(name, filled).into())
    } else {
        let values = series.str().map_err(frame_error)?;
        let filled: Vec<Option<String>> = take
            .iter()
            .map(|slot| {
                slot.and_then(|idx| values.get(idx))
                    .map(|value| value.to_string())
            })
            .collect();
        Ok(Series::new(name, filled).into())
    }
}
