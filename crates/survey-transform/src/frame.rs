//! Per-question tables and the composed report table.

use polars::prelude::{Column, DataFrame};
use survey_model::{Result, SurveyError};

/// Caption of the respondent-code index column.
pub const INDEX_LABEL: &str = "response_code";

/// The three stacked header captions of one report column. A unified
/// column carries one caption across all three header rows and renders as
/// a single vertical merged cell; the flag makes that explicit instead of
/// leaving the emitter to infer it from text equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub top: String,
    pub label: String,
    pub legend: String,
    pub unified: bool,
}

impl ColumnHeader {
    pub fn new(
        top: impl Into<String>,
        label: impl Into<String>,
        legend: impl Into<String>,
    ) -> Self {
        Self {
            top: top.into(),
            label: label.into(),
            legend: legend.into(),
            unified: false,
        }
    }

    /// One caption across all three header rows.
    pub fn unified(caption: impl Into<String>) -> Self {
        let caption = caption.into();
        Self {
            top: caption.clone(),
            label: caption.clone(),
            legend: caption,
            unified: true,
        }
    }
}

/// One question's encoded answers: respondent codes plus one header per
/// value column.
#[derive(Debug, Clone)]
pub struct QuestionFrame {
    pub codes: Vec<String>,
    pub headers: Vec<ColumnHeader>,
    pub data: DataFrame,
}

impl QuestionFrame {
    /// Pair headers with value columns. Every column must be as tall as
    /// the code list.
    pub fn new(
        codes: Vec<String>,
        headers: Vec<ColumnHeader>,
        columns: Vec<Column>,
    ) -> Result<Self> {
        if headers.len() != columns.len() {
            return Err(SurveyError::frame(format!(
                "{} headers for {} columns",
                headers.len(),
                columns.len()
            )));
        }
        let data = DataFrame::new(columns).map_err(|err| SurveyError::frame(err.to_string()))?;
        if !headers.is_empty() && data.height() != codes.len() {
            return Err(SurveyError::frame(format!(
                "column height {} for {} respondent codes",
                data.height(),
                codes.len()
            )));
        }
        Ok(Self {
            codes,
            headers,
            data,
        })
    }
}

/// The composed report: one row per respondent, all question columns side
/// by side behind the synthetic group column. Question labels may repeat
/// across questions, so columns ride in a vector parallel to the headers
/// instead of one DataFrame with unique names.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub index_name: String,
    pub codes: Vec<String>,
    pub headers: Vec<ColumnHeader>,
    pub columns: Vec<Column>,
}

impl ReportTable {
    /// The zero-question, zero-respondent report. Still renderable: the
    /// workbook keeps its index header cell.
    pub fn empty() -> Self {
        Self {
            index_name: INDEX_LABEL.to_string(),
            codes: Vec::new(),
            headers: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.codes.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
