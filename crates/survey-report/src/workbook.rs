//! Workbook emission: one sheet, three header rows, merged captions.

use polars::prelude::AnyValue;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::debug;

use survey_model::{Result, SurveyError};
use survey_transform::ReportTable;

use crate::layout::{column_width, plan_header_layout};

/// Name of the single data sheet.
pub const SHEET_NAME: &str = "data";

/// Height of the stacked header; data rows start right below.
pub const HEADER_ROWS: u32 = 3;

const ZOOM_PERCENT: u16 = 90;

/// Render the composed report into finished workbook bytes. The layout
/// is three bold header rows, the respondent index in column 0 with its
/// caption on the legend row, and body cells from row 3 on. Top-row
/// caption runs merge horizontally; unified columns merge vertically
/// across all three header rows. An empty report still renders with its
/// index caption.
pub fn render_workbook(table: &ReportTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(render_error)?;
    worksheet.set_zoom(ZOOM_PERCENT);

    let header = header_format();
    let vertical = vertical_header_format();
    let legend = legend_format();

    worksheet
        .set_column_width(0, column_width(&table.index_name))
        .map_err(render_error)?;
    worksheet
        .write_string_with_format(HEADER_ROWS - 1, 0, &table.index_name, &header)
        .map_err(render_error)?;

    let layout = plan_header_layout(&table.headers);
    for (idx, head) in table.headers.iter().enumerate() {
        let col = data_col(idx)?;
        worksheet
            .set_column_width(col, column_width(&head.label))
            .map_err(render_error)?;
        if head.unified {
            continue;
        }
        if !layout.covers_top(idx) {
            worksheet
                .write_string_with_format(0, col, &head.top, &header)
                .map_err(render_error)?;
        }
        worksheet
            .write_string_with_format(1, col, &head.label, &header)
            .map_err(render_error)?;
        worksheet
            .write_string_with_format(2, col, &head.legend, &legend)
            .map_err(render_error)?;
    }

    for span in layout.top_spans.iter().filter(|span| span.is_merged()) {
        worksheet
            .merge_range(
                0,
                data_col(span.first)?,
                0,
                data_col(span.last)?,
                &span.text,
                &header,
            )
            .map_err(render_error)?;
    }
    for &idx in &layout.unified_columns {
        let col = data_col(idx)?;
        worksheet
            .merge_range(0, col, HEADER_ROWS - 1, col, &table.headers[idx].top, &vertical)
            .map_err(render_error)?;
    }

    for (idx, code) in table.codes.iter().enumerate() {
        worksheet
            .write_string(body_row(idx)?, 0, code.as_str())
            .map_err(render_error)?;
    }
    for (idx, column) in table.columns.iter().enumerate() {
        let col = data_col(idx)?;
        let series = column.as_materialized_series();
        for row in 0..table.height() {
            let value = series.get(row).unwrap_or(AnyValue::Null);
            write_body_cell(worksheet, body_row(row)?, col, value)?;
        }
    }

    debug!(
        rows = table.height(),
        columns = table.width(),
        merges = layout.top_spans.len(),
        "rendered workbook"
    );
    workbook.save_to_buffer().map_err(render_error)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::Top)
}

fn vertical_header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn legend_format() -> Format {
    Format::new()
        .set_text_wrap()
        .set_indent(1)
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
}

fn write_body_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: AnyValue) -> Result<()> {
    match value {
        AnyValue::Null => {}
        AnyValue::String(text) => {
            worksheet.write_string(row, col, text).map_err(render_error)?;
        }
        AnyValue::StringOwned(text) => {
            worksheet
                .write_string(row, col, text.as_str())
                .map_err(render_error)?;
        }
        other => {
            if let Some(number) = numeric_value(&other) {
                worksheet.write_number(row, col, number).map_err(render_error)?;
            } else {
                let text = other.to_string();
                if !text.is_empty() {
                    worksheet.write_string(row, col, &text).map_err(render_error)?;
                }
            }
        }
    }
    Ok(())
}

fn numeric_value(value: &AnyValue) -> Option<f64> {
    match value {
        AnyValue::UInt8(val) => Some(f64::from(*val)),
        AnyValue::UInt16(val) => Some(f64::from(*val)),
        AnyValue::UInt32(val) => Some(f64::from(*val)),
        AnyValue::UInt64(val) => Some(*val as f64),
        AnyValue::Int8(val) => Some(f64::from(*val)),
        AnyValue::Int16(val) => Some(f64::from(*val)),
        AnyValue::Int32(val) => Some(f64::from(*val)),
        AnyValue::Int64(val) => Some(*val as f64),
        AnyValue::Float32(val) => Some(f64::from(*val)),
        AnyValue::Float64(val) => Some(*val),
        _ => None,
    }
}

/// Sheet column of data column `idx`; column 0 is the index.
fn data_col(idx: usize) -> Result<u16> {
    u16::try_from(idx + 1)
        .map_err(|_| SurveyError::render(format!("column {idx} exceeds the sheet limit")))
}

fn body_row(idx: usize) -> Result<u32> {
    let row = u32::try_from(idx)
        .map_err(|_| SurveyError::render(format!("row {idx} exceeds the sheet limit")))?;
    Ok(HEADER_ROWS + row)
}

fn render_error(err: XlsxError) -> SurveyError {
    SurveyError::render(err.to_string())
}
