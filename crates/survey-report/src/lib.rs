//! Survey report generation: fetch records, build the report table,
//! render the workbook.

pub mod layout;
pub mod workbook;

use survey_ingest::ResponseSource;
use survey_model::Result;
use survey_transform::build_report_table;
use tracing::info;

pub use workbook::{HEADER_ROWS, SHEET_NAME, render_workbook};

/// Suggested file name for the rendered artifact.
pub const REPORT_FILE_NAME: &str = "gen_z_questionnaire_data.xlsx";

/// Run the whole generation once: fetch the records, transform them into
/// the composed report table, and render it. Returns the finished
/// workbook bytes; any stage failure aborts the run with no partial
/// output.
pub fn generate_report(source: &mut dyn ResponseSource) -> Result<Vec<u8>> {
    let records = source.fetch()?;
    let build = build_report_table(&records)?;
    let bytes = render_workbook(&build.table)?;
    info!(bytes = bytes.len(), "generated report workbook");
    Ok(bytes)
}
