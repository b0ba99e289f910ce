//! Console tables for export runs and question listings.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::AnswerType;

use crate::types::{ExportResult, QuestionListing};

/// Print the post-export summary: run facts, then one table row per
/// question.
pub fn print_export_summary(result: &ExportResult) {
    println!("Data folder: {}", result.data_folder.display());
    println!("Workbook: {}", result.output_path.display());
    println!(
        "Sheet: {} respondents x {} columns, {} bytes",
        result.respondents, result.columns, result.bytes_written
    );
    println!("{}", export_summary_table(result));
}

/// Print the `questions` listing.
pub fn print_question_listing(listings: &[QuestionListing]) {
    println!("{}", question_listing_table(listings));
}

/// Build the per-question table of an export summary.
pub fn export_summary_table(result: &ExportResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Question"),
        header_cell("Type"),
        header_cell("Events"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_events = 0usize;
    let mut total_columns = 0usize;
    for outcome in &result.questions {
        total_events += outcome.events;
        total_columns += outcome.columns;
        table.add_row(vec![
            question_cell(&outcome.label, outcome.kind.is_some()),
            kind_cell(outcome.kind, &outcome.tag),
            Cell::new(outcome.events),
            Cell::new(outcome.columns),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_events).add_attribute(Attribute::Bold),
        Cell::new(total_columns).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Build the `questions` listing table.
pub fn question_listing_table(listings: &[QuestionListing]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Question"),
        header_cell("Type"),
        header_cell("Events"),
    ]);
    apply_listing_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for listing in listings {
        table.add_row(vec![
            question_cell(&listing.label, listing.kind.is_some()),
            kind_cell(listing.kind, &listing.tag),
            Cell::new(listing.events),
        ]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_listing_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn question_cell(label: &str, encoded: bool) -> Cell {
    if encoded {
        Cell::new(label)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(label).fg(Color::DarkGrey)
    }
}

fn kind_cell(kind: Option<AnswerType>, tag: &str) -> Cell {
    match kind {
        Some(kind) => Cell::new(kind.as_str()),
        None => Cell::new(format!("skipped ({tag})")).fg(Color::Yellow),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
