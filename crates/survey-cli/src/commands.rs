use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use survey_cli::summary::print_question_listing;
use survey_cli::types::{ExportResult, QuestionListing};
use survey_ingest::{CsvResponseSource, ResponseSource};
use survey_report::{REPORT_FILE_NAME, render_workbook};
use survey_transform::{assemble_answer_events, build_report_table, collect_question_specs};

use crate::cli::{ExportArgs, QuestionsArgs};

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let data_folder = &args.data_folder;
    let export_span = info_span!("export", data_folder = %data_folder.display());
    let _export_guard = export_span.enter();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| data_folder.join(REPORT_FILE_NAME));

    // =========================================================================
    // Stage 1: Fetch - Load the four CSV exports
    // =========================================================================
    let fetch_start = Instant::now();
    let mut source = CsvResponseSource::new(data_folder);
    let records = source.fetch().context("load survey records")?;
    info!(
        responses = records.responses.len(),
        details = records.details.len(),
        options = records.options.len(),
        sections = records.sections.len(),
        duration_ms = fetch_start.elapsed().as_millis(),
        "fetch complete"
    );

    // =========================================================================
    // Stage 2: Transform - Encode questions and compose the report table
    // =========================================================================
    let transform_start = Instant::now();
    let build = build_report_table(&records).context("build report table")?;
    info!(
        questions = build.questions.len(),
        respondents = build.table.height(),
        columns = build.table.width(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    // =========================================================================
    // Stage 3: Render - Emit the workbook and write it to disk
    // =========================================================================
    let render_start = Instant::now();
    let bytes = render_workbook(&build.table).context("render workbook")?;
    fs::write(&output_path, &bytes)
        .with_context(|| format!("write workbook to {}", output_path.display()))?;
    info!(
        output = %output_path.display(),
        bytes = bytes.len(),
        duration_ms = render_start.elapsed().as_millis(),
        "render complete"
    );

    let result = ExportResult {
        data_folder: data_folder.clone(),
        output_path,
        bytes_written: bytes.len(),
        respondents: build.table.height(),
        columns: build.table.width(),
        questions: build.questions,
    };
    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&result).context("serialize run summary")?;
        fs::write(path, json)
            .with_context(|| format!("write run summary to {}", path.display()))?;
    }
    Ok(result)
}

pub fn run_questions(args: &QuestionsArgs) -> Result<()> {
    let data_folder = &args.data_folder;
    let questions_span = info_span!("questions", data_folder = %data_folder.display());
    let _questions_guard = questions_span.enter();

    let mut source = CsvResponseSource::new(data_folder);
    let records = source.fetch().context("load survey records")?;
    let events = assemble_answer_events(&records);
    let specs = collect_question_specs(&events).context("collect question specs")?;
    let listings: Vec<QuestionListing> = specs
        .iter()
        .map(|spec| QuestionListing {
            label: spec.label.clone(),
            tag: spec.tag.clone(),
            kind: spec.kind(),
            events: events
                .iter()
                .filter(|event| event.question.as_deref() == Some(spec.label.as_str()))
                .count(),
        })
        .collect();
    info!(
        questions = listings.len(),
        events = events.len(),
        "collected question specs"
    );
    print_question_listing(&listings);
    Ok(())
}
