//! Integration tests for the summary tables and run-summary serialization.

use std::path::PathBuf;

use survey_cli::summary::{export_summary_table, question_listing_table};
use survey_cli::types::{ExportResult, QuestionListing};
use survey_model::AnswerType;
use survey_transform::QuestionOutcome;

fn sample_result() -> ExportResult {
    ExportResult {
        data_folder: PathBuf::from("data"),
        output_path: PathBuf::from("data/gen_z_questionnaire_data.xlsx"),
        bytes_written: 2048,
        respondents: 2,
        columns: 3,
        questions: vec![
            QuestionOutcome {
                label: "ท่านชอบสีใด".to_string(),
                tag: "ans_o".to_string(),
                kind: Some(AnswerType::Single),
                events: 2,
                columns: 1,
            },
            QuestionOutcome {
                label: "Q99".to_string(),
                tag: "ans_x".to_string(),
                kind: None,
                events: 1,
                columns: 0,
            },
        ],
    }
}

#[test]
fn export_table_lists_questions_and_totals() {
    let rendered = export_summary_table(&sample_result()).to_string();
    assert!(rendered.contains("ท่านชอบสีใด"));
    assert!(rendered.contains("single"));
    assert!(rendered.contains("skipped (ans_x)"));
    assert!(rendered.contains("TOTAL"));
}

#[test]
fn summary_json_carries_per_question_outcomes() {
    let json = serde_json::to_value(sample_result()).expect("serialize export result");
    assert_eq!(json["respondents"], 2);
    assert_eq!(json["columns"], 3);
    assert_eq!(json["bytes_written"], 2048);
    assert_eq!(json["questions"][0]["kind"], "single");
    assert_eq!(json["questions"][0]["columns"], 1);
    assert!(json["questions"][1]["kind"].is_null());
    assert_eq!(json["questions"][1]["tag"], "ans_x");
}

#[test]
fn question_listing_marks_unknown_tags() {
    let listings = vec![
        QuestionListing {
            label: "Q1".to_string(),
            tag: "ans_m".to_string(),
            kind: Some(AnswerType::Multi),
            events: 4,
        },
        QuestionListing {
            label: "Q2".to_string(),
            tag: "likert".to_string(),
            kind: None,
            events: 2,
        },
    ];
    let rendered = question_listing_table(&listings).to_string();
    assert!(rendered.contains("multi"));
    assert!(rendered.contains("skipped (likert)"));
}
