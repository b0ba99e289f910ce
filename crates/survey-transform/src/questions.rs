//! Distinct question collection with conflict detection.

use std::collections::HashMap;

use survey_model::{AnswerEvent, QuestionSpec, Result, SurveyError};

/// Collect the first-seen distinct (label, tag) pairs from the event
/// stream. Events with no question label carry no question and are
/// ignored; a null tag normalizes to the empty string. One label
/// declaring two different tags is a data-integrity error, surfaced
/// instead of silently resolved.
pub fn collect_question_specs(events: &[AnswerEvent]) -> Result<Vec<QuestionSpec>> {
    let mut specs: Vec<QuestionSpec> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for event in events {
        let Some(question) = event.question.as_deref() else {
            continue;
        };
        let tag = event.answer_type.as_deref().unwrap_or("");
        match seen.get(question).copied() {
            Some(idx) => {
                if specs[idx].tag != tag {
                    return Err(SurveyError::ConflictingAnswerTypes {
                        question: question.to_string(),
                        first: specs[idx].tag.clone(),
                        second: tag.to_string(),
                    });
                }
            }
            None => {
                seen.insert(question, specs.len());
                specs.push(QuestionSpec {
                    label: question.to_string(),
                    tag: tag.to_string(),
                });
            }
        }
    }
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(question: Option<&str>, tag: Option<&str>) -> AnswerEvent {
        AnswerEvent {
            response_code: "R1".to_string(),
            question: question.map(str::to_string),
            answer_type: tag.map(str::to_string),
            ..AnswerEvent::default()
        }
    }

    #[test]
    fn first_seen_order_without_duplicates() {
        let events = vec![
            event(Some("Q2"), Some("ans_m")),
            event(Some("Q1"), Some("ans_o")),
            event(Some("Q2"), Some("ans_m")),
            event(None, None),
        ];
        let specs = collect_question_specs(&events).unwrap();
        let labels: Vec<&str> = specs.iter().map(|spec| spec.label.as_str()).collect();
        assert_eq!(labels, vec!["Q2", "Q1"]);
    }

    #[test]
    fn conflicting_tags_surface_an_error() {
        let events = vec![
            event(Some("Q1"), Some("ans_m")),
            event(Some("Q1"), Some("ans_o")),
        ];
        let err = collect_question_specs(&events).unwrap_err();
        match err {
            SurveyError::ConflictingAnswerTypes {
                question,
                first,
                second,
            } => {
                assert_eq!(question, "Q1");
                assert_eq!(first, "ans_m");
                assert_eq!(second, "ans_o");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_tag_participates_as_empty() {
        let events = vec![event(Some("Q1"), None), event(Some("Q1"), Some("ans_m"))];
        let err = collect_question_specs(&events).unwrap_err();
        assert!(matches!(err, SurveyError::ConflictingAnswerTypes { .. }));

        let consistent = vec![event(Some("Q1"), None), event(Some("Q1"), None)];
        let specs = collect_question_specs(&consistent).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].tag, "");
        assert_eq!(specs[0].kind(), None);
    }
}
