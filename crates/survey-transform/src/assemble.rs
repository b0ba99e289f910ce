//! Joins the four record sets into the denormalized answer stream.

use std::collections::HashMap;

use survey_model::{AnswerEvent, ResponseDetail, ResponseOption, Section, SurveyRecords};

/// Left-join details with their options, respondents and sections into
/// one ordered event stream. Order is respondent order, then detail order
/// within a respondent, then option order within a detail. A respondent
/// with no details still yields one all-null event; a detail with no
/// options yields one event with no option text. Details whose respondent
/// is not in the eligible set are dropped.
pub fn assemble_answer_events(records: &SurveyRecords) -> Vec<AnswerEvent> {
    let mut details_by_response: HashMap<&str, Vec<&ResponseDetail>> = HashMap::new();
    for detail in &records.details {
        details_by_response
            .entry(detail.response_code.as_str())
            .or_default()
            .push(detail);
    }
    let mut options_by_detail: HashMap<i64, Vec<&ResponseOption>> = HashMap::new();
    for option in &records.options {
        options_by_detail
            .entry(option.detail_id)
            .or_default()
            .push(option);
    }
    let sections_by_id: HashMap<i64, &Section> = records
        .sections
        .iter()
        .map(|section| (section.section_id, section))
        .collect();

    let mut events = Vec::new();
    for response in &records.responses {
        let Some(details) = details_by_response.get(response.response_code.as_str()) else {
            events.push(AnswerEvent {
                response_code: response.response_code.clone(),
                group: response.group.clone(),
                ..AnswerEvent::default()
            });
            continue;
        };
        for detail in details {
            let section_name = detail
                .section_id
                .and_then(|id| sections_by_id.get(&id))
                .and_then(|section| section.section_name.clone());
            let base = AnswerEvent {
                response_code: response.response_code.clone(),
                group: response.group.clone(),
                question: detail.question.clone(),
                answer_type: detail.answer_type.clone(),
                section_name,
                weight: detail.weight,
                free_text: detail.free_text.clone(),
                option_text: None,
            };
            match options_by_detail.get(&detail.detail_id) {
                Some(options) => {
                    for option in options {
                        let mut event = base.clone();
                        event.option_text = option.option_text.clone();
                        events.push(event);
                    }
                }
                None => events.push(base),
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::Response;

    fn records() -> SurveyRecords {
        SurveyRecords {
            responses: vec![
                Response {
                    response_code: "R1".to_string(),
                    group: Some("A".to_string()),
                    lastupdate: None,
                },
                Response {
                    response_code: "R2".to_string(),
                    group: Some("B".to_string()),
                    lastupdate: None,
                },
            ],
            details: vec![
                ResponseDetail {
                    detail_id: 1,
                    response_code: "R1".to_string(),
                    section_id: Some(10),
                    question: Some("Q1".to_string()),
                    answer_type: Some("ans_m".to_string()),
                    weight: Some(1.0),
                    free_text: None,
                },
                ResponseDetail {
                    detail_id: 99,
                    response_code: "GHOST".to_string(),
                    section_id: None,
                    question: Some("Q1".to_string()),
                    answer_type: Some("ans_m".to_string()),
                    weight: Some(1.0),
                    free_text: None,
                },
            ],
            options: vec![
                ResponseOption {
                    detail_id: 1,
                    option_text: Some("A".to_string()),
                },
                ResponseOption {
                    detail_id: 1,
                    option_text: Some("B".to_string()),
                },
            ],
            sections: vec![Section {
                section_id: 10,
                section_name: Some("General".to_string()),
            }],
        }
    }

    #[test]
    fn one_event_per_option_in_source_order() {
        let events = assemble_answer_events(&records());
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].option_text.as_deref(), Some("A"));
        assert_eq!(events[1].option_text.as_deref(), Some("B"));
        assert_eq!(events[0].section_name.as_deref(), Some("General"));
        assert_eq!(events[0].group.as_deref(), Some("A"));
    }

    #[test]
    fn respondent_with_no_details_yields_null_event() {
        let events = assemble_answer_events(&records());
        let event = &events[2];
        assert_eq!(event.response_code, "R2");
        assert_eq!(event.question, None);
        assert_eq!(event.option_text, None);
        assert_eq!(event.group.as_deref(), Some("B"));
    }

    #[test]
    fn details_without_an_eligible_respondent_are_dropped() {
        let events = assemble_answer_events(&records());
        assert!(events.iter().all(|event| event.response_code != "GHOST"));
    }

    #[test]
    fn empty_records_produce_no_events() {
        let events = assemble_answer_events(&SurveyRecords::default());
        assert!(events.is_empty());
    }
}
