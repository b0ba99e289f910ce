//! The denormalized answer event.

/// One answer occurrence after joining details with their options,
/// respondents and sections. Everything but the respondent code is
/// nullable: a respondent with no detail rows still yields one event, and
/// a detail with no option rows yields an event with no option text.
///
/// The detail's free text and the option's choice text are distinct
/// fields; a strategy reads whichever its encoding is built on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerEvent {
    pub response_code: String,
    pub group: Option<String>,
    pub question: Option<String>,
    pub answer_type: Option<String>,
    pub section_name: Option<String>,
    pub weight: Option<f64>,
    pub free_text: Option<String>,
    pub option_text: Option<String>,
}
