//! Row types for the four source tables.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Accepted `lastupdate` layouts. The source emits `%Y-%m-%d %H:%M:%S`;
/// ISO-8601 `T` separators and fractional seconds appear in older exports.
const LASTUPDATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a `lastupdate` cell. Unparseable values become `None` so a single
/// bad timestamp does not fail a whole fetch.
pub fn parse_lastupdate(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    LASTUPDATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

fn lenient_lastupdate<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_lastupdate))
}

/// One respondent from the `response` table. Only rows with a non-null
/// group are eligible for reporting; the record source applies that filter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    pub response_code: String,
    #[serde(rename = "answer_group")]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "lenient_lastupdate")]
    pub lastupdate: Option<NaiveDateTime>,
}

/// One answered question from the `response_detail` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseDetail {
    pub detail_id: i64,
    pub response_code: String,
    pub section_id: Option<i64>,
    pub question: Option<String>,
    #[serde(rename = "anstype")]
    pub answer_type: Option<String>,
    pub weight: Option<f64>,
    #[serde(rename = "answer")]
    pub free_text: Option<String>,
}

/// One selected choice from the `response_option` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseOption {
    pub detail_id: i64,
    #[serde(rename = "answer")]
    pub option_text: Option<String>,
}

/// One questionnaire section from the `section` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub section_id: i64,
    pub section_name: Option<String>,
}

/// The four result sets one fetch returns, each in source row order.
#[derive(Debug, Clone, Default)]
pub struct SurveyRecords {
    pub responses: Vec<Response>,
    pub details: Vec<ResponseDetail>,
    pub options: Vec<ResponseOption>,
    pub sections: Vec<Section>,
}
