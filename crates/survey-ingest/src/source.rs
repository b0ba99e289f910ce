//! The seam between record storage and the report pipeline.

use survey_model::{Result, SurveyRecords};

/// A provider of the four survey result sets. Connection, credential and
/// path resolution live behind implementations; the pipeline only ever
/// sees records.
pub trait ResponseSource {
    /// Fetch all records, already filtered to eligible respondents.
    fn fetch(&mut self) -> Result<SurveyRecords>;
}
