//! Folder-of-CSV-exports record source.

use std::fmt;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

use survey_model::{Response, Result, SurveyError, SurveyRecords};

use crate::source::ResponseSource;

pub const RESPONSE_FILE: &str = "response.csv";
pub const DETAIL_FILE: &str = "response_detail.csv";
pub const OPTION_FILE: &str = "response_option.csv";
pub const SECTION_FILE: &str = "section.csv";

/// Reads the four survey tables from one folder of CSV exports, one file
/// per table.
#[derive(Debug, Clone)]
pub struct CsvResponseSource {
    folder: PathBuf,
}

impl CsvResponseSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    fn read_file<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        read_records(&self.folder.join(file_name))
    }
}

impl ResponseSource for CsvResponseSource {
    fn fetch(&mut self) -> Result<SurveyRecords> {
        let responses: Vec<Response> = self.read_file(RESPONSE_FILE)?;
        let details = self.read_file(DETAIL_FILE)?;
        let options = self.read_file(OPTION_FILE)?;
        let sections = self.read_file(SECTION_FILE)?;

        // Group membership decides report eligibility; ungrouped
        // respondents never reach the pipeline.
        let eligible: Vec<Response> = responses
            .into_iter()
            .filter(|response| response.group.is_some())
            .collect();
        debug!(
            responses = eligible.len(),
            details = details.len(),
            options = options.len(),
            sections = sections.len(),
            "fetched csv records"
        );
        Ok(SurveyRecords {
            responses: eligible,
            details,
            options,
            sections,
        })
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn source_error(path: &Path, action: &str, err: impl fmt::Display) -> SurveyError {
    SurveyError::data_source(format!("{action} {}: {err}", path.display()))
}

/// Read one CSV file into typed records. Headers are normalized (BOM and
/// surrounding whitespace stripped) before serde field matching; cell
/// values pass through untouched.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .map_err(|err| source_error(path, "open", err))?;
    let headers: StringRecord = reader
        .headers()
        .map_err(|err| source_error(path, "read headers of", err))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| source_error(path, "read record in", err))?;
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|err| source_error(path, "decode record in", err))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use survey_model::Section;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn seed_folder() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_fixture(
            &dir,
            RESPONSE_FILE,
            "response_code,answer_group,lastupdate\n\
             R001,A,2024-03-15 09:30:00\n\
             R002,B,\n\
             R003,,2024-03-15 10:00:00\n",
        );
        write_fixture(
            &dir,
            DETAIL_FILE,
            "detail_id,response_code,section_id,question,anstype,weight,answer\n\
             1,R001,10,Q1,ans_o,1,Yes\n\
             2,R002,10,Q1,ans_o,1,No\n",
        );
        write_fixture(&dir, OPTION_FILE, "detail_id,answer\n1,Yes\n2,No\n");
        write_fixture(&dir, SECTION_FILE, "section_id,section_name\n10,General\n");
        dir
    }

    #[test]
    fn fetch_filters_ungrouped_respondents() {
        let dir = seed_folder();
        let mut source = CsvResponseSource::new(dir.path());
        let records = source.fetch().unwrap();
        let codes: Vec<&str> = records
            .responses
            .iter()
            .map(|response| response.response_code.as_str())
            .collect();
        assert_eq!(codes, vec!["R001", "R002"]);
        assert_eq!(records.details.len(), 2);
        assert_eq!(records.options.len(), 2);
        assert_eq!(records.sections.len(), 1);
    }

    #[test]
    fn bom_and_padded_headers_still_match() {
        let dir = TempDir::new().unwrap();
        write_fixture(
            &dir,
            SECTION_FILE,
            "\u{feff}section_id, section_name \n10,General\n",
        );
        let sections: Vec<Section> = read_records(&dir.path().join(SECTION_FILE)).unwrap();
        assert_eq!(sections[0].section_id, 10);
        assert_eq!(sections[0].section_name.as_deref(), Some("General"));
    }

    #[test]
    fn missing_file_reports_data_source_error() {
        let dir = TempDir::new().unwrap();
        let mut source = CsvResponseSource::new(dir.path());
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, SurveyError::DataSourceUnavailable(_)));
        assert!(err.to_string().contains(RESPONSE_FILE));
    }

    #[test]
    fn bad_timestamp_becomes_null_not_error() {
        let dir = TempDir::new().unwrap();
        write_fixture(
            &dir,
            RESPONSE_FILE,
            "response_code,answer_group,lastupdate\nR001,A,garbage\n",
        );
        let responses: Vec<Response> = read_records(&dir.path().join(RESPONSE_FILE)).unwrap();
        assert_eq!(responses[0].lastupdate, None);
        assert_eq!(responses[0].group.as_deref(), Some("A"));
    }

    #[test]
    fn empty_data_file_yields_no_rows() {
        let dir = TempDir::new().unwrap();
        write_fixture(&dir, SECTION_FILE, "section_id,section_name\n");
        let sections: Vec<Section> = read_records(&dir.path().join(SECTION_FILE)).unwrap();
        assert!(sections.is_empty());
    }
}
