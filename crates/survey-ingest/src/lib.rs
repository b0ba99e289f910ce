pub mod csv_source;
pub mod source;

pub use csv_source::{
    CsvResponseSource, DETAIL_FILE, OPTION_FILE, RESPONSE_FILE, SECTION_FILE, read_records,
};
pub use source::ResponseSource;
