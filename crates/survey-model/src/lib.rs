pub mod error;
pub mod event;
pub mod question;
pub mod records;

pub use error::{Result, SurveyError};
pub use event::AnswerEvent;
pub use question::{AnswerType, QuestionSpec};
pub use records::{Response, ResponseDetail, ResponseOption, Section, SurveyRecords};
