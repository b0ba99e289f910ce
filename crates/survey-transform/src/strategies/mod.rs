//! Per-question encoding strategies, one per answer type.

mod multi;
mod rank;
mod single;
mod text;
mod weight;

pub use multi::encode_multi;
pub use rank::encode_rank;
pub use single::encode_single;
pub use text::encode_text;
pub use weight::encode_weight;

use survey_model::{AnswerEvent, AnswerType, QuestionSpec, Result};
use tracing::warn;

use crate::frame::QuestionFrame;

/// Encode one question from its matching events. Returns `None` when the
/// question has no events or its tag is not a known answer type; an
/// unknown tag is logged and skipped, never an error.
pub fn encode_question(
    spec: &QuestionSpec,
    events: &[&AnswerEvent],
) -> Result<Option<QuestionFrame>> {
    if events.is_empty() {
        return Ok(None);
    }
    let Some(kind) = spec.kind() else {
        warn!(
            question = %spec.label,
            answer_type = %spec.tag,
            "skipping question with unrecognized answer type"
        );
        return Ok(None);
    };
    let frame = match kind {
        AnswerType::Multi => encode_multi(&spec.label, events, None)?,
        AnswerType::Single => encode_single(&spec.label, events)?,
        AnswerType::Rank => encode_rank(&spec.label, events)?,
        AnswerType::Text => encode_text(&spec.label, events)?,
        AnswerType::Weight => encode_weight(&spec.label, events)?,
    };
    Ok(Some(frame))
}
