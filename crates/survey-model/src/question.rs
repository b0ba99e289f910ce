//! Question specs and the closed answer-type set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of answer encodings a question can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    /// `ans_m`: multi-select, one weighted 0/1 column per observed choice.
    Multi,
    /// `ans_o`: single-select, one integer-coded column.
    Single,
    /// `ans_r`: ranked multi-select, weights carry the rank.
    Rank,
    /// `ans_t`: free text, integer-coerced only when every value parses.
    Text,
    /// `ans_w`: rating weight on the fixed five-point scale.
    Weight,
}

impl AnswerType {
    /// Parse a raw answer-type tag. Accepts the storage tags (`ans_m`, ...)
    /// and the canonical names (`multi`, ...), case-insensitively. Returns
    /// `None` for anything else; the caller decides whether that skips the
    /// question or fails the run.
    pub fn parse(tag: &str) -> Option<Self> {
        let trimmed = tag.trim();
        if trimmed.eq_ignore_ascii_case("ans_m") || trimmed.eq_ignore_ascii_case("multi") {
            Some(AnswerType::Multi)
        } else if trimmed.eq_ignore_ascii_case("ans_o") || trimmed.eq_ignore_ascii_case("single") {
            Some(AnswerType::Single)
        } else if trimmed.eq_ignore_ascii_case("ans_r") || trimmed.eq_ignore_ascii_case("rank") {
            Some(AnswerType::Rank)
        } else if trimmed.eq_ignore_ascii_case("ans_t") || trimmed.eq_ignore_ascii_case("text") {
            Some(AnswerType::Text)
        } else if trimmed.eq_ignore_ascii_case("ans_w") || trimmed.eq_ignore_ascii_case("weight") {
            Some(AnswerType::Weight)
        } else {
            None
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerType::Multi => "multi",
            AnswerType::Single => "single",
            AnswerType::Rank => "rank",
            AnswerType::Text => "text",
            AnswerType::Weight => "weight",
        }
    }

    /// The storage tag this type is declared with.
    pub fn tag(&self) -> &'static str {
        match self {
            AnswerType::Multi => "ans_m",
            AnswerType::Single => "ans_o",
            AnswerType::Rank => "ans_r",
            AnswerType::Text => "ans_t",
            AnswerType::Weight => "ans_w",
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A distinct question as observed in the event stream: its label plus the
/// raw answer-type tag it was declared with. The tag is kept raw so an
/// unknown tag can be reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSpec {
    pub label: String,
    pub tag: String,
}

impl QuestionSpec {
    /// Resolve the raw tag against the closed type set.
    pub fn kind(&self) -> Option<AnswerType> {
        AnswerType::parse(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_tags_and_names() {
        assert_eq!(AnswerType::parse("ans_m"), Some(AnswerType::Multi));
        assert_eq!(AnswerType::parse("ans_o"), Some(AnswerType::Single));
        assert_eq!(AnswerType::parse("ans_r"), Some(AnswerType::Rank));
        assert_eq!(AnswerType::parse("ans_t"), Some(AnswerType::Text));
        assert_eq!(AnswerType::parse("ans_w"), Some(AnswerType::Weight));
        assert_eq!(AnswerType::parse("WEIGHT"), Some(AnswerType::Weight));
        assert_eq!(AnswerType::parse(" multi "), Some(AnswerType::Multi));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(AnswerType::parse("ans_x"), None);
        assert_eq!(AnswerType::parse(""), None);
        assert_eq!(AnswerType::parse("likert"), None);
    }

    #[test]
    fn tag_and_name_round_trip() {
        for kind in [
            AnswerType::Multi,
            AnswerType::Single,
            AnswerType::Rank,
            AnswerType::Text,
            AnswerType::Weight,
        ] {
            assert_eq!(AnswerType::parse(kind.tag()), Some(kind));
            assert_eq!(AnswerType::parse(kind.as_str()), Some(kind));
        }
    }
}
