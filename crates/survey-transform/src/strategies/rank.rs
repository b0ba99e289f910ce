//! Ranked multi-select encoding.

use survey_model::{AnswerEvent, Result};

use crate::frame::QuestionFrame;
use crate::labels::rank_legend;
use crate::strategies::encode_multi;

/// Encode one ranked question: the multi-select pivot with a range legend
/// built from the highest observed rank weight. No observed weight means
/// a `[1-0]` range rather than a failure.
pub fn encode_rank(label: &str, events: &[&AnswerEvent]) -> Result<QuestionFrame> {
    let max = events
        .iter()
        .filter_map(|event| event.weight)
        .fold(0.0_f64, f64::max);
    encode_multi(label, events, Some(rank_legend(max as i64)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    fn event(code: &str, option: &str, weight: Option<f64>) -> AnswerEvent {
        AnswerEvent {
            response_code: code.to_string(),
            question: Some("Q".to_string()),
            answer_type: Some("ans_r".to_string()),
            option_text: Some(option.to_string()),
            weight,
            ..AnswerEvent::default()
        }
    }

    #[test]
    fn legend_carries_highest_rank() {
        let events = vec![
            event("R1", "A", Some(1.0)),
            event("R1", "B", Some(3.0)),
            event("R2", "A", Some(2.0)),
        ];
        let refs: Vec<&AnswerEvent> = events.iter().collect();
        let frame = encode_rank("Q", &refs).unwrap();
        assert_eq!(frame.headers[0].legend, "[1-3]=ค่าน้ำหนัก\n0=ไม่เลือก");

        let b = frame.data.column("B").unwrap().as_materialized_series();
        let b = b.cast(&DataType::Int64).unwrap();
        assert_eq!(
            b.i64().unwrap().into_iter().collect::<Vec<_>>(),
            vec![Some(3), Some(0)]
        );
    }

    #[test]
    fn all_null_weights_fall_back_to_zero_range() {
        let events = vec![event("R1", "A", None)];
        let refs: Vec<&AnswerEvent> = events.iter().collect();
        let frame = encode_rank("Q", &refs).unwrap();
        assert_eq!(frame.headers[0].legend, "[1-0]=ค่าน้ำหนัก\n0=ไม่เลือก");
    }
}
