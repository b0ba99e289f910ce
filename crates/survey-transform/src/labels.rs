//! Fixed report captions. The source questionnaires are Thai; these
//! literals appear verbatim in the rendered headers.

/// Choice bucket for selected options with no recorded text.
pub const OTHER_CHOICE: &str = "อื่นๆ";

/// Caption of the synthetic respondent-group column.
pub const GROUP_COLUMN: &str = "กลุ่ม";

/// Legend for multi-select columns: selected / not selected.
pub const MULTI_SELECT_LEGEND: &str = "1=เลือก\n0=ไม่เลือก";

/// Trailing no-answer line of single-select legends.
pub const NO_ANSWER_LINE: &str = "0=ไม่ตอบ";

/// Legend for rating-weight columns: the fixed five-point scale.
pub const WEIGHT_SCALE_LEGEND: &str = "5=มากที่สุด\n4=มาก\n3=ปานกลาง\n2=น้อย\n1=น้อยที่สุด\n0=ไม่ตอบ";

/// Legend marker for free-form text columns.
pub const FREE_TEXT_LEGEND: &str = "#";

/// Legend for ranked multi-select columns; `max` is the highest rank
/// weight observed for the question.
pub fn rank_legend(max: i64) -> String {
    format!("[1-{max}]=ค่าน้ำหนัก\n0=ไม่เลือก")
}
