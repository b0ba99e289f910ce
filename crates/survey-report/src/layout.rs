//! Header layout planning: column widths and merge ranges.

use survey_transform::ColumnHeader;

/// Characters added on top of the label length when sizing a column.
pub const HORIZONTAL_PADDING: usize = 6;

/// Spreadsheet width for a column captioned with `label`. Width counts
/// characters, not bytes, so Thai captions size the same as Latin ones.
pub fn column_width(label: &str) -> f64 {
    (label.chars().count() + HORIZONTAL_PADDING) as f64
}

/// One contiguous run of columns sharing a top caption. Indices are
/// data-column positions, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSpan {
    pub first: usize,
    pub last: usize,
    pub text: String,
}

impl MergeSpan {
    pub fn is_merged(&self) -> bool {
        self.last > self.first
    }
}

/// The full header plan: top-row runs plus the columns rendered as one
/// vertical merged cell.
#[derive(Debug, Clone, Default)]
pub struct HeaderLayout {
    pub top_spans: Vec<MergeSpan>,
    pub unified_columns: Vec<usize>,
}

impl HeaderLayout {
    /// Whether the top cell of `idx` is covered by a multi-column merge
    /// and must not be written individually.
    pub fn covers_top(&self, idx: usize) -> bool {
        self.top_spans
            .iter()
            .any(|span| span.is_merged() && span.first <= idx && idx <= span.last)
    }
}

/// Scan the headers left to right and group consecutive equal top
/// captions into spans. A unified column never joins a run; it breaks
/// any open one and is listed for a vertical merge instead, so two
/// question groups that happen to flank the group column stay separate.
pub fn plan_header_layout(headers: &[ColumnHeader]) -> HeaderLayout {
    let mut layout = HeaderLayout::default();
    let mut open: Option<MergeSpan> = None;
    for (idx, header) in headers.iter().enumerate() {
        if header.unified {
            if let Some(span) = open.take() {
                layout.top_spans.push(span);
            }
            layout.unified_columns.push(idx);
            continue;
        }
        match open.as_mut() {
            Some(span) if span.text == header.top => span.last = idx,
            _ => {
                if let Some(span) = open.take() {
                    layout.top_spans.push(span);
                }
                open = Some(MergeSpan {
                    first: idx,
                    last: idx,
                    text: header.top.clone(),
                });
            }
        }
    }
    if let Some(span) = open.take() {
        layout.top_spans.push(span);
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(top: &str) -> ColumnHeader {
        ColumnHeader::new(top, "label", "legend")
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        assert_eq!(column_width("กลุ่ม"), 11.0);
        assert_eq!(column_width("code"), 10.0);
        assert_eq!(column_width(""), 6.0);
    }

    #[test]
    fn consecutive_equal_tops_form_one_span() {
        let headers = vec![header("A"), header("A"), header("B")];
        let layout = plan_header_layout(&headers);
        assert_eq!(
            layout.top_spans,
            vec![
                MergeSpan {
                    first: 0,
                    last: 1,
                    text: "A".to_string()
                },
                MergeSpan {
                    first: 2,
                    last: 2,
                    text: "B".to_string()
                },
            ]
        );
        assert!(layout.covers_top(0));
        assert!(layout.covers_top(1));
        assert!(!layout.covers_top(2));
    }

    #[test]
    fn unified_column_breaks_a_run() {
        let headers = vec![header("A"), ColumnHeader::unified("กลุ่ม"), header("A")];
        let layout = plan_header_layout(&headers);
        assert_eq!(layout.unified_columns, vec![1]);
        assert_eq!(layout.top_spans.len(), 2);
        assert!(layout.top_spans.iter().all(|span| !span.is_merged()));
    }

    #[test]
    fn group_column_leads_without_joining_the_first_question() {
        let headers = vec![
            ColumnHeader::unified("กลุ่ม"),
            header("Q1"),
            header("Q1"),
            header("Q1"),
        ];
        let layout = plan_header_layout(&headers);
        assert_eq!(layout.unified_columns, vec![0]);
        assert_eq!(
            layout.top_spans,
            vec![MergeSpan {
                first: 1,
                last: 3,
                text: "Q1".to_string()
            }]
        );
    }

    #[test]
    fn merge_plan_is_idempotent() {
        let headers = vec![
            ColumnHeader::unified("กลุ่ม"),
            header("Q1"),
            header("Q1"),
            header("ส่วนที่ 2"),
            header("Q3"),
            header("Q3"),
        ];
        let layout = plan_header_layout(&headers);

        // Collapse each span to one synthetic column and re-plan.
        let collapsed: Vec<ColumnHeader> = layout
            .top_spans
            .iter()
            .map(|span| header(&span.text))
            .collect();
        let replanned = plan_header_layout(&collapsed);
        assert!(replanned.top_spans.iter().all(|span| !span.is_merged()));
    }

    #[test]
    fn empty_headers_plan_nothing() {
        let layout = plan_header_layout(&[]);
        assert!(layout.top_spans.is_empty());
        assert!(layout.unified_columns.is_empty());
    }
}
