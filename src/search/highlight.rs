use serde::Serialize;

use super::query::Query;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }
}

/// Char ranges `(start, end)` of every non-overlapping occurrence of the
/// query in `label`, scanning left to right.
pub fn match_ranges(label: &str, query: &Query) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.as_str().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // One lowercase char may expand to several; `origin` maps each folded
    // char back to the label char it came from.
    let mut folded = Vec::new();
    let mut origin = Vec::new();
    for (idx, ch) in label.chars().enumerate() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.push(idx);
        }
    }

    let mut ranges = Vec::new();
    let mut pos = 0usize;
    let mut last_end = 0usize;
    while pos + needle.len() <= folded.len() {
        if folded[pos..pos + needle.len()] == needle[..] {
            let start = origin[pos].max(last_end);
            let end = origin[pos + needle.len() - 1] + 1;
            if end > start {
                ranges.push((start, end));
                last_end = end;
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

/// Splits `label` into plain and matched pieces. Concatenating the pieces
/// gives back `label` unchanged.
pub fn highlight(label: &str, query: &Query) -> Vec<Segment> {
    let ranges = match_ranges(label, query);
    if ranges.is_empty() {
        return vec![Segment::plain(label)];
    }

    let chars: Vec<char> = label.chars().collect();
    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0usize;
    for (start, end) in ranges {
        if start > cursor {
            segments.push(Segment::plain(chars[cursor..start].iter().collect::<String>()));
        }
        segments.push(Segment::matched(chars[start..end].iter().collect::<String>()));
        cursor = end;
    }
    if cursor < chars.len() {
        segments.push(Segment::plain(chars[cursor..].iter().collect::<String>()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::{Segment, highlight, match_ranges};
    use crate::search::query::Query;

    #[test]
    fn wraps_case_preserved_match() {
        let segments = highlight("Brookside Milk", &Query::parse("milk"));
        assert_eq!(
            segments,
            vec![Segment::plain("Brookside "), Segment::matched("Milk")]
        );
    }

    #[test]
    fn wraps_every_occurrence() {
        let segments = highlight("Milk and milk", &Query::parse("MILK"));
        assert_eq!(
            segments,
            vec![
                Segment::matched("Milk"),
                Segment::plain(" and "),
                Segment::matched("milk"),
            ]
        );
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(match_ranges("aaaa", &Query::parse("aa")), vec![(0, 2), (2, 4)]);
        assert_eq!(match_ranges("aaa", &Query::parse("aa")), vec![(0, 2)]);
    }

    #[test]
    fn dot_is_not_a_wildcard() {
        assert!(match_ranges("Milk", &Query::parse(".")).is_empty());
        assert_eq!(match_ranges("v1.2", &Query::parse(".")), vec![(2, 3)]);
    }

    #[test]
    fn unmatched_label_is_single_plain_segment() {
        assert_eq!(highlight("Bread", &Query::parse("milk")), vec![Segment::plain("Bread")]);
        assert_eq!(highlight("Bread", &Query::parse("")), vec![Segment::plain("Bread")]);
    }

    #[test]
    fn multibyte_labels_stay_on_char_boundaries() {
        let segments = highlight("Crème Brûlée", &Query::parse("BRÛ"));
        assert_eq!(
            segments,
            vec![
                Segment::plain("Crème "),
                Segment::matched("Brû"),
                Segment::plain("lée"),
            ]
        );
    }

    #[test]
    fn segments_reassemble_label() {
        let label = "Nutribullet Blender NBR1212R";
        for raw in ["b", "blender", "12", "r", "nbr1212r"] {
            let joined: String = highlight(label, &Query::parse(raw))
                .into_iter()
                .map(|segment| segment.text)
                .collect();
            assert_eq!(joined, label);
        }
    }
}
