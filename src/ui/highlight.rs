use crate::search::Segment;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;

pub fn segment_spans(segments: &[Segment], base_style: Style, highlight_style: Style) -> SpanLine {
    let mut spans = SpanLine::with_capacity(segments.len());
    for segment in segments {
        if segment.text.is_empty() {
            continue;
        }
        let style = if segment.is_match {
            base_style.merge(highlight_style)
        } else {
            base_style
        };
        // Adjacent pieces of the same style collapse into one span.
        match spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&segment.text),
            _ => spans.push(Span::styled(segment.text.clone(), style)),
        }
    }
    if spans.is_empty() {
        spans.push(Span::styled(String::new(), base_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::segment_spans;
    use crate::search::{Query, highlight};
    use crate::ui::style::{Color, Style};

    #[test]
    fn matched_segments_get_highlight_style() {
        let base = Style::new().color(Color::White);
        let hl = Style::new().color(Color::Yellow).bold();
        let spans = segment_spans(&highlight("Brookside Milk", &Query::parse("milk")), base, hl);

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Brookside ");
        assert_eq!(spans[0].style, base);
        assert_eq!(spans[1].text, "Milk");
        assert_eq!(spans[1].style.color, Some(Color::Yellow));
        assert!(spans[1].style.bold);
    }

    #[test]
    fn same_style_neighbours_collapse() {
        let base = Style::default();
        let spans = segment_spans(&highlight("aaaa", &Query::parse("aa")), base, base);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "aaaa");
    }
}
