use std::fmt::Write;

use crate::search::{DisplayModel, Segment};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inner markup of one list item.
pub fn render_line(segments: &[Segment], match_class: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_match {
            let _ = write!(
                out,
                "<span class='{}'>{}</span>",
                escape(match_class),
                escape(&segment.text)
            );
        } else {
            out.push_str(&escape(&segment.text));
        }
    }
    out
}

/// Inner markup of the suggestion container: one `<li>` per line.
pub fn render_list(model: &DisplayModel, match_class: &str) -> String {
    model
        .lines
        .iter()
        .map(|line| format!("<li>{}</li>", render_line(&line.segments, match_class)))
        .collect()
}

pub fn display_json(model: &DisplayModel, match_class: &str) -> serde_json::Value {
    let items = model
        .lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "label": line.label,
                "kind": line.kind,
                "html": render_line(&line.segments, match_class),
                "segments": line.segments,
            })
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "visible": model.visible,
        "display": if model.visible { "block" } else { "none" },
        "items": items,
    })
}

#[cfg(test)]
mod tests {
    use super::{display_json, escape, render_line, render_list};
    use crate::catalog::Catalog;
    use crate::search::{Query, filter, highlight, render};

    #[test]
    fn wraps_match_in_span() {
        let html = render_line(&highlight("Brookside Milk", &Query::parse("milk")), "match");
        assert_eq!(html, "Brookside <span class='match'>Milk</span>");
    }

    #[test]
    fn label_text_is_escaped() {
        let html = render_line(&highlight("<b>Tom & Jerry</b>", &Query::parse("jerry")), "match");
        assert_eq!(
            html,
            "&lt;b&gt;Tom &amp; <span class='match'>Jerry</span>&lt;/b&gt;"
        );
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn list_has_one_item_per_line() {
        let catalog = Catalog::default_products();
        let query = Query::parse("blender");
        let model = render(&filter(&catalog, &query), &query);
        let html = render_list(&model, "match");
        assert_eq!(
            html,
            "<li>Nutribullet <span class='match'>Blender</span> NBR1212R</li>\
             <li>Moulinex <span class='match'>Blender</span> LM422</li>"
        );
    }

    #[test]
    fn json_reports_display_and_items() {
        let catalog = Catalog::default_products();
        let query = Query::parse("eggs");
        let model = render(&filter(&catalog, &query), &query);
        let json = display_json(&model, "match");
        assert_eq!(json["display"], "block");
        assert_eq!(json["items"][0]["label"], "Naivas Fresh Eggs");
        assert_eq!(json["items"][0]["kind"], "product");
        assert_eq!(json["items"][0]["segments"][1]["is_match"], true);
    }
}
