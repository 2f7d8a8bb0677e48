use super::binding::DomSuggestions;
use super::document::Document;
use super::event::DomEvent;
use crate::catalog::CatalogProvider;
use crate::config::SuggestConfig;
use crate::widgets::traits::InteractionResult;

/// Owns a document and wires the suggestion widget on the first
/// `ContentLoaded`.
pub struct Page<P> {
    document: Document,
    provider: P,
    config: SuggestConfig,
    suggestions: Option<DomSuggestions>,
    loaded: bool,
}

impl<P: CatalogProvider> Page<P> {
    pub fn new(document: Document, provider: P, config: SuggestConfig) -> Self {
        Self {
            document,
            provider,
            config,
            suggestions: None,
            loaded: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn suggestions(&self) -> Option<&DomSuggestions> {
        self.suggestions.as_ref()
    }

    pub fn dispatch(&mut self, event: DomEvent) -> InteractionResult {
        match event {
            DomEvent::ContentLoaded => {
                if self.loaded {
                    return InteractionResult::ignored();
                }
                self.loaded = true;
                self.suggestions =
                    DomSuggestions::mount(&mut self.document, &self.provider, &self.config);
                InteractionResult::handled()
            }
            _ => match self.suggestions.as_mut() {
                Some(suggestions) => suggestions.handle(&mut self.document, &event),
                None => InteractionResult::ignored(),
            },
        }
    }

    /// Sets the field's text the way typing would, then fires its input
    /// event.
    pub fn type_into(&mut self, name: &str, value: &str) -> InteractionResult {
        let Some(input) = self.document.find_input_by_name(name) else {
            return InteractionResult::ignored();
        };
        self.document.set_value(input, value);
        self.dispatch(DomEvent::Input { target: input })
    }

    pub fn dispose(&mut self) {
        if let Some(suggestions) = self.suggestions.take() {
            suggestions.dispose(&mut self.document);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Page;
    use crate::catalog::{Catalog, JsonCatalog, StaticCatalog};
    use crate::config::SuggestConfig;
    use crate::dom::document::{Display, Document, ElementId};
    use crate::dom::event::DomEvent;

    struct Fixture {
        page: Page<StaticCatalog>,
        input: ElementId,
        footer: ElementId,
    }

    fn fixture() -> Fixture {
        let mut doc = Document::new();
        let form = doc.create_element("form");
        doc.append_child(doc.body(), form);
        let input = doc.create_text_input("search");
        doc.append_child(form, input);
        let footer = doc.create_element("footer");
        doc.append_child(doc.body(), footer);

        let provider = StaticCatalog::new(Catalog::default_products());
        let mut page = Page::new(doc, provider, SuggestConfig::default());
        page.dispatch(DomEvent::ContentLoaded);
        Fixture {
            page,
            input,
            footer,
        }
    }

    fn container(page: &Page<StaticCatalog>) -> ElementId {
        page.suggestions().expect("mounted").container()
    }

    fn row_texts(page: &Page<StaticCatalog>) -> Vec<String> {
        let doc = page.document();
        doc.children(container(page))
            .iter()
            .map(|&row| doc.text_content(row))
            .collect()
    }

    #[test]
    fn mount_inserts_hidden_list_after_input() {
        let f = fixture();
        let doc = f.page.document();
        let list = container(&f.page);
        let parent = doc.parent(f.input).expect("form");

        assert_eq!(doc.children(parent), &[f.input, list]);
        assert!(doc.has_class(list, "suggestions"));
        assert_eq!(doc.display(list), Display::None);
        assert!(doc.children(list).is_empty());
    }

    #[test]
    fn blender_renders_two_highlighted_rows() {
        let mut f = fixture();
        f.page.type_into("search", "blender");
        let list = container(&f.page);

        assert_eq!(f.page.document().display(list), Display::Block);
        assert_eq!(
            row_texts(&f.page),
            vec!["Nutribullet Blender NBR1212R", "Moulinex Blender LM422"]
        );
        assert_eq!(
            f.page.document().inner_html(list),
            "<li>Nutribullet <span class='match'>Blender</span> NBR1212R</li>\
             <li>Moulinex <span class='match'>Blender</span> LM422</li>"
        );
    }

    #[test]
    fn blank_query_hides_and_empties_list() {
        let mut f = fixture();
        f.page.type_into("search", "milk");
        f.page.type_into("search", "   ");
        let list = container(&f.page);
        assert_eq!(f.page.document().display(list), Display::None);
        assert!(f.page.document().children(list).is_empty());
    }

    #[test]
    fn clicking_a_row_fills_input_and_hides() {
        let mut f = fixture();
        f.page.type_into("search", "milk");
        let list = container(&f.page);
        let second_row = f.page.document().children(list)[1];
        let highlighted = f.page.document().children(second_row)[1];

        f.page.dispatch(DomEvent::Click {
            target: highlighted,
        });

        let doc = f.page.document();
        assert_eq!(doc.value(f.input), "Brookside Milk");
        assert_eq!(doc.display(list), Display::None);

        f.page.dispatch(DomEvent::Click { target: f.footer });
        assert_eq!(f.page.document().value(f.input), "Brookside Milk");
    }

    #[test]
    fn outside_click_hides_but_keeps_rows() {
        let mut f = fixture();
        f.page.type_into("search", "e");
        let list = container(&f.page);
        let before = f.page.document().inner_html(list);

        f.page.dispatch(DomEvent::Click { target: f.footer });
        assert_eq!(f.page.document().display(list), Display::None);
        assert_eq!(f.page.document().inner_html(list), before);
    }

    #[test]
    fn clicks_on_input_or_list_keep_it_open() {
        let mut f = fixture();
        f.page.type_into("search", "bread");
        let list = container(&f.page);

        f.page.dispatch(DomEvent::Click { target: f.input });
        f.page.dispatch(DomEvent::Click { target: list });
        assert_eq!(f.page.document().display(list), Display::Block);
    }

    #[test]
    fn repeated_input_is_byte_identical() {
        let mut f = fixture();
        f.page.type_into("search", "m");
        let first = f.page.document().outer_html(container(&f.page));
        f.page.type_into("search", "m");
        let second = f.page.document().outer_html(container(&f.page));
        assert_eq!(first, second);
    }

    #[test]
    fn click_with_foreign_id_counts_as_outside() {
        let mut f = fixture();
        f.page.type_into("search", "milk");
        let mut other = Document::new();
        let stranger = (0..40)
            .map(|_| other.create_element("div"))
            .last()
            .expect("created");

        f.page.dispatch(DomEvent::Click { target: stranger });
        let list = container(&f.page);
        assert_eq!(f.page.document().display(list), Display::None);
        assert_eq!(row_texts(&f.page).len(), 2);
    }

    #[test]
    fn second_content_loaded_does_not_mount_again() {
        let mut f = fixture();
        let parent = f.page.document().parent(f.input).expect("form");
        assert!(!f.page.dispatch(DomEvent::ContentLoaded).handled);
        assert_eq!(f.page.document().children(parent).len(), 2);
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        let doc = Document::new();
        let mut page = Page::new(doc, StaticCatalog::default(), SuggestConfig::default());
        page.dispatch(DomEvent::ContentLoaded);
        assert!(page.suggestions().is_none());
        assert!(!page.type_into("search", "milk").handled);
        assert!(page.document().children(page.document().body()).is_empty());
    }

    #[test]
    fn bad_catalog_leaves_page_untouched() {
        let mut doc = Document::new();
        let input = doc.create_text_input("search");
        doc.append_child(doc.body(), input);
        let mut page = Page::new(doc, JsonCatalog::from_text("oops"), SuggestConfig::default());
        page.dispatch(DomEvent::ContentLoaded);
        assert!(page.suggestions().is_none());
        assert_eq!(page.document().children(page.document().body()), &[input]);
    }

    #[test]
    fn dispose_removes_container() {
        let mut f = fixture();
        f.page.type_into("search", "milk");
        let list = container(&f.page);
        f.page.dispose();
        assert!(!f.page.document().is_attached(list));
        assert!(f.page.suggestions().is_none());
        assert!(!f.page.type_into("search", "bread").handled);
    }

    #[test]
    fn custom_anchor_and_classes() {
        let mut doc = Document::new();
        let input = doc.create_text_input("q");
        doc.append_child(doc.body(), input);
        let config = SuggestConfig::from_yaml(
            "anchor_name: q\ncontainer_class: dropdown\nmatch_class: hit\n",
        )
        .expect("config");
        let mut page = Page::new(doc, StaticCatalog::from_labels(["Sugar"]), config);
        page.dispatch(DomEvent::ContentLoaded);
        page.type_into("q", "SUG");

        let list = page.suggestions().expect("mounted").container();
        assert!(page.document().has_class(list, "dropdown"));
        assert_eq!(
            page.document().inner_html(list),
            "<li><span class='hit'>Sug</span>ar</li>"
        );
    }
}
