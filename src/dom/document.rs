use std::collections::BTreeMap;

use crate::ui::html::escape;

/// Slot index plus the generation the slot had when the node was created.
/// Ids of removed nodes never resolve again, even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline `display` set; the stylesheet decides.
    #[default]
    Unset,
    None,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Element { tag: String },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    value: String,
    display: Display,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            value: String::new(),
            display: Display::Unset,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

/// In-memory page tree: just enough of a DOM for the widget's contract.
///
/// Removed and cleared nodes are dropped and their slots recycled, so a
/// page that re-renders on every keystroke stays the same size. Ids that
/// do not resolve (removed nodes, ids from another document) read as
/// detached, empty nodes and writes through them are ignored.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let body = NodeData::new(NodeKind::Element {
            tag: "body".to_string(),
        });
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(body),
            }],
            free: Vec::new(),
            body: ElementId {
                index: 0,
                generation: 0,
            },
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.push(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> ElementId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Convenience for page fixtures: `<input type="text" name=...>`.
    pub fn create_text_input(&mut self, name: &str) -> ElementId {
        let id = self.create_element("input");
        self.set_attr(id, "type", "text");
        self.set_attr(id, "name", name);
        id
    }

    /// Number of live nodes, the body included.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn exists(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    fn push(&mut self, kind: NodeKind) -> ElementId {
        let node = Some(NodeData::new(kind));
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = node;
            return ElementId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            node,
        });
        ElementId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn node(&self, id: ElementId) -> Option<&NodeData> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut NodeData> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id)
            .map_or(&[] as &[ElementId], |node| node.children.as_slice())
    }

    /// Appends `child` to `parent`. Returns false when either id is stale
    /// or the move would put a node inside itself.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if !self.exists(parent) || !self.exists(child) || self.contains(child, parent) {
            return false;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        true
    }

    /// Inserts `node` as the next sibling of `reference`. Fails when
    /// `reference` has no parent.
    pub fn insert_after(&mut self, reference: ElementId, node: ElementId) -> bool {
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        if !self.exists(node) || self.contains(node, parent) {
            return false;
        }
        self.detach(node);
        let Some(parent_node) = self.node_mut(parent) else {
            return false;
        };
        let siblings = &mut parent_node.children;
        let pos = siblings
            .iter()
            .position(|&sibling| sibling == reference)
            .map_or(siblings.len(), |idx| idx + 1);
        siblings.insert(pos, node);
        if let Some(node) = self.node_mut(node) {
            node.parent = Some(parent);
        }
        true
    }

    /// Detaches `id` and drops it with its whole subtree. The body stays.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.body {
            return;
        }
        self.detach(id);
        self.release(id);
    }

    /// Drops every child of `id` with its subtree.
    pub fn clear_children(&mut self, id: ElementId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let children = std::mem::take(&mut node.children);
        for child in children {
            self.release(child);
        }
    }

    fn detach(&mut self, id: ElementId) {
        let Some(parent) = self.node_mut(id).and_then(|node| node.parent.take()) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&child| child != id);
        }
    }

    fn release(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if self.node(id).is_none() {
                continue;
            }
            let slot = &mut self.slots[id.index];
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
            }
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index);
        }
    }

    pub fn is_attached(&self, id: ElementId) -> bool {
        self.contains(self.body, id)
    }

    /// True when `node` is `ancestor` or lies anywhere beneath it.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id)?.attrs.get(name).map(String::as_str)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        if !node.classes.iter().any(|existing| existing == class) {
            node.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id)
            .is_some_and(|node| node.classes.iter().any(|existing| existing == class))
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.node(id).map_or("", |node| node.value.as_str())
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.value = value.into();
        }
    }

    pub fn display(&self, id: ElementId) -> Display {
        self.node(id).map_or(Display::Unset, |node| node.display)
    }

    pub fn set_display(&mut self, id: ElementId, display: Display) {
        if let Some(node) = self.node_mut(id) {
            node.display = display;
        }
    }

    /// First attached text input whose `name` attribute equals `name`,
    /// in document order.
    pub fn find_input_by_name(&self, name: &str) -> Option<ElementId> {
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            if self.is_text_input(id) && self.attr(id, "name") == Some(name) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    fn is_text_input(&self, id: ElementId) -> bool {
        self.tag(id) == Some("input")
            && matches!(self.attr(id, "type"), None | Some("text") | Some("search"))
    }

    pub fn text_content(&self, id: ElementId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        match &node.kind {
            NodeKind::Text(text) => text.clone(),
            NodeKind::Element { .. } => self
                .children(id)
                .iter()
                .map(|&child| self.text_content(child))
                .collect(),
        }
    }

    pub fn inner_html(&self, id: ElementId) -> String {
        self.children(id)
            .iter()
            .map(|&child| self.outer_html(child))
            .collect()
    }

    pub fn outer_html(&self, id: ElementId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        let tag = match &node.kind {
            NodeKind::Text(text) => return escape(text),
            NodeKind::Element { tag } => tag,
        };

        let mut out = format!("<{tag}");
        if !node.classes.is_empty() {
            out.push_str(&format!(" class='{}'", escape(&node.classes.join(" "))));
        }
        for (name, value) in &node.attrs {
            out.push_str(&format!(" {name}='{}'", escape(value)));
        }
        match node.display {
            Display::Unset => {}
            Display::None => out.push_str(" style='display: none'"),
            Display::Block => out.push_str(" style='display: block'"),
        }
        out.push('>');
        if tag == "input" {
            return out;
        }
        out.push_str(&self.inner_html(id));
        out.push_str(&format!("</{tag}>"));
        out
    }
}
