//! In-memory [`FormDom`] used by the unit tests.
//!
//! Mirrors the behaviour the engine relies on: document-order queries,
//! synchronous listeners, attribute observers and the vendor file widget
//! (`#div<id>` with a link and a delete anchor).

use super::selector::SelectorTarget;
use super::{ControlKind, DomEvent, FormDom, Handler, HintTone, Selector};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

pub type NodeId = usize;

#[derive(Debug, Default)]
struct MemNode {
    tag: String,
    attrs: BTreeMap<String, String>,
    value: String,
    checked: bool,
    text: String,
    display: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SelectorTarget for MemNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .map(|c| c.split_whitespace().any(|x| x == class))
            .unwrap_or(false)
    }
}

#[derive(Default)]
struct Document {
    nodes: Vec<MemNode>,
    listeners: HashMap<(NodeId, DomEvent), Vec<Handler>>,
    observers: HashMap<NodeId, Vec<Handler>>,
    alerts: Vec<String>,
}

impl Document {
    fn descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.nodes[node].children {
            out.push(*child);
            self.descendants(*child, out);
        }
    }

    fn text_of(&self, node: NodeId) -> String {
        let mut text = self.nodes[node].text.clone();
        for child in &self.nodes[node].children {
            text.push_str(&self.text_of(*child));
        }
        text
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node].parent.take() {
            self.nodes[parent].children.retain(|c| *c != node);
        }
    }
}

#[derive(Clone)]
pub struct MemoryDom {
    doc: Rc<RefCell<Document>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        let mut doc = Document::default();
        doc.nodes.push(MemNode {
            tag: "body".to_string(),
            ..MemNode::default()
        });
        Self {
            doc: Rc::new(RefCell::new(doc)),
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    /// Append an element; `value` and `checked` attributes seed the live state
    pub fn append(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let id = doc.nodes.len();
        let mut node = MemNode {
            tag: tag.to_ascii_lowercase(),
            parent: Some(parent),
            ..MemNode::default()
        };
        for (name, value) in attrs {
            match *name {
                "value" => node.value = value.to_string(),
                "checked" => node.checked = true,
                _ => {
                    node.attrs.insert(name.to_string(), value.to_string());
                }
            }
        }
        doc.nodes.push(node);
        doc.nodes[parent].children.push(id);
        id
    }

    pub fn append_text(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)], text: &str) -> NodeId {
        let id = self.append(parent, tag, attrs);
        self.doc.borrow_mut().nodes[id].text = text.to_string();
        id
    }

    /// `<input xname="inp<field_id>" type=<kind>>` holding `value`
    pub fn input(&self, parent: NodeId, field_id: &str, kind: &str, value: &str) -> NodeId {
        let xname = format!("inp{}", field_id);
        self.append(
            parent,
            "input",
            &[("xname", &xname), ("type", kind), ("value", value)],
        )
    }

    /// Vendor file widget: a text control tagged `xtype=FILE` plus the
    /// `#div<id>` container where the link and delete anchors live
    pub fn file_input(&self, parent: NodeId, field_id: &str) -> NodeId {
        let xname = format!("inp{}", field_id);
        let field = self.append(
            parent,
            "input",
            &[("xname", &xname), ("type", "text"), ("xtype", "FILE")],
        );
        self.append(parent, "div", &[("id", &format!("div{}", field_id))]);
        field
    }

    fn attachment_container(&self, field: NodeId) -> Option<NodeId> {
        let id = self
            .attribute(&field, "xname")
            .map(|x| x.trim_start_matches("inp").to_string())
            .unwrap_or_default();
        self.parent(&field)
            .and_then(|p| self.query(Some(&p), &Selector::id(&format!("div{}", id))))
    }

    /// Simulate an upload: the renderer writes the link and delete anchors,
    /// then touches the control's attributes
    pub fn attach_file(&self, field: NodeId, href: &str) {
        if let Some(container) = self.attachment_container(field) {
            for child in self.children(&container) {
                self.remove(child);
            }
            self.append_text(container, "a", &[("href", href)], href);
            let delete = self.append_text(container, "a", &[("class", "delete")], "x");
            let dom = self.clone();
            self.listen(
                &delete,
                &[DomEvent::Click],
                Rc::new(move || dom.clear_attachment(field)),
            );
        }

        self.set_value(&field, href);
        self.set_attribute(&field, "data-file", href);
    }

    // The delete anchor only drops the anchors; no attribute of the control changes
    fn clear_attachment(&self, field: NodeId) {
        if let Some(container) = self.attachment_container(field) {
            for child in self.children(&container) {
                self.remove(child);
            }
        }
        self.set_value(&field, "");
    }

    pub fn remove(&self, node: NodeId) {
        self.doc.borrow_mut().detach(node);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.doc.borrow().alerts.clone()
    }

    pub fn display(&self, node: NodeId) -> Option<String> {
        self.doc.borrow().nodes[node].display.clone()
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.attribute(&node, "disabled").is_some()
    }

    pub fn is_required(&self, node: NodeId) -> bool {
        self.attribute(&node, "required").as_deref() == Some("S")
    }

    /// Text of the element right after `node` among its siblings
    pub fn next_sibling_text(&self, node: NodeId) -> Option<String> {
        let doc = self.doc.borrow();
        let parent = doc.nodes[node].parent?;
        let siblings = &doc.nodes[parent].children;
        let index = siblings.iter().position(|c| *c == node)?;
        siblings.get(index + 1).map(|next| doc.text_of(*next))
    }

    /// Messages of the `form-hint` elements inside `group`
    pub fn hints(&self, group: NodeId) -> Vec<String> {
        self.query_all(Some(&group), &Selector::class("form-hint"))
            .into_iter()
            .map(|hint| self.text(&hint))
            .collect()
    }
}

impl FormDom for MemoryDom {
    type Node = NodeId;

    fn query(&self, scope: Option<&NodeId>, selector: &Selector) -> Option<NodeId> {
        self.query_all(scope, selector).into_iter().next()
    }

    fn query_all(&self, scope: Option<&NodeId>, selector: &Selector) -> Vec<NodeId> {
        let doc = self.doc.borrow();
        let mut candidates = Vec::new();
        match scope {
            Some(scope) => doc.descendants(*scope, &mut candidates),
            None => {
                candidates.push(0);
                doc.descendants(0, &mut candidates);
            }
        }
        candidates
            .into_iter()
            .filter(|id| selector.matches(&doc.nodes[*id]))
            .collect()
    }

    fn closest(&self, node: &NodeId, selector: &Selector) -> Option<NodeId> {
        let doc = self.doc.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if selector.matches(&doc.nodes[id]) {
                return Some(id);
            }
            current = doc.nodes[id].parent;
        }
        None
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.doc.borrow().nodes[*node].parent
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.doc.borrow().nodes[*node].children.clone()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.doc.borrow().nodes[*node].tag.clone()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.doc.borrow().nodes[*node].attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.doc.borrow_mut().nodes[*node]
            .attrs
            .insert(name.to_string(), value.to_string());
        let observers = self.doc.borrow().observers.get(node).cloned();
        for observer in observers.unwrap_or_default() {
            observer();
        }
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) {
        let removed = self.doc.borrow_mut().nodes[*node].attrs.remove(name);
        if removed.is_some() {
            let observers = self.doc.borrow().observers.get(node).cloned();
            for observer in observers.unwrap_or_default() {
                observer();
            }
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.doc.borrow().nodes[*node].has_class(class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let mut doc = self.doc.borrow_mut();
        let classes = doc.nodes[*node].attrs.entry("class".to_string()).or_default();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let mut doc = self.doc.borrow_mut();
        if let Some(classes) = doc.nodes[*node].attrs.get_mut("class") {
            let remaining = classes
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" ");
            *classes = remaining;
        }
    }

    fn control_kind(&self, node: &NodeId) -> ControlKind {
        let doc = self.doc.borrow();
        let node = &doc.nodes[*node];
        match node.tag.as_str() {
            "input" => ControlKind::from_type(node.attr("type").unwrap_or("text")),
            "textarea" => ControlKind::TextArea,
            "select" if node.attr("multiple").is_some() => ControlKind::SelectMultiple,
            "select" => ControlKind::SelectOne,
            _ => ControlKind::None,
        }
    }

    fn value(&self, node: &NodeId) -> String {
        self.doc.borrow().nodes[*node].value.clone()
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.doc.borrow_mut().nodes[*node].value = value.to_string();
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self.doc.borrow().nodes[*node].checked
    }

    fn set_checked(&self, node: &NodeId, checked: bool) {
        self.doc.borrow_mut().nodes[*node].checked = checked;
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }

    fn text(&self, node: &NodeId) -> String {
        self.doc.borrow().text_of(*node)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut doc = self.doc.borrow_mut();
        for child in doc.nodes[*node].children.clone() {
            doc.detach(child);
        }
        doc.nodes[*node].text = text.to_string();
    }

    fn set_display(&self, node: &NodeId, display: &str) {
        self.doc.borrow_mut().nodes[*node].display = Some(display.to_string());
    }

    fn insert_text_after(&self, node: &NodeId, text: &str) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        let span = self.append_text(parent, "span", &[], text);
        let mut doc = self.doc.borrow_mut();
        let siblings = &mut doc.nodes[parent].children;
        siblings.retain(|c| *c != span);
        let index = siblings
            .iter()
            .position(|c| c == node)
            .map(|i| i + 1)
            .unwrap_or(siblings.len());
        siblings.insert(index, span);
    }

    fn click(&self, node: &NodeId) {
        self.dispatch(node, DomEvent::Click);
    }

    fn dispatch(&self, node: &NodeId, event: DomEvent) {
        let handlers = self
            .doc
            .borrow()
            .listeners
            .get(&(*node, event))
            .cloned()
            .unwrap_or_default();
        for handler in handlers {
            handler();
        }
    }

    fn listen(&self, node: &NodeId, events: &[DomEvent], handler: Handler) {
        let mut doc = self.doc.borrow_mut();
        for event in events {
            doc.listeners
                .entry((*node, *event))
                .or_default()
                .push(handler.clone());
        }
    }

    fn observe_attributes(&self, node: &NodeId, handler: Handler) {
        self.doc
            .borrow_mut()
            .observers
            .entry(*node)
            .or_default()
            .push(handler);
    }

    fn show_hint(&self, group: &NodeId, message: &str, tone: HintTone) {
        let class = format!("form-hint {}", tone.modifier());
        self.append_text(*group, "span", &[("class", &class)], message);
    }

    fn remove_hint(&self, group: &NodeId) {
        if let Some(hint) = self.query(Some(group), &Selector::class("form-hint")) {
            self.remove(hint);
        }
    }

    fn alert(&self, message: &str) {
        self.doc.borrow_mut().alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_queries_follow_document_order() {
        let dom = MemoryDom::new();
        let table = dom.append(dom.root(), "table", &[("id", "tbl")]);
        let row = dom.append(table, "tr", &[]);
        let first = dom.input(row, "a", "text", "1");
        let second = dom.input(row, "b", "text", "2");

        let found = dom.query_all(Some(&table), &Selector::tag("input"));
        assert_eq!(found, vec![first, second]);
        assert_eq!(dom.query(None, &Selector::id("tbl")), Some(table));
        assert_eq!(dom.closest(&second, &Selector::tag("tr")), Some(row));
        assert_eq!(dom.closest(&second, &Selector::tag("tbody")), None);
    }

    #[test]
    fn test_dispatch_runs_listeners_without_holding_borrows() {
        let dom = MemoryDom::new();
        let field = dom.input(dom.root(), "a", "text", "");
        let calls = Rc::new(Cell::new(0));

        let inner = dom.clone();
        let counter = calls.clone();
        dom.listen(
            &field,
            &[DomEvent::Change, DomEvent::KeyUp],
            Rc::new(move || {
                inner.set_value(&field, "changed");
                counter.set(counter.get() + 1);
            }),
        );

        dom.dispatch(&field, DomEvent::Change);
        dom.dispatch(&field, DomEvent::KeyUp);
        dom.dispatch(&field, DomEvent::Blur);
        assert_eq!(calls.get(), 2);
        assert_eq!(dom.value(&field), "changed");
    }

    #[test]
    fn test_insert_text_after_places_span_next_to_node() {
        let dom = MemoryDom::new();
        let cell = dom.append(dom.root(), "td", &[]);
        let field = dom.input(cell, "a", "text", "x");
        let other = dom.append(cell, "button", &[]);

        dom.insert_text_after(&field, "Aprovado");
        assert_eq!(dom.next_sibling_text(field).as_deref(), Some("Aprovado"));
        assert_eq!(dom.children(&cell).last(), Some(&other));
    }

    #[test]
    fn test_file_widget_upload_notifies_observers_and_delete_does_not() {
        let dom = MemoryDom::new();
        let field = dom.file_input(dom.root(), "anexo");
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        dom.observe_attributes(&field, Rc::new(move || counter.set(counter.get() + 1)));

        dom.attach_file(field, "/files/a.pdf");
        assert_eq!(dom.value(&field), "/files/a.pdf");
        assert_eq!(seen.get(), 1);

        let delete = dom.query(None, &Selector::class("delete")).unwrap();
        dom.click(&delete);
        assert_eq!(dom.value(&field), "");
        assert_eq!(seen.get(), 1);
        assert!(dom.children(&dom.query(None, &Selector::id("divanexo")).unwrap()).is_empty());
    }

    #[test]
    fn test_classes() {
        let dom = MemoryDom::new();
        let node = dom.append(dom.root(), "div", &[("class", "form-group")]);
        dom.add_class(&node, "u-hidden");
        dom.add_class(&node, "u-hidden");
        assert_eq!(dom.attribute(&node, "class").as_deref(), Some("form-group u-hidden"));
        dom.remove_class(&node, "u-hidden");
        assert!(!dom.has_class(&node, "u-hidden"));
        assert!(dom.has_class(&node, "form-group"));
    }
}
