//! Port between the form engine and the page the vendor renders.
//!
//! Business code never touches `web_sys` directly: it talks to a [`FormDom`],
//! which is [`web::WebDom`] in the browser and an in-memory document in tests.

pub mod selector;
pub mod web;

#[cfg(test)]
pub mod memory;

pub use selector::Selector;

use std::fmt;
use std::rc::Rc;

/// Kind of form control, as reported by the control's `type` property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    TextArea,
    SelectOne,
    SelectMultiple,
    Hidden,
    Radio,
    Checkbox,
    File,
    /// Not a form control (spans, cells, buttons...)
    None,
    Other(String),
}

impl ControlKind {
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "text" => ControlKind::Text,
            "textarea" => ControlKind::TextArea,
            "select-one" => ControlKind::SelectOne,
            "select-multiple" => ControlKind::SelectMultiple,
            "hidden" => ControlKind::Hidden,
            "radio" => ControlKind::Radio,
            "checkbox" => ControlKind::Checkbox,
            "file" => ControlKind::File,
            "" => ControlKind::None,
            other => ControlKind::Other(other.to_string()),
        }
    }

    /// Controls whose "clear" means writing an empty value
    pub fn holds_value(&self) -> bool {
        matches!(
            self,
            ControlKind::Text | ControlKind::TextArea | ControlKind::SelectOne | ControlKind::Hidden
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    Change,
    Blur,
    KeyUp,
    KeyDown,
    Click,
}

impl DomEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DomEvent::Change => "change",
            DomEvent::Blur => "blur",
            DomEvent::KeyUp => "keyup",
            DomEvent::KeyDown => "keydown",
            DomEvent::Click => "click",
        }
    }
}

/// Style modifier of an inline field hint (`form-hint -error`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTone {
    Success,
    Error,
}

impl HintTone {
    pub fn modifier(&self) -> &'static str {
        match self {
            HintTone::Success => "-success",
            HintTone::Error => "-error",
        }
    }
}

pub type Handler = Rc<dyn Fn()>;

/// Operations the engine needs from a live form document.
///
/// Adapters are cheap handles (`Clone`) so listeners can capture them.
pub trait FormDom: Clone + 'static {
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    /// First match in document order, inside `scope` when given
    fn query(&self, scope: Option<&Self::Node>, selector: &Selector) -> Option<Self::Node>;
    fn query_all(&self, scope: Option<&Self::Node>, selector: &Selector) -> Vec<Self::Node>;
    /// Nearest ancestor-or-self matching the selector
    fn closest(&self, node: &Self::Node, selector: &Selector) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;
    fn tag_name(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&self, node: &Self::Node, name: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn control_kind(&self, node: &Self::Node) -> ControlKind;
    fn value(&self, node: &Self::Node) -> String;
    fn set_value(&self, node: &Self::Node, value: &str);
    fn is_checked(&self, node: &Self::Node) -> bool;
    fn set_checked(&self, node: &Self::Node, checked: bool);
    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);
    /// Inline `style.display`
    fn set_display(&self, node: &Self::Node, display: &str);
    /// Insert a static `<span>` with `text` right after `node`
    fn insert_text_after(&self, node: &Self::Node, text: &str);

    fn click(&self, node: &Self::Node);
    fn dispatch(&self, node: &Self::Node, event: DomEvent);
    fn listen(&self, node: &Self::Node, events: &[DomEvent], handler: Handler);
    /// Run `handler` whenever an attribute of `node` changes
    fn observe_attributes(&self, node: &Self::Node, handler: Handler);

    /// Show a `form-hint` message at the end of `group`
    fn show_hint(&self, group: &Self::Node, message: &str, tone: HintTone);
    fn remove_hint(&self, group: &Self::Node);
    fn alert(&self, message: &str);
}
