//! [`FormDom`] over the live page (`web_sys`).

use super::{ControlKind, DomEvent, FormDom, Handler, HintTone, Selector};
use crate::shared::components::field_hint::FieldHint;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    MutationObserver, MutationObserverInit, NodeList,
};

#[wasm_bindgen]
extern "C" {
    type JQuery;

    // The renderer's "sugestão" and datepicker widgets only trigger jQuery
    // events, so listeners go through jQuery whenever the page loads it.
    #[wasm_bindgen(catch, js_name = jQuery)]
    fn jquery(element: &Element) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &JQuery, events: &str, handler: &js_sys::Function);
}

#[derive(Clone)]
pub struct WebDom {
    document: Document,
    // Mounted hint views; dropping a handle unmounts the hint
    hints: Rc<RefCell<Vec<(Element, Box<dyn Any>)>>>,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            hints: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl FormDom for WebDom {
    type Node = Element;

    fn query(&self, scope: Option<&Element>, selector: &Selector) -> Option<Element> {
        let css = selector.to_css();
        let found = match scope {
            Some(scope) => scope.query_selector(&css),
            None => self.document.query_selector(&css),
        };
        found.ok().flatten()
    }

    fn query_all(&self, scope: Option<&Element>, selector: &Selector) -> Vec<Element> {
        let css = selector.to_css();
        let found = match scope {
            Some(scope) => scope.query_selector_all(&css),
            None => self.document.query_selector_all(&css),
        };
        match found {
            Ok(list) => elements(list),
            Err(err) => {
                log::warn!("Invalid selector '{}': {:?}", css, err);
                Vec::new()
            }
        }
    }

    fn closest(&self, node: &Element, selector: &Selector) -> Option<Element> {
        node.closest(&selector.to_css()).ok().flatten()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        let children = node.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_lowercase()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn remove_attribute(&self, node: &Element, name: &str) {
        let _ = node.remove_attribute(name);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn control_kind(&self, node: &Element) -> ControlKind {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            ControlKind::from_type(&input.type_())
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            ControlKind::from_type(&select.type_())
        } else if node.dyn_ref::<HtmlTextAreaElement>().is_some() {
            ControlKind::TextArea
        } else {
            ControlKind::None
        }
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            node.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
            textarea.set_value(value);
        }
    }

    fn is_checked(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn set_checked(&self, node: &Element, checked: bool) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if disabled {
            let _ = node.set_attribute("disabled", "");
        } else {
            let _ = node.remove_attribute("disabled");
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_display(&self, node: &Element, display: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property("display", display);
        }
    }

    fn insert_text_after(&self, node: &Element, text: &str) {
        let Ok(span) = self.document.create_element("span") else {
            return;
        };
        span.set_text_content(Some(text));
        let _ = node.insert_adjacent_element("afterend", &span);
    }

    fn click(&self, node: &Element) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            element.click();
        }
    }

    fn dispatch(&self, node: &Element, event: DomEvent) {
        if let Ok(event) = web_sys::Event::new(event.name()) {
            let _ = node.dispatch_event(&event);
        }
    }

    fn listen(&self, node: &Element, events: &[DomEvent], handler: Handler) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();

        match jquery(node) {
            Ok(wrapped) => {
                let names: Vec<&str> = events.iter().map(DomEvent::name).collect();
                wrapped.on(&names.join(" "), callback);
            }
            Err(_) => {
                for event in events {
                    let _ = node.add_event_listener_with_callback(event.name(), callback);
                }
            }
        }

        // Listeners live as long as the page
        closure.forget();
    }

    fn observe_attributes(&self, node: &Element, handler: Handler) {
        let closure = Closure::wrap(Box::new(move |_records: js_sys::Array, _observer: MutationObserver| {
            handler();
        }) as Box<dyn FnMut(_, _)>);

        match MutationObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => {
                let options = MutationObserverInit::new();
                options.set_attributes(true);
                if let Err(err) = observer.observe_with_options(node, &options) {
                    log::error!("Failed to observe attachment changes: {:?}", err);
                }
                closure.forget();
            }
            Err(err) => log::error!("MutationObserver unavailable: {:?}", err),
        }
    }

    fn show_hint(&self, group: &Element, message: &str, tone: HintTone) {
        let Ok(parent) = group.clone().dyn_into::<HtmlElement>() else {
            return;
        };
        let message = message.to_string();
        let handle = leptos::mount::mount_to(parent, move || {
            view! { <FieldHint message=message tone=tone /> }
        });
        let handle: Box<dyn Any> = Box::new(handle);
        self.hints.borrow_mut().push((group.clone(), handle));
    }

    fn remove_hint(&self, group: &Element) {
        let mounted = {
            let mut hints = self.hints.borrow_mut();
            hints
                .iter()
                .position(|(element, _)| element == group)
                .map(|index| hints.remove(index))
        };

        match mounted {
            // Dropping the handle unmounts the view
            Some(hint) => drop(hint),
            None => {
                // Hint rendered by the server
                if let Ok(Some(hint)) = group.query_selector(".form-hint") {
                    hint.remove();
                }
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
