//! One-way display binding.
//!
//! Every element carrying `data-bind="<field id>"` mirrors the value of the
//! `[xname="inp<field id>"]` control(s), optionally passed through the filter
//! named by `data-filter`.

use crate::shared::component_error::ComponentError;
use crate::shared::config::{BinderConfig, FormConfig};
use crate::shared::dom::{ControlKind, DomEvent, FormDom, Selector};
use crate::shared::form_utils::locate;
use crate::shared::page_info::require_field;
use contracts::shared::filters::FilterRegistry;
use std::rc::Rc;

const COMPONENT: &str = "Binder";

const MASKED_EVENTS: [DomEvent; 4] = [
    DomEvent::Blur,
    DomEvent::Change,
    DomEvent::KeyUp,
    DomEvent::KeyDown,
];
const PLAIN_EVENTS: [DomEvent; 2] = [DomEvent::Change, DomEvent::KeyUp];

fn is_supported(kind: &ControlKind) -> bool {
    matches!(
        kind,
        ControlKind::Text
            | ControlKind::TextArea
            | ControlKind::SelectOne
            | ControlKind::Hidden
            | ControlKind::Radio
    )
}

#[derive(Debug, Clone)]
struct Binding<N> {
    element: N,
    field_id: String,
    filter: Option<String>,
}

#[derive(Clone)]
pub struct Binder<D: FormDom> {
    dom: D,
    filters: Rc<FilterRegistry>,
    bindings: Vec<Binding<D::Node>>,
}

impl<D: FormDom> Binder<D> {
    /// Bind every `[data-bind]` element of the page.
    ///
    /// Fails on the first element whose field cannot be found.
    pub fn mount(
        dom: D,
        config: &FormConfig,
        filters: Rc<FilterRegistry>,
    ) -> Result<Self, ComponentError> {
        let BinderConfig {
            bind_attr,
            filter_attr,
            mask_attr,
        } = &config.binder;

        let mut binder = Self {
            dom: dom.clone(),
            filters,
            bindings: Vec::new(),
        };

        for element in dom.query_all(None, &Selector::any().attr(bind_attr)) {
            let binding = Binding {
                field_id: dom.attribute(&element, bind_attr).unwrap_or_default(),
                filter: dom.attribute(&element, filter_attr),
                element,
            };
            let fields = require_field(&dom, &config.page, COMPONENT, &binding.field_id)?;

            let masked = fields
                .first()
                .and_then(|field| dom.attribute(field, mask_attr))
                .map_or(false, |mask| !mask.is_empty());
            let events: &[DomEvent] = if masked { &MASKED_EVENTS } else { &PLAIN_EVENTS };

            for field in fields {
                if !is_supported(&dom.control_kind(&field)) {
                    continue;
                }

                render(&dom, &binder.filters, &binding, &field);

                let listener_dom = dom.clone();
                let filters = binder.filters.clone();
                let target = binding.clone();
                let source = field.clone();
                dom.listen(
                    &field,
                    events,
                    Rc::new(move || render(&listener_dom, &filters, &target, &source)),
                );
            }

            binder.bindings.push(binding);
        }

        log::debug!("Binder mounted {} binding(s)", binder.bindings.len());
        Ok(binder)
    }

    /// Bound display elements, in document order
    pub fn elements(&self) -> Vec<D::Node> {
        self.bindings.iter().map(|b| b.element.clone()).collect()
    }

    /// Recompute one bound element; unknown elements are ignored
    pub fn update(&self, element: &D::Node) {
        if let Some(binding) = self.bindings.iter().find(|b| &b.element == element) {
            self.refresh(binding);
        }
    }

    pub fn update_all(&self) {
        for binding in &self.bindings {
            self.refresh(binding);
        }
    }

    fn refresh(&self, binding: &Binding<D::Node>) {
        for field in locate(&self.dom, &binding.field_id) {
            if is_supported(&self.dom.control_kind(&field)) {
                render(&self.dom, &self.filters, binding, &field);
            }
        }
    }
}
fn render<D: FormDom>(
    dom: &D,
    filters: &FilterRegistry,
    binding: &Binding<D::Node>,
    field: &D::Node,
) {
    let kind = dom.control_kind(field);
    if kind == ControlKind::Radio && !dom.is_checked(field) {
        return;
    }

    let raw = dom.value(field);
    let filtered = binding
        .filter
        .as_deref()
        .and_then(|name| filters.apply(name, Some(&raw)));

    let text = match filtered {
        Some(text) => text,
        None if kind == ControlKind::Hidden => {
            rendered_text(dom, &binding.field_id).unwrap_or(raw)
        }
        None => raw,
    };

    dom.set_text(&binding.element, &text);
}

// Hidden controls (readonly stages) come with a pre-rendered display div
fn rendered_text<D: FormDom>(dom: &D, field_id: &str) -> Option<String> {
    let selector = Selector::tag("div").attr_eq("xid", &format!("div{}", field_id));
    dom.query(None, &selector).map(|div| dom.text(&div))
}
