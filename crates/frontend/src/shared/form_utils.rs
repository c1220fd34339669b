//! Field locator and show/hide/required toggling.
//!
//! A field is hidden by putting the hide class on its nearest container.
//! Hiding clears the value and demotes a required field, leaving the
//! was-required marker so that showing it again restores the requirement.

use crate::shared::config::FormConfig;
use crate::shared::dom::{DomEvent, FormDom, Selector};
use std::cell::RefCell;
use std::rc::Rc;

const REQUIRED_ATTR: &str = "required";
const REQUIRED_YES: &str = "S";
const REQUIRED_NO: &str = "N";
const FILE_XTYPE: &str = "FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOptions {
    pub container: Selector,
    pub hide_class: String,
    pub was_required_attr: String,
    pub required_class: String,
}

impl ToggleOptions {
    /// Fields laid out as table rows (`tr`)
    pub fn rows(config: &FormConfig) -> Self {
        Self {
            container: Selector::from(config.visibility.container.as_str()),
            hide_class: config.visibility.hide_class.clone(),
            was_required_attr: config.visibility.was_required_attr.clone(),
            required_class: config.visibility.required_class.clone(),
        }
    }

    /// Fields laid out as stacked `.form-group` blocks
    pub fn form_groups(config: &FormConfig) -> Self {
        Self {
            container: Selector::from(config.form_group.container.as_str()),
            hide_class: config.form_group.hide_class.clone(),
            ..Self::rows(config)
        }
    }

    // Only row containers carry the required marker class
    fn marks_row(&self) -> bool {
        self.container == Selector::tag("tr")
    }
}

/// Vendor id of a control: `xname="inpfoo"` → `foo`
pub fn field_id<D: FormDom>(dom: &D, field: &D::Node) -> Option<String> {
    dom.attribute(field, "xname")
        .map(|xname| xname.strip_prefix("inp").unwrap_or(&xname).to_string())
}

/// All controls sharing a field id (radio groups have several)
pub fn locate<D: FormDom>(dom: &D, id: &str) -> Vec<D::Node> {
    dom.query_all(None, &Selector::xname(id))
}

pub fn is_file_field<D: FormDom>(dom: &D, field: &D::Node) -> bool {
    dom.attribute(field, "xtype").as_deref() == Some(FILE_XTYPE)
}

// Anchors the file widget renders inside `#div<id>` next to the control
fn attachment_anchors<D: FormDom>(dom: &D, field: &D::Node) -> Vec<D::Node> {
    let Some(id) = field_id(dom, field) else {
        return Vec::new();
    };
    dom.parent(field)
        .and_then(|parent| dom.query(Some(&parent), &Selector::id(&format!("div{}", id))))
        .map(|container| {
            dom.children(&container)
                .into_iter()
                .filter(|child| dom.tag_name(child) == "a")
                .collect()
        })
        .unwrap_or_default()
}

/// Link of the uploaded file, `None` when nothing is attached
pub fn attachment_path<D: FormDom>(dom: &D, field: &D::Node) -> Option<String> {
    attachment_anchors(dom, field)
        .first()
        .and_then(|link| dom.attribute(link, "href"))
}

/// Delete action of the file widget
pub fn attachment_delete<D: FormDom>(dom: &D, field: &D::Node) -> Option<D::Node> {
    attachment_anchors(dom, field).pop()
}

/// Call `callback` with the attachment path (or `None`) whenever the file
/// widget of `field` changes. Non-file controls are ignored.
///
/// Uploads show up as attribute changes on the control. Removal through the
/// delete anchor leaves the control untouched, so the anchor is wired too.
pub fn on_attachment_change<D: FormDom>(
    dom: &D,
    field: &D::Node,
    callback: Rc<dyn Fn(Option<String>)>,
) {
    if !is_file_field(dom, field) {
        log::debug!("on_attachment_change: {:?} is not a file field", field);
        return;
    }

    let wired: Rc<RefCell<Option<D::Node>>> = Rc::new(RefCell::new(None));
    wire_attachment_delete(dom, field, &wired, &callback);

    let observed = dom.clone();
    let node = field.clone();
    dom.observe_attributes(
        field,
        Rc::new(move || {
            wire_attachment_delete(&observed, &node, &wired, &callback);
            callback(attachment_path(&observed, &node));
        }),
    );
}

// Each delete anchor is listened to once
fn wire_attachment_delete<D: FormDom>(
    dom: &D,
    field: &D::Node,
    wired: &Rc<RefCell<Option<D::Node>>>,
    callback: &Rc<dyn Fn(Option<String>)>,
) {
    let Some(delete) = attachment_delete(dom, field) else {
        return;
    };
    if wired.borrow().as_ref() == Some(&delete) {
        return;
    }

    let removed = callback.clone();
    dom.listen(&delete, &[DomEvent::Click], Rc::new(move || removed(None)));
    *wired.borrow_mut() = Some(delete);
}

/// Show/hide/required toggling bound to one container convention
#[derive(Clone)]
pub struct FieldToggler<D: FormDom> {
    dom: D,
    options: ToggleOptions,
}

impl<D: FormDom> FieldToggler<D> {
    pub fn new(dom: D, options: ToggleOptions) -> Self {
        Self { dom, options }
    }

    pub fn options(&self) -> &ToggleOptions {
        &self.options
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn locate(&self, id: &str) -> Vec<D::Node> {
        locate(&self.dom, id)
    }

    fn container(&self, fields: &[D::Node]) -> Option<D::Node> {
        let container = fields
            .first()
            .and_then(|field| self.dom.closest(field, &self.options.container));
        if container.is_none() {
            log::debug!("No '{}' container for {:?}", self.options.container, fields.first());
        }
        container
    }

    /// Required now, or demoted by a previous hide
    pub fn is_required(&self, fields: &[D::Node]) -> bool {
        fields.iter().any(|field| {
            self.dom
                .attribute(field, &self.options.was_required_attr)
                .is_some()
                || self.dom.attribute(field, REQUIRED_ATTR).as_deref() == Some(REQUIRED_YES)
        })
    }

    pub fn show(&self, fields: &[D::Node]) {
        if fields.is_empty() {
            log::warn!("show: no fields to show");
            return;
        }

        let is_required = self.is_required(fields);
        if let Some(container) = self.container(fields) {
            self.dom.remove_class(&container, &self.options.hide_class);
        }

        if is_required {
            self.add_required(fields);
        }
    }

    pub fn hide(&self, fields: &[D::Node]) {
        if fields.is_empty() {
            log::warn!("hide: no fields to hide");
            return;
        }

        let is_required = self.is_required(fields);
        if let Some(container) = self.container(fields) {
            self.dom.add_class(&container, &self.options.hide_class);
        }

        self.clear_values(fields);

        if is_required {
            self.remove_required(fields);
        }
    }

    pub fn show_id(&self, id: &str) {
        let fields = self.locate(id);
        if fields.is_empty() {
            log::warn!("show: field '{}' not found", id);
        }
        self.show(&fields);
    }

    pub fn hide_id(&self, id: &str) {
        let fields = self.locate(id);
        if fields.is_empty() {
            log::warn!("hide: field '{}' not found", id);
        }
        self.hide(&fields);
    }

    pub fn set_visible(&self, fields: &[D::Node], visible: bool) {
        if visible {
            self.show(fields);
        } else {
            self.hide(fields);
        }
    }

    pub fn add_required(&self, fields: &[D::Node]) {
        for field in fields {
            self.dom.set_attribute(field, REQUIRED_ATTR, REQUIRED_YES);
            self.dom
                .remove_attribute(field, &self.options.was_required_attr);
        }

        if self.options.marks_row() {
            if let Some(row) = self.container(fields) {
                self.dom.add_class(&row, &self.options.required_class);
            }
        }
    }

    pub fn remove_required(&self, fields: &[D::Node]) {
        for field in fields {
            self.dom.set_attribute(field, REQUIRED_ATTR, REQUIRED_NO);
            self.dom
                .set_attribute(field, &self.options.was_required_attr, "true");
        }

        if self.options.marks_row() {
            if let Some(row) = self.container(fields) {
                self.dom.remove_class(&row, &self.options.required_class);
            }
        }
    }

    /// Reset values (file widgets through their delete action) and notify
    /// listeners with a `change` event
    pub fn clear_values(&self, fields: &[D::Node]) {
        for field in fields {
            if self.dom.control_kind(field).holds_value() {
                if is_file_field(&self.dom, field) {
                    if let Some(delete) = attachment_delete(&self.dom, field) {
                        self.dom.click(&delete);
                    }
                } else {
                    self.dom.set_value(field, "");
                }
            } else {
                self.dom.set_checked(field, false);
            }

            self.dom.dispatch(field, DomEvent::Change);
        }
    }

    /// Show every control of a table, then the table itself
    pub fn show_table(&self, table: &D::Node) {
        for field in self.dom.query_all(Some(table), &Selector::any().attr("xname")) {
            self.show(std::slice::from_ref(&field));
        }
        self.dom.remove_class(table, &self.options.hide_class);
    }

    /// Hide (and clear) every control of a table, then the table itself
    pub fn hide_table(&self, table: &D::Node) {
        for field in self.dom.query_all(Some(table), &Selector::any().attr("xname")) {
            self.hide(std::slice::from_ref(&field));
        }
        self.dom.add_class(table, &self.options.hide_class);
    }
}
