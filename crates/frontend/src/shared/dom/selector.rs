//! Compound CSS selectors (`tag#id.class[attr^=value]`) understood by every
//! [`FormDom`](super::FormDom) adapter.
//!
//! Descendant/child combinators are expressed by chaining queries instead.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
    // Complex CSS passed through to the browser untouched
    raw: Option<String>,
}

/// What a selector needs to know about a node to match it
pub trait SelectorTarget {
    fn tag_name(&self) -> &str;
    fn attr(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

impl Selector {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn tag(tag: &str) -> Self {
        Self::any().and_tag(tag)
    }

    pub fn id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn class(class: &str) -> Self {
        Self::any().and_class(class)
    }

    /// Vendor convention: every data control carries `xname="inp<id>"`
    pub fn xname(field_id: &str) -> Self {
        Self::any().attr_eq("xname", &format!("inp{}", field_id))
    }

    pub fn and_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_ascii_lowercase());
        self
    }

    pub fn and_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str) -> Self {
        self.attrs.push(AttrMatch::Present(name.to_string()));
        self
    }

    pub fn attr_eq(mut self, name: &str, value: &str) -> Self {
        self.attrs
            .push(AttrMatch::Equals(name.to_string(), value.to_string()));
        self
    }

    pub fn attr_prefix(mut self, name: &str, prefix: &str) -> Self {
        self.attrs
            .push(AttrMatch::Prefix(name.to_string(), prefix.to_string()));
        self
    }

    // CSS the browser evaluates as is; never matches in `matches`
    fn raw(css: &str) -> Self {
        Self {
            raw: Some(css.to_string()),
            ..Self::default()
        }
    }

    pub fn matches<T: SelectorTarget + ?Sized>(&self, target: &T) -> bool {
        if self.raw.is_some() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !target.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if target.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| target.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|m| match m {
            AttrMatch::Present(name) => target.attr(name).is_some(),
            AttrMatch::Equals(name, value) => target.attr(name) == Some(value.as_str()),
            AttrMatch::Prefix(name, prefix) => target
                .attr(name)
                .map(|v| v.starts_with(prefix.as_str()))
                .unwrap_or(false),
        })
    }

    pub fn to_css(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut css = self.tag.clone().unwrap_or_default();
        if let Some(id) = &self.id {
            css.push('#');
            css.push_str(id);
        }
        for class in &self.classes {
            css.push('.');
            css.push_str(class);
        }
        for m in &self.attrs {
            match m {
                AttrMatch::Present(name) => css.push_str(&format!("[{}]", name)),
                AttrMatch::Equals(name, value) => {
                    css.push_str(&format!("[{}=\"{}\"]", name, escape(value)))
                }
                AttrMatch::Prefix(name, value) => {
                    css.push_str(&format!("[{}^=\"{}\"]", name, escape(value)))
                }
            }
        }
        if css.is_empty() {
            css.push('*');
        }
        css
    }

    /// Strict parse of a single compound selector such as `tr`, `.form-group`,
    /// `#btnFinish`, `button.btn` or `[data-analysis]`
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err("Empty selector".to_string());
        }

        let chars: Vec<char> = input.chars().collect();
        let mut selector = Selector::any();
        let mut i = 0;

        let tag = read_ident(&chars, &mut i);
        if !tag.is_empty() {
            selector = selector.and_tag(&tag);
        }

        while i < chars.len() {
            match chars[i] {
                '#' => {
                    i += 1;
                    let id = read_ident(&chars, &mut i);
                    if id.is_empty() {
                        return Err(format!("Missing id in selector '{}'", input));
                    }
                    selector.id = Some(id);
                }
                '.' => {
                    i += 1;
                    let class = read_ident(&chars, &mut i);
                    if class.is_empty() {
                        return Err(format!("Missing class in selector '{}'", input));
                    }
                    selector = selector.and_class(&class);
                }
                '[' => {
                    let close = chars[i..]
                        .iter()
                        .position(|c| *c == ']')
                        .ok_or_else(|| format!("Unclosed attribute in selector '{}'", input))?;
                    let body: String = chars[i + 1..i + close].iter().collect();
                    selector.attrs.push(parse_attr(&body)?);
                    i += close + 1;
                }
                other => {
                    return Err(format!(
                        "Unsupported character '{}' in selector '{}'",
                        other, input
                    ))
                }
            }
        }

        Ok(selector)
    }
}

impl From<&str> for Selector {
    /// Lenient conversion: anything [`Selector::parse`] rejects is kept as raw CSS
    fn from(css: &str) -> Self {
        Selector::parse(css).unwrap_or_else(|_| Selector::raw(css))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn read_ident(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && !matches!(chars[*i], '#' | '.' | '[' | ']' | ' ' | '>' | ',') {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

fn parse_attr(body: &str) -> Result<AttrMatch, String> {
    let unquote = |v: &str| v.trim().trim_matches('"').trim_matches('\'').to_string();

    if let Some((name, value)) = body.split_once("^=") {
        return Ok(AttrMatch::Prefix(name.trim().to_string(), unquote(value)));
    }
    if let Some((name, value)) = body.split_once('=') {
        return Ok(AttrMatch::Equals(name.trim().to_string(), unquote(value)));
    }
    let name = body.trim();
    if name.is_empty() {
        return Err("Empty attribute selector".to_string());
    }
    Ok(AttrMatch::Present(name.to_string()))
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
