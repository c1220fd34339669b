//! Display filters applied by the binder.
//!
//! Every filter is a pure `Option<&str> -> String` function. `None` stands for
//! a missing value and is treated like an empty string.

use super::number_format::{format_money, is_numeric, parse_float_prefix};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub type FilterFn = Rc<dyn Fn(Option<&str>) -> String>;

const EMPTY_PLACEHOLDER: &str = "-";

/// `None`/empty → `-`, anything else unchanged
pub fn empty(value: Option<&str>) -> String {
    match value {
        None | Some("") => EMPTY_PLACEHOLDER.to_string(),
        Some(v) => v.to_string(),
    }
}

/// Same as [`empty`], numeric values get an `h` suffix
pub fn hour(value: Option<&str>) -> String {
    match value {
        None | Some("") => EMPTY_PLACEHOLDER.to_string(),
        Some(v) if is_numeric(v) => format!("{}h", v),
        Some(v) => v.to_string(),
    }
}

/// Two-decimal pt-BR amount; zero and non-numeric input render as `-`
pub fn currency(value: Option<&str>) -> String {
    let number = value.and_then(parse_float_prefix).unwrap_or(0.0);
    if number == 0.0 || number.is_nan() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    format_money(number)
}

/// Lower-case everything, then upper-case the first letter of each word
pub fn title_case(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Punctuate the first run of 13+ digits as `00.000.000/0000-00`.
/// Input is not validated; anything without such a run is returned as is.
pub fn cnpj(value: Option<&str>) -> String {
    const GROUPS: [usize; 5] = [2, 3, 3, 4, 1];
    const SEPARATORS: [&str; 4] = [".", ".", "/", "-"];
    let run_len: usize = GROUPS.iter().sum();

    let value = value.unwrap_or_default();
    let chars: Vec<char> = value.chars().collect();

    let Some(start) = (0..chars.len())
        .find(|&i| i + run_len <= chars.len() && chars[i..i + run_len].iter().all(char::is_ascii_digit))
    else {
        return value.to_string();
    };

    let mut result: String = chars[..start].iter().collect();
    let mut offset = start;
    for (i, len) in GROUPS.iter().enumerate() {
        result.extend(&chars[offset..offset + len]);
        offset += len;
        if let Some(separator) = SEPARATORS.get(i) {
            result.push_str(separator);
        }
    }
    result.extend(&chars[offset..]);
    result
}

/// Name → filter mapping used by the binder.
///
/// Built from the built-in set plus caller overrides and never mutated after
/// construction.
#[derive(Clone)]
pub struct FilterRegistry {
    filters: HashMap<String, FilterFn>,
}

impl FilterRegistry {
    /// Built-in filters: `cnpj`, `titleCase`, `empty`, `hour`, `currency`
    pub fn builtin() -> Self {
        let builtins: [(&str, fn(Option<&str>) -> String); 5] = [
            ("cnpj", cnpj),
            ("titleCase", title_case),
            ("empty", empty),
            ("hour", hour),
            ("currency", currency),
        ];

        let filters = builtins
            .into_iter()
            .map(|(name, filter)| (name.to_string(), Rc::new(filter) as FilterFn))
            .collect();

        Self { filters }
    }

    /// Built-ins plus the given overrides; an override replaces a built-in
    /// with the same name
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, FilterFn)>,
    {
        let mut registry = Self::builtin();
        registry.filters.extend(overrides);
        registry
    }

    pub fn get(&self, name: &str) -> Option<&FilterFn> {
        self.filters.get(name)
    }

    /// Apply a filter by name; `None` when no filter has that name
    pub fn apply(&self, name: &str, value: Option<&str>) -> Option<String> {
        self.get(name).map(|filter| filter(value))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(empty(None), "-");
        assert_eq!(empty(Some("")), "-");
        assert_eq!(empty(Some("x")), "x");
        assert_eq!(empty(Some(" ")), " ");
    }

    #[test]
    fn test_hour() {
        assert_eq!(hour(None), "-");
        assert_eq!(hour(Some("8")), "8h");
        assert_eq!(hour(Some("7.5")), "7.5h");
        assert_eq!(hour(Some("8h")), "8h");
        assert_eq!(hour(Some("integral")), "integral");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(Some("0")), "-");
        assert_eq!(currency(Some("")), "-");
        assert_eq!(currency(None), "-");
        assert_eq!(currency(Some("abc")), "-");
        assert_eq!(currency(Some("10")), "10,00");
        assert_eq!(currency(Some("1234567.8")), "1.234.567,80");
        assert_eq!(currency(Some("-15.5")), "-15,50");
        assert_eq!(currency(Some("0.125")), "0,13");
        assert_eq!(currency(Some("1.005")), "1,01");
        assert_eq!(currency(Some("2.675")), "2,68");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case(Some("MARIA DA SILVA")), "Maria Da Silva");
        assert_eq!(title_case(Some("joão  pedro")), "João  Pedro");
        assert_eq!(title_case(Some("")), "");
        assert_eq!(title_case(None), "");
    }

    #[test]
    fn test_cnpj() {
        assert_eq!(cnpj(Some("11222333000181")), "11.222.333/0001-81");
        assert_eq!(cnpj(Some("1122233300018")), "11.222.333/0001-8");
        assert_eq!(cnpj(Some("123")), "123");
        assert_eq!(cnpj(None), "");
    }

    #[test]
    fn test_filters_are_idempotent_on_formatted_values() {
        let formatted = cnpj(Some("11222333000181"));
        assert_eq!(cnpj(Some(&formatted)), formatted);
        assert_eq!(empty(Some(&empty(None))), "-");
        let titled = title_case(Some("ana maria"));
        assert_eq!(title_case(Some(&titled)), titled);
    }

    #[test]
    fn test_registry_builtin() {
        let registry = FilterRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec!["cnpj", "currency", "empty", "hour", "titleCase"]
        );
        assert_eq!(registry.apply("currency", Some("10")), Some("10,00".into()));
        assert_eq!(registry.apply("unknown", Some("10")), None);
    }

    #[test]
    fn test_registry_overrides() {
        let shout: FilterFn = Rc::new(|v: Option<&str>| v.unwrap_or_default().to_uppercase());
        let dash: FilterFn = Rc::new(|_: Option<&str>| "--".to_string());
        let registry = FilterRegistry::with_overrides(vec![
            ("shout".to_string(), shout),
            ("empty".to_string(), dash),
        ]);

        assert_eq!(registry.apply("shout", Some("ok")), Some("OK".into()));
        assert_eq!(registry.apply("empty", None), Some("--".into()));
        assert_eq!(registry.apply("hour", Some("2")), Some("2h".into()));
    }
}
