//! Page-level configuration.
//!
//! Defaults are compiled in. A page can override any subset with a
//! `<script type="application/toml" id="form-glue-config">` element.

use contracts::usecases::u501_cpf_screening::BLOCKLIST_DATASOURCE_URL;
use serde::Deserialize;

/// Id of the optional override element
pub const CONFIG_ELEMENT_ID: &str = "form-glue-config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FormConfig {
    pub visibility: VisibilityConfig,
    pub form_group: FormGroupConfig,
    pub binder: BinderConfig,
    pub page: PageConfig,
    pub screening: ScreeningConfig,
}

/// Show/hide defaults for table rows
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VisibilityConfig {
    pub container: String,
    pub hide_class: String,
    pub was_required_attr: String,
    pub required_class: String,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            container: "tr".to_string(),
            hide_class: "u-hidden".to_string(),
            was_required_attr: "data-was-required".to_string(),
            required_class: "execute-required".to_string(),
        }
    }
}

/// Show/hide defaults for stacked form groups
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormGroupConfig {
    pub container: String,
    pub hide_class: String,
    pub input_wrapper: String,
    pub loading_class: String,
}

impl Default for FormGroupConfig {
    fn default() -> Self {
        Self {
            container: ".form-group".to_string(),
            hide_class: "u-hidden".to_string(),
            input_wrapper: ".form-input".to_string(),
            loading_class: "-loading".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BinderConfig {
    pub bind_attr: String,
    pub filter_attr: String,
    pub mask_attr: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            bind_attr: "data-bind".to_string(),
            filter_attr: "data-filter".to_string(),
            mask_attr: "mask".to_string(),
        }
    }
}

/// Element ids the renderer puts on every task page
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub alias_input: String,
    pub codflow_execute_input: String,
    pub codflow_input: String,
    pub controllers: String,
    pub controller_buttons: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            alias_input: "inpDsFlowElementAlias".to_string(),
            codflow_execute_input: "inpCodFlowExecute".to_string(),
            codflow_input: "inpCodFlow".to_string(),
            controllers: "#controllers".to_string(),
            controller_buttons: "button.btn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScreeningConfig {
    pub url: String,
    /// Ignore blocklist responses that arrive after a newer lookup started
    pub discard_stale: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            url: BLOCKLIST_DATASOURCE_URL.to_string(),
            discard_stale: true,
        }
    }
}

impl FormConfig {
    pub fn from_toml(source: &str) -> Result<Self, String> {
        toml::from_str(source).map_err(|e| format!("Invalid form configuration: {}", e))
    }

    /// Parse the page override, falling back to the defaults
    pub fn load(source: Option<&str>) -> Self {
        match source.map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                log::debug!("Using default form configuration");
                Self::default()
            }
            Some(source) => match Self::from_toml(source) {
                Ok(config) => {
                    log::info!("Loaded form configuration override");
                    config
                }
                Err(err) => {
                    log::warn!("{}; using defaults", err);
                    Self::default()
                }
            },
        }
    }
}
