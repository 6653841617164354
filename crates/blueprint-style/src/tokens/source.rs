//! Declarative token source document.
//!
//! A token source is the raw, author-facing form of the design tokens. It is
//! read from YAML (JSON documents parse too, being valid YAML) and then
//! turned into a [`TokenRegistry`](super::TokenRegistry), which derives the
//! pixel and class-name values.
//!
//! # Section handling
//!
//! | Section | Missing | Malformed |
//! |---------|---------|-----------|
//! | `color`, `font`, `spacing`, `radius`, `shadow` | empty table | error |
//! | `breakpoints` | defaults | defaults |
//! | `nav` | defaults | defaults, per state |

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::error::TokenSourceError;
use super::registry::Breakpoints;

/// Raw font section: scale name → pixel size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSource {
    #[serde(default)]
    pub scale: BTreeMap<String, u32>,
}

/// Raw spacing section: the list of supported steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingSource {
    #[serde(default)]
    pub steps: Vec<u32>,
}

/// One raw nav bundle. Every field is an unvalidated reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavStyleSource {
    pub color: Option<String>,
    pub weight: Option<String>,
    pub decoration: Option<String>,
}

impl NavStyleSource {
    fn new(color: &str, weight: &str, decoration: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            weight: Some(weight.to_string()),
            decoration: Some(decoration.to_string()),
        }
    }
}

/// Raw nav section. A missing state falls back to its default bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSource {
    #[serde(default = "NavSource::default_state")]
    pub default: NavStyleSource,
    #[serde(default = "NavSource::hover_state")]
    pub hover: NavStyleSource,
    #[serde(default = "NavSource::active_state")]
    pub active: NavStyleSource,
}

impl NavSource {
    fn default_state() -> NavStyleSource {
        NavStyleSource::new("neutral", "normal", "none")
    }

    fn hover_state() -> NavStyleSource {
        NavStyleSource::new("primary", "medium", "underline")
    }

    fn active_state() -> NavStyleSource {
        NavStyleSource::new("primary", "semibold", "none")
    }
}

impl Default for NavSource {
    fn default() -> Self {
        Self {
            default: Self::default_state(),
            hover: Self::hover_state(),
            active: Self::active_state(),
        }
    }
}

/// The full declarative token document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSource {
    pub color: BTreeMap<String, String>,
    pub font: FontSource,
    pub spacing: SpacingSource,
    pub radius: BTreeMap<String, u32>,
    pub shadow: BTreeMap<String, String>,
    pub breakpoints: Breakpoints,
    pub nav: NavSource,
}

impl TokenSource {
    /// Parses a token document.
    ///
    /// Core sections must have the right shape when present. `breakpoints`
    /// and `nav` fall back to their defaults when missing or malformed;
    /// breakpoints that are not strictly ascending count as malformed.
    pub fn from_yaml(input: &str) -> Result<Self, TokenSourceError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: Value = serde_yaml::from_str(input).map_err(|e| TokenSourceError::Parse {
            message: e.to_string(),
        })?;

        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            other => {
                return Err(TokenSourceError::Parse {
                    message: format!("expected a mapping at the top level, found {}", kind(&other)),
                })
            }
        };

        let breakpoints = optional_section::<Breakpoints>(&mapping, "breakpoints")
            .filter(|bp| {
                let ascending = bp.is_ascending();
                if !ascending {
                    tracing::debug!(?bp, "breakpoints are not ascending; using defaults");
                }
                ascending
            })
            .unwrap_or_default();

        Ok(Self {
            color: core_section(&mapping, "color")?,
            font: core_section(&mapping, "font")?,
            spacing: core_section(&mapping, "spacing")?,
            radius: core_section(&mapping, "radius")?,
            shadow: core_section(&mapping, "shadow")?,
            breakpoints,
            nav: nav_section(&mapping),
        })
    }

    /// Reads and parses a token document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TokenSourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TokenSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}

fn core_section<T: DeserializeOwned + Default>(
    mapping: &Mapping,
    name: &str,
) -> Result<T, TokenSourceError> {
    match mapping.get(name) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_yaml::from_value(value.clone()).map_err(|e| TokenSourceError::Section {
                section: name.to_string(),
                message: e.to_string(),
            })
        }
    }
}

fn optional_section<T: DeserializeOwned>(mapping: &Mapping, name: &str) -> Option<T> {
    let value = mapping.get(name)?;
    match serde_yaml::from_value(value.clone()) {
        Ok(section) => Some(section),
        Err(e) => {
            tracing::debug!(section = name, error = %e, "malformed optional section; using defaults");
            None
        }
    }
}

/// Each nav state is read on its own, so one bad state keeps the others.
fn nav_section(mapping: &Mapping) -> NavSource {
    let nav = match mapping.get("nav") {
        None => return NavSource::default(),
        Some(Value::Mapping(nav)) => nav,
        Some(other) => {
            tracing::debug!(found = kind(other), "nav section is not a mapping; using defaults");
            return NavSource::default();
        }
    };

    NavSource {
        default: optional_section(nav, "default").unwrap_or_else(NavSource::default_state),
        hover: optional_section(nav, "hover").unwrap_or_else(NavSource::hover_state),
        active: optional_section(nav, "active").unwrap_or_else(NavSource::active_state),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let source = TokenSource::from_yaml("").unwrap();
        assert!(source.color.is_empty());
        assert_eq!(source.breakpoints, Breakpoints::default());
        assert_eq!(source.nav, NavSource::default());
    }

    #[test]
    fn test_core_sections_parse() {
        let source = TokenSource::from_yaml(
            r##"
color:
  primary: "#000"
spacing:
  steps: [0, 1, 2]
radius:
  md: 6
"##,
        )
        .unwrap();
        assert_eq!(source.color.get("primary").map(String::as_str), Some("#000"));
        assert_eq!(source.spacing.steps, vec![0, 1, 2]);
        assert_eq!(source.radius.get("md"), Some(&6));
    }

    #[test]
    fn test_json_document_parses() {
        let source = TokenSource::from_yaml(r##"{"color": {"primary": "#111"}}"##).unwrap();
        assert!(source.color.contains_key("primary"));
    }

    #[test]
    fn test_malformed_core_section_is_error() {
        let result = TokenSource::from_yaml("color: [red, green]");
        assert!(matches!(
            result,
            Err(TokenSourceError::Section { ref section, .. }) if section == "color"
        ));
    }

    #[test]
    fn test_non_mapping_document_is_error() {
        let result = TokenSource::from_yaml("- just\n- a list\n");
        assert!(matches!(result, Err(TokenSourceError::Parse { .. })));
    }

    #[test]
    fn test_malformed_nav_falls_back() {
        let source = TokenSource::from_yaml("nav: not-a-mapping").unwrap();
        assert_eq!(source.nav, NavSource::default());
    }

    #[test]
    fn test_partial_nav_fills_missing_states() {
        let source = TokenSource::from_yaml(
            r#"
nav:
  hover:
    color: accent
"#,
        )
        .unwrap();
        assert_eq!(source.nav.hover.color.as_deref(), Some("accent"));
        assert_eq!(source.nav.hover.weight, None);
        assert_eq!(source.nav.default, NavSource::default().default);
        assert_eq!(source.nav.active, NavSource::default().active);
    }

    #[test]
    fn test_malformed_nav_state_keeps_other_states() {
        let source = TokenSource::from_yaml(
            r#"
nav:
  default: { color: brand, weight: bold }
  hover: 5
"#,
        )
        .unwrap();
        assert_eq!(source.nav.default.color.as_deref(), Some("brand"));
        assert_eq!(source.nav.default.weight.as_deref(), Some("bold"));
        assert_eq!(source.nav.hover, NavSource::default().hover);
        assert_eq!(source.nav.active, NavSource::default().active);
    }

    #[test]
    fn test_descending_breakpoints_fall_back() {
        let source = TokenSource::from_yaml("breakpoints: { sm: 1024, md: 768, lg: 640 }").unwrap();
        assert_eq!(source.breakpoints, Breakpoints::default());
    }

    #[test]
    fn test_custom_breakpoints_kept() {
        let source = TokenSource::from_yaml("breakpoints: { sm: 480, md: 800, lg: 1200 }").unwrap();
        assert_eq!(source.breakpoints.sm, 480);
        assert_eq!(source.breakpoints.lg, 1200);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = TokenSource::from_path("/definitely/not/here/tokens.yaml");
        assert!(matches!(result, Err(TokenSourceError::Read { .. })));
    }
}
