//! The preset catalog.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::PresetError;
use crate::style::{map_property, Breakpoint, Property, Styles};
use crate::tokens::TokenRegistry;

const BUNDLED_PRESETS: &str = include_str!("presets.yaml");

static BUILTIN: Lazy<PresetCatalog> = Lazy::new(|| match PresetCatalog::from_yaml(BUNDLED_PRESETS) {
    Ok(catalog) => catalog,
    Err(e) => {
        tracing::error!(error = %e, "bundled preset catalog failed to load");
        PresetCatalog::new()
    }
});

/// A named style record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub styles: Styles,
}

/// A preset property that would contribute no class.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetIssue {
    pub preset: String,
    /// Property path, e.g. `bg` or `sm.bg`.
    pub property: String,
    pub value: Value,
}

impl std::fmt::Display for PresetIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "preset '{}': {} = {} is not a recognized value",
            self.preset, self.property, self.value
        )
    }
}

/// An ordered collection of named presets.
///
/// # Example
///
/// ```rust
/// use blueprint_style::{PresetCatalog, Styles};
///
/// let catalog = PresetCatalog::new()
///     .add("Card", Styles::new().with("p", 4).with("rounded", "md"))
///     .add("Flat", Styles::new().with("shadow", "none"));
///
/// let mine = Styles::new().with("p", 2);
/// let applied = catalog.apply("Card", &mine).unwrap();
/// assert_eq!(applied, Styles::new().with("p", 2).with("rounded", "md"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preset, returning the updated catalog for chaining.
    ///
    /// A preset with the same name is replaced in place.
    pub fn add(mut self, name: &str, styles: Styles) -> Self {
        match self.presets.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.styles = styles,
            None => self.presets.push(Preset {
                name: name.to_string(),
                styles,
            }),
        }
        self
    }

    /// Parses a catalog from a YAML (or JSON) list of `{ name, styles }`.
    pub fn from_yaml(input: &str) -> Result<Self, PresetError> {
        let presets: Vec<Preset> = serde_yaml::from_str(input).map_err(|e| PresetError::Parse {
            message: e.to_string(),
        })?;

        let mut seen = HashSet::new();
        for preset in &presets {
            if !seen.insert(preset.name.as_str()) {
                return Err(PresetError::DuplicateName {
                    name: preset.name.clone(),
                });
            }
        }

        tracing::debug!(count = presets.len(), "preset catalog loaded");
        Ok(Self { presets })
    }

    /// Reads a catalog from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PresetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// The bundled catalog ("Minimal", "Contrast", "Soft").
    pub fn builtin() -> &'static PresetCatalog {
        &BUILTIN
    }

    pub fn get(&self, name: &str) -> Option<&Styles> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.styles)
    }

    /// Preset names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Applies a preset to `existing`, filling only the gaps.
    ///
    /// Returns `None` if no preset has that name.
    pub fn apply(&self, name: &str, existing: &Styles) -> Option<Styles> {
        self.get(name).map(|preset| existing.merge_missing(preset))
    }

    /// Lists preset properties that would be dropped by the mapper.
    ///
    /// Mapping still works with such presets; this is for catching typos in
    /// catalog files early.
    pub fn validate(&self, tokens: &TokenRegistry) -> Vec<PresetIssue> {
        let mut issues = Vec::new();

        for preset in &self.presets {
            check_block(&preset.name, "", &preset.styles, tokens, &mut issues);
            for breakpoint in Breakpoint::ALL {
                if let Some(block) = preset.styles.breakpoint(breakpoint) {
                    let scope = format!("{}.", breakpoint.key());
                    check_block(&preset.name, &scope, &block, tokens, &mut issues);
                }
            }
        }

        issues
    }
}

fn check_block(
    preset: &str,
    scope: &str,
    block: &Styles,
    tokens: &TokenRegistry,
    issues: &mut Vec<PresetIssue>,
) {
    for property in Property::SCHEDULE {
        if let Some(value) = block.property(property) {
            if map_property(property, value, tokens).is_none() {
                issues.push(PresetIssue {
                    preset: preset.to_string(),
                    property: format!("{}{}", scope, property.key()),
                    value: value.clone(),
                });
            }
        }
    }
}
