//! Named style presets.
//!
//! A preset is a style record applied to an existing record with the
//! non-destructive [`merge`](crate::merge): it fills gaps and never
//! overrides what the user already chose.

mod catalog;
mod error;

pub use catalog::{Preset, PresetCatalog, PresetIssue};
pub use error::PresetError;
