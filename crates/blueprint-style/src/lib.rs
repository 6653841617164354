//! # Blueprint Style - design tokens and utility classes for page trees
//!
//! `blueprint-style` is the style core of the blueprint page builder. It
//! turns declarative style records into utility CSS class strings, backed by
//! a frozen table of design tokens.
//!
//! ## Core Concepts
//!
//! - [`TokenRegistry`]: Colors, spacing, radii, shadows, font scale,
//!   breakpoints and nav state styles, built once from a [`TokenSource`]
//! - [`Styles`]: A style record, with `sm` / `md` / `lg` responsive overrides
//! - [`map_styles_to_classes`]: Style record → class string, in a fixed
//!   property order
//! - [`merge`]: Non-destructive deep merge (existing values always win)
//! - [`PresetCatalog`]: Named style records applied through [`merge`]
//! - [`Blueprint`]: A validated tree of typed page nodes
//!
//! ## Quick Start
//!
//! ```rust
//! use blueprint_style::{PresetCatalog, Styles, TokenRegistry};
//! use serde_json::json;
//!
//! let tokens = TokenRegistry::builtin();
//!
//! let mine = Styles::from_value(json!({ "p": 2, "sm": { "p": 3 } })).unwrap();
//! let styled = PresetCatalog::builtin().apply("Contrast", &mine).unwrap();
//!
//! assert_eq!(
//!     styled.to_classes(tokens),
//!     "p-2 rounded-md shadow-md text-surface bg-primary sm:p-3"
//! );
//! ```
//!
//! ## Invalid values
//!
//! Style records come from editor state and may hold anything. The mapper
//! only emits classes for values it recognizes: a color must be a declared
//! token, a keyword must be on its property's allow-list, a spacing step
//! must be numeric. Everything else is left out of the output. Mapping and
//! merging never fail; only loading documents (tokens, presets, trees) can.

pub mod blueprint;
pub mod preset;
pub mod style;
pub mod tokens;

pub use blueprint::{Blueprint, BlueprintError, Link, Node, NodeKind, ResolvedLink, ResolvedNode};
pub use preset::{Preset, PresetCatalog, PresetError, PresetIssue};
pub use style::{
    map_border_width, map_color, map_font_size, map_keyword, map_rounded, map_shadow,
    map_spacing, map_styles_to_classes, merge, Breakpoint, Keyword, Property, Styles,
};
pub use tokens::{
    Breakpoints, NavState, NavStyle, TextDecoration, Token, TokenCategory, TokenRegistry,
    TokenSource, TokenSourceError,
};
