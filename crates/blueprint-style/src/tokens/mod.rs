//! Design token registry.
//!
//! This module provides:
//!
//! - [`TokenRegistry`]: The frozen lookup table of colors, spacing steps,
//!   radii, shadows, font scale, breakpoints and nav state styles
//! - [`TokenSource`]: The declarative document a registry is derived from
//! - [`NavState`] / [`NavStyle`]: Style bundles for navigation links
//! - [`TokenSourceError`]: Errors from loading a token source
//!
//! A registry is built once and passed by reference to everything that
//! needs it. [`TokenRegistry::builtin`] exposes the registry derived from
//! the bundled token document.

mod error;
mod nav;
mod registry;
mod source;

pub use error::TokenSourceError;
pub use nav::{NavState, NavStyle, TextDecoration};
pub use registry::{Breakpoints, Token, TokenCategory, TokenRegistry};
pub use source::{FontSource, NavSource, NavStyleSource, SpacingSource, TokenSource};
