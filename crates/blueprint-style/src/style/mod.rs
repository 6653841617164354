//! Style records and their mapping to utility classes.
//!
//! This module provides:
//!
//! - [`Styles`]: A declarative style record with `sm`/`md`/`lg` overrides
//! - [`Property`] / [`Breakpoint`] / [`Keyword`]: The closed property set
//! - [`map_styles_to_classes`]: The record → class string pipeline
//! - [`merge`]: The non-destructive deep merge used for presets
//!
//! Both mapping and merging are pure and total: they never mutate their
//! inputs and never fail.

mod mapper;
mod merge;
mod property;
mod record;

pub use mapper::{
    block_classes, map_border_width, map_color, map_font_size, map_keyword, map_list_style,
    map_max_width, map_prefixed, map_property, map_rounded, map_shadow, map_spacing,
    map_styles_to_classes, map_width, spacing_step,
};
pub use merge::{merge, merge_maps};
pub use property::{Breakpoint, Keyword, Property, Rule};
pub use record::Styles;
