//! Style record → utility class mapping.
//!
//! # Output
//!
//! [`map_styles_to_classes`] walks [`Property::SCHEDULE`] over the base
//! block, then over the `sm`, `md` and `lg` blocks, scoping each of their
//! classes with the breakpoint name (`sm:p-3`). All classes are joined with
//! single spaces.
//!
//! # Invalid values
//!
//! Every rule function returns `None` for a value it cannot use: unknown
//! color tokens, keywords outside the allow-list, non-numeric spacing,
//! wrong JSON types. Such properties contribute nothing. Style records come
//! from loosely-typed editor state, so nothing here ever fails.

use serde_json::{Map, Value};

use super::property::{Breakpoint, Keyword, Property, Rule};
use super::record::Styles;
use crate::tokens::TokenRegistry;

/// Maps a style record to a space-separated utility class string.
///
/// # Example
///
/// ```rust
/// use blueprint_style::{map_styles_to_classes, Styles, TokenRegistry};
/// use serde_json::json;
///
/// let styles = Styles::from_value(json!({
///     "bg": "primary",
///     "text": "surface",
///     "p": 4,
///     "rounded": "md",
///     "shadow": "md",
/// }))
/// .unwrap();
///
/// assert_eq!(
///     map_styles_to_classes(&styles, TokenRegistry::builtin()),
///     "p-4 rounded-md shadow-md text-surface bg-primary"
/// );
/// ```
pub fn map_styles_to_classes(styles: &Styles, tokens: &TokenRegistry) -> String {
    let mut classes = block_classes(styles.as_map(), tokens);

    for breakpoint in Breakpoint::ALL {
        if let Some(block) = styles.block(Some(breakpoint)) {
            classes.extend(
                block_classes(block, tokens)
                    .into_iter()
                    .map(|class| breakpoint.scope(&class)),
            );
        }
    }

    classes.join(" ")
}

/// Classes for a single block, in schedule order, without breakpoint scope.
///
/// Breakpoint keys inside `block` are ignored.
pub fn block_classes(block: &Map<String, Value>, tokens: &TokenRegistry) -> Vec<String> {
    Property::SCHEDULE
        .iter()
        .filter_map(|&property| {
            let value = block.get(property.key())?;
            let class = map_property(property, value, tokens);
            if class.is_none() {
                tracing::trace!(%property, %value, "style value dropped");
            }
            class
        })
        .collect()
}

/// Maps one property value according to its [`Rule`].
pub fn map_property(property: Property, value: &Value, tokens: &TokenRegistry) -> Option<String> {
    match property.rule() {
        Rule::Spacing(prefix) => map_spacing(prefix, value),
        Rule::Color(prefix) => map_color(prefix, value, tokens),
        Rule::Keyword(keyword) => map_keyword(keyword, value),
        Rule::Prefixed(base) => map_prefixed(base, value),
        Rule::FontSize => map_font_size(value, tokens),
        Rule::BorderWidth => map_border_width(value),
    }
}

/// Normalizes a spacing step.
///
/// Accepts a number or a numeric string. The result is the absolute value
/// truncated toward zero; non-finite, empty and non-numeric input yields
/// `None`.
pub fn spacing_step(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    if !number.is_finite() {
        return None;
    }

    // Negative steps lose their sign: negative spacing is not expressible.
    let step = number.trunc().abs();
    if step >= U64_LIMIT {
        return None;
    }
    Some(step as u64)
}

/// 2^64, the first magnitude a `u64` cannot hold.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// `{prefix}-{step}` for padding, margin, gap, indent and item gap.
pub fn map_spacing(prefix: &str, value: &Value) -> Option<String> {
    spacing_step(value).map(|step| format!("{}-{}", prefix, step))
}

/// `{prefix}-{token}` when the value names a declared color token.
pub fn map_color(prefix: &str, value: &Value, tokens: &TokenRegistry) -> Option<String> {
    let name = value.as_str()?;
    tokens
        .has_color(name)
        .then(|| format!("{}-{}", prefix, name))
}

/// Allow-listed keyword, prefixed with the keyword's class prefix.
///
/// A value that already carries the prefix passes through unchanged, so
/// `"font-bold"` and `"bold"` both map to `font-bold`.
pub fn map_keyword(keyword: Keyword, value: &Value) -> Option<String> {
    let raw = value.as_str()?;
    let prefix = keyword.prefix();

    if keyword.allows(raw) {
        return Some(format!("{}{}", prefix, raw));
    }

    match raw.strip_prefix(prefix) {
        Some(bare) if !prefix.is_empty() && keyword.allows(bare) => Some(raw.to_string()),
        _ => None,
    }
}

/// Free-form value under a fixed class base.
///
/// `"md"` becomes `{base}-md`; a value that already is the bare base or
/// starts with `{base}-` passes through verbatim.
///
/// The value part must be a class-safe segment: lowercase ASCII letters,
/// digits, `.`, `/` and inner `-` only. Anything else (empty suffixes,
/// whitespace, quotes, `:` scopes) is rejected, so one property emits at
/// most one well-formed class.
pub fn map_prefixed(base: &str, value: &Value) -> Option<String> {
    let raw = value.as_str()?;
    if raw == base {
        return Some(raw.to_string());
    }

    match raw.strip_prefix(base).and_then(|rest| rest.strip_prefix('-')) {
        Some(suffix) => is_class_segment(suffix).then(|| raw.to_string()),
        None => is_class_segment(raw).then(|| format!("{}-{}", base, raw)),
    }
}

fn is_class_segment(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '/')
        })
}

/// `rounded-{v}`; `"full"` gives `rounded-full`.
pub fn map_rounded(value: &Value) -> Option<String> {
    map_prefixed("rounded", value)
}

/// `shadow-{v}`.
pub fn map_shadow(value: &Value) -> Option<String> {
    map_prefixed("shadow", value)
}

/// `w-{v}`.
pub fn map_width(value: &Value) -> Option<String> {
    map_prefixed("w", value)
}

/// `max-w-{v}`.
pub fn map_max_width(value: &Value) -> Option<String> {
    map_prefixed("max-w", value)
}

/// `list-{v}`.
pub fn map_list_style(value: &Value) -> Option<String> {
    map_prefixed("list", value)
}

/// Font size class.
///
/// A declared font scale name resolves through the registry; anything else
/// follows the `text-` prefix rule.
pub fn map_font_size(value: &Value, tokens: &TokenRegistry) -> Option<String> {
    if let Some(class) = value.as_str().and_then(|name| tokens.font_size_class(name)) {
        return Some(class.to_string());
    }
    map_prefixed("text", value)
}

/// Border width class.
///
/// - `null` or `true`: the bare `border` class (width 1)
/// - numeric step: `border-0` for zero, `border-{step}` otherwise
/// - a string already carrying the `border` prefix: verbatim
pub fn map_border_width(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(true) => Some("border".to_string()),
        Value::Bool(false) => None,
        _ => match spacing_step(value) {
            Some(step) => Some(format!("border-{}", step)),
            None => match value.as_str() {
                Some(raw) if raw == "border" || raw.starts_with("border-") => {
                    map_prefixed("border", value)
                }
                _ => None,
            },
        },
    }
}
