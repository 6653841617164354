//! Navigation link style bundles.

use serde::Serialize;

/// Interaction state of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavState {
    Default,
    Hover,
    Active,
}

impl NavState {
    /// All states, in declaration order.
    pub const ALL: [NavState; 3] = [NavState::Default, NavState::Hover, NavState::Active];

    pub fn as_str(self) -> &'static str {
        match self {
            NavState::Default => "default",
            NavState::Hover => "hover",
            NavState::Active => "active",
        }
    }
}

impl std::fmt::Display for NavState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text decoration keyword accepted in nav bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
    Overline,
}

impl TextDecoration {
    /// Parses a decoration keyword. Unknown keywords yield `None`.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "none" => Some(TextDecoration::None),
            "underline" => Some(TextDecoration::Underline),
            "line-through" => Some(TextDecoration::LineThrough),
            "overline" => Some(TextDecoration::Overline),
            _ => None,
        }
    }

    /// The utility class for this decoration.
    pub fn class(self) -> &'static str {
        match self {
            TextDecoration::None => "no-underline",
            TextDecoration::Underline => "underline",
            TextDecoration::LineThrough => "line-through",
            TextDecoration::Overline => "overline",
        }
    }
}

/// A resolved nav bundle.
///
/// Every field has already been checked against the registry: a color is
/// only present when it names a declared color token, a weight only when it
/// is a recognized font-weight keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavStyle {
    pub color: Option<String>,
    pub weight: Option<String>,
    pub decoration: Option<TextDecoration>,
}

impl NavStyle {
    /// Utility classes for this bundle, in color, weight, decoration order.
    pub fn classes(&self) -> Vec<String> {
        let mut classes = Vec::with_capacity(3);
        if let Some(color) = &self.color {
            classes.push(format!("text-{}", color));
        }
        if let Some(weight) = &self.weight {
            classes.push(format!("font-{}", weight));
        }
        if let Some(decoration) = self.decoration {
            classes.push(decoration.class().to_string());
        }
        classes
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.weight.is_none() && self.decoration.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_parse_known() {
        assert_eq!(TextDecoration::parse("underline"), Some(TextDecoration::Underline));
        assert_eq!(
            TextDecoration::parse("line-through"),
            Some(TextDecoration::LineThrough)
        );
    }

    #[test]
    fn test_decoration_parse_unknown() {
        assert_eq!(TextDecoration::parse("blink"), None);
        assert_eq!(TextDecoration::parse(""), None);
    }

    #[test]
    fn test_none_decoration_removes_underline() {
        assert_eq!(TextDecoration::None.class(), "no-underline");
    }

    #[test]
    fn test_nav_style_classes_full() {
        let style = NavStyle {
            color: Some("primary".into()),
            weight: Some("semibold".into()),
            decoration: Some(TextDecoration::Underline),
        };
        assert_eq!(
            style.classes(),
            vec!["text-primary", "font-semibold", "underline"]
        );
    }

    #[test]
    fn test_nav_style_classes_partial() {
        let style = NavStyle {
            color: None,
            weight: Some("bold".into()),
            decoration: None,
        };
        assert_eq!(style.classes(), vec!["font-bold"]);
        assert!(!style.is_empty());
        assert!(NavStyle::default().is_empty());
    }
}
