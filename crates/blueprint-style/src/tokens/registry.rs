//! The frozen token lookup table.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::TokenSourceError;
use super::nav::{NavState, NavStyle, TextDecoration};
use super::source::{NavStyleSource, TokenSource};
use crate::style::Keyword;

const BUNDLED_TOKENS: &str = include_str!("default_tokens.yaml");

static BUILTIN: Lazy<TokenRegistry> = Lazy::new(|| match TokenRegistry::from_yaml(BUNDLED_TOKENS) {
    Ok(registry) => registry,
    Err(e) => {
        tracing::error!(error = %e, "bundled token document failed to load");
        TokenRegistry::from_source(&TokenSource::default())
    }
});

/// Named minimum viewport widths, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
}

impl Breakpoints {
    pub fn is_ascending(&self) -> bool {
        self.sm < self.md && self.md < self.lg
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 640,
            md: 768,
            lg: 1024,
        }
    }
}

/// Token table selector for [`TokenRegistry::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Color,
    Spacing,
    Radius,
    Shadow,
    FontSize,
    Breakpoint,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Radius,
        TokenCategory::Shadow,
        TokenCategory::FontSize,
        TokenCategory::Breakpoint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadow => "shadow",
            TokenCategory::FontSize => "font-size",
            TokenCategory::Breakpoint => "breakpoint",
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" | "colors" => Ok(TokenCategory::Color),
            "spacing" => Ok(TokenCategory::Spacing),
            "radius" => Ok(TokenCategory::Radius),
            "shadow" => Ok(TokenCategory::Shadow),
            "font-size" | "fontSize" => Ok(TokenCategory::FontSize),
            "breakpoint" | "breakpoints" => Ok(TokenCategory::Breakpoint),
            other => Err(format!(
                "unknown token category '{}' (expected one of: {})",
                other,
                TokenCategory::ALL.map(TokenCategory::as_str).join(", ")
            )),
        }
    }
}

/// A token value as stored in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A CSS value or class-name string.
    Text(&'a str),
    /// A pixel magnitude (spacing steps, breakpoints).
    Pixels(u32),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Text(text) => f.write_str(text),
            Token::Pixels(px) => write!(f, "{}px", px),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NavStyles {
    default: NavStyle,
    hover: NavStyle,
    active: NavStyle,
}

/// Read-only table of design tokens.
///
/// Built once from a [`TokenSource`]; there is no mutation API. Lookups
/// never fail, absence simply means "not a recognized token" and callers
/// omit whatever referenced it.
///
/// # Example
///
/// ```rust
/// use blueprint_style::{Token, TokenCategory, TokenRegistry};
///
/// let tokens = TokenRegistry::builtin();
/// assert!(tokens.has_color("primary"));
/// assert_eq!(tokens.get(TokenCategory::Spacing, "4"), Some(Token::Pixels(16)));
/// assert_eq!(tokens.get(TokenCategory::Color, "not-a-color"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRegistry {
    colors: BTreeMap<String, String>,
    spacing: BTreeMap<String, u32>,
    radius: BTreeMap<String, String>,
    shadow: BTreeMap<String, String>,
    font_size: BTreeMap<String, String>,
    breakpoints: Breakpoints,
    nav: NavStyles,
}

impl TokenRegistry {
    /// Derives a registry from a token source.
    pub fn from_source(source: &TokenSource) -> Self {
        let spacing = source
            .spacing
            .steps
            .iter()
            .map(|step| (step.to_string(), step.saturating_mul(4)))
            .collect();

        let radius = source
            .radius
            .iter()
            .map(|(name, px)| (name.clone(), format!("{}px", px)))
            .collect();

        let font_size = source
            .font
            .scale
            .keys()
            .map(|name| (name.clone(), format!("text-{}", name)))
            .collect();

        let mut registry = Self {
            colors: source.color.clone(),
            spacing,
            radius,
            shadow: source.shadow.clone(),
            font_size,
            breakpoints: source.breakpoints,
            nav: NavStyles::default(),
        };

        registry.nav = NavStyles {
            default: registry.resolve_nav(NavState::Default, &source.nav.default),
            hover: registry.resolve_nav(NavState::Hover, &source.nav.hover),
            active: registry.resolve_nav(NavState::Active, &source.nav.active),
        };

        tracing::info!(
            colors = registry.colors.len(),
            spacing = registry.spacing.len(),
            radius = registry.radius.len(),
            shadow = registry.shadow.len(),
            font_size = registry.font_size.len(),
            "token registry built"
        );

        registry
    }

    /// Parses a token document and derives a registry from it.
    pub fn from_yaml(input: &str) -> Result<Self, TokenSourceError> {
        TokenSource::from_yaml(input).map(|source| Self::from_source(&source))
    }

    /// Reads a token document from disk and derives a registry from it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TokenSourceError> {
        TokenSource::from_path(path).map(|source| Self::from_source(&source))
    }

    /// The registry derived from the bundled token document.
    ///
    /// Built on first access and immutable afterwards.
    pub fn builtin() -> &'static TokenRegistry {
        &BUILTIN
    }

    /// Returns `true` if `name` is a declared color token.
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Looks up a token by category and name.
    pub fn get(&self, category: TokenCategory, name: &str) -> Option<Token<'_>> {
        match category {
            TokenCategory::Color => self.colors.get(name).map(|v| Token::Text(v)),
            TokenCategory::Spacing => self.spacing.get(name).copied().map(Token::Pixels),
            TokenCategory::Radius => self.radius.get(name).map(|v| Token::Text(v)),
            TokenCategory::Shadow => self.shadow.get(name).map(|v| Token::Text(v)),
            TokenCategory::FontSize => self.font_size.get(name).map(|v| Token::Text(v)),
            TokenCategory::Breakpoint => match name {
                "sm" => Some(Token::Pixels(self.breakpoints.sm)),
                "md" => Some(Token::Pixels(self.breakpoints.md)),
                "lg" => Some(Token::Pixels(self.breakpoints.lg)),
                _ => None,
            },
        }
    }

    /// All `(name, value)` pairs of a category, sorted by name.
    ///
    /// Breakpoints are listed in ascending width order instead.
    pub fn entries(&self, category: TokenCategory) -> Vec<(&str, Token<'_>)> {
        fn text(map: &BTreeMap<String, String>) -> Vec<(&str, Token<'_>)> {
            map.iter().map(|(k, v)| (k.as_str(), Token::Text(v))).collect()
        }

        match category {
            TokenCategory::Color => text(&self.colors),
            TokenCategory::Radius => text(&self.radius),
            TokenCategory::Shadow => text(&self.shadow),
            TokenCategory::FontSize => text(&self.font_size),
            TokenCategory::Spacing => {
                let mut entries: Vec<_> = self
                    .spacing
                    .iter()
                    .map(|(k, v)| (k.as_str(), Token::Pixels(*v)))
                    .collect();
                entries.sort_by_key(|(_, token)| match token {
                    Token::Pixels(px) => *px,
                    Token::Text(_) => 0,
                });
                entries
            }
            TokenCategory::Breakpoint => vec![
                ("sm", Token::Pixels(self.breakpoints.sm)),
                ("md", Token::Pixels(self.breakpoints.md)),
                ("lg", Token::Pixels(self.breakpoints.lg)),
            ],
        }
    }

    /// The font-size class for a scale name, if declared.
    pub fn font_size_class(&self, name: &str) -> Option<&str> {
        self.font_size.get(name).map(String::as_str)
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// The resolved style bundle for a nav state.
    pub fn nav(&self, state: NavState) -> &NavStyle {
        match state {
            NavState::Default => &self.nav.default,
            NavState::Hover => &self.nav.hover,
            NavState::Active => &self.nav.active,
        }
    }

    /// Space-separated utility classes for a nav state.
    pub fn nav_classes(&self, state: NavState) -> String {
        self.nav(state).classes().join(" ")
    }

    fn resolve_nav(&self, state: NavState, source: &NavStyleSource) -> NavStyle {
        let color = source.color.as_ref().filter(|c| {
            let known = self.has_color(c);
            if !known {
                tracing::debug!(%state, color = %c, "nav color is not a declared token; dropped");
            }
            known
        });

        let weight = source.weight.as_ref().filter(|w| {
            let known = Keyword::FontWeight.allows(w);
            if !known {
                tracing::debug!(%state, weight = %w, "nav font weight not recognized; dropped");
            }
            known
        });

        let decoration = source.decoration.as_deref().and_then(|d| {
            let parsed = TextDecoration::parse(d);
            if parsed.is_none() {
                tracing::debug!(%state, decoration = d, "nav decoration not recognized; dropped");
            }
            parsed
        });

        NavStyle {
            color: color.cloned(),
            weight: weight.cloned(),
            decoration,
        }
    }
}
