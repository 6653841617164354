//! The closed set of style properties and how each one maps to classes.
//!
//! Every recognized key of a style record is a [`Property`]. Each property
//! carries a [`Rule`] describing how its value is validated and turned into
//! a utility class, and its position in [`Property::SCHEDULE`] fixes where
//! its class appears in the output.

/// A responsive breakpoint block of a style record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    /// All breakpoints, in emission order.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg];

    /// The record key holding this breakpoint's overrides.
    pub fn key(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.key() == key)
    }

    /// Prefixes a class so it only applies from this breakpoint up.
    pub fn scope(self, class: &str) -> String {
        format!("{}:{}", self.key(), class)
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Enumerated properties and their allow-lists.
///
/// | Keyword | Prefix | Allowed |
/// |---------|--------|---------|
/// | `Display` | (none) | block, inline-block, inline, flex, inline-flex, grid, inline-grid, hidden, contents |
/// | `Align` | `items-` | start, center, end, stretch, baseline |
/// | `Justify` | `justify-` | start, center, end, between, around, evenly |
/// | `BorderStyle` | `border-` | solid, dashed, dotted, double, none |
/// | `FontWeight` | `font-` | thin … black |
/// | `LineHeight` | `leading-` | none, tight, snug, normal, relaxed, loose |
/// | `LetterSpacing` | `tracking-` | tighter … widest |
/// | `TextAlign` | `text-` | left, center, right, justify, start, end |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Display,
    Align,
    Justify,
    BorderStyle,
    FontWeight,
    LineHeight,
    LetterSpacing,
    TextAlign,
}

impl Keyword {
    pub fn prefix(self) -> &'static str {
        match self {
            Keyword::Display => "",
            Keyword::Align => "items-",
            Keyword::Justify => "justify-",
            Keyword::BorderStyle => "border-",
            Keyword::FontWeight => "font-",
            Keyword::LineHeight => "leading-",
            Keyword::LetterSpacing => "tracking-",
            Keyword::TextAlign => "text-",
        }
    }

    pub fn allowed(self) -> &'static [&'static str] {
        match self {
            Keyword::Display => &[
                "block",
                "inline-block",
                "inline",
                "flex",
                "inline-flex",
                "grid",
                "inline-grid",
                "hidden",
                "contents",
            ],
            Keyword::Align => &["start", "center", "end", "stretch", "baseline"],
            Keyword::Justify => &["start", "center", "end", "between", "around", "evenly"],
            Keyword::BorderStyle => &["solid", "dashed", "dotted", "double", "none"],
            Keyword::FontWeight => &[
                "thin",
                "extralight",
                "light",
                "normal",
                "medium",
                "semibold",
                "bold",
                "extrabold",
                "black",
            ],
            Keyword::LineHeight => &["none", "tight", "snug", "normal", "relaxed", "loose"],
            Keyword::LetterSpacing => &["tighter", "tight", "normal", "wide", "wider", "widest"],
            Keyword::TextAlign => &["left", "center", "right", "justify", "start", "end"],
        }
    }

    /// Returns `true` if `value` (without prefix) is in the allow-list.
    pub fn allows(self, value: &str) -> bool {
        self.allowed().contains(&value)
    }
}

/// How a property's value becomes a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Numeric step rendered as `{prefix}-{step}`.
    Spacing(&'static str),
    /// Registry color token rendered as `{prefix}-{token}`.
    Color(&'static str),
    /// Allow-listed keyword.
    Keyword(Keyword),
    /// Free-form value under a fixed class prefix.
    Prefixed(&'static str),
    /// Free-form value under `font-size`, consulting the registry font scale.
    FontSize,
    /// `border`, `border-0` or `border-{step}`.
    BorderWidth,
}

/// A recognized base property of a style record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Display,
    Gap,
    Align,
    Justify,
    Width,
    MaxWidth,
    Indent,
    ListStyle,
    ItemGap,
    P,
    Pt,
    Pr,
    Pb,
    Pl,
    Px,
    Py,
    M,
    Mt,
    Mr,
    Mb,
    Ml,
    Mx,
    My,
    BorderWidth,
    BorderStyle,
    BorderColor,
    Rounded,
    Shadow,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    TextAlign,
    TextColor,
    Background,
}

impl Property {
    /// Emission order of classes within one block.
    ///
    /// Two records with the same keys always produce classes in this relative
    /// order, whatever order the keys were inserted in. Later classes win
    /// cascade ties.
    pub const SCHEDULE: [Property; 35] = [
        Property::Display,
        Property::Gap,
        Property::Align,
        Property::Justify,
        Property::Width,
        Property::MaxWidth,
        Property::Indent,
        Property::ListStyle,
        Property::ItemGap,
        Property::P,
        Property::Pt,
        Property::Pr,
        Property::Pb,
        Property::Pl,
        Property::Px,
        Property::Py,
        Property::M,
        Property::Mt,
        Property::Mr,
        Property::Mb,
        Property::Ml,
        Property::Mx,
        Property::My,
        Property::BorderWidth,
        Property::BorderStyle,
        Property::BorderColor,
        Property::Rounded,
        Property::Shadow,
        Property::FontSize,
        Property::FontWeight,
        Property::LineHeight,
        Property::LetterSpacing,
        Property::TextAlign,
        Property::TextColor,
        Property::Background,
    ];

    /// The style record key for this property.
    pub fn key(self) -> &'static str {
        match self {
            Property::Display => "display",
            Property::Gap => "gap",
            Property::Align => "align",
            Property::Justify => "justify",
            Property::Width => "width",
            Property::MaxWidth => "maxWidth",
            Property::Indent => "indent",
            Property::ListStyle => "listStyle",
            Property::ItemGap => "itemGap",
            Property::P => "p",
            Property::Pt => "pt",
            Property::Pr => "pr",
            Property::Pb => "pb",
            Property::Pl => "pl",
            Property::Px => "px",
            Property::Py => "py",
            Property::M => "m",
            Property::Mt => "mt",
            Property::Mr => "mr",
            Property::Mb => "mb",
            Property::Ml => "ml",
            Property::Mx => "mx",
            Property::My => "my",
            Property::BorderWidth => "borderWidth",
            Property::BorderStyle => "borderStyle",
            Property::BorderColor => "borderColor",
            Property::Rounded => "rounded",
            Property::Shadow => "shadow",
            Property::FontSize => "fontSize",
            Property::FontWeight => "fontWeight",
            Property::LineHeight => "lineHeight",
            Property::LetterSpacing => "letterSpacing",
            Property::TextAlign => "textAlign",
            Property::TextColor => "text",
            Property::Background => "bg",
        }
    }

    /// Looks up a property by record key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::SCHEDULE.into_iter().find(|p| p.key() == key)
    }

    pub fn rule(self) -> Rule {
        match self {
            Property::Display => Rule::Keyword(Keyword::Display),
            Property::Align => Rule::Keyword(Keyword::Align),
            Property::Justify => Rule::Keyword(Keyword::Justify),
            Property::BorderStyle => Rule::Keyword(Keyword::BorderStyle),
            Property::FontWeight => Rule::Keyword(Keyword::FontWeight),
            Property::LineHeight => Rule::Keyword(Keyword::LineHeight),
            Property::LetterSpacing => Rule::Keyword(Keyword::LetterSpacing),
            Property::TextAlign => Rule::Keyword(Keyword::TextAlign),

            Property::Gap => Rule::Spacing("gap"),
            Property::Indent => Rule::Spacing("indent"),
            Property::ItemGap => Rule::Spacing("space-y"),
            Property::P => Rule::Spacing("p"),
            Property::Pt => Rule::Spacing("pt"),
            Property::Pr => Rule::Spacing("pr"),
            Property::Pb => Rule::Spacing("pb"),
            Property::Pl => Rule::Spacing("pl"),
            Property::Px => Rule::Spacing("px"),
            Property::Py => Rule::Spacing("py"),
            Property::M => Rule::Spacing("m"),
            Property::Mt => Rule::Spacing("mt"),
            Property::Mr => Rule::Spacing("mr"),
            Property::Mb => Rule::Spacing("mb"),
            Property::Ml => Rule::Spacing("ml"),
            Property::Mx => Rule::Spacing("mx"),
            Property::My => Rule::Spacing("my"),

            Property::BorderColor => Rule::Color("border"),
            Property::TextColor => Rule::Color("text"),
            Property::Background => Rule::Color("bg"),

            Property::Width => Rule::Prefixed("w"),
            Property::MaxWidth => Rule::Prefixed("max-w"),
            Property::ListStyle => Rule::Prefixed("list"),
            Property::Rounded => Rule::Prefixed("rounded"),
            Property::Shadow => Rule::Prefixed("shadow"),
            Property::FontSize => Rule::FontSize,
            Property::BorderWidth => Rule::BorderWidth,
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
