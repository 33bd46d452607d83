//! Design tokens shared by every control.
//!
//! Tokens are closed enums. String input only enters at the parsing boundary, where unknown
//! values either surface as [`ParseTokenError`] or collapse to a documented default through
//! `parse_or`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Raised when a string does not name a known token.
#[error("unknown {kind} token `{value}`")]
pub struct ParseTokenError {
    /// Token family that failed to parse (`color`, `size`, ...).
    pub kind: &'static str,
    /// Offending input.
    pub value: String,
}

pub(crate) fn parse_token<T: Copy>(
    kind: &'static str,
    raw: &str,
    all: &[T],
    token: fn(T) -> &'static str,
) -> Result<T, ParseTokenError> {
    let needle = raw.trim();
    all.iter()
        .copied()
        .find(|candidate| token(*candidate).eq_ignore_ascii_case(needle))
        .ok_or_else(|| ParseTokenError {
            kind,
            value: raw.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic color tokens for controls and badges.
pub enum Color {
    /// Informational blue.
    Info,
    /// Primary near-black.
    Primary,
    /// Secondary gray.
    Secondary,
    /// Discovery purple.
    Discovery,
    /// Success green.
    Success,
    /// Caution amber.
    Caution,
    /// Warning orange.
    Warning,
    /// Danger red.
    Danger,
}

impl Default for Color {
    fn default() -> Self {
        Self::Primary
    }
}

impl Color {
    /// Every color token in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Info,
        Self::Primary,
        Self::Secondary,
        Self::Discovery,
        Self::Success,
        Self::Caution,
        Self::Warning,
        Self::Danger,
    ];

    /// Stable token used in class names and `data-ui-color`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Discovery => "discovery",
            Self::Success => "success",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Parses `raw`, falling back to `default` for absent or unknown input.
    pub fn parse_or(raw: Option<&str>, default: Self) -> Self {
        raw.and_then(|raw| raw.parse().ok()).unwrap_or(default)
    }
}

impl FromStr for Color {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("color", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Visual treatment of a control.
pub enum Variant {
    /// Filled background.
    Solid,
    /// Tinted background.
    Soft,
    /// Border only.
    Outline,
    /// No chrome until hovered.
    Ghost,
}

impl Default for Variant {
    fn default() -> Self {
        Self::Solid
    }
}

impl Variant {
    /// Every variant token in declaration order.
    pub const ALL: [Self; 4] = [Self::Solid, Self::Soft, Self::Outline, Self::Ghost];

    /// Stable token used in class names and `data-ui-variant`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Soft => "soft",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }

    /// Parses `raw`, falling back to `default` for absent or unknown input.
    pub fn parse_or(raw: Option<&str>, default: Self) -> Self {
        raw.and_then(|raw| raw.parse().ok()).unwrap_or(default)
    }
}

impl FromStr for Variant {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("variant", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Control sizing scale, 22px (`3xs`) through 48px (`3xl`).
pub enum Size {
    /// 22px controls.
    #[serde(rename = "3xs")]
    Xxxs,
    /// 24px controls.
    #[serde(rename = "2xs")]
    Xxs,
    /// 26px controls.
    #[serde(rename = "xs")]
    Xs,
    /// 28px controls.
    #[serde(rename = "sm")]
    Sm,
    /// 32px controls.
    #[serde(rename = "md")]
    Md,
    /// 36px controls.
    #[serde(rename = "lg")]
    Lg,
    /// 40px controls.
    #[serde(rename = "xl")]
    Xl,
    /// 44px controls.
    #[serde(rename = "2xl")]
    Xxl,
    /// 48px controls.
    #[serde(rename = "3xl")]
    Xxxl,
}

impl Default for Size {
    fn default() -> Self {
        Self::Md
    }
}

impl Size {
    /// Every size token from smallest to largest.
    pub const ALL: [Self; 9] = [
        Self::Xxxs,
        Self::Xxs,
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
        Self::Xxxl,
    ];

    /// Stable token used in class names and `data-ui-size`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xxxs => "3xs",
            Self::Xxs => "2xs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Xxxl => "3xl",
        }
    }

    /// Control height in pixels.
    pub const fn height_px(self) -> u16 {
        match self {
            Self::Xxxs => 22,
            Self::Xxs => 24,
            Self::Xs => 26,
            Self::Sm => 28,
            Self::Md => 32,
            Self::Lg => 36,
            Self::Xl => 40,
            Self::Xxl => 44,
            Self::Xxxl => 48,
        }
    }

    /// Parses `raw`, falling back to `default` for absent or unknown input.
    pub fn parse_or(raw: Option<&str>, default: Self) -> Self {
        raw.and_then(|raw| raw.parse().ok()).unwrap_or(default)
    }
}

impl FromStr for Size {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("size", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Icon sizing scale.
pub enum IconSize {
    /// 16px.
    #[serde(rename = "sm")]
    Sm,
    /// 20px.
    #[serde(rename = "md")]
    Md,
    /// 24px.
    #[serde(rename = "lg")]
    Lg,
    /// 32px.
    #[serde(rename = "xl")]
    Xl,
    /// 40px.
    #[serde(rename = "2xl")]
    Xxl,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    /// Every icon size token from smallest to largest.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Stable token used in `data-ui-size`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Rendered edge length in pixels.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
            Self::Xxl => 40,
        }
    }

    /// Utility classes sizing the SVG box.
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Sm => "w-4 h-4",
            Self::Md => "w-5 h-5",
            Self::Lg => "w-6 h-6",
            Self::Xl => "w-8 h-8",
            Self::Xxl => "w-10 h-10",
        }
    }
}

impl FromStr for IconSize {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("icon size", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Legacy shorthand that overrides both color and variant on a button.
pub enum StylePreset {
    /// Solid primary button.
    Primary,
    /// Outlined secondary button.
    Secondary,
}

impl StylePreset {
    /// Every preset token.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];

    /// Stable preset token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Color and variant the preset stands for.
    pub const fn expand(self) -> (Color, Variant) {
        match self {
            Self::Primary => (Color::Primary, Variant::Solid),
            Self::Secondary => (Color::Secondary, Variant::Outline),
        }
    }
}

impl FromStr for StylePreset {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("style", raw, &Self::ALL, Self::token)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_round_trip_through_from_str() {
        for size in Size::ALL {
            assert_eq!(size.token().parse::<Size>(), Ok(size));
        }
        for color in Color::ALL {
            assert_eq!(color.token().parse::<Color>(), Ok(color));
        }
    }

    #[test]
    fn parsing_is_case_and_whitespace_tolerant() {
        assert_eq!(" Outline ".parse::<Variant>(), Ok(Variant::Outline));
        assert_eq!("2XL".parse::<Size>(), Ok(Size::Xxl));
    }

    #[test]
    fn unknown_token_reports_kind_and_value() {
        let err = "huge".parse::<Size>().expect_err("unknown size");
        assert_eq!(err.kind, "size");
        assert_eq!(err.value, "huge");
        assert_eq!(err.to_string(), "unknown size token `huge`");
    }

    #[test]
    fn parse_or_falls_back_to_default() {
        assert_eq!(Color::parse_or(Some("chartreuse"), Color::Primary), Color::Primary);
        assert_eq!(Color::parse_or(None, Color::Info), Color::Info);
        assert_eq!(Size::parse_or(Some("sm"), Size::Lg), Size::Sm);
    }

    #[test]
    fn serde_uses_the_same_tokens() {
        let encoded = serde_json::to_string(&Size::Xxxs).expect("serialize");
        assert_eq!(encoded, "\"3xs\"");
        let decoded: Variant = serde_json::from_str("\"ghost\"").expect("deserialize");
        assert_eq!(decoded, Variant::Ghost);
    }

    #[test]
    fn style_presets_expand_to_fixed_pairs() {
        assert_eq!(StylePreset::Primary.expand(), (Color::Primary, Variant::Solid));
        assert_eq!(StylePreset::Secondary.expand(), (Color::Secondary, Variant::Outline));
    }
}
