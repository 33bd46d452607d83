//! Text, Title, Caption and Label class tables.

use serde::{Deserialize, Serialize};

use crate::style::{InlineStyle, StyleRecord};
use crate::tokens::parse_token;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Body text size.
pub enum TextSize {
    /// `text-xs`.
    Xs,
    /// `text-sm`.
    Sm,
    /// `text-base`.
    #[default]
    Md,
    /// `text-lg`.
    Lg,
    /// `text-xl`.
    Xl,
}

impl TextSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Xs => "text-xs",
            Self::Sm => "text-sm",
            Self::Md => "text-base",
            Self::Lg => "text-lg",
            Self::Xl => "text-xl",
        }
    }
}

impl std::str::FromStr for TextSize {
    type Err = crate::tokens::ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("text size", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Font weight.
pub enum Weight {
    /// 400.
    #[default]
    Normal,
    /// 500.
    Medium,
    /// 600.
    Semibold,
    /// 700.
    Bold,
}

impl Weight {
    const fn class(self) -> &'static str {
        match self {
            Self::Normal => "font-normal",
            Self::Medium => "font-medium",
            Self::Semibold => "font-semibold",
            Self::Bold => "font-bold",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Start edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// End edge.
    Right,
    /// Justified; Text only.
    Justify,
}

impl TextAlign {
    const fn class(self) -> &'static str {
        match self {
            Self::Left => "text-left",
            Self::Center => "text-center",
            Self::Right => "text-right",
            Self::Justify => "text-justify",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Heading size, independent of the heading level.
pub enum TitleSize {
    /// `text-title-sm`.
    #[serde(rename = "sm")]
    Sm,
    /// `text-title-md`.
    #[serde(rename = "md")]
    Md,
    /// `text-title-lg`.
    #[default]
    #[serde(rename = "lg")]
    Lg,
    /// `text-title-xl`.
    #[serde(rename = "xl")]
    Xl,
    /// `text-title-2xl`.
    #[serde(rename = "2xl")]
    Xxl,
}

impl TitleSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Sm => "text-title-sm",
            Self::Md => "text-title-md",
            Self::Lg => "text-title-lg",
            Self::Xl => "text-title-xl",
            Self::Xxl => "text-title-2xl",
        }
    }
}

fn color_style(color: Option<&str>) -> InlineStyle {
    let mut style = InlineStyle::new();
    style.set_opt("color", color.filter(|color| !color.is_empty()));
    style
}

/// Paragraph text.
pub fn resolve_text_style(
    size: TextSize,
    weight: Weight,
    align: TextAlign,
    color: Option<&str>,
) -> StyleRecord {
    let mut record = StyleRecord {
        style: color_style(color),
        ..StyleRecord::default()
    };
    record
        .classes
        .push(size.class())
        .push(weight.class())
        .push(align.class());
    record
}

/// Clamps a heading level into `1..=6`.
pub fn heading_level(level: u8) -> u8 {
    level.clamp(1, 6)
}

/// Heading text. Justified alignment is not offered for titles and renders left-aligned.
pub fn resolve_title_style(size: TitleSize, align: TextAlign, color: Option<&str>) -> StyleRecord {
    let align = match align {
        TextAlign::Justify => TextAlign::Left,
        other => other,
    };
    let mut record = StyleRecord {
        style: color_style(color),
        ..StyleRecord::default()
    };
    record
        .classes
        .push("font-bold")
        .push(size.class())
        .push(align.class());
    record
}

/// Secondary annotation text.
pub fn resolve_caption_style(color: Option<&str>) -> StyleRecord {
    let mut record = StyleRecord {
        style: color_style(color),
        ..StyleRecord::default()
    };
    record.classes.push("text-caption text-gray-500");
    record
}

/// Form label.
pub fn resolve_label_style(color: Option<&str>) -> StyleRecord {
    let mut record = StyleRecord {
        style: color_style(color),
        ..StyleRecord::default()
    };
    record.classes.push("block text-sm font-medium text-gray-700");
    record
}

/// Classes of the required-field marker.
pub const REQUIRED_MARKER_CLASSES: &str = "text-danger-500 ml-1";

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_defaults() {
        let record = resolve_text_style(
            TextSize::default(),
            Weight::default(),
            TextAlign::default(),
            None,
        );
        assert_eq!(record.class_string(), "text-base font-normal text-left");
        assert!(record.style.is_empty());
    }

    #[test]
    fn title_clamps_level_and_drops_justify() {
        assert_eq!(heading_level(0), 1);
        assert_eq!(heading_level(9), 6);
        let record = resolve_title_style(TitleSize::Xxl, TextAlign::Justify, Some("#333"));
        assert_eq!(record.class_string(), "font-bold text-title-2xl text-left");
        assert_eq!(record.style.to_css(), "color: #333;");
    }

    #[test]
    fn empty_color_is_ignored() {
        assert!(resolve_caption_style(Some("")).style.is_empty());
        assert_eq!(resolve_label_style(Some("red")).style.get("color"), Some("red"));
    }
}
