//! Badge class resolution.

use serde::{Deserialize, Serialize};

use crate::style::ClassList;
use crate::tokens::{parse_token, Color, ParseTokenError, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Badge treatment. Badges have no ghost variant.
pub enum BadgeVariant {
    /// Filled.
    #[default]
    Solid,
    /// Tinted.
    Soft,
    /// Bordered.
    Outline,
}

impl BadgeVariant {
    /// Every variant.
    pub const ALL: [Self; 3] = [Self::Solid, Self::Soft, Self::Outline];

    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Soft => "soft",
            Self::Outline => "outline",
        }
    }
}

impl std::str::FromStr for BadgeVariant {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("badge variant", raw, &Self::ALL, Self::token)
    }
}

const fn badge_size_classes(size: Size) -> &'static str {
    match size {
        Size::Xxxs => "px-1.5 py-0.5 text-xs",
        Size::Xxs => "px-2 py-0.5 text-xs",
        Size::Xs => "px-2 py-1 text-xs",
        Size::Sm => "px-2.5 py-1 text-sm",
        Size::Md => "px-3 py-1 text-sm",
        Size::Lg => "px-3 py-1.5 text-base",
        Size::Xl => "px-4 py-2 text-base",
        Size::Xxl => "px-4 py-2 text-lg",
        Size::Xxxl => "px-5 py-2.5 text-xl",
    }
}

/// Badge classes. Color classes follow the `{color}-{shade}` utility scale.
pub fn resolve_badge_classes(
    color: Color,
    variant: BadgeVariant,
    size: Size,
    pill: bool,
) -> ClassList {
    let token = color.token();
    let tone = match variant {
        BadgeVariant::Solid => format!("bg-{token}-600 text-white"),
        BadgeVariant::Soft => format!("bg-{token}-100 text-{token}-700"),
        BadgeVariant::Outline => {
            format!("border border-{token}-600 text-{token}-600 bg-transparent")
        }
    };
    let mut classes = ClassList::new();
    classes
        .push("inline-flex items-center font-medium")
        .push(badge_size_classes(size))
        .push(&tone)
        .push(if pill { "rounded-full" } else { "rounded-md" });
    classes
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn solid_small_pill_is_the_default_look() {
        let classes =
            resolve_badge_classes(Color::Primary, BadgeVariant::default(), Size::Sm, true);
        assert_eq!(
            classes.to_string(),
            "inline-flex items-center font-medium px-2.5 py-1 text-sm bg-primary-600 text-white rounded-full"
        );
    }

    #[test]
    fn variants_use_color_scale() {
        let soft = resolve_badge_classes(Color::Danger, BadgeVariant::Soft, Size::Md, false);
        assert!(soft.contains("bg-danger-100"));
        assert!(soft.contains("text-danger-700"));
        assert!(soft.contains("rounded-md"));

        let outline = resolve_badge_classes(Color::Info, BadgeVariant::Outline, Size::Md, true);
        assert!(outline.contains("border-info-600"));
        assert!(outline.contains("bg-transparent"));
    }

    #[test]
    fn ghost_is_not_a_badge_variant() {
        assert!("ghost".parse::<BadgeVariant>().is_err());
    }
}
