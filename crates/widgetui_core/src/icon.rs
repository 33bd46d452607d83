//! Icon catalog.
//!
//! Every catalog name parses to an [`IconName`]. Only a handful of names carry a dedicated glyph;
//! the rest render the check glyph until artwork lands.

use std::str::FromStr;

use crate::tokens::{parse_token, ParseTokenError};

macro_rules! icon_catalog {
    ($($variant:ident => $token:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        /// Named icons in the catalog.
        pub enum IconName {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
        }

        impl IconName {
            /// Every icon, sorted by token.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable token used in markup and `data-ui-icon`.
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

icon_catalog! {
    Agent => "agent",
    Analytics => "analytics",
    Atom => "atom",
    Batch => "batch",
    Bolt => "bolt",
    BookClock => "book-clock",
    BookClosed => "book-closed",
    BookOpen => "book-open",
    Bug => "bug",
    Calendar => "calendar",
    Chart => "chart",
    Check => "check",
    CheckCircle => "check-circle",
    CheckCircleFilled => "check-circle-filled",
    ChevronLeft => "chevron-left",
    ChevronRight => "chevron-right",
    CircleQuestion => "circle-question",
    Compass => "compass",
    Confetti => "confetti",
    Cube => "cube",
    Desktop => "desktop",
    Document => "document",
    Dot => "dot",
    DotsHorizontal => "dots-horizontal",
    DotsVertical => "dots-vertical",
    EmptyCircle => "empty-circle",
    ExternalLink => "external-link",
    Globe => "globe",
    Images => "images",
    Info => "info",
    Keys => "keys",
    Lab => "lab",
    Lifesaver => "lifesaver",
    Lightbulb => "lightbulb",
    Mail => "mail",
    MapPin => "map-pin",
    Maps => "maps",
    Mobile => "mobile",
    Name => "name",
    Notebook => "notebook",
    NotebookPencil => "notebook-pencil",
    PageBlank => "page-blank",
    Phone => "phone",
    Play => "play",
    Plus => "plus",
    Profile => "profile",
    ProfileCard => "profile-card",
    Reload => "reload",
    Search => "search",
    SettingsSlider => "settings-slider",
    Sparkle => "sparkle",
    SparkleDouble => "sparkle-double",
    SquareCode => "square-code",
    SquareImage => "square-image",
    SquareText => "square-text",
    Star => "star",
    StarFilled => "star-filled",
    Suitcase => "suitcase",
    User => "user",
    Wreath => "wreath",
    Write => "write",
    WriteAlt => "write-alt",
    WriteAlt2 => "write-alt2",
}

const STROKE: &str =
    r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

impl IconName {
    /// Whether the icon has its own glyph rather than the fallback.
    pub const fn has_glyph(self) -> bool {
        matches!(
            self,
            Self::Check
                | Self::Plus
                | Self::Search
                | Self::ChevronLeft
                | Self::ChevronRight
                | Self::Calendar
                | Self::DotsHorizontal
                | Self::DotsVertical
                | Self::ExternalLink
        )
    }

    /// Inner SVG markup for a `0 0 24 24` view box filled with `currentColor`.
    pub fn svg_body(self) -> String {
        match self {
            Self::Plus => format!(
                r#"<line x1="12" y1="5" x2="12" y2="19" {STROKE}/><line x1="5" y1="12" x2="19" y2="12" {STROKE}/>"#
            ),
            Self::Search => format!(
                r#"<circle cx="11" cy="11" r="8" {STROKE}/><line x1="21" y1="21" x2="16.65" y2="16.65" {STROKE}/>"#
            ),
            Self::ChevronLeft => format!(r#"<polyline points="15 18 9 12 15 6" {STROKE}/>"#),
            Self::ChevronRight => format!(r#"<polyline points="9 18 15 12 9 6" {STROKE}/>"#),
            Self::Calendar => {
                r#"<path d="M19 11H5v7l.005.102A1 1 0 0 0 6 19h12a1 1 0 0 0 1-1v-7Zm0-4a1 1 0 0 0-1-1H6a1 1 0 0 0-1 1v2h14V7Zm2 11a3 3 0 0 1-3 3H6a3 3 0 0 1-2.996-2.846L3 18V7a3 3 0 0 1 3-3h1V3a1 1 0 0 1 2 0v1h6V3a1 1 0 1 1 2 0v1h1a3 3 0 0 1 3 3v11Z"/>"#
                    .to_string()
            }
            Self::DotsHorizontal => {
                r#"<path d="M3 12a2 2 0 1 1 4 0 2 2 0 0 1-4 0Zm7 0a2 2 0 1 1 4 0 2 2 0 0 1-4 0Zm7 0a2 2 0 1 1 4 0 2 2 0 0 1-4 0Z"/>"#
                    .to_string()
            }
            Self::DotsVertical => {
                r#"<path d="M12 21a2 2 0 1 1 0-4 2 2 0 0 1 0 4Zm0-7a2 2 0 1 1 0-4 2 2 0 0 1 0 4Zm0-7a2 2 0 1 1 0-4 2 2 0 0 1 0 4Z"/>"#
                    .to_string()
            }
            Self::ExternalLink => {
                r#"<path fill-rule="evenodd" clip-rule="evenodd" d="M15 5a1 1 0 1 1 0-2h5a1 1 0 0 1 1 1v5a1 1 0 1 1-2 0V6.414l-5.293 5.293a1 1 0 0 1-1.414-1.414L17.586 5H15ZM4 7a3 3 0 0 1 3-3h3a1 1 0 1 1 0 2H7a1 1 0 0 0-1 1v10a1 1 0 0 0 1 1h10a1 1 0 0 0 1-1v-3a1 1 0 1 1 2 0v3a3 3 0 0 1-3 3H7a3 3 0 0 1-3-3V7Z"/>"#
                    .to_string()
            }
            _ => format!(r#"<polyline points="20 6 9 17 4 12" {STROKE}/>"#),
        }
    }
}

impl FromStr for IconName {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("icon", raw, Self::ALL, Self::token)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_token_parses_back() {
        for icon in IconName::ALL {
            assert_eq!(icon.token().parse::<IconName>(), Ok(*icon));
        }
        assert_eq!(IconName::ALL.len(), 63);
    }

    #[test]
    fn placeholders_share_the_check_glyph() {
        let check = IconName::Check.svg_body();
        assert_eq!(IconName::Sparkle.svg_body(), check);
        assert!(!IconName::Sparkle.has_glyph());
        assert_ne!(IconName::Calendar.svg_body(), check);
        assert!(IconName::Calendar.has_glyph());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "unicorn".parse::<IconName>().expect_err("unknown icon");
        assert_eq!(err.kind, "icon");
    }
}
