//! Palette and timing configuration.
//!
//! A [`ThemeConfig`] can be built in code or parsed from TOML. Every table and key is optional;
//! omitted entries keep the built-in values.
//!
//! ```toml
//! [palette.info]
//! base = "#0060df"
//! hover = "#004fb8"
//!
//! [loading]
//! hold_ms = 600
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::Rgb;
use crate::tokens::Color;

#[derive(Debug, Error)]
/// Errors raised while loading a theme document.
pub enum ThemeError {
    /// The document is not valid TOML or does not match the schema.
    #[error("theme config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    /// A palette entry is not a `#rrggbb` color.
    #[error("palette color `{color}` has invalid hex value `{value}`")]
    InvalidColor {
        /// Token of the offending palette entry.
        color: &'static str,
        /// Rejected value.
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Resting and hovered color for one palette entry.
pub struct ColorPair {
    /// Resting color as `#rrggbb`.
    pub base: String,
    /// Hovered color as `#rrggbb`.
    pub hover: String,
}

impl ColorPair {
    fn new(base: &str, hover: &str) -> Self {
        Self {
            base: base.to_string(),
            hover: hover.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Color pair for every [`Color`] token.
pub struct Palette {
    /// Info pair.
    pub info: ColorPair,
    /// Primary pair.
    pub primary: ColorPair,
    /// Secondary pair.
    pub secondary: ColorPair,
    /// Discovery pair.
    pub discovery: ColorPair,
    /// Success pair.
    pub success: ColorPair,
    /// Caution pair.
    pub caution: ColorPair,
    /// Warning pair.
    pub warning: ColorPair,
    /// Danger pair.
    pub danger: ColorPair,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            info: ColorPair::new("#0385ff", "#006acb"),
            primary: ColorPair::new("#181818", "#303030"),
            secondary: ColorPair::new("#5d5d5d", "#414141"),
            discovery: ColorPair::new("#914ff7", "#8046da"),
            success: ColorPair::new("#01a241", "#01a241"),
            caution: ColorPair::new("#ba8e01", "#906f00"),
            warning: ColorPair::new("#e25605", "#b8490d"),
            danger: ColorPair::new("#df2e2a", "#b92723"),
        }
    }
}

impl Palette {
    /// Returns the pair configured for `color`.
    pub fn pair(&self, color: Color) -> &ColorPair {
        match color {
            Color::Info => &self.info,
            Color::Primary => &self.primary,
            Color::Secondary => &self.secondary,
            Color::Discovery => &self.discovery,
            Color::Success => &self.success,
            Color::Caution => &self.caution,
            Color::Warning => &self.warning,
            Color::Danger => &self.danger,
        }
    }

    /// Checks that every entry parses as `#rrggbb`.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for color in Color::ALL {
            let pair = self.pair(color);
            for value in [&pair.base, &pair.hover] {
                if Rgb::from_hex(value).is_none() {
                    return Err(ThemeError::InvalidColor {
                        color: color.token(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Delays of the button loading sequence.
pub struct LoadingTimings {
    /// Time the label spends fading out before the spinner appears.
    pub fade_ms: u64,
    /// Time the spinner stays visible.
    pub hold_ms: u64,
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            fade_ms: 200,
            hold_ms: 1000,
        }
    }
}

impl LoadingTimings {
    /// Fade delay.
    pub fn fade(self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Spinner hold delay.
    pub fn hold(self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Library-wide configuration.
pub struct ThemeConfig {
    /// Control colors.
    pub palette: Palette,
    /// Button loading sequence timings.
    pub loading: LoadingTimings,
}

impl ThemeConfig {
    /// Parses and validates a TOML theme document.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed documents and [`ThemeError::InvalidColor`]
    /// when a palette entry is not a `#rrggbb` color.
    pub fn from_toml_str(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = toml::from_str(raw)?;
        config.palette.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ThemeConfig::from_toml_str("").expect("parse");
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [palette.info]
            base = "#0060df"
            hover = "#004fb8"

            [loading]
            hold_ms = 600
            "##,
        )
        .expect("parse");

        assert_eq!(config.palette.info.base, "#0060df");
        assert_eq!(config.palette.primary, Palette::default().primary);
        assert_eq!(config.loading.hold_ms, 600);
        assert_eq!(config.loading.fade_ms, 200);
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let err = ThemeConfig::from_toml_str(
            r##"
            [palette.danger]
            base = "red"
            hover = "#b92723"
            "##,
        )
        .expect_err("invalid color");
        assert!(matches!(err, ThemeError::InvalidColor { color: "danger", .. }));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str("[loading\nfade_ms = 1").expect_err("malformed");
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn default_palette_is_valid() {
        Palette::default().validate().expect("valid palette");
    }
}
