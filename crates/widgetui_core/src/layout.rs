//! Layout primitives: flex containers, columns, boxes, spacers and dividers.
//!
//! Dimensions given as numbers are pixels; strings pass through as raw CSS.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::{ClassList, InlineStyle, StyleRecord};
use crate::tokens::parse_token;

macro_rules! class_token {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($variant:ident => $token:literal : $class:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable token.
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Utility class implementing the value.
            pub const fn class(self) -> &'static str {
                match self {
                    $(Self::$variant => $class,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::tokens::ParseTokenError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_token($kind, raw, Self::ALL, Self::token)
            }
        }
    };
}

class_token! {
    /// Cross-axis alignment.
    Align, "align", default = Stretch {
        Start => "start": "items-start",
        Center => "center": "items-center",
        End => "end": "items-end",
        Baseline => "baseline": "items-baseline",
        Stretch => "stretch": "items-stretch",
    }
}

class_token! {
    /// Main-axis distribution.
    Justify, "justify", default = Start {
        Start => "start": "justify-start",
        Center => "center": "justify-center",
        End => "end": "justify-end",
        Stretch => "stretch": "justify-stretch",
        Between => "between": "justify-between",
        Around => "around": "justify-around",
        Evenly => "evenly": "justify-evenly",
    }
}

class_token! {
    /// Flex wrapping.
    Wrap, "wrap", default = Nowrap {
        Nowrap => "nowrap": "flex-nowrap",
        Wrap => "wrap": "flex-wrap",
        WrapReverse => "wrap-reverse": "flex-wrap-reverse",
    }
}

class_token! {
    /// Corner radius scale.
    Radius, "radius", default = None {
        Xxs => "2xs": "rounded-[2px]",
        Xs => "xs": "rounded-[4px]",
        Sm => "sm": "rounded-[6px]",
        Md => "md": "rounded-[8px]",
        Lg => "lg": "rounded-[12px]",
        Xl => "xl": "rounded-[16px]",
        Xxl => "2xl": "rounded-[24px]",
        Xxxl => "3xl": "rounded-[32px]",
        Xxxxl => "4xl": "rounded-[48px]",
        Full => "full": "rounded-full",
        None => "none": "rounded-none",
    }
}

class_token! {
    /// Flex direction.
    Direction, "direction", default = Row {
        Row => "row": "flex-row",
        Col => "col": "flex-col",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A CSS length: a pixel count or a raw CSS value.
pub enum Dimension {
    /// Pixels.
    Px(f64),
    /// Raw CSS (`50%`, `auto`, `2rem`, ...).
    Css(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Css(css) => f.write_str(css),
        }
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Px(f64::from(px))
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}

impl From<String> for Dimension {
    fn from(css: String) -> Self {
        Self::Css(css)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Padding or margin.
pub enum Spacing {
    /// Same value on every side.
    All(Dimension),
    /// Per-side pixels; missing sides are 0.
    Sides {
        /// Top.
        #[serde(default)]
        top: Option<f64>,
        /// Right.
        #[serde(default)]
        right: Option<f64>,
        /// Bottom.
        #[serde(default)]
        bottom: Option<f64>,
        /// Left.
        #[serde(default)]
        left: Option<f64>,
    },
}

impl Spacing {
    /// CSS shorthand value.
    pub fn to_css(&self) -> String {
        match self {
            Self::All(dimension) => dimension.to_string(),
            Self::Sides {
                top,
                right,
                bottom,
                left,
            } => format!(
                "{}px {}px {}px {}px",
                top.unwrap_or(0.0),
                right.unwrap_or(0.0),
                bottom.unwrap_or(0.0),
                left.unwrap_or(0.0)
            ),
        }
    }
}

impl From<Dimension> for Spacing {
    fn from(dimension: Dimension) -> Self {
        Self::All(dimension)
    }
}

impl From<f64> for Spacing {
    fn from(px: f64) -> Self {
        Self::All(Dimension::Px(px))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Container border.
pub enum Border {
    /// Solid black border of the given pixel width.
    Width(f64),
    /// Explicit border; missing parts default to `1px solid #000`.
    Spec {
        /// Pixel width.
        #[serde(default)]
        width: Option<f64>,
        /// Line style.
        #[serde(default)]
        style: Option<String>,
        /// Line color.
        #[serde(default)]
        color: Option<String>,
    },
}

impl Border {
    /// CSS shorthand value.
    pub fn to_css(&self) -> String {
        match self {
            Self::Width(width) => format!("{width}px solid #000"),
            Self::Spec {
                width,
                style,
                color,
            } => format!(
                "{}px {} {}",
                width.unwrap_or(1.0),
                style.as_deref().unwrap_or("solid"),
                color.as_deref().unwrap_or("#000")
            ),
        }
    }
}

/// Maps a surface token to its color; other input is returned unchanged.
pub fn surface_color(token: &str) -> &str {
    match token {
        "surface" | "surface-elevated" => "#ffffff",
        "surface-secondary" => "#f5f5f5",
        "surface-tertiary" => "#e5e5e5",
        "surface-elevated-secondary" => "#fafafa",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Container background.
pub enum Background {
    /// Surface token or raw CSS color.
    Color(String),
    /// Light/dark pair; the light value is used.
    Scheme {
        /// Light mode color.
        #[serde(default)]
        light: Option<String>,
        /// Dark mode color.
        #[serde(default)]
        dark: Option<String>,
    },
}

impl Background {
    /// Resolved CSS color, if any.
    pub fn to_css(&self) -> Option<String> {
        match self {
            Self::Color(color) => Some(surface_color(color).to_string()),
            Self::Scheme { light, .. } => light
                .as_deref()
                .map(|light| surface_color(light).to_string()),
        }
    }
}

impl From<&str> for Background {
    fn from(color: &str) -> Self {
        Self::Color(color.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Flex container props shared by Row and Form.
pub struct FlexProps {
    /// Cross-axis alignment.
    pub align: Option<Align>,
    /// Main-axis distribution.
    pub justify: Option<Justify>,
    /// Wrapping.
    pub wrap: Option<Wrap>,
    /// Corner radius.
    pub radius: Option<Radius>,
    /// Gap between children.
    pub gap: Option<Dimension>,
    /// `flex` shorthand.
    pub flex: Option<String>,
    /// Inner spacing.
    pub padding: Option<Spacing>,
    /// Outer spacing.
    pub margin: Option<Spacing>,
    /// Border.
    pub border: Option<Border>,
    /// Background.
    pub background: Option<Background>,
    /// Width.
    pub width: Option<Dimension>,
    /// Height.
    pub height: Option<Dimension>,
    /// Width and height together; overrides both.
    pub size: Option<Dimension>,
    /// Minimum width.
    pub min_width: Option<Dimension>,
    /// Minimum height.
    pub min_height: Option<Dimension>,
    /// Minimum width and height together.
    pub min_size: Option<Dimension>,
    /// Maximum width.
    pub max_width: Option<Dimension>,
    /// Maximum height.
    pub max_height: Option<Dimension>,
    /// Maximum width and height together.
    pub max_size: Option<Dimension>,
    /// `aspect-ratio` value.
    pub aspect_ratio: Option<String>,
}

/// Resolves a flex container laid out along `direction`.
pub fn resolve_flex_style(direction: Direction, props: &FlexProps) -> StyleRecord {
    let mut record = StyleRecord::default();
    record
        .classes
        .push("flex")
        .push(direction.class())
        .push_opt(props.align.map(Align::class))
        .push_opt(props.justify.map(Justify::class))
        .push_opt(props.wrap.map(Wrap::class))
        .push_opt(props.radius.map(Radius::class));

    let css = |dimension: &Option<Dimension>| dimension.as_ref().map(Dimension::to_string);
    let style = &mut record.style;
    style
        .set_opt("gap", css(&props.gap))
        .set_opt("flex", props.flex.clone())
        .set_opt("height", css(&props.height))
        .set_opt("width", css(&props.width))
        .set_opt("width", css(&props.size))
        .set_opt("height", css(&props.size))
        .set_opt("min-height", css(&props.min_height))
        .set_opt("min-width", css(&props.min_width))
        .set_opt("min-width", css(&props.min_size))
        .set_opt("min-height", css(&props.min_size))
        .set_opt("max-height", css(&props.max_height))
        .set_opt("max-width", css(&props.max_width))
        .set_opt("max-width", css(&props.max_size))
        .set_opt("max-height", css(&props.max_size))
        .set_opt("aspect-ratio", props.aspect_ratio.clone())
        .set_opt("padding", props.padding.as_ref().map(Spacing::to_css))
        .set_opt("margin", props.margin.as_ref().map(Spacing::to_css))
        .set_opt("border", props.border.as_ref().map(Border::to_css))
        .set_opt(
            "background-color",
            props.background.as_ref().and_then(Background::to_css),
        );
    record
}

/// Width class for a 12-column span; out-of-range spans add nothing.
pub fn col_span_class(span: u8) -> Option<String> {
    match span {
        12 => Some("w-full".to_string()),
        1..=11 => Some(format!("w-{span}/12")),
        _ => None,
    }
}

/// Resolves a vertical stack. Alignment and distribution default to `start`.
pub fn resolve_col_style(
    span: Option<u8>,
    gap: Option<&Dimension>,
    align: Option<Align>,
    justify: Option<Justify>,
) -> StyleRecord {
    let mut record = StyleRecord::default();
    record
        .classes
        .push("flex flex-col")
        .push(align.unwrap_or(Align::Start).class())
        .push(justify.unwrap_or(Justify::Start).class());
    if let Some(class) = span.and_then(col_span_class) {
        record.classes.push(&class);
    }
    record.style.set_opt("gap", gap.map(Dimension::to_string));
    record
}

/// Inline style of a plain Box.
pub fn box_style(
    padding: Option<&Dimension>,
    margin: Option<&Dimension>,
    background: Option<&str>,
    radius: Option<&Dimension>,
) -> InlineStyle {
    let mut style = InlineStyle::new();
    style
        .set_opt("padding", padding.map(Dimension::to_string))
        .set_opt("margin", margin.map(Dimension::to_string))
        .set_opt("background-color", background.filter(|bg| !bg.is_empty()))
        .set_opt("border-radius", radius.map(Dimension::to_string));
    style
}

/// Inline style of a Spacer: grows to fill, never shrinking below `min_size`.
pub fn spacer_style(min_size: Option<&Dimension>) -> InlineStyle {
    let min = min_size.map_or_else(|| "auto".to_string(), Dimension::to_string);
    let mut style = InlineStyle::new();
    style
        .set("flex", "1")
        .set("min-width", min.clone())
        .set("min-height", min);
    style
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Divider orientation.
pub enum Orientation {
    /// Horizontal rule.
    #[default]
    Horizontal,
    /// Vertical rule stretching to the container's height.
    Vertical,
}

impl Orientation {
    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Divider props.
pub struct DividerProps {
    /// Direction of the rule.
    pub orientation: Orientation,
    /// Line color.
    pub color: Option<String>,
    /// Line thickness in pixels.
    pub thickness: Option<f64>,
    /// Space on both sides of the line, in pixels.
    pub spacing: Option<f64>,
    /// Drop the default outer spacing.
    pub flush: bool,
}

/// Style of the divider line (or of each half around a label).
pub fn resolve_divider_style(props: &DividerProps) -> StyleRecord {
    let mut record = StyleRecord::default();
    let default_spacing = !props.flush && props.spacing.is_none();
    let spacing = props.spacing.filter(|_| !props.flush);
    match props.orientation {
        Orientation::Horizontal => {
            record
                .classes
                .push("border-t border-gray-300")
                .push_if(default_spacing, "my-4");
            record
                .style
                .set_opt("border-top-color", props.color.clone())
                .set_opt("border-top-width", props.thickness.map(|px| format!("{px}px")))
                .set_opt("margin-top", spacing.map(|px| format!("{px}px")))
                .set_opt("margin-bottom", spacing.map(|px| format!("{px}px")));
        }
        Orientation::Vertical => {
            record
                .classes
                .push("w-px bg-gray-300 self-stretch")
                .push_if(default_spacing, "mx-2");
            record
                .style
                .set_opt("background-color", props.color.clone())
                .set_opt("width", props.thickness.map(|px| format!("{px}px")))
                .set_opt("margin-left", spacing.map(|px| format!("{px}px")))
                .set_opt("margin-right", spacing.map(|px| format!("{px}px")));
        }
    }
    record
}

/// Classes of the wrapper around a labelled horizontal divider.
pub fn labelled_divider_classes(props: &DividerProps) -> ClassList {
    let mut classes = ClassList::new();
    classes
        .push("flex items-center")
        .push_if(!props.flush && props.spacing.is_none(), "my-4");
    classes
}

/// Classes of a divider's label.
pub const DIVIDER_LABEL_CLASSES: &str = "px-4 text-sm text-gray-500";

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn row_maps_tokens_to_classes_and_numbers_to_px() {
        let props = FlexProps {
            align: Some(Align::Center),
            justify: Some(Justify::Between),
            wrap: Some(Wrap::WrapReverse),
            radius: Some(Radius::Lg),
            gap: Some(Dimension::Px(8.0)),
            width: Some("50%".into()),
            ..FlexProps::default()
        };
        let record = resolve_flex_style(Direction::Row, &props);
        assert_eq!(
            record.class_string(),
            "flex flex-row items-center justify-between flex-wrap-reverse rounded-[12px]"
        );
        assert_eq!(record.style.to_css(), "gap: 8px; width: 50%;");
    }

    #[test]
    fn size_overrides_width_and_height() {
        let props = FlexProps {
            width: Some(Dimension::Px(10.0)),
            size: Some(Dimension::Px(24.0)),
            min_size: Some("2rem".into()),
            ..FlexProps::default()
        };
        let style = resolve_flex_style(Direction::Col, &props).style;
        assert_eq!(style.get("width"), Some("24px"));
        assert_eq!(style.get("height"), Some("24px"));
        assert_eq!(style.get("min-width"), Some("2rem"));
        assert_eq!(style.get("min-height"), Some("2rem"));
    }

    #[test]
    fn column_form_resolves_outer_and_bound_props() {
        let props = FlexProps {
            wrap: Some(Wrap::Wrap),
            margin: Some(Spacing::from(12.0)),
            flex: Some("1 1 auto".to_string()),
            max_size: Some("40rem".into()),
            aspect_ratio: Some("4 / 3".to_string()),
            background: Some("#ffffff".into()),
            ..FlexProps::default()
        };
        let record = resolve_flex_style(Direction::Col, &props);
        assert_eq!(record.class_string(), "flex flex-col flex-wrap");
        assert_eq!(record.style.get("margin"), Some("12px"));
        assert_eq!(record.style.get("flex"), Some("1 1 auto"));
        assert_eq!(record.style.get("max-width"), Some("40rem"));
        assert_eq!(record.style.get("max-height"), Some("40rem"));
        assert_eq!(record.style.get("aspect-ratio"), Some("4 / 3"));
        assert_eq!(record.style.get("background-color"), Some("#ffffff"));
    }

    #[test]
    fn padding_sides_border_and_surface_background() {
        let props = FlexProps {
            padding: Some(Spacing::Sides {
                top: Some(4.0),
                right: None,
                bottom: Some(2.5),
                left: None,
            }),
            border: Some(Border::Spec {
                width: None,
                style: Some("dashed".to_string()),
                color: None,
            }),
            background: Some("surface-secondary".into()),
            ..FlexProps::default()
        };
        let style = resolve_flex_style(Direction::Row, &props).style;
        assert_eq!(style.get("padding"), Some("4px 0px 2.5px 0px"));
        assert_eq!(style.get("border"), Some("1px dashed #000"));
        assert_eq!(style.get("background-color"), Some("#f5f5f5"));
        assert_eq!(Border::Width(2.0).to_css(), "2px solid #000");
    }

    #[test]
    fn scheme_background_uses_light_value() {
        let background = Background::Scheme {
            light: Some("surface-tertiary".to_string()),
            dark: Some("#111".to_string()),
        };
        assert_eq!(background.to_css(), Some("#e5e5e5".to_string()));
        assert_eq!(Background::from("rebeccapurple").to_css(), Some("rebeccapurple".to_string()));
    }

    #[test]
    fn col_spans_and_defaults() {
        assert_eq!(col_span_class(4), Some("w-4/12".to_string()));
        assert_eq!(col_span_class(12), Some("w-full".to_string()));
        assert_eq!(col_span_class(0), None);
        assert_eq!(col_span_class(13), None);

        let record = resolve_col_style(Some(6), None, None, None);
        assert_eq!(
            record.class_string(),
            "flex flex-col items-start justify-start w-6/12"
        );
    }

    #[test]
    fn spacer_defaults_to_auto_min_size() {
        assert_eq!(
            spacer_style(None).to_css(),
            "flex: 1; min-width: auto; min-height: auto;"
        );
        assert_eq!(spacer_style(Some(&Dimension::Px(16.0))).get("min-width"), Some("16px"));
    }

    #[test]
    fn divider_spacing_and_flush() {
        let default = resolve_divider_style(&DividerProps::default());
        assert!(default.classes.contains("my-4"));

        let spaced = resolve_divider_style(&DividerProps {
            spacing: Some(12.0),
            thickness: Some(2.0),
            color: Some("#ddd".to_string()),
            ..DividerProps::default()
        });
        assert!(!spaced.classes.contains("my-4"));
        assert_eq!(spaced.style.get("margin-top"), Some("12px"));
        assert_eq!(spaced.style.get("border-top-width"), Some("2px"));

        let flush = resolve_divider_style(&DividerProps {
            orientation: Orientation::Vertical,
            flush: true,
            spacing: Some(12.0),
            ..DividerProps::default()
        });
        assert!(flush.classes.contains("self-stretch"));
        assert!(!flush.classes.contains("mx-2"));
        assert_eq!(flush.style.get("margin-left"), None);
    }

    #[test]
    fn layout_tokens_parse() {
        assert_eq!("wrap-reverse".parse::<Wrap>(), Ok(Wrap::WrapReverse));
        assert_eq!("4xl".parse::<Radius>(), Ok(Radius::Xxxxl));
        assert!("diagonal".parse::<Direction>().is_err());
    }
}
