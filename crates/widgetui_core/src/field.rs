//! Style tables for text fields and popover triggers (Select, DatePicker).

use crate::style::{ClassList, StyleRecord};
use crate::tokens::{Size, Variant};

const FIELD_BASE: &str = "w-full rounded-md border bg-white px-3 py-2 text-sm \
    focus:outline-none focus:ring-2 focus:ring-offset-2 \
    disabled:cursor-not-allowed disabled:opacity-50";
const FIELD_NORMAL: &str = "border-gray-300 focus:border-primary-500 focus:ring-primary-500";
const FIELD_ERROR: &str = "border-danger-500 focus:border-danger-500 focus:ring-danger-500";

/// Classes of the `<label>` rendered above a field.
pub const FIELD_LABEL_CLASSES: &str = "block text-sm font-medium text-gray-700 mb-1";

/// Trigger text color while no value is chosen.
pub const PLACEHOLDER_TEXT_COLOR: &str = "#8F8F8F";
/// Trigger text color once a value is chosen.
pub const VALUE_TEXT_COLOR: &str = "#0E0E0E";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which text control is being styled.
pub enum TextFieldKind {
    /// Single-line `<input>`.
    Input,
    /// Multi-line `<textarea>`, vertically resizable.
    Textarea,
}

const fn input_size_classes(size: Size) -> &'static str {
    match size {
        Size::Xxxs => "h-[22px] px-2 text-xs",
        Size::Xxs => "h-[24px] px-2.5 text-xs",
        Size::Xs => "h-[26px] px-3 text-sm",
        Size::Sm => "h-[28px] px-3.5 text-sm",
        Size::Md => "h-[32px] px-4 text-base",
        Size::Lg => "h-[36px] px-5 text-base",
        Size::Xl => "h-[40px] px-6 text-lg",
        Size::Xxl => "h-[44px] px-7 text-lg",
        Size::Xxxl => "h-[48px] px-8 text-xl",
    }
}

const fn textarea_size_classes(size: Size) -> &'static str {
    match size {
        Size::Xxxs => "min-h-[22px] px-2 py-1 text-xs",
        Size::Xxs => "min-h-[24px] px-2.5 py-1.5 text-xs",
        Size::Xs => "min-h-[26px] px-3 py-2 text-sm",
        Size::Sm => "min-h-[28px] px-3.5 py-2 text-sm",
        Size::Md => "min-h-[32px] px-4 py-2 text-base",
        Size::Lg => "min-h-[36px] px-5 py-2.5 text-base",
        Size::Xl => "min-h-[40px] px-6 py-3 text-lg",
        Size::Xxl => "min-h-[44px] px-7 py-3 text-lg",
        Size::Xxxl => "min-h-[48px] px-8 py-4 text-xl",
    }
}

/// Class list of an Input or Textarea element.
pub fn field_classes(kind: TextFieldKind, size: Size, error: bool) -> ClassList {
    let mut classes = ClassList::new();
    classes.push(FIELD_BASE);
    match kind {
        TextFieldKind::Input => classes.push(input_size_classes(size)),
        TextFieldKind::Textarea => classes.push("resize-y").push(textarea_size_classes(size)),
    };
    classes.push(if error { FIELD_ERROR } else { FIELD_NORMAL });
    classes
}

/// Classes of the helper line below a field.
pub const fn helper_text_classes(error: bool) -> &'static str {
    if error {
        "mt-1 text-sm text-danger-600"
    } else {
        "mt-1 text-sm text-gray-500"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Geometry of a trigger at one size.
pub struct TriggerSpec {
    /// Font size in pixels.
    pub font_px: u16,
    /// Height in pixels.
    pub height_px: u16,
    /// Horizontal padding class.
    pub padding_x_class: &'static str,
    /// Chevron glyph width and height in pixels.
    pub chevron: (u16, u16),
    /// Chevron distance from the right edge in pixels.
    pub chevron_right_px: f32,
    /// Chevron distance from the top edge in pixels.
    pub chevron_top_px: f32,
}

/// Trigger geometry for `size`.
pub const fn trigger_spec(size: Size) -> TriggerSpec {
    let (font_px, height_px, padding_x_class, chevron, chevron_right_px, chevron_top_px) =
        match size {
            Size::Xxxs => (12, 22, "px-1.5", (6, 9), 6.0, 9.0),
            Size::Xxs => (12, 24, "px-2", (6, 9), 6.0, 9.5),
            Size::Xs => (14, 26, "px-2", (7, 11), 7.0, 8.0),
            Size::Sm => (14, 28, "px-2", (7, 11), 6.5, 9.0),
            Size::Md => (14, 32, "px-3", (8, 12), 8.0, 10.0),
            Size::Lg => (14, 36, "px-3", (8, 12), 8.0, 12.0),
            Size::Xl => (14, 40, "px-3", (8, 12), 8.0, 14.0),
            Size::Xxl => (16, 44, "px-3", (8, 12), 10.0, 16.0),
            Size::Xxxl => (16, 48, "px-3.5", (9, 13), 12.0, 17.0),
        };
    TriggerSpec {
        font_px,
        height_px,
        padding_x_class,
        chevron,
        chevron_right_px,
        chevron_top_px,
    }
}

/// Corner radius class of a trigger.
pub const fn trigger_radius(size: Size, pill: bool) -> &'static str {
    if pill {
        return "rounded-full";
    }
    match size {
        Size::Xxxs | Size::Xxs | Size::Xs | Size::Sm => "rounded-md",
        Size::Md | Size::Lg => "rounded-lg",
        Size::Xl | Size::Xxl | Size::Xxxl => "rounded-xl",
    }
}

const fn trigger_variant_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Solid => "bg-[#181818] text-white hover:bg-[#303030]",
        Variant::Soft => "bg-[#EBEBEB] hover:bg-[#E2E2E2]",
        Variant::Outline => {
            "bg-transparent border border-[#D8D8D8] hover:bg-[#FAFAFA] hover:border-[#CBCBCB]"
        }
        Variant::Ghost => "bg-transparent hover:bg-[#EBEBEB]",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Props shared by popover triggers.
pub struct TriggerStyleInput {
    /// Visual treatment.
    pub variant: Variant,
    /// Height scale.
    pub size: Size,
    /// Fully rounded ends.
    pub pill: bool,
    /// Full container width.
    pub block: bool,
    /// Disabled look.
    pub disabled: bool,
    /// Whether a value is currently chosen.
    pub has_value: bool,
}

impl Default for TriggerStyleInput {
    fn default() -> Self {
        Self {
            variant: Variant::Outline,
            size: Size::Md,
            pill: false,
            block: false,
            disabled: false,
            has_value: false,
        }
    }
}

/// Resolves the trigger button's classes and inline geometry.
pub fn resolve_trigger_style(input: TriggerStyleInput) -> StyleRecord {
    let spec = trigger_spec(input.size);
    let mut record = StyleRecord::default();
    record
        .classes
        .push("appearance-none w-full inline-flex items-center text-left transition-colors duration-300")
        .push(spec.padding_x_class)
        .push(trigger_radius(input.size, input.pill))
        .push(trigger_variant_classes(input.variant))
        .push(if input.disabled {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer"
        });

    let text_color = match (input.variant, input.has_value) {
        (Variant::Solid, _) => "#ffffff",
        (_, true) => VALUE_TEXT_COLOR,
        (_, false) => PLACEHOLDER_TEXT_COLOR,
    };
    record
        .style
        .set("height", format!("{}px", spec.height_px))
        .set("font-size", format!("{}px", spec.font_px))
        .set("color", text_color)
        .set("padding-right", "28px");
    record
}

/// Classes of the wrapper around a trigger and its popover.
pub fn trigger_wrapper_classes(block: bool) -> ClassList {
    let mut classes = ClassList::new();
    classes.push("relative inline-block").push_if(block, "w-full");
    classes
}

/// Inline placement of the chevron glyph.
pub fn chevron_position_css(size: Size) -> String {
    let spec = trigger_spec(size);
    format!(
        "right: {}px; top: {}px;",
        spec.chevron_right_px, spec.chevron_top_px
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn input_and_textarea_tables_cover_every_size() {
        for size in Size::ALL {
            let input = field_classes(TextFieldKind::Input, size, false).to_string();
            assert!(input.contains(&format!("h-[{}px]", size.height_px())), "{input}");
            let textarea = field_classes(TextFieldKind::Textarea, size, false).to_string();
            assert!(textarea.contains(&format!("min-h-[{}px]", size.height_px())));
            assert!(textarea.contains("resize-y"));
        }
    }

    #[test]
    fn error_state_swaps_border_and_helper_color() {
        let classes = field_classes(TextFieldKind::Input, Size::Md, true);
        assert!(classes.contains("border-danger-500"));
        assert!(!classes.contains("border-gray-300"));
        assert_eq!(helper_text_classes(true), "mt-1 text-sm text-danger-600");
        assert_eq!(helper_text_classes(false), "mt-1 text-sm text-gray-500");
    }

    #[test]
    fn trigger_radius_follows_size_bands() {
        assert_eq!(trigger_radius(Size::Sm, false), "rounded-md");
        assert_eq!(trigger_radius(Size::Lg, false), "rounded-lg");
        assert_eq!(trigger_radius(Size::Xxxl, false), "rounded-xl");
        assert_eq!(trigger_radius(Size::Xxxl, true), "rounded-full");
    }

    #[test]
    fn trigger_text_color_tracks_value_presence() {
        let empty = resolve_trigger_style(TriggerStyleInput::default());
        assert_eq!(empty.style.get("color"), Some(PLACEHOLDER_TEXT_COLOR));
        assert_eq!(empty.style.get("height"), Some("32px"));
        assert!(empty.classes.contains("border-[#D8D8D8]"));

        let filled = resolve_trigger_style(TriggerStyleInput {
            has_value: true,
            ..TriggerStyleInput::default()
        });
        assert_eq!(filled.style.get("color"), Some(VALUE_TEXT_COLOR));
    }

    #[test]
    fn chevron_position_uses_fractional_offsets() {
        assert_eq!(chevron_position_css(Size::Sm), "right: 6.5px; top: 9px;");
        assert_eq!(trigger_spec(Size::Xxxl).chevron, (9, 13));
    }
}
