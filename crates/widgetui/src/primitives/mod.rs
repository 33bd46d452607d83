//! Control, picker, layout, typography, content, and overlay primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::logging::{log, warn};
use leptos::*;
use widgetui_core::icon::IconName;
use widgetui_core::{Action, Color, IconSize, Size, Variant};

use crate::Icon;

mod context;
mod controls;
mod data_display;
mod layout;
mod overlays;
mod pickers;

pub use context::{
    provide_action_handler, provide_theme, use_theme, ActionHandler, ActionProvider, ThemeProvider,
};
pub use controls::{Button, Checkbox, Form, Input, RadioGroup, Textarea};
pub use data_display::{Badge, Caption, Chart, Image, Label, Markdown, Text, Title};
pub use layout::{Col, Divider, LayoutBox, Row, Spacer};
pub use overlays::Transition;
pub use pickers::{DatePicker, Select};

pub(crate) use context::ActionSink;

pub(crate) fn merge_layout_class(base: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Inline chevron shared by the popover triggers; the catalog has no downward glyph.
pub(crate) fn chevron_down(width: u16, height: u16, position_css: String) -> impl IntoView {
    view! {
        <svg
            data-ui-slot="chevron"
            class="absolute pointer-events-none"
            style=position_css
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=width
            height=height
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <polyline points="6 9 12 15 18 9"></polyline>
        </svg>
    }
}
