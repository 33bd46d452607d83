//! Leptos component library for application interfaces.
//!
//! Components resolve their classes and inline styles through [`widgetui_core`] and render
//! markup with a stable `data-ui-*` DOM contract. Interactive components keep their transient
//! state (hover, loading pulse, open popover, checked toggle) in component-local signals and hand
//! [`Action`] objects to the host through a callback prop or an [`ActionProvider`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconByName};
pub use primitives::{
    provide_action_handler, provide_theme, use_theme, ActionHandler, ActionProvider, Badge,
    Button, Caption, Chart, Checkbox, Col, DatePicker, Divider, Form, Image, Input, Label,
    LayoutBox, Markdown, RadioGroup, Row, Select, Spacer, Text, Textarea, ThemeProvider, Title,
    Transition,
};
pub use widgetui_core::{
    badge::BadgeVariant,
    chart::{ChartDatum, ChartKind},
    icon::IconName,
    layout::{
        Align, Background, Border, Dimension, Direction, Justify, Orientation, Radius, Spacing,
        Wrap,
    },
    select::SelectOption,
    transition::TransitionKind,
    typography::{TextAlign, TextSize, TitleSize, Weight},
    Action, Color, IconSize, Size, StylePreset, ThemeConfig, Variant,
};

/// Convenience imports for application crates composing widgetui components.
///
/// [`Transition`] and [`Form`] are left out because `leptos` and `leptos_router` export
/// components with the same names; import them by path.
pub mod prelude {
    pub use crate::{
        provide_action_handler, provide_theme, use_theme, Action, ActionHandler, ActionProvider,
        Align, Background, Badge, BadgeVariant, Border, Button, Caption, Chart, ChartDatum,
        ChartKind, Checkbox, Col, Color, DatePicker, Dimension, Direction, Divider, Icon,
        IconByName, IconName, IconSize, Image, Input, Justify, Label, LayoutBox, Markdown,
        Orientation, RadioGroup, Radius, Row, Select, SelectOption, Size, Spacer, Spacing,
        StylePreset, Text, TextAlign, TextSize, Textarea, ThemeConfig, ThemeProvider, Title,
        TitleSize, TransitionKind, Variant, Weight, Wrap,
    };
}
