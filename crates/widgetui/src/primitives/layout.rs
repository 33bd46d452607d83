use widgetui_core::layout::{
    box_style, labelled_divider_classes, resolve_col_style, resolve_divider_style,
    resolve_flex_style, spacer_style, Align, Background, Border, Dimension, Direction,
    DividerProps as CoreDividerProps, FlexProps, Justify, Orientation, Radius, Spacing, Wrap, DIVIDER_LABEL_CLASSES,
};
use widgetui_core::InlineStyle;

use super::*;

#[component]
/// Plain container with padding, margin, background, and corner radius.
pub fn LayoutBox(
    #[prop(optional, into)] padding: Option<Dimension>,
    #[prop(optional, into)] margin: Option<Dimension>,
    /// Raw CSS color.
    #[prop(optional, into)]
    background: Option<String>,
    #[prop(optional, into)] radius: Option<Dimension>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = box_style(
        padding.as_ref(),
        margin.as_ref(),
        background.as_deref(),
        radius.as_ref(),
    );

    view! {
        <div
            class=merge_layout_class("block", layout_class)
            style=style.to_css()
            data-ui-primitive="true"
            data-ui-kind="box"
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal flex container.
pub fn Row(
    #[prop(optional)] align: Option<Align>,
    #[prop(optional)] justify: Option<Justify>,
    #[prop(optional)] wrap: Option<Wrap>,
    #[prop(optional)] radius: Option<Radius>,
    #[prop(optional, into)] gap: Option<Dimension>,
    /// Raw `flex` shorthand.
    #[prop(optional, into)]
    flex: Option<String>,
    #[prop(optional, into)] padding: Option<Spacing>,
    #[prop(optional, into)] margin: Option<Spacing>,
    #[prop(optional)] border: Option<Border>,
    /// Surface token, raw CSS color, or light/dark pair.
    #[prop(optional, into)]
    background: Option<Background>,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    /// Width and height at once.
    #[prop(optional, into)]
    size: Option<Dimension>,
    #[prop(optional, into)] min_width: Option<Dimension>,
    #[prop(optional, into)] min_height: Option<Dimension>,
    #[prop(optional, into)] min_size: Option<Dimension>,
    #[prop(optional, into)] max_width: Option<Dimension>,
    #[prop(optional, into)] max_height: Option<Dimension>,
    #[prop(optional, into)] max_size: Option<Dimension>,
    #[prop(optional, into)] aspect_ratio: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let record = resolve_flex_style(
        Direction::Row,
        &FlexProps {
            align,
            justify,
            wrap,
            radius,
            gap,
            flex,
            padding,
            margin,
            border,
            background,
            width,
            height,
            size,
            min_width,
            min_height,
            min_size,
            max_width,
            max_height,
            max_size,
            aspect_ratio,
        },
    );

    view! {
        <div
            class=merge_layout_class(&record.class_string(), layout_class)
            style=record.style.to_css()
            data-ui-primitive="true"
            data-ui-kind="row"
            data-ui-align=align.map(Align::token)
            data-ui-justify=justify.map(Justify::token)
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical stack, optionally spanning part of a 12-column row.
pub fn Col(
    /// Columns out of 12; out-of-range spans are ignored.
    #[prop(optional)]
    span: Option<u8>,
    #[prop(optional, into)] gap: Option<Dimension>,
    #[prop(optional)] align: Option<Align>,
    #[prop(optional)] justify: Option<Justify>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let record = resolve_col_style(span, gap.as_ref(), align, justify);

    view! {
        <div
            class=merge_layout_class(&record.class_string(), layout_class)
            style=record.style.to_css()
            data-ui-primitive="true"
            data-ui-kind="col"
            data-ui-span=span.map(|span| span.to_string())
        >
            {children()}
        </div>
    }
}

#[component]
/// Flexible gap that absorbs free space in a row or column.
pub fn Spacer(
    #[prop(optional, into)] min_size: Option<Dimension>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("shrink-0", layout_class)
            style=spacer_style(min_size.as_ref()).to_css()
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="spacer"
        ></div>
    }
}

#[component]
/// Horizontal or vertical rule. A horizontal divider with `label` centers the text between two
/// line halves.
pub fn Divider(
    #[prop(optional)] orientation: Orientation,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] color: Option<String>,
    /// Line thickness in pixels.
    #[prop(optional)]
    thickness: Option<f64>,
    /// Outer spacing in pixels.
    #[prop(optional)]
    spacing: Option<f64>,
    #[prop(optional)] flush: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let props = CoreDividerProps {
        orientation,
        color,
        thickness,
        spacing,
        flush,
    };

    match (orientation, label) {
        (Orientation::Horizontal, Some(label)) => {
            let wrapper = labelled_divider_classes(&props);
            let half = resolve_divider_style(&CoreDividerProps {
                flush: true,
                spacing: None,
                ..props.clone()
            });
            let mut wrapper_style = InlineStyle::new();
            if let Some(px) = props.spacing.filter(|_| !props.flush) {
                wrapper_style
                    .set("margin-top", format!("{px}px"))
                    .set("margin-bottom", format!("{px}px"));
            }
            let half_class = format!("flex-1 {}", half.class_string());
            let half_style = half.style.to_css();

            view! {
                <div
                    class=merge_layout_class(&wrapper.to_string(), layout_class)
                    style=wrapper_style.to_css()
                    role="separator"
                    data-ui-primitive="true"
                    data-ui-kind="divider"
                    data-ui-variant=orientation.token()
                >
                    <div class=half_class.clone() style=half_style.clone()></div>
                    <span class=DIVIDER_LABEL_CLASSES data-ui-slot="label">{label}</span>
                    <div class=half_class style=half_style></div>
                </div>
            }
            .into_view()
        }
        (orientation, _) => {
            let record = resolve_divider_style(&props);
            view! {
                <div
                    class=merge_layout_class(&record.class_string(), layout_class)
                    style=record.style.to_css()
                    role="separator"
                    aria-orientation=orientation.token()
                    data-ui-primitive="true"
                    data-ui-kind="divider"
                    data-ui-variant=orientation.token()
                ></div>
            }
            .into_view()
        }
    }
}
