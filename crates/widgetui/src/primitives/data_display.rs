use widgetui_core::badge::{resolve_badge_classes, BadgeVariant};
use widgetui_core::chart::{
    bar_heights, fill_for, fmt_num, line_points, pie_slices, polyline_attr, ChartDatum,
    ChartKind, DONUT_INNER_RADIUS, VIEW_BOX,
};
use widgetui_core::image::{ImageErrorOutcome, ImageState, UNAVAILABLE_MESSAGE};
use widgetui_core::layout::Dimension;
use widgetui_core::markdown::render_markdown;
use widgetui_core::typography::{
    heading_level, resolve_caption_style, resolve_label_style, resolve_text_style,
    resolve_title_style, TextAlign, TextSize, TitleSize, Weight, REQUIRED_MARKER_CLASSES,
};
use widgetui_core::InlineStyle;

use super::*;

#[component]
/// Paragraph text.
pub fn Text(
    #[prop(optional)] size: TextSize,
    #[prop(optional)] weight: Weight,
    #[prop(optional)] align: TextAlign,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let record = resolve_text_style(size, weight, align, color.as_deref());
    view! {
        <p
            class=merge_layout_class(&record.class_string(), layout_class)
            style=record.style.to_css()
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-size=size.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Heading rendered as `<h1>`..`<h6>`; the visual size is independent of the level.
pub fn Title(
    #[prop(default = 2)] level: u8,
    #[prop(optional)] size: TitleSize,
    #[prop(optional)] align: TextAlign,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let record = resolve_title_style(size, align, color.as_deref());
    let class = merge_layout_class(&record.class_string(), layout_class);
    let style = record.style.to_css();
    let level = heading_level(level);

    let heading = match level {
        1 => html::h1().into_any(),
        2 => html::h2().into_any(),
        3 => html::h3().into_any(),
        4 => html::h4().into_any(),
        5 => html::h5().into_any(),
        _ => html::h6().into_any(),
    };
    heading
        .attr("class", class)
        .attr("style", style)
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "title")
        .attr("data-ui-level", level.to_string())
        .child(children())
}

#[component]
/// Secondary annotation text.
pub fn Caption(
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let record = resolve_caption_style(color.as_deref());
    view! {
        <span
            class=merge_layout_class(&record.class_string(), layout_class)
            style=record.style.to_css()
            data-ui-primitive="true"
            data-ui-kind="caption"
        >
            {children()}
        </span>
    }
}

#[component]
/// Form label with an optional required marker.
pub fn Label(
    #[prop(optional, into)] html_for: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let record = resolve_label_style(color.as_deref());
    view! {
        <label
            for=html_for
            class=merge_layout_class(&record.class_string(), layout_class)
            style=record.style.to_css()
            data-ui-primitive="true"
            data-ui-kind="label"
        >
            {children()}
            {required.then(|| view! { <span class=REQUIRED_MARKER_CLASSES aria-hidden="true">"*"</span> })}
        </label>
    }
}

#[component]
/// Short markdown copy. Raw HTML in `content` is escaped.
pub fn Markdown(
    #[prop(into)] content: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("text-base leading-relaxed", layout_class)
            data-ui-primitive="true"
            data-ui-kind="markdown"
            inner_html=move || content.with(|content| render_markdown(content))
        ></div>
    }
}

#[component]
/// Compact status label.
pub fn Badge(
    #[prop(optional)] color: Color,
    #[prop(optional)] variant: BadgeVariant,
    #[prop(default = Size::Sm)] size: Size,
    #[prop(default = true)] pill: bool,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let classes = resolve_badge_classes(color, variant, size, pill);
    view! {
        <span
            class=merge_layout_class(&classes.to_string(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-color=color.token()
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {label}
            {children.map(|children| children())}
        </span>
    }
}

fn chart_legend(data: &[ChartDatum]) -> impl IntoView {
    data.iter()
        .enumerate()
        .map(|(index, datum)| {
            let swatch = format!("background-color: {};", fill_for(data, index));
            view! {
                <li class="inline-flex items-center gap-1 text-xs text-gray-600">
                    <span class="inline-block w-2.5 h-2.5 rounded-sm" style=swatch></span>
                    {datum.label.clone()}
                </li>
            }
        })
        .collect_view()
}

fn bar_chart(data: &[ChartDatum]) -> View {
    let heights = bar_heights(data);
    let bars = data
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (datum, height))| {
            let style = format!(
                "height: {}%; background-color: {};",
                fmt_num(height),
                fill_for(data, index)
            );
            view! {
                <div class="flex-1 flex flex-col items-center justify-end h-full gap-1" data-ui-slot="bar">
                    <div class="w-full rounded-t" style=style title=fmt_num(datum.value)></div>
                    <span class="text-xs text-gray-600 truncate">{datum.label.clone()}</span>
                </div>
            }
        })
        .collect_view();
    view! { <div class="flex items-end gap-2 h-full">{bars}</div> }.into_view()
}

fn line_chart(data: &[ChartDatum]) -> View {
    let points = line_points(data);
    let stroke = fill_for(data, 0);
    let dots = points
        .iter()
        .map(|(x, y)| {
            view! { <circle cx=fmt_num(*x) cy=fmt_num(*y) r="1.5" fill=stroke.clone()></circle> }
        })
        .collect_view();
    let view_box = format!("0 0 {0} {0}", fmt_num(VIEW_BOX));
    view! {
        <svg viewBox=view_box preserveAspectRatio="none" class="w-full h-full overflow-visible">
            <polyline
                points=polyline_attr(&points)
                fill="none"
                stroke=stroke.clone()
                stroke-width="1"
                vector-effect="non-scaling-stroke"
            ></polyline>
            {dots}
        </svg>
    }
    .into_view()
}

fn pie_chart(data: &[ChartDatum], inner_radius: f64) -> View {
    let slices = pie_slices(data, inner_radius)
        .into_iter()
        .map(|slice| {
            let label = data
                .get(slice.index)
                .map(|datum| datum.label.clone())
                .unwrap_or_default();
            view! {
                <path d=slice.path fill=slice.fill data-ui-slot="slice">
                    <title>{label}</title>
                </path>
            }
        })
        .collect_view();
    let view_box = format!("0 0 {0} {0}", fmt_num(VIEW_BOX));
    view! {
        <svg viewBox=view_box class="h-full aspect-square">{slices}</svg>
        <ul class="flex flex-wrap gap-3 mt-2">{chart_legend(data)}</ul>
    }
    .into_view()
}

#[component]
/// Bar, line, pie, or donut chart drawn with plain markup and SVG.
pub fn Chart(
    data: Vec<ChartDatum>,
    #[prop(optional)] kind: ChartKind,
    #[prop(default = 200)] height_px: u32,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let body = match kind {
        ChartKind::Bar => bar_chart(&data),
        ChartKind::Line => line_chart(&data),
        ChartKind::Pie => pie_chart(&data, 0.0),
        ChartKind::Donut => pie_chart(&data, DONUT_INNER_RADIUS),
    };
    let plot_style = format!("height: {height_px}px;");

    view! {
        <figure
            class=merge_layout_class("flex flex-col gap-2", layout_class)
            data-ui-primitive="true"
            data-ui-kind="chart"
            data-ui-variant=kind.token()
        >
            {title.map(|title| view! { <figcaption class="text-sm font-medium">{title}</figcaption> })}
            <div class="w-full" style=plot_style data-ui-slot="plot">{body}</div>
        </figure>
    }
}

#[component]
/// Image with a loading shimmer, a one-shot fallback source, and an unavailable placeholder.
pub fn Image(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: String,
    /// Tried once when `src` fails.
    #[prop(optional, into)]
    fallback_src: Option<String>,
    #[prop(default = true)] show_placeholder: bool,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] radius: Option<Dimension>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_load: Option<Callback<()>>,
    /// Called once no source is left to try.
    #[prop(optional)]
    on_error: Option<Callback<()>>,
) -> impl IntoView {
    let state = create_rw_signal(ImageState::new(src, show_placeholder));
    let fallback_src = store_value(fallback_src);

    let mut frame = InlineStyle::new();
    frame
        .set_opt("width", width.as_ref().map(Dimension::to_string))
        .set_opt("height", height.as_ref().map(Dimension::to_string))
        .set_opt("border-radius", radius.as_ref().map(Dimension::to_string));

    let handle_error = move |_| {
        let outcome = fallback_src
            .with_value(|fallback| state.try_update(|state| state.on_error(fallback.as_deref())));
        if outcome == Some(ImageErrorOutcome::Failed) {
            if let Some(on_error) = on_error.as_ref() {
                on_error.call(());
            }
        }
    };

    view! {
        <div
            class=merge_layout_class("relative overflow-hidden", layout_class)
            style=frame.to_css()
            data-ui-primitive="true"
            data-ui-kind="image"
            data-ui-state=move || {
                state.with(|state| {
                    if state.failed {
                        "failed"
                    } else if state.loading {
                        "loading"
                    } else {
                        "loaded"
                    }
                })
            }
        >
            <Show when=move || state.with(|state| state.loading)>
                <div class="absolute inset-0 animate-pulse bg-gray-200" data-ui-slot="shimmer"></div>
            </Show>
            <img
                src=move || state.with(|state| state.src.clone())
                alt=alt
                class=move || state.with(ImageState::img_classes)
                on:load=move |_| {
                    state.update(ImageState::on_load);
                    if let Some(on_load) = on_load.as_ref() {
                        on_load.call(());
                    }
                }
                on:error=handle_error
            />
            <Show when=move || state.with(|state| state.failed)>
                <div
                    class="absolute inset-0 flex items-center justify-center bg-gray-100 text-sm text-gray-500"
                    data-ui-slot="unavailable"
                >
                    {UNAVAILABLE_MESSAGE}
                </div>
            </Show>
        </div>
    }
}
