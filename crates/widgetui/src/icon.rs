use leptos::logging::warn;
use leptos::*;
use widgetui_core::{icon::IconName, IconSize};

#[component]
/// Renders a catalog icon as an inline `0 0 24 24` SVG.
pub fn Icon(
    /// Catalog glyph.
    name: IconName,
    /// Standardized icon size token.
    #[prop(optional)]
    size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();
    let class = match layout_class {
        Some(layout_class) if !layout_class.is_empty() => {
            format!("ui-icon {} {layout_class}", size.classes())
        }
        _ => format!("ui-icon {}", size.classes()),
    };

    view! {
        <svg
            class=class
            data-icon=name.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=name.svg_body()
        />
    }
}

#[component]
/// Renders an icon looked up by its catalog token. Unknown tokens render nothing.
pub fn IconByName(
    #[prop(into)] name: String,
    #[prop(optional)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    match name.parse::<IconName>() {
        Ok(icon) => {
            view! { <Icon name=icon size=size layout_class=layout_class.unwrap_or("") /> }
                .into_view()
        }
        Err(err) => {
            warn!("icon lookup failed: {err}");
            View::default()
        }
    }
}
