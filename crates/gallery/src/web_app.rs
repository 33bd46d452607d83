use leptos::logging::log;
use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title as DocumentTitle};
use leptos_router::{Route, Router, Routes, A};
use widgetui::prelude::*;
use widgetui::Action;

use crate::sections::{
    ContentSection, ControlsSection, LayoutSection, PickersSection, TypographySection,
};
use crate::theme::gallery_theme;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Controls"),
    ("/pickers", "Pickers & forms"),
    ("/layout", "Layout"),
    ("/typography", "Typography"),
    ("/content", "Content"),
];

#[component]
/// Gallery root: theme, action sink, navigation, and one route per component family.
pub fn GalleryApp() -> impl IntoView {
    provide_meta_context();

    let last_action = create_rw_signal::<Option<Action>>(None);
    let on_action = Callback::new(move |action: Action| {
        log!("gallery action: {action}");
        last_action.set(Some(action));
    });

    view! {
        <DocumentTitle text="widgetui gallery" />
        <Meta name="description" content="Every widgetui component rendered with live state." />

        <ThemeProvider theme=gallery_theme()>
            <ActionProvider on_action=on_action>
                <Router>
                    <div class="min-h-screen flex flex-col bg-gray-50 text-gray-900">
                        <header class="border-b border-gray-200 bg-white">
                            <Row align=Align::Center gap=16.0 padding=16.0>
                                <Icon name=IconName::Cube size=IconSize::Lg />
                                <Title level=1 size=TitleSize::Sm>"widgetui"</Title>
                                <Spacer />
                                <nav class="flex gap-4 text-sm">
                                    {NAV_LINKS
                                        .into_iter()
                                        .map(|(href, label)| {
                                            view! {
                                                <A href=href exact=true active_class="font-semibold">
                                                    {label}
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                            </Row>
                        </header>
                        <main class="flex-1 p-6">
                            <Routes>
                                <Route path="" view=ControlsSection />
                                <Route path="/pickers" view=PickersSection />
                                <Route path="/layout" view=LayoutSection />
                                <Route path="/typography" view=TypographySection />
                                <Route path="/content" view=ContentSection />
                            </Routes>
                        </main>
                        <footer class="border-t border-gray-200 bg-white px-6 py-3" data-gallery-slot="last-action">
                            <Caption>
                                {move || {
                                    last_action
                                        .get()
                                        .map(|action| format!("Last action: {action}"))
                                        .unwrap_or_else(|| "No action dispatched yet".to_string())
                                }}
                            </Caption>
                        </footer>
                    </div>
                </Router>
            </ActionProvider>
        </ThemeProvider>
    }
}
