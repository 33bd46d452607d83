//! Theme and action plumbing shared through Leptos context.

use widgetui_core::ThemeConfig;

use super::*;

#[derive(Clone)]
struct ThemeContext(StoredValue<ThemeConfig>);

/// Makes `theme` available to every component below the current owner.
pub fn provide_theme(theme: ThemeConfig) {
    provide_context(ThemeContext(store_value(theme)));
}

/// Returns the provided theme, or the built-in defaults when none was provided.
pub fn use_theme() -> ThemeConfig {
    use_context::<ThemeContext>()
        .map(|ThemeContext(theme)| theme.get_value())
        .unwrap_or_default()
}

#[component]
/// Provides a palette and loading timings to its children.
pub fn ThemeProvider(theme: ThemeConfig, children: Children) -> impl IntoView {
    provide_theme(theme);
    children().into_view()
}

#[derive(Clone, Copy)]
/// Host-side receiver for actions that components were not given a direct callback for.
pub struct ActionHandler(Callback<Action>);

impl ActionHandler {
    /// Wraps `handler`.
    pub fn new(handler: impl Fn(Action) + 'static) -> Self {
        Self(Callback::new(handler))
    }

    /// Hands `action` to the host.
    pub fn handle(&self, action: Action) {
        self.0.call(action);
    }
}

/// Registers `handler` as the fallback action receiver for the current owner.
pub fn provide_action_handler(handler: ActionHandler) {
    provide_context(handler);
}

#[component]
/// Routes actions from descendants without their own `on_action` to `on_action`.
pub fn ActionProvider(on_action: Callback<Action>, children: Children) -> impl IntoView {
    provide_action_handler(ActionHandler(on_action));
    children().into_view()
}

/// Destination for a component's actions, resolved once at setup while the owner is current.
#[derive(Clone, Copy)]
pub(crate) struct ActionSink {
    direct: Option<Callback<Action>>,
    provided: Option<ActionHandler>,
}

impl ActionSink {
    pub(crate) fn resolve(direct: Option<Callback<Action>>) -> Self {
        Self {
            direct,
            provided: use_context::<ActionHandler>(),
        }
    }

    pub(crate) fn dispatch(self, action: Action) {
        if let Some(direct) = self.direct {
            direct.call(action);
        } else if let Some(provided) = self.provided {
            provided.handle(action);
        } else {
            log!("unhandled action: {action}");
        }
    }
}
