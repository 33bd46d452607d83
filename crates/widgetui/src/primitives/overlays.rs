use std::time::Duration;

use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, TimeoutHandle};
use wasm_bindgen::JsCast;
use widgetui_core::transition::{
    reduce_transition, TransitionEffect, TransitionEvent, TransitionKind, TransitionState,
};

use super::*;

/// Closes a popover on a `mousedown` outside `root` or on Escape while `open` holds.
/// Both listeners are removed when the owning component unmounts.
pub(crate) fn install_popover_dismiss(
    root: NodeRef<html::Div>,
    open: Signal<bool>,
    close: Callback<()>,
) {
    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let inside = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .zip(root.get_untracked())
            .is_some_and(|(target, root)| root.contains(Some(&target)));
        if !inside {
            close.call(());
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" || !open.get_untracked() {
            return;
        }
        ev.prevent_default();
        close.call(());
    });
    on_cleanup(move || escape_listener.remove());
}

#[derive(Clone, Copy)]
struct TransitionDriver {
    state: RwSignal<TransitionState>,
    timers: StoredValue<Vec<TimeoutHandle>>,
    frames: StoredValue<Vec<AnimationFrameRequestHandle>>,
    duration: Duration,
}

impl TransitionDriver {
    fn send(self, event: TransitionEvent) {
        let Some(mut next) = self.state.try_get_untracked() else {
            return;
        };
        let effects = reduce_transition(&mut next, event, self.duration);
        if self.state.try_get_untracked() != Some(next) {
            self.state.try_set(next);
        }
        for effect in effects {
            match effect {
                TransitionEffect::CancelTimers => self.cancel(),
                TransitionEffect::RequestFrame(generation) => {
                    match request_animation_frame_with_handle(move || {
                        self.send(TransitionEvent::FrameElapsed { generation });
                    }) {
                        Ok(handle) => {
                            self.frames.try_update_value(|frames| frames.push(handle));
                        }
                        Err(err) => warn!("transition frame request failed: {err:?}"),
                    }
                }
                TransitionEffect::ScheduleExit { generation, after } => {
                    match set_timeout_with_handle(
                        move || self.send(TransitionEvent::ExitElapsed { generation }),
                        after,
                    ) {
                        Ok(handle) => {
                            self.timers.try_update_value(|timers| timers.push(handle));
                        }
                        Err(err) => warn!("transition exit timer failed: {err:?}"),
                    }
                }
            }
        }
    }

    fn cancel(self) {
        self.timers.try_update_value(|timers| {
            for handle in timers.drain(..) {
                handle.clear();
            }
        });
        self.frames.try_update_value(|frames| {
            for handle in frames.drain(..) {
                handle.cancel();
            }
        });
    }
}

#[component]
/// Mounts `children` with an enter animation while `show` holds and unmounts them after the
/// exit animation.
pub fn Transition(
    #[prop(into)] show: MaybeSignal<bool>,
    #[prop(optional)] kind: TransitionKind,
    #[prop(default = 300)] duration_ms: u64,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let driver = TransitionDriver {
        state: create_rw_signal(TransitionState::new(show.get_untracked())),
        timers: store_value(Vec::new()),
        frames: store_value(Vec::new()),
        duration: Duration::from_millis(duration_ms),
    };
    on_cleanup(move || driver.cancel());

    create_effect(move |previous: Option<bool>| {
        let visible = show.get();
        if previous.is_some_and(|previous| previous != visible) {
            driver.send(if visible {
                TransitionEvent::Show
            } else {
                TransitionEvent::Hide
            });
        }
        visible
    });

    let state = driver.state;
    let style = format!("transition-duration: {duration_ms}ms;");

    view! {
        <Show when=move || state.with(|state| state.mounted)>
            <div
                class=move || {
                    let active = state.with(|state| state.active);
                    merge_layout_class(kind.classes(active), layout_class)
                }
                style=style.clone()
                data-ui-primitive="true"
                data-ui-kind="transition"
                data-ui-variant=kind.token()
                data-ui-state=move || if state.with(|state| state.active) { "active" } else { "enter" }
            >
                {children()}
            </div>
        </Show>
    }
}
