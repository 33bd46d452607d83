use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use widgetui_core::button::{
    reduce_button, resolve_button_style, ButtonEffect, ButtonEvent, ButtonState, ButtonStyleInput,
    ButtonTimer,
};
use widgetui_core::field::{
    field_classes, helper_text_classes, TextFieldKind, FIELD_LABEL_CLASSES,
};
use widgetui_core::choice::{CheckboxState, RadioGroupState};
use widgetui_core::form::{collect_form_data, submission_action, FormField};
use widgetui_core::layout::{
    resolve_flex_style, Align, Background, Border, Dimension, Direction, FlexProps, Justify,
    Radius, Spacing, Wrap,
};
use widgetui_core::select::SelectOption;
use widgetui_core::typography::REQUIRED_MARKER_CLASSES;
use widgetui_core::{LoadingTimings, StylePreset};

use super::*;

const BUTTON_CONTENT_CLASSES: &str =
    "inline-flex items-center gap-2 transition-opacity duration-200";
const SPINNER_CLASSES: &str =
    "inline-block w-4 h-4 rounded-full border-2 border-current border-t-transparent animate-spin";

/// Runs the loading-pulse reducer and owns the timers it schedules.
#[derive(Clone, Copy)]
struct ButtonDriver {
    state: RwSignal<ButtonState>,
    timers: StoredValue<Vec<TimeoutHandle>>,
    action: StoredValue<Action>,
    timings: LoadingTimings,
}

impl ButtonDriver {
    /// Applies `event`, runs timer effects, and returns the effects left for the caller.
    fn send(self, event: ButtonEvent) -> Vec<ButtonEffect> {
        let Some(mut next) = self.state.try_get_untracked() else {
            return Vec::new();
        };
        let Some(effects) = self
            .action
            .try_with_value(|action| reduce_button(&mut next, event, action, &self.timings))
        else {
            return Vec::new();
        };
        if self.state.try_get_untracked() != Some(next) {
            self.state.try_set(next);
        }

        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                ButtonEffect::CancelTimers => self.clear_timers(),
                ButtonEffect::ScheduleTimer {
                    timer,
                    generation,
                    after,
                } => self.schedule(timer, generation, after),
                other => remaining.push(other),
            }
        }
        remaining
    }

    fn clear_timers(self) {
        self.timers.try_update_value(|timers| {
            for handle in timers.drain(..) {
                handle.clear();
            }
        });
    }

    fn schedule(self, timer: ButtonTimer, generation: u64, after: std::time::Duration) {
        let event = match timer {
            ButtonTimer::Fade => ButtonEvent::FadeElapsed { generation },
            ButtonTimer::Hold => ButtonEvent::HoldElapsed { generation },
        };
        match set_timeout_with_handle(
            move || {
                self.send(event);
            },
            after,
        ) {
            Ok(handle) => {
                self.timers.try_update_value(|timers| timers.push(handle));
            }
            Err(err) => warn!("button timer scheduling failed: {err:?}"),
        }
    }
}

#[component]
/// Button with palette-driven colors, icon slots, and the loading pulse.
///
/// A click hands `on_click_action` (default: the `loading` action) to `on_action`, falling back
/// to the nearest [`ActionProvider`](super::ActionProvider). The `loading` action fades the
/// content out and shows a spinner for the configured hold time.
pub fn Button(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] icon_start: Option<IconName>,
    #[prop(optional)] icon_end: Option<IconName>,
    #[prop(optional)] icon_size: IconSize,
    #[prop(optional)] color: Option<Color>,
    #[prop(optional)] variant: Option<Variant>,
    /// Shorthand overriding `color` and `variant`.
    #[prop(optional)]
    style: Option<StylePreset>,
    #[prop(default = Size::Lg)] size: Size,
    #[prop(default = true)] pill: bool,
    #[prop(optional)] uniform: bool,
    #[prop(optional)] block: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Renders `type="submit"` so the button submits its [`Form`].
    #[prop(optional)]
    submit: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_click_action: Option<Action>,
    #[prop(optional)] on_action: Option<Callback<Action>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let theme = use_theme();
    let sink = ActionSink::resolve(on_action);
    let driver = ButtonDriver {
        state: create_rw_signal(ButtonState::default()),
        timers: store_value(Vec::new()),
        action: store_value(on_click_action.unwrap_or_default()),
        timings: theme.loading,
    };
    on_cleanup(move || {
        driver.send(ButtonEvent::Cancel);
    });

    let input = ButtonStyleInput {
        color,
        variant,
        style,
        size,
        pill,
        uniform,
        block,
        disabled: false,
    };
    let (tone_color, tone_variant) = input.tone();
    let palette = theme.palette;
    let record = create_memo(move |_| {
        resolve_button_style(
            &ButtonStyleInput {
                disabled: disabled.get(),
                ..input
            },
            &palette,
        )
    });
    let state = driver.state;

    let handle_click = move |ev: MouseEvent| {
        let effects = driver.send(ButtonEvent::Click {
            disabled: disabled.get_untracked(),
        });
        for effect in effects {
            match effect {
                ButtonEffect::InvokeClickHandler => {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev.clone());
                    }
                }
                ButtonEffect::Dispatch(action) => sink.dispatch(action),
                _ => {}
            }
        }
    };

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=move || {
                record.with(|record| merge_layout_class(&record.class_string(), layout_class))
            }
            style=move || {
                let hovered = state.with(|state| state.shows_hover(disabled.get()));
                record.with(|record| record.render_style(hovered))
            }
            aria-label=aria_label
            aria-busy=move || bool_token(state.with(ButtonState::spinner_visible))
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-color=tone_color.token()
            data-ui-variant=tone_variant.token()
            data-ui-size=size.token()
            data-ui-state=move || state.with(|state| state.phase.token())
            data-ui-disabled=move || bool_token(disabled.get())
            on:mouseenter=move |_| {
                driver.send(ButtonEvent::HoverChanged {
                    hovered: true,
                    disabled: disabled.get_untracked(),
                });
            }
            on:mouseleave=move |_| {
                driver.send(ButtonEvent::HoverChanged {
                    hovered: false,
                    disabled: disabled.get_untracked(),
                });
            }
            on:click=handle_click
        >
            <span
                data-ui-slot="content"
                class=move || {
                    if state.with(ButtonState::content_hidden) {
                        format!("{BUTTON_CONTENT_CLASSES} opacity-0")
                    } else {
                        BUTTON_CONTENT_CLASSES.to_string()
                    }
                }
            >
                {icon_start.map(|icon| view! { <Icon name=icon size=icon_size /> })}
                {label}
                {children.map(|children| children())}
                {icon_end.map(|icon| view! { <Icon name=icon size=icon_size /> })}
            </span>
            <Show when=move || state.with(ButtonState::spinner_visible)>
                <span
                    data-ui-slot="spinner"
                    class="absolute inset-0 flex items-center justify-center"
                >
                    <span class=SPINNER_CLASSES></span>
                </span>
            </Show>
        </button>
    }
}

fn field_label(
    label: Option<String>,
    for_id: Option<String>,
    required: bool,
) -> Option<impl IntoView> {
    label.map(|label| {
        view! {
            <label class=FIELD_LABEL_CLASSES for=for_id data-ui-slot="label">
                {label}
                {required.then(|| view! { <span class=REQUIRED_MARKER_CLASSES>"*"</span> })}
            </label>
        }
    })
}

fn helper_line(helper_text: Option<String>, error: MaybeSignal<bool>) -> Option<impl IntoView> {
    helper_text.map(|helper_text| {
        view! {
            <p class=move || helper_text_classes(error.get()) data-ui-slot="helper">
                {helper_text}
            </p>
        }
    })
}

#[component]
/// Single-line text input with optional label and helper text.
pub fn Input(
    #[prop(optional, into)] id: Option<String>,
    /// Form field name; dots nest the submitted value.
    #[prop(optional, into)]
    name: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let label_view = field_label(label, id.clone(), required);

    view! {
        <div
            class=merge_layout_class("flex flex-col", layout_class)
            data-ui-primitive="true"
            data-ui-kind="input"
        >
            {label_view}
            <input
                id=id
                name=name
                type=input_type
                class=move || field_classes(TextFieldKind::Input, size, error.get()).to_string()
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(error.get())
                prop:value=move || value.get()
                data-ui-size=size.token()
                data-ui-state=move || if error.get() { "error" } else { "idle" }
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
            />
            {helper_line(helper_text, error)}
        </div>
    }
}

#[component]
/// Multi-line text input, vertically resizable.
pub fn Textarea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = 3)] rows: u32,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let label_view = field_label(label, id.clone(), required);

    view! {
        <div
            class=merge_layout_class("flex flex-col", layout_class)
            data-ui-primitive="true"
            data-ui-kind="textarea"
        >
            {label_view}
            <textarea
                id=id
                name=name
                rows=rows
                class=move || field_classes(TextFieldKind::Textarea, size, error.get()).to_string()
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(error.get())
                prop:value=move || value.get()
                data-ui-size=size.token()
                data-ui-state=move || if error.get() { "error" } else { "idle" }
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
            ></textarea>
            {helper_line(helper_text, error)}
        </div>
    }
}

/// `on_change_action` with `{ "value": .. }` merged into its payload.
pub(crate) fn change_action(template: &Action, value: Value) -> Action {
    let mut data = Map::new();
    data.insert("value".to_string(), value);
    submission_action(template, data)
}

#[component]
/// Checkbox whose `data-ui-selected` mirrors the input's checked state.
pub fn Checkbox(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    /// Submitted when checked; `true` is submitted when absent.
    #[prop(optional, into)]
    value: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    /// Initial checked state.
    #[prop(optional)]
    checked: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] on_change_action: Option<Action>,
    #[prop(optional)] on_action: Option<Callback<Action>>,
) -> impl IntoView {
    let sink = ActionSink::resolve(on_action);
    let state = create_rw_signal(CheckboxState::new(checked));
    let is_checked = create_memo(move |_| state.with(|state| state.checked()));

    view! {
        <label
            class=merge_layout_class(
                "inline-flex items-center gap-2 cursor-pointer select-none",
                layout_class,
            )
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-selected=move || bool_token(is_checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <input
                id=id
                type="checkbox"
                name=name
                value=value
                class="h-4 w-4 rounded border-gray-300 accent-primary-600"
                prop:checked=move || is_checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let now_checked = event_target_checked(&ev);
                    state.update(|state| {
                        state.on_change(now_checked);
                    });
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(now_checked);
                    }
                    if let Some(template) = on_change_action.as_ref() {
                        sink.dispatch(change_action(template, Value::Bool(now_checked)));
                    }
                }
            />
            {label.map(|label| view! { <span data-ui-slot="label" class="text-sm">{label}</span> })}
        </label>
    }
}

#[component]
/// Radio buttons sharing one `name`; the checked option mirrors into `data-ui-selected`.
pub fn RadioGroup(
    #[prop(into)] name: String,
    options: Vec<SelectOption>,
    /// Initially checked value.
    #[prop(optional, into)]
    value: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = Direction::Col)] direction: Direction,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_change_action: Option<Action>,
    #[prop(optional)] on_action: Option<Callback<Action>>,
) -> impl IntoView {
    let sink = ActionSink::resolve(on_action);
    let selected = create_rw_signal(RadioGroupState::new(value));
    let list_class = match direction {
        Direction::Row => "flex flex-row flex-wrap gap-4",
        Direction::Col => "flex flex-col gap-2",
    };

    let radios = options
        .into_iter()
        .map(|option| {
            let name = name.clone();
            let option_value = option.value;
            let is_selected = {
                let option_value = option_value.clone();
                create_memo(move |_| selected.with(|selected| selected.is_selected(&option_value)))
            };
            let option_disabled = option.disabled;
            let on_change_action = on_change_action.clone();
            view! {
                <label
                    class="inline-flex items-center gap-2 cursor-pointer select-none"
                    data-ui-slot="option"
                    data-ui-selected=move || bool_token(is_selected.get())
                    data-ui-disabled=move || bool_token(option_disabled || disabled.get())
                >
                    <input
                        type="radio"
                        name=name
                        value=option_value.clone()
                        class="h-4 w-4 accent-primary-600"
                        prop:checked=move || is_selected.get()
                        disabled=move || option_disabled || disabled.get()
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            let changed = selected
                                .try_update(|selected| selected.on_change(&option_value, checked))
                                .unwrap_or(false);
                            if !changed {
                                return;
                            }
                            if let Some(on_change) = on_change.as_ref() {
                                on_change.call(option_value.clone());
                            }
                            if let Some(template) = on_change_action.as_ref() {
                                let value = Value::String(option_value.clone());
                                sink.dispatch(change_action(template, value));
                            }
                        }
                    />
                    <span class="text-sm">{option.label}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("flex flex-col gap-1", layout_class)
            role="radiogroup"
            data-ui-primitive="true"
            data-ui-kind="radio-group"
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|label| view! { <span class=FIELD_LABEL_CLASSES>{label}</span> })}
            <div class=list_class>{radios}</div>
        </div>
    }
}

/// Reads every named, enabled control of `form` into [`FormField`]s.
fn read_form_fields(form: &HtmlFormElement) -> Vec<FormField> {
    let elements = form.elements();
    let mut fields = Vec::new();
    for index in 0..elements.length() {
        let Some(element) = elements.item(index) else {
            continue;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            if input.disabled() || input.name().is_empty() {
                continue;
            }
            let field = match input.type_().as_str() {
                "checkbox" => {
                    FormField::checkbox(input.name(), input.checked(), input.get_attribute("value"))
                }
                "radio" => FormField::radio(input.name(), input.checked(), input.value()),
                "submit" | "button" | "reset" | "image" | "file" => continue,
                _ => FormField::value(input.name(), input.value()),
            };
            fields.push(field);
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            if !textarea.disabled() && !textarea.name().is_empty() {
                fields.push(FormField::value(textarea.name(), textarea.value()));
            }
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            if !select.disabled() && !select.name().is_empty() {
                fields.push(FormField::value(select.name(), select.value()));
            }
        }
    }
    fields
}

#[component]
/// Flex form that submits its controls as a nested payload instead of navigating.
///
/// On submit the named controls are collected (dot-path names nest) and `on_submit_action`
/// (default type `submit`) is dispatched with the collected payload.
pub fn Form(
    #[prop(optional)] on_submit_action: Option<Action>,
    #[prop(optional)] on_action: Option<Callback<Action>>,
    #[prop(default = Direction::Col)] direction: Direction,
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
    #[prop(optional, into)] background: Option<Background>,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] size: Option<Dimension>,
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
    let sink = ActionSink::resolve(on_action);
    let template = on_submit_action.unwrap_or_else(|| Action::new("submit"));
    let record = resolve_flex_style(
        direction,
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

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            warn!("form submit without a form target");
            return;
        };
        let fields = read_form_fields(&form);
        sink.dispatch(submission_action(&template, collect_form_data(&fields)));
    };

    view! {
        <form
            class=merge_layout_class(&record.class_string(), layout_class)
            style=record.style.to_css()
            data-ui-primitive="true"
            data-ui-kind="form"
            data-ui-variant=direction.token()
            on:submit=handle_submit
        >
            {children()}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_takes_the_full_flex_prop_set() {
        let _ = leptos::create_runtime();
        let props = FormProps::builder()
            .direction(Direction::Row)
            .wrap(Wrap::Wrap)
            .radius(Radius::Md)
            .margin(8.0)
            .border(Border::Width(1.0))
            .background("#ffffff")
            .width(320.0)
            .min_size(120.0)
            .max_width("40rem")
            .aspect_ratio("4 / 3")
            .flex("1 1 auto")
            .children(Box::new(|| Fragment::new(Vec::new())))
            .build();

        assert_eq!(props.wrap, Some(Wrap::Wrap));
        assert_eq!(props.radius, Some(Radius::Md));
        assert_eq!(props.margin, Some(Spacing::from(8.0)));
        assert_eq!(props.background, Some(Background::from("#ffffff")));
        assert_eq!(props.max_width, Some(Dimension::from("40rem")));
        assert_eq!(props.aspect_ratio.as_deref(), Some("4 / 3"));
        assert_eq!(props.flex.as_deref(), Some("1 1 auto"));
    }
}
