//! Popover pickers: a listbox select and a calendar date picker.

use chrono::{Datelike, Local, NaiveDate};
use serde_json::Value;
use widgetui_core::calendar::{
    day_cell_classes, display_date, format_iso_date, month_title, parse_iso_date,
    reduce_date_picker, CalendarGrid, DateBounds, DateChange, DatePickerEvent, DatePickerState,
    WEEKDAY_LABELS,
};
use widgetui_core::field::{
    chevron_position_css, resolve_trigger_style, trigger_spec, trigger_wrapper_classes,
    TriggerStyleInput,
};
use widgetui_core::select::{reduce_select, SelectChange, SelectEvent, SelectOption, SelectState};

use super::controls::change_action;
use super::overlays::install_popover_dismiss;
use super::*;

const POPOVER_CLASSES: &str =
    "absolute left-0 z-20 mt-1 rounded-md border border-gray-200 bg-white shadow-lg";
const CLEAR_BUTTON_CLASSES: &str =
    "absolute right-7 top-1/2 -translate-y-1/2 px-1 text-gray-400 hover:text-gray-600";

fn option_classes(selected: bool, highlighted: bool, disabled: bool) -> &'static str {
    match (disabled, selected, highlighted) {
        (true, _, _) => "px-3 py-1.5 text-sm text-gray-300 cursor-not-allowed",
        (false, true, _) => "px-3 py-1.5 text-sm cursor-pointer bg-gray-100 font-medium",
        (false, false, true) => "px-3 py-1.5 text-sm cursor-pointer bg-gray-50",
        (false, false, false) => "px-3 py-1.5 text-sm cursor-pointer hover:bg-gray-50",
    }
}

#[component]
/// Listbox select with a styled trigger.
///
/// The chosen value is mirrored into a hidden input carrying `name`, so it submits with a
/// surrounding [`Form`](super::Form).
pub fn Select(
    options: Vec<SelectOption>,
    #[prop(optional, into)] name: Option<String>,
    /// Initially chosen value.
    #[prop(optional, into)]
    value: Option<String>,
    #[prop(into, default = "Select...".to_string())] placeholder: String,
    #[prop(default = Variant::Outline)] variant: Variant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] pill: bool,
    #[prop(optional)] block: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<Option<String>>>,
    #[prop(optional)] on_change_action: Option<Action>,
    #[prop(optional)] on_action: Option<Callback<Action>>,
) -> impl IntoView {
    let sink = ActionSink::resolve(on_action);
    let options = store_value(options);
    let placeholder = store_value(placeholder);
    let on_change_action = store_value(on_change_action);
    let state = create_rw_signal(SelectState::with_value(value));
    let root = create_node_ref::<html::Div>();

    let send = move |event: SelectEvent| {
        let mut next = state.get_untracked();
        let change = options.with_value(|options| {
            reduce_select(&mut next, event, options, disabled.get_untracked())
        });
        if next != state.get_untracked() {
            state.set(next);
        }
        let Some(SelectChange { value }) = change else {
            return;
        };
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(value.clone());
        }
        on_change_action.with_value(|template| {
            if let Some(template) = template {
                let value = value.clone().map_or(Value::Null, Value::String);
                sink.dispatch(change_action(template, value));
            }
        });
    };

    install_popover_dismiss(
        root,
        Signal::derive(move || state.with(|state| state.open)),
        Callback::new(move |_| send(SelectEvent::Close)),
    );

    let record = create_memo(move |_| {
        resolve_trigger_style(TriggerStyleInput {
            variant,
            size,
            pill,
            block,
            disabled: disabled.get(),
            has_value: state.with(SelectState::has_value),
        })
    });
    let spec = trigger_spec(size);
    let (chevron_width, chevron_height) = spec.chevron;

    let on_trigger_keydown = move |ev: KeyboardEvent| {
        let open = state.with_untracked(|state| state.open);
        let event = match ev.key().as_str() {
            "ArrowDown" if open => SelectEvent::HighlightNext,
            "ArrowDown" => SelectEvent::Open,
            "ArrowUp" => SelectEvent::HighlightPrev,
            "Enter" | " " if open => SelectEvent::ChooseHighlighted,
            "Enter" | " " => SelectEvent::Open,
            _ => return,
        };
        ev.prevent_default();
        send(event);
    };

    let trigger_label = move || {
        let label = state.with(|state| {
            options.with_value(|options| state.selected_label(options).map(str::to_string))
        });
        label.unwrap_or_else(|| placeholder.get_value())
    };

    let listbox = move || {
        let (value, highlighted) = state.with(|state| (state.value.clone(), state.highlighted));
        options.with_value(|options| {
            options
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let selected = value.as_deref() == Some(option.value.as_str());
                    let option_disabled = option.disabled;
                    view! {
                        <li
                            role="option"
                            class=option_classes(selected, highlighted == Some(index), option_disabled)
                            aria-selected=bool_token(selected)
                            aria-disabled=bool_token(option_disabled)
                            data-ui-slot="option"
                            data-ui-selected=bool_token(selected)
                            data-ui-disabled=bool_token(option_disabled)
                            on:click=move |_| send(SelectEvent::Choose(index))
                        >
                            {option.label.clone()}
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            node_ref=root
            class=merge_layout_class(&trigger_wrapper_classes(block).to_string(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if state.with(|state| state.open) { "open" } else { "closed" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {name.map(|name| {
                view! {
                    <input
                        type="hidden"
                        name=name
                        prop:value=move || state.with(|state| state.value.clone().unwrap_or_default())
                    />
                }
            })}
            <button
                type="button"
                class=move || record.with(|record| record.class_string())
                style=move || record.with(|record| record.style.to_css())
                aria-label=aria_label
                aria-haspopup="listbox"
                aria-expanded=move || bool_token(state.with(|state| state.open))
                disabled=move || disabled.get()
                data-ui-slot="trigger"
                on:click=move |_| send(SelectEvent::Toggle)
                on:keydown=on_trigger_keydown
            >
                <span data-ui-slot="value" class="truncate">{trigger_label}</span>
            </button>
            {chevron_down(chevron_width, chevron_height, chevron_position_css(size))}
            <Show when=move || clearable && state.with(SelectState::has_value)>
                <button
                    type="button"
                    class=CLEAR_BUTTON_CLASSES
                    aria-label="Clear selection"
                    data-ui-slot="clear"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        send(SelectEvent::Clear);
                    }
                >
                    "×"
                </button>
            </Show>
            <Show when=move || state.with(|state| state.open)>
                <ul
                    role="listbox"
                    class=format!("{POPOVER_CLASSES} min-w-full max-h-60 overflow-auto py-1")
                    data-ui-slot="listbox"
                >
                    {listbox}
                </ul>
            </Show>
        </div>
    }
}

fn parse_date_prop(prop: &'static str, raw: Option<String>) -> Option<NaiveDate> {
    let raw = raw?;
    let parsed = parse_iso_date(&raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        warn!("date picker ignored malformed {prop} `{raw}`");
    }
    parsed
}

#[component]
/// Date picker with a month-grid popover.
///
/// Values are `YYYY-MM-DD` strings. Days outside `min`/`max` are disabled; the chosen date is
/// mirrored into a hidden input carrying `name`.
pub fn DatePicker(
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional, into)] max: Option<String>,
    #[prop(into, default = "Select date".to_string())] placeholder: String,
    #[prop(default = Variant::Outline)] variant: Variant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] pill: bool,
    #[prop(optional)] block: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<Option<NaiveDate>>>,
    #[prop(optional)] on_change_action: Option<Action>,
    #[prop(optional)] on_action: Option<Callback<Action>>,
) -> impl IntoView {
    let sink = ActionSink::resolve(on_action);
    let today = Local::now().date_naive();
    let bounds = DateBounds::new(parse_date_prop("min", min), parse_date_prop("max", max));
    let initial = parse_date_prop("value", value);
    let state = create_rw_signal(DatePickerState::new(initial, today));
    let placeholder = store_value(placeholder);
    let on_change_action = store_value(on_change_action);
    let root = create_node_ref::<html::Div>();

    let send = move |event: DatePickerEvent| {
        let mut next = state.get_untracked();
        let change = reduce_date_picker(&mut next, event, &bounds, disabled.get_untracked());
        if next != state.get_untracked() {
            state.set(next);
        }
        let Some(DateChange { selected }) = change else {
            return;
        };
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(selected);
        }
        on_change_action.with_value(|template| {
            if let Some(template) = template {
                let value = selected.map_or(Value::Null, |date| Value::String(format_iso_date(date)));
                sink.dispatch(change_action(template, value));
            }
        });
    };

    install_popover_dismiss(
        root,
        Signal::derive(move || state.with(|state| state.open)),
        Callback::new(move |_| send(DatePickerEvent::Close)),
    );

    let record = create_memo(move |_| {
        resolve_trigger_style(TriggerStyleInput {
            variant,
            size,
            pill,
            block,
            disabled: disabled.get(),
            has_value: state.with(|state| state.selected.is_some()),
        })
    });
    let spec = trigger_spec(size);
    let (chevron_width, chevron_height) = spec.chevron;

    let weekday_header = || {
        WEEKDAY_LABELS
            .iter()
            .map(|label| {
                view! {
                    <span class="h-8 w-8 flex items-center justify-center text-xs text-gray-500">
                        {*label}
                    </span>
                }
            })
            .collect_view()
    };

    let day_grid = move || {
        let (view_month, selected) = state.with(|state| (state.view_month, state.selected));
        CalendarGrid::for_month(view_month, bounds)
            .cells
            .into_iter()
            .map(|cell| {
                let date = cell.date;
                let is_selected = selected == Some(date);
                view! {
                    <button
                        type="button"
                        role="gridcell"
                        class=day_cell_classes(&cell, is_selected, date == today).to_string()
                        disabled=cell.disabled
                        aria-selected=bool_token(is_selected)
                        data-ui-date=format_iso_date(date)
                        data-ui-selected=bool_token(is_selected)
                        data-ui-muted=bool_token(cell.muted)
                        on:click=move |_| send(DatePickerEvent::Select(date))
                    >
                        {date.day()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div
            node_ref=root
            class=merge_layout_class(&trigger_wrapper_classes(block).to_string(), layout_class)
            data-ui-primitive="true"
            data-ui-kind="date-picker"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if state.with(|state| state.open) { "open" } else { "closed" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {name.map(|name| {
                view! {
                    <input
                        type="hidden"
                        name=name
                        prop:value=move || {
                            state.with(|state| state.selected.map(format_iso_date).unwrap_or_default())
                        }
                    />
                }
            })}
            <button
                type="button"
                class=move || record.with(|record| record.class_string())
                style=move || record.with(|record| record.style.to_css())
                aria-label=aria_label
                aria-haspopup="dialog"
                aria-expanded=move || bool_token(state.with(|state| state.open))
                disabled=move || disabled.get()
                data-ui-slot="trigger"
                on:click=move |_| send(DatePickerEvent::Toggle)
            >
                <span data-ui-slot="value" class="truncate">
                    {move || {
                        state
                            .with(|state| state.selected)
                            .map(display_date)
                            .unwrap_or_else(|| placeholder.get_value())
                    }}
                </span>
            </button>
            {chevron_down(chevron_width, chevron_height, chevron_position_css(size))}
            <Show when=move || clearable && state.with(|state| state.selected.is_some())>
                <button
                    type="button"
                    class=CLEAR_BUTTON_CLASSES
                    aria-label="Clear date"
                    data-ui-slot="clear"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        send(DatePickerEvent::Clear);
                    }
                >
                    "×"
                </button>
            </Show>
            <Show when=move || state.with(|state| state.open)>
                <div
                    role="dialog"
                    class=format!("{POPOVER_CLASSES} p-3 w-max")
                    data-ui-slot="calendar"
                >
                    <div class="flex items-center justify-between mb-2">
                        <button
                            type="button"
                            class="p-1 rounded hover:bg-gray-100"
                            aria-label="Previous month"
                            on:click=move |_| send(DatePickerEvent::PrevMonth)
                        >
                            <Icon name=IconName::ChevronLeft size=IconSize::Sm />
                        </button>
                        <span class="text-sm font-medium" data-ui-slot="month">
                            {move || state.with(|state| month_title(state.view_month))}
                        </span>
                        <button
                            type="button"
                            class="p-1 rounded hover:bg-gray-100"
                            aria-label="Next month"
                            on:click=move |_| send(DatePickerEvent::NextMonth)
                        >
                            <Icon name=IconName::ChevronRight size=IconSize::Sm />
                        </button>
                    </div>
                    <div class="grid grid-cols-7 gap-1">{weekday_header()}</div>
                    <div role="grid" class="grid grid-cols-7 gap-1">{day_grid}</div>
                </div>
            </Show>
        </div>
    }
}
