//! Button style resolution and the loading-pulse state machine.

use std::time::Duration;

use crate::action::Action;
use crate::style::{Rgb, StyleRecord};
use crate::theme::{LoadingTimings, Palette};
use crate::tokens::{Color, Size, StylePreset, Variant};

const BASE_CLASSES: &str = "relative inline-flex items-center justify-center font-normal \
    transition-colors duration-100 transition-transform active:scale-[0.97] \
    disabled:cursor-not-allowed";
const DISABLED_CLASSES: &str = "disabled:opacity-50 disabled:cursor-not-allowed";
const WHITE: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Declarative button styling props.
pub struct ButtonStyleInput {
    /// Explicit color; `None` means primary.
    pub color: Option<Color>,
    /// Explicit variant; `None` means solid.
    pub variant: Option<Variant>,
    /// Legacy shorthand overriding both color and variant.
    pub style: Option<StylePreset>,
    /// Height/padding scale.
    pub size: Size,
    /// Fully rounded ends.
    pub pill: bool,
    /// Square aspect ratio.
    pub uniform: bool,
    /// Full container width.
    pub block: bool,
    /// Disabled look.
    pub disabled: bool,
}

impl Default for ButtonStyleInput {
    fn default() -> Self {
        Self {
            color: None,
            variant: None,
            style: None,
            size: Size::Lg,
            pill: true,
            uniform: false,
            block: false,
            disabled: false,
        }
    }
}

impl ButtonStyleInput {
    /// Builds an input from raw string tokens. Unknown sizes use the `lg` entry and unknown
    /// colors or variants fall back to primary / solid.
    pub fn from_tokens(
        color: Option<&str>,
        variant: Option<&str>,
        size: Option<&str>,
        style: Option<&str>,
    ) -> Self {
        Self {
            color: color.and_then(|raw| raw.parse().ok()),
            variant: variant.and_then(|raw| raw.parse().ok()),
            style: style.and_then(|raw| raw.parse().ok()),
            size: Size::parse_or(size, Size::Lg),
            ..Self::default()
        }
    }

    /// Effective color and variant after applying the style preset and defaults.
    pub fn tone(&self) -> (Color, Variant) {
        match self.style {
            Some(preset) => preset.expand(),
            None => (
                self.color.unwrap_or(Color::Primary),
                self.variant.unwrap_or(Variant::Solid),
            ),
        }
    }
}

/// Height, padding, and font-size classes for `size`.
pub const fn button_size_classes(size: Size) -> &'static str {
    match size {
        Size::Xxxs => "h-[22px] px-1.5 text-xs",
        Size::Xxs => "h-[24px] px-2 text-xs",
        Size::Xs => "h-[26px] px-2.5 text-sm",
        Size::Sm => "h-[28px] px-3 text-sm",
        Size::Md => "h-[32px] px-3.5 text-sm",
        Size::Lg => "h-[36px] px-4 text-sm",
        Size::Xl => "h-[40px] px-[18px] text-sm",
        Size::Xxl => "h-[44px] px-[18px] text-base",
        Size::Xxxl => "h-[48px] px-[22px] text-base",
    }
}

const fn variant_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Solid => "text-white",
        Variant::Soft => "",
        Variant::Outline => "border bg-transparent",
        Variant::Ghost => "bg-transparent",
    }
}

/// Resolves the full style record for a button.
pub fn resolve_button_style(input: &ButtonStyleInput, palette: &Palette) -> StyleRecord {
    let (color, variant) = input.tone();
    let pair = palette.pair(color);
    let base = pair.base.as_str();
    let rgb = Rgb::from_hex(base);

    let mut record = StyleRecord::default();
    record
        .classes
        .push(BASE_CLASSES)
        .push(button_size_classes(input.size))
        .push(variant_classes(variant))
        .push(DISABLED_CLASSES)
        .push(if input.pill { "rounded-full" } else { "rounded-md" })
        .push_if(input.uniform, "aspect-square")
        .push_if(input.block, "w-full")
        .push_if(input.disabled, "opacity-50 cursor-not-allowed");

    let style = &mut record.style;
    let hover = &mut record.hover;
    match variant {
        Variant::Solid => {
            style.set("background-color", base).set("color", WHITE);
            hover.set("background-color", pair.hover.as_str());
        }
        Variant::Soft => {
            style
                .set(
                    "background-color",
                    rgb.map(|rgb| rgb.rgba(0.1))
                        .unwrap_or_else(|| base.to_string()),
                )
                .set("color", base);
            if let Some(rgb) = rgb {
                hover.set("background-color", rgb.rgba(0.2));
            }
        }
        Variant::Outline => {
            style
                .set("border-color", base)
                .set("color", base)
                .set("background-color", "transparent");
            hover
                .set(
                    "background-color",
                    rgb.map(|rgb| rgb.rgba(0.1))
                        .unwrap_or_else(|| "transparent".to_string()),
                )
                .set("border-color", pair.hover.as_str());
        }
        Variant::Ghost => {
            style.set("color", base).set("background-color", "transparent");
            if let Some(rgb) = rgb {
                hover.set("background-color", rgb.rgba(0.1));
            }
        }
    }

    record
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual phase of the loading pulse.
pub enum ButtonPhase {
    /// Resting.
    #[default]
    Idle,
    /// Label and icons fading out ahead of the spinner.
    Fading,
    /// Spinner visible.
    Loading,
}

impl ButtonPhase {
    /// Stable token used in `data-ui-state`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fading => "fading",
            Self::Loading => "loading",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-instance button interaction state.
pub struct ButtonState {
    /// Current loading phase.
    pub phase: ButtonPhase,
    /// Whether the pointer is over the button.
    pub hovered: bool,
    /// Bumped on every (re)start or cancellation; timers carry the value they were scheduled
    /// with and are ignored once it no longer matches.
    pub generation: u64,
}

impl ButtonState {
    /// Whether hover declarations should be layered over the resting style.
    pub fn shows_hover(&self, disabled: bool) -> bool {
        self.hovered && !disabled && self.phase == ButtonPhase::Idle
    }

    /// Whether the label and icons are faded out.
    pub fn content_hidden(&self) -> bool {
        self.phase != ButtonPhase::Idle
    }

    /// Whether the spinner overlay is rendered.
    pub fn spinner_visible(&self) -> bool {
        self.phase == ButtonPhase::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Timers driven by the loading sequence.
pub enum ButtonTimer {
    /// Fires when the fade-out finishes.
    Fade,
    /// Fires when the spinner hold finishes.
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs to [`reduce_button`].
pub enum ButtonEvent {
    /// The button was clicked.
    Click {
        /// Disabled prop at click time.
        disabled: bool,
    },
    /// Pointer entered or left.
    HoverChanged {
        /// Whether the pointer is now over the button.
        hovered: bool,
        /// Disabled prop at event time.
        disabled: bool,
    },
    /// The fade timer fired.
    FadeElapsed {
        /// Generation the timer was scheduled with.
        generation: u64,
    },
    /// The hold timer fired.
    HoldElapsed {
        /// Generation the timer was scheduled with.
        generation: u64,
    },
    /// The component is going away; drop any pending sequence.
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
/// Side effects requested by [`reduce_button`] for the view layer to run.
pub enum ButtonEffect {
    /// Call the host's click handler.
    InvokeClickHandler,
    /// Hand the action to the host.
    Dispatch(Action),
    /// Clear every pending timer.
    CancelTimers,
    /// Start a timer that reports back with the matching elapsed event.
    ScheduleTimer {
        /// Which timer.
        timer: ButtonTimer,
        /// Generation to echo back.
        generation: u64,
        /// Delay.
        after: Duration,
    },
}

/// Applies `event` to `state` and returns the effects to execute, in order.
pub fn reduce_button(
    state: &mut ButtonState,
    event: ButtonEvent,
    click_action: &Action,
    timings: &LoadingTimings,
) -> Vec<ButtonEffect> {
    let mut effects = Vec::new();
    match event {
        ButtonEvent::Click { disabled } => {
            if disabled || state.phase == ButtonPhase::Loading {
                return effects;
            }
            effects.push(ButtonEffect::InvokeClickHandler);
            effects.push(ButtonEffect::Dispatch(click_action.clone()));
            if click_action.is_loading() {
                state.generation = state.generation.wrapping_add(1);
                state.phase = ButtonPhase::Fading;
                effects.push(ButtonEffect::CancelTimers);
                effects.push(ButtonEffect::ScheduleTimer {
                    timer: ButtonTimer::Fade,
                    generation: state.generation,
                    after: timings.fade(),
                });
            }
        }
        ButtonEvent::HoverChanged { hovered, disabled } => {
            state.hovered = hovered && !disabled;
        }
        ButtonEvent::FadeElapsed { generation } => {
            if generation == state.generation && state.phase == ButtonPhase::Fading {
                state.phase = ButtonPhase::Loading;
                effects.push(ButtonEffect::ScheduleTimer {
                    timer: ButtonTimer::Hold,
                    generation,
                    after: timings.hold(),
                });
            }
        }
        ButtonEvent::HoldElapsed { generation } => {
            if generation == state.generation && state.phase == ButtonPhase::Loading {
                state.phase = ButtonPhase::Idle;
            }
        }
        ButtonEvent::Cancel => {
            state.generation = state.generation.wrapping_add(1);
            state.phase = ButtonPhase::Idle;
            state.hovered = false;
            effects.push(ButtonEffect::CancelTimers);
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolve(input: ButtonStyleInput) -> StyleRecord {
        resolve_button_style(&input, &Palette::default())
    }

    #[test]
    fn every_token_combination_yields_a_non_empty_record() {
        for color in Color::ALL {
            for variant in Variant::ALL {
                for size in Size::ALL {
                    let record = resolve(ButtonStyleInput {
                        color: Some(color),
                        variant: Some(variant),
                        size,
                        ..ButtonStyleInput::default()
                    });
                    assert!(!record.is_empty());
                    assert!(record.classes.contains("inline-flex"));
                    assert!(!record.style.is_empty(), "{color:?}/{variant:?}/{size:?}");
                }
            }
        }
    }

    #[test]
    fn unknown_tokens_resolve_like_the_solid_primary_default() {
        let fallback = resolve(ButtonStyleInput::from_tokens(
            Some("chartreuse"),
            Some("glossy"),
            Some("enormous"),
            None,
        ));
        let default = resolve(ButtonStyleInput::default());
        assert_eq!(fallback, default);
        assert_eq!(default.style.get("background-color"), Some("#181818"));
        assert_eq!(default.style.get("color"), Some("#ffffff"));
        assert!(default.classes.contains("h-[36px]"));
    }

    #[test]
    fn style_preset_overrides_explicit_color_and_variant() {
        let input = ButtonStyleInput {
            color: Some(Color::Danger),
            variant: Some(Variant::Ghost),
            style: Some(StylePreset::Secondary),
            ..ButtonStyleInput::default()
        };
        assert_eq!(input.tone(), (Color::Secondary, Variant::Outline));
        let record = resolve(input);
        assert_eq!(record.style.get("border-color"), Some("#5d5d5d"));
        assert_eq!(record.hover.get("border-color"), Some("#414141"));
        assert_eq!(
            record.hover.get("background-color"),
            Some("rgba(93, 93, 93, 0.1)")
        );
    }

    #[test]
    fn soft_variant_tints_background_with_alpha() {
        let record = resolve(ButtonStyleInput {
            color: Some(Color::Info),
            variant: Some(Variant::Soft),
            ..ButtonStyleInput::default()
        });
        assert_eq!(
            record.style.get("background-color"),
            Some("rgba(3, 133, 255, 0.1)")
        );
        assert_eq!(record.style.get("color"), Some("#0385ff"));
        assert_eq!(
            record.hover.get("background-color"),
            Some("rgba(3, 133, 255, 0.2)")
        );
    }

    #[test]
    fn shape_flags_add_classes() {
        let record = resolve(ButtonStyleInput {
            pill: false,
            uniform: true,
            block: true,
            disabled: true,
            ..ButtonStyleInput::default()
        });
        assert!(record.classes.contains("rounded-md"));
        assert!(!record.classes.contains("rounded-full"));
        assert!(record.classes.contains("aspect-square"));
        assert!(record.classes.contains("w-full"));
        assert!(record.classes.contains("opacity-50"));
    }

    #[test]
    fn disabled_click_never_dispatches() {
        let mut state = ButtonState::default();
        for _ in 0..5 {
            let effects = reduce_button(
                &mut state,
                ButtonEvent::Click { disabled: true },
                &Action::default(),
                &LoadingTimings::default(),
            );
            assert!(effects.is_empty());
        }
        assert_eq!(state, ButtonState::default());
    }

    #[test]
    fn loading_sequence_runs_idle_fading_loading_idle() {
        let timings = LoadingTimings::default();
        let action = Action::default();
        let mut state = ButtonState::default();

        let effects = reduce_button(
            &mut state,
            ButtonEvent::Click { disabled: false },
            &action,
            &timings,
        );
        assert_eq!(
            effects,
            vec![
                ButtonEffect::InvokeClickHandler,
                ButtonEffect::Dispatch(action.clone()),
                ButtonEffect::CancelTimers,
                ButtonEffect::ScheduleTimer {
                    timer: ButtonTimer::Fade,
                    generation: 1,
                    after: Duration::from_millis(200),
                },
            ]
        );
        assert_eq!(state.phase, ButtonPhase::Fading);
        assert!(state.content_hidden());
        assert!(!state.spinner_visible());

        let effects = reduce_button(
            &mut state,
            ButtonEvent::FadeElapsed { generation: 1 },
            &action,
            &timings,
        );
        assert_eq!(
            effects,
            vec![ButtonEffect::ScheduleTimer {
                timer: ButtonTimer::Hold,
                generation: 1,
                after: Duration::from_millis(1000),
            }]
        );
        assert!(state.spinner_visible());

        let blocked = reduce_button(
            &mut state,
            ButtonEvent::Click { disabled: false },
            &action,
            &timings,
        );
        assert!(blocked.is_empty());

        reduce_button(&mut state, ButtonEvent::HoldElapsed { generation: 1 }, &action, &timings);
        assert_eq!(state.phase, ButtonPhase::Idle);
    }

    #[test]
    fn non_loading_action_dispatches_without_changing_phase() {
        let mut state = ButtonState::default();
        let action = Action::new("open-settings");
        let effects = reduce_button(
            &mut state,
            ButtonEvent::Click { disabled: false },
            &action,
            &LoadingTimings::default(),
        );
        assert_eq!(
            effects,
            vec![
                ButtonEffect::InvokeClickHandler,
                ButtonEffect::Dispatch(action)
            ]
        );
        assert_eq!(state.phase, ButtonPhase::Idle);
    }

    #[test]
    fn retrigger_during_fade_invalidates_the_old_timer() {
        let timings = LoadingTimings::default();
        let action = Action::default();
        let mut state = ButtonState::default();

        reduce_button(&mut state, ButtonEvent::Click { disabled: false }, &action, &timings);
        reduce_button(&mut state, ButtonEvent::Click { disabled: false }, &action, &timings);
        assert_eq!(state.generation, 2);

        let stale = reduce_button(
            &mut state,
            ButtonEvent::FadeElapsed { generation: 1 },
            &action,
            &timings,
        );
        assert!(stale.is_empty());
        assert_eq!(state.phase, ButtonPhase::Fading);

        reduce_button(&mut state, ButtonEvent::FadeElapsed { generation: 2 }, &action, &timings);
        assert_eq!(state.phase, ButtonPhase::Loading);
    }

    #[test]
    fn cancel_resets_and_ignores_late_timers() {
        let timings = LoadingTimings::default();
        let action = Action::default();
        let mut state = ButtonState::default();

        reduce_button(&mut state, ButtonEvent::Click { disabled: false }, &action, &timings);
        let effects = reduce_button(&mut state, ButtonEvent::Cancel, &action, &timings);
        assert_eq!(effects, vec![ButtonEffect::CancelTimers]);
        assert_eq!(state.phase, ButtonPhase::Idle);

        let late = reduce_button(
            &mut state,
            ButtonEvent::FadeElapsed { generation: 1 },
            &action,
            &timings,
        );
        assert!(late.is_empty());
        assert_eq!(state.phase, ButtonPhase::Idle);
    }

    #[test]
    fn hover_is_suppressed_while_disabled_or_busy() {
        let timings = LoadingTimings::default();
        let action = Action::default();
        let mut state = ButtonState::default();

        reduce_button(
            &mut state,
            ButtonEvent::HoverChanged { hovered: true, disabled: true },
            &action,
            &timings,
        );
        assert!(!state.hovered);

        reduce_button(
            &mut state,
            ButtonEvent::HoverChanged { hovered: true, disabled: false },
            &action,
            &timings,
        );
        assert!(state.shows_hover(false));
        assert!(!state.shows_hover(true));

        reduce_button(&mut state, ButtonEvent::Click { disabled: false }, &action, &timings);
        assert!(!state.shows_hover(false));
    }
}
