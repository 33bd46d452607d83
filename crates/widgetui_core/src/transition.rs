//! Enter/exit transition state.
//!
//! Showing mounts the content with the "enter" classes and flips to "enter-active" on the next
//! animation frame. Hiding drops the active classes and unmounts once the exit duration has
//! elapsed. Each show or hide bumps a generation so late frames and timers are ignored.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tokens::{parse_token, ParseTokenError};

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Transition style.
pub enum TransitionKind {
    /// Opacity.
    #[default]
    Fade,
    /// Horizontal slide in from the right.
    Slide,
    /// Grow from nothing.
    Scale,
    /// Short vertical slide combined with a fade.
    SlideFade,
}

impl TransitionKind {
    /// Every kind.
    pub const ALL: [Self; 4] = [Self::Fade, Self::Slide, Self::Scale, Self::SlideFade];

    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Scale => "scale",
            Self::SlideFade => "slide-fade",
        }
    }

    /// Classes while mounted but not yet active (and while exiting).
    pub const fn enter_classes(self) -> &'static str {
        match self {
            Self::Fade => "opacity-0",
            Self::Slide => "transform translate-x-full",
            Self::Scale => "transform scale-0",
            Self::SlideFade => "opacity-0 transform translate-y-4",
        }
    }

    /// Classes while active.
    pub const fn enter_active_classes(self) -> &'static str {
        match self {
            Self::Fade => "opacity-100 transition-opacity",
            Self::Slide => "transform translate-x-0 transition-transform",
            Self::Scale => "transform scale-100 transition-transform",
            Self::SlideFade => "opacity-100 transform translate-y-0 transition-all",
        }
    }

    /// Classes for the given activity.
    pub const fn classes(self, active: bool) -> &'static str {
        if active {
            self.enter_active_classes()
        } else {
            self.enter_classes()
        }
    }
}

impl FromStr for TransitionKind {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("transition", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-instance transition state.
pub struct TransitionState {
    /// Whether the content is in the DOM.
    pub mounted: bool,
    /// Whether the active classes apply.
    pub active: bool,
    /// Invalidates stale frames and timers.
    pub generation: u64,
}

impl TransitionState {
    /// Initial state; content that starts shown skips the enter animation.
    pub fn new(show: bool) -> Self {
        Self {
            mounted: show,
            active: show,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs to [`reduce_transition`].
pub enum TransitionEvent {
    /// `show` became true.
    Show,
    /// `show` became false.
    Hide,
    /// The requested animation frame ran.
    FrameElapsed {
        /// Generation the frame was requested with.
        generation: u64,
    },
    /// The exit timer fired.
    ExitElapsed {
        /// Generation the timer was scheduled with.
        generation: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Work requested by [`reduce_transition`].
pub enum TransitionEffect {
    /// Drop pending frames and timers.
    CancelTimers,
    /// Report back with `FrameElapsed` on the next frame.
    RequestFrame(u64),
    /// Report back with `ExitElapsed` after `after`.
    ScheduleExit {
        /// Generation to echo back.
        generation: u64,
        /// Exit duration.
        after: Duration,
    },
}

/// Applies `event` and returns the effects to run.
pub fn reduce_transition(
    state: &mut TransitionState,
    event: TransitionEvent,
    duration: Duration,
) -> Vec<TransitionEffect> {
    match event {
        TransitionEvent::Show => {
            if state.mounted && state.active {
                return Vec::new();
            }
            state.generation = state.generation.wrapping_add(1);
            state.mounted = true;
            vec![
                TransitionEffect::CancelTimers,
                TransitionEffect::RequestFrame(state.generation),
            ]
        }
        TransitionEvent::Hide => {
            if !state.mounted {
                return Vec::new();
            }
            state.generation = state.generation.wrapping_add(1);
            state.active = false;
            vec![
                TransitionEffect::CancelTimers,
                TransitionEffect::ScheduleExit {
                    generation: state.generation,
                    after: duration,
                },
            ]
        }
        TransitionEvent::FrameElapsed { generation } => {
            if generation == state.generation && state.mounted {
                state.active = true;
            }
            Vec::new()
        }
        TransitionEvent::ExitElapsed { generation } => {
            if generation == state.generation && !state.active {
                state.mounted = false;
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn show_then_frame_activates() {
        let mut state = TransitionState::new(false);
        let effects = reduce_transition(&mut state, TransitionEvent::Show, DEFAULT_DURATION);
        assert_eq!(
            effects,
            vec![TransitionEffect::CancelTimers, TransitionEffect::RequestFrame(1)]
        );
        assert!(state.mounted);
        assert!(!state.active);
        reduce_transition(
            &mut state,
            TransitionEvent::FrameElapsed { generation: 1 },
            DEFAULT_DURATION,
        );
        assert!(state.active);
    }

    #[test]
    fn hide_unmounts_after_exit() {
        let mut state = TransitionState::new(true);
        let effects = reduce_transition(&mut state, TransitionEvent::Hide, DEFAULT_DURATION);
        assert_eq!(
            effects[1],
            TransitionEffect::ScheduleExit {
                generation: 1,
                after: DEFAULT_DURATION
            }
        );
        assert!(state.mounted);
        reduce_transition(
            &mut state,
            TransitionEvent::ExitElapsed { generation: 1 },
            DEFAULT_DURATION,
        );
        assert!(!state.mounted);
    }

    #[test]
    fn showing_mid_exit_cancels_unmount() {
        let mut state = TransitionState::new(true);
        reduce_transition(&mut state, TransitionEvent::Hide, DEFAULT_DURATION);
        reduce_transition(&mut state, TransitionEvent::Show, DEFAULT_DURATION);
        reduce_transition(
            &mut state,
            TransitionEvent::ExitElapsed { generation: 1 },
            DEFAULT_DURATION,
        );
        assert!(state.mounted);
        reduce_transition(
            &mut state,
            TransitionEvent::FrameElapsed { generation: 2 },
            DEFAULT_DURATION,
        );
        assert!(state.active);
    }

    #[test]
    fn class_pairs() {
        assert_eq!(TransitionKind::Fade.classes(false), "opacity-0");
        assert_eq!(
            TransitionKind::SlideFade.classes(true),
            "opacity-100 transform translate-y-0 transition-all"
        );
        assert_eq!("slide-fade".parse::<TransitionKind>(), Ok(TransitionKind::SlideFade));
    }
}
