//! Popover listbox state for the Select control.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One choice in a Select.
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether the option can be chosen.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Returns `self` marked disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Per-instance Select state.
pub struct SelectState {
    /// Chosen value, if any.
    pub value: Option<String>,
    /// Whether the listbox is showing.
    pub open: bool,
    /// Keyboard-highlighted option index.
    pub highlighted: Option<usize>,
}

impl SelectState {
    /// State seeded with an initial value.
    pub fn with_value(value: Option<String>) -> Self {
        Self {
            value: value.filter(|value| !value.is_empty()),
            ..Self::default()
        }
    }

    /// Label of the chosen option.
    pub fn selected_label<'a>(&self, options: &'a [SelectOption]) -> Option<&'a str> {
        let value = self.value.as_deref()?;
        options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    /// Whether a value is chosen.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs to [`reduce_select`].
pub enum SelectEvent {
    /// Trigger clicked.
    Toggle,
    /// Force the listbox open.
    Open,
    /// Outside click or Escape.
    Close,
    /// Option at index clicked.
    Choose(usize),
    /// Clear button clicked.
    Clear,
    /// Arrow down.
    HighlightNext,
    /// Arrow up.
    HighlightPrev,
    /// Enter while open.
    ChooseHighlighted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reported when the chosen value changed.
pub struct SelectChange {
    /// New value; `None` after clearing.
    pub value: Option<String>,
}

/// Applies `event` and reports a value change, if one happened.
pub fn reduce_select(
    state: &mut SelectState,
    event: SelectEvent,
    options: &[SelectOption],
    disabled: bool,
) -> Option<SelectChange> {
    if disabled {
        return None;
    }
    match event {
        SelectEvent::Toggle => {
            if state.open {
                close(state);
            } else {
                open(state, options);
            }
            None
        }
        SelectEvent::Open => {
            if !state.open {
                open(state, options);
            }
            None
        }
        SelectEvent::Close => {
            close(state);
            None
        }
        SelectEvent::Choose(index) => choose(state, options, index),
        SelectEvent::ChooseHighlighted => {
            let index = state.highlighted?;
            choose(state, options, index)
        }
        SelectEvent::Clear => {
            if state.value.take().is_some() {
                Some(SelectChange { value: None })
            } else {
                None
            }
        }
        SelectEvent::HighlightNext => {
            if !state.open {
                open(state, options);
            } else {
                state.highlighted = step_highlight(state.highlighted, options, true);
            }
            None
        }
        SelectEvent::HighlightPrev => {
            if state.open {
                state.highlighted = step_highlight(state.highlighted, options, false);
            }
            None
        }
    }
}

fn open(state: &mut SelectState, options: &[SelectOption]) {
    state.open = true;
    let current = state
        .value
        .as_deref()
        .and_then(|value| options.iter().position(|option| option.value == value));
    state.highlighted = current.or_else(|| step_highlight(None, options, true));
}

fn close(state: &mut SelectState) {
    state.open = false;
    state.highlighted = None;
}

fn choose(
    state: &mut SelectState,
    options: &[SelectOption],
    index: usize,
) -> Option<SelectChange> {
    let option = options.get(index).filter(|option| !option.disabled)?;
    close(state);
    if state.value.as_deref() == Some(option.value.as_str()) {
        return None;
    }
    state.value = Some(option.value.clone());
    Some(SelectChange {
        value: state.value.clone(),
    })
}

fn step_highlight(from: Option<usize>, options: &[SelectOption], forward: bool) -> Option<usize> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    let start = match (from, forward) {
        (Some(index), true) => index + 1,
        (Some(index), false) => index + len - 1,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    (0..len)
        .map(|offset| {
            if forward {
                (start + offset) % len
            } else {
                (start + len - offset) % len
            }
        })
        .find(|index| !options[*index].disabled)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Beta").disabled(),
            SelectOption::new("c", "Gamma"),
        ]
    }

    #[test]
    fn choosing_sets_value_and_closes() {
        let options = options();
        let mut state = SelectState::default();
        reduce_select(&mut state, SelectEvent::Toggle, &options, false);
        assert!(state.open);
        assert_eq!(state.highlighted, Some(0));

        let change = reduce_select(&mut state, SelectEvent::Choose(2), &options, false);
        assert_eq!(change, Some(SelectChange { value: Some("c".to_string()) }));
        assert!(!state.open);
        assert_eq!(state.selected_label(&options), Some("Gamma"));
    }

    #[test]
    fn disabled_option_and_disabled_select_are_inert() {
        let options = options();
        let mut state = SelectState::with_value(Some("a".to_string()));
        state.open = true;
        assert_eq!(reduce_select(&mut state, SelectEvent::Choose(1), &options, false), None);
        assert_eq!(state.value.as_deref(), Some("a"));
        assert!(state.open);

        let before = state.clone();
        for event in [SelectEvent::Toggle, SelectEvent::Clear, SelectEvent::Choose(2)] {
            assert_eq!(reduce_select(&mut state, event, &options, true), None);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn highlight_skips_disabled_and_wraps() {
        let options = options();
        let mut state = SelectState::default();
        reduce_select(&mut state, SelectEvent::Open, &options, false);
        reduce_select(&mut state, SelectEvent::HighlightNext, &options, false);
        assert_eq!(state.highlighted, Some(2));
        reduce_select(&mut state, SelectEvent::HighlightNext, &options, false);
        assert_eq!(state.highlighted, Some(0));
        reduce_select(&mut state, SelectEvent::HighlightPrev, &options, false);
        assert_eq!(state.highlighted, Some(2));

        let change = reduce_select(&mut state, SelectEvent::ChooseHighlighted, &options, false);
        assert_eq!(change, Some(SelectChange { value: Some("c".to_string()) }));
    }

    #[test]
    fn clear_resets_without_opening() {
        let options = options();
        let mut state = SelectState::with_value(Some("a".to_string()));
        assert_eq!(
            reduce_select(&mut state, SelectEvent::Clear, &options, false),
            Some(SelectChange { value: None })
        );
        assert!(!state.open);
        assert_eq!(reduce_select(&mut state, SelectEvent::Clear, &options, false), None);
    }

    #[test]
    fn rechoosing_current_value_reports_no_change() {
        let options = options();
        let mut state = SelectState::with_value(Some("a".to_string()));
        state.open = true;
        assert_eq!(reduce_select(&mut state, SelectEvent::Choose(0), &options, false), None);
        assert!(!state.open);
    }

    #[test]
    fn empty_initial_value_means_none() {
        assert_eq!(SelectState::with_value(Some(String::new())).value, None);
    }
}
