//! Checked state for Checkbox and RadioGroup.
//!
//! Both controls mirror the input's `checked` property into `data-ui-selected` on every `change`
//! event, so the visual state never lags the input.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Checked flag of a single checkbox.
pub struct CheckboxState {
    checked: bool,
}

impl CheckboxState {
    /// State with the initial `checked` flag.
    pub const fn new(checked: bool) -> Self {
        Self { checked }
    }

    /// Whether the box is checked.
    pub const fn checked(self) -> bool {
        self.checked
    }

    /// Applies the input's `checked` property from a `change` event. Returns whether it changed.
    pub fn on_change(&mut self, checked: bool) -> bool {
        let changed = self.checked != checked;
        self.checked = checked;
        changed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Which option of a radio group is checked.
pub struct RadioGroupState {
    selected: Option<String>,
}

impl RadioGroupState {
    /// State with `selected` initially checked.
    pub fn new(selected: Option<String>) -> Self {
        Self { selected }
    }

    /// Checked value, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `value` is the checked option.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected() == Some(value)
    }

    /// Applies a `change` event from the radio carrying `value`.
    ///
    /// Only a radio becoming checked moves the selection; the previously checked option is
    /// unchecked implicitly. Returns whether the selection changed.
    pub fn on_change(&mut self, value: &str, checked: bool) -> bool {
        if !checked || self.is_selected(value) {
            return false;
        }
        self.selected = Some(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn checkbox_follows_input_on_every_change() {
        let mut state = CheckboxState::new(false);
        assert!(state.on_change(true));
        assert!(state.checked());
        assert!(!state.on_change(true));
        assert!(state.checked());
        assert!(state.on_change(false));
        assert!(!state.checked());
    }

    #[test]
    fn radio_check_moves_selection_to_one_option() {
        let mut state = RadioGroupState::new(Some("email".to_string()));
        assert!(state.is_selected("email"));

        assert!(state.on_change("phone", true));
        assert_eq!(state.selected(), Some("phone"));
        assert!(!state.is_selected("email"));
        assert!(state.is_selected("phone"));
    }

    #[test]
    fn radio_uncheck_and_repeat_events_do_not_change_selection() {
        let mut state = RadioGroupState::new(None);
        assert!(!state.on_change("email", false));
        assert_eq!(state.selected(), None);

        assert!(state.on_change("email", true));
        assert!(!state.on_change("email", true));
        assert_eq!(state.selected(), Some("email"));
    }
}
