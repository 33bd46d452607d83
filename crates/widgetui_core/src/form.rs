//! Form submission payloads.
//!
//! Field names are dot paths: a field named `address.city` lands at `{"address": {"city": ..}}`.

use serde_json::{Map, Value};

use crate::action::Action;

/// Assigns `value` at the dot-separated `path` inside `target`.
///
/// Missing intermediate keys are created as objects; intermediates holding a non-object value are
/// replaced by an empty object. An empty path is ignored.
pub fn set_nested_value(target: &mut Map<String, Value>, path: &str, value: Value) {
    if path.is_empty() {
        return;
    }
    let mut segments = path.split('.');
    let Some(mut key) = segments.next() else {
        return;
    };
    let mut current = target;
    for next in segments {
        let slot = current
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(map) = slot else {
            return;
        };
        current = map;
        key = next;
    }
    current.insert(key.to_string(), value);
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Value-bearing part of a form control.
pub enum FieldKind {
    /// Text input, textarea, select, hidden input, ...
    Value(String),
    /// Checkbox; contributes only while checked.
    Checkbox {
        /// Checked state.
        checked: bool,
        /// `value` attribute; an empty or missing value submits `true`.
        value: Option<String>,
    },
    /// Radio button; contributes only while checked.
    Radio {
        /// Checked state.
        checked: bool,
        /// `value` attribute.
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One named control inside a form.
pub struct FormField {
    /// Dot-path `name` attribute.
    pub name: String,
    /// Current value.
    pub kind: FieldKind,
}

impl FormField {
    /// Text-like field.
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Value(value.into()),
        }
    }

    /// Checkbox field.
    pub fn checkbox(name: impl Into<String>, checked: bool, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Checkbox { checked, value },
        }
    }

    /// Radio field.
    pub fn radio(name: impl Into<String>, checked: bool, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Radio {
                checked,
                value: value.into(),
            },
        }
    }

    fn submitted_value(&self) -> Option<Value> {
        match &self.kind {
            FieldKind::Value(value) => Some(Value::String(value.clone())),
            FieldKind::Checkbox { checked: false, .. }
            | FieldKind::Radio { checked: false, .. } => None,
            FieldKind::Checkbox { value, .. } => Some(
                value
                    .as_ref()
                    .filter(|value| !value.is_empty())
                    .map_or(Value::Bool(true), |value| Value::String(value.clone())),
            ),
            FieldKind::Radio { value, .. } => Some(Value::String(value.clone())),
        }
    }
}

/// Builds the nested payload for `fields`. Unnamed fields are skipped; later fields overwrite
/// earlier ones at the same path.
pub fn collect_form_data<'a>(
    fields: impl IntoIterator<Item = &'a FormField>,
) -> Map<String, Value> {
    let mut data = Map::new();
    for field in fields {
        if field.name.is_empty() {
            continue;
        }
        if let Some(value) = field.submitted_value() {
            set_nested_value(&mut data, &field.name, value);
        }
    }
    data
}

/// Action dispatched on submit: the template's type with the collected data as payload. An
/// object payload on the template is kept, with form data winning on key conflicts.
pub fn submission_action(template: &Action, data: Map<String, Value>) -> Action {
    let payload = match &template.payload {
        Some(Value::Object(base)) => {
            let mut merged = base.clone();
            merged.extend(data);
            merged
        }
        _ => data,
    };
    Action::new(template.kind.clone()).with_payload(Value::Object(payload))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn dot_paths_nest() {
        let mut data = Map::new();
        set_nested_value(&mut data, "a.b", json!("x"));
        set_nested_value(&mut data, "a.c.d", json!(1));
        set_nested_value(&mut data, "top", json!(true));
        assert_eq!(
            Value::Object(data),
            json!({"a": {"b": "x", "c": {"d": 1}}, "top": true})
        );
    }

    #[test]
    fn scalar_intermediate_is_replaced() {
        let mut data = Map::new();
        set_nested_value(&mut data, "a", json!("flat"));
        set_nested_value(&mut data, "a.b", json!("deep"));
        assert_eq!(Value::Object(data), json!({"a": {"b": "deep"}}));
    }

    #[test]
    fn empty_path_is_ignored() {
        let mut data = Map::new();
        set_nested_value(&mut data, "", json!(1));
        assert!(data.is_empty());
    }

    #[test]
    fn checkboxes_and_radios_contribute_only_when_checked() {
        let fields = [
            FormField::value("user.name", "Ada"),
            FormField::checkbox("prefs.news", true, None),
            FormField::checkbox("prefs.sms", false, Some("yes".to_string())),
            FormField::checkbox("prefs.mail", true, Some("weekly".to_string())),
            FormField::radio("plan", false, "free"),
            FormField::radio("plan", true, "pro"),
            FormField::value("", "ignored"),
        ];
        assert_eq!(
            Value::Object(collect_form_data(&fields)),
            json!({
                "user": {"name": "Ada"},
                "prefs": {"news": true, "mail": "weekly"},
                "plan": "pro"
            })
        );
    }

    #[test]
    fn submission_merges_template_payload_with_form_data_winning() {
        let template = Action::new("save").with_payload(json!({"id": 7, "plan": "free"}));
        let data = collect_form_data(&[FormField::value("plan", "pro")]);
        let action = submission_action(&template, data);
        assert_eq!(action.kind, "save");
        assert_eq!(action.payload, Some(json!({"id": 7, "plan": "pro"})));
    }

    #[test]
    fn non_object_template_payload_is_replaced() {
        let template = Action::new("save").with_payload(json!("draft"));
        let action = submission_action(&template, collect_form_data(&[]));
        assert_eq!(action.payload, Some(json!({})));
    }
}
