//! Action objects emitted by controls.
//!
//! Controls never act on application state themselves. They hand an [`Action`] to whatever
//! handler the host supplied; what happens next is the host's business.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Action type that starts a button's loading sequence.
pub const LOADING_ACTION: &str = "loading";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// `{ type, payload? }` record handed to the host on interaction.
pub struct Action {
    /// Action type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    /// Creates an action without payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Returns `self` with `payload` attached.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Whether the action's type equals `kind`.
    pub fn is_type(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Whether the action starts the button loading sequence.
    pub fn is_loading(&self) -> bool {
        self.is_type(LOADING_ACTION)
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::new(LOADING_ACTION)
    }
}

impl From<&str> for Action {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}

impl From<String> for Action {
    fn from(kind: String) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(encoded) => f.write_str(&encoded),
            Err(_) => f.write_str(&self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_type_key_and_omits_missing_payload() {
        assert_eq!(Action::new("save").to_string(), r#"{"type":"save"}"#);
        assert_eq!(
            serde_json::to_value(Action::new("save").with_payload(json!({"id": 4})))
                .expect("serialize"),
            json!({"type": "save", "payload": {"id": 4}})
        );
    }

    #[test]
    fn deserializes_without_payload() {
        let action: Action = serde_json::from_str(r#"{"type":"loading"}"#).expect("parse");
        assert!(action.is_loading());
        assert_eq!(action.payload, None);
    }

    #[test]
    fn default_action_is_loading() {
        assert!(Action::default().is_loading());
        assert!(!Action::from("submit").is_loading());
    }
}
