//! Contact form field values

use crate::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;

/// Values of the three contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.field(*field).is_empty())
    }
}

/// Identifies one form field; matches the `id` of its input element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    pub fn dom_id(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for FieldId {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.dom_id() == s)
            .ok_or_else(|| ContactError::UnknownField(s.to_string()))
    }
}

/// Shared holder of the current [`FormData`].
///
/// Clones share the same values. Every change is published to subscribers so
/// a view layer can mirror it.
#[derive(Debug, Clone)]
pub struct FormState {
    tx: Arc<watch::Sender<FormData>>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::with_values(FormData::default())
    }

    pub fn with_values(values: FormData) -> Self {
        let (tx, _rx) = watch::channel(values);
        Self { tx: Arc::new(tx) }
    }

    /// Replace one field, leaving the others untouched.
    pub fn update_field(&self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        self.tx.send_modify(|data| data.set_field(field, value));
    }

    /// Same as [`update_field`](Self::update_field), keyed by the input element id.
    pub fn update_field_by_id(&self, dom_id: &str, value: impl Into<String>) -> ContactResult<()> {
        let field = dom_id.parse::<FieldId>()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn reset(&self) {
        tracing::debug!("Resetting contact form");
        self.tx.send_replace(FormData::default());
    }

    pub fn snapshot(&self) -> FormData {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormData> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_touches_only_one_field() {
        let form = FormState::new();
        let edits = [
            (FieldId::Name, "J"),
            (FieldId::Name, "Jane"),
            (FieldId::Email, "j@x.com"),
            (FieldId::Message, "Hi"),
            (FieldId::Email, ""),
            (FieldId::Message, "Hello there"),
            (FieldId::Name, "Jane Doe"),
        ];

        for (field, value) in edits {
            let before = form.snapshot();
            form.update_field(field, value);
            let after = form.snapshot();

            assert_eq!(after.field(field), value);
            for other in FieldId::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(after.field(other), before.field(other), "{other} changed");
            }
        }
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let form = FormState::with_values(FormData::new("Jane", "j@x.com", "Hi"));
        form.reset();
        assert_eq!(form.snapshot(), FormData::default());
        assert!(form.snapshot().is_empty());
    }

    #[test]
    fn test_update_by_dom_id() {
        let form = FormState::new();
        form.update_field_by_id("email", "j@x.com").unwrap();
        assert_eq!(form.snapshot().email, "j@x.com");

        let err = form.update_field_by_id("phone", "555").unwrap_err();
        assert!(matches!(err, ContactError::UnknownField(id) if id == "phone"));
        assert!(form.snapshot().name.is_empty());
    }

    #[test]
    fn test_clones_share_values() {
        let form = FormState::new();
        let view = form.clone();
        form.update_field(FieldId::Message, "Hi");
        assert_eq!(view.snapshot().message, "Hi");
    }

    #[test]
    fn test_subscribers_see_changes() {
        let form = FormState::new();
        let mut rx = form.subscribe();
        form.update_field(FieldId::Name, "Jane");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().name, "Jane");
    }

    #[test]
    fn test_serializes_with_expected_keys() {
        let json = serde_json::to_value(FormData::new("Jane", "j@x.com", "Hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Jane", "email": "j@x.com", "message": "Hi" })
        );
    }
}
