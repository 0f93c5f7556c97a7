use serde::Deserialize;
use std::collections::HashMap;

/// A Firestore document as returned by the REST API
///
/// Field values arrive in Firestore's typed-value encoding, e.g.
/// `{"fcmToken": {"stringValue": "abc"}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Extract a string field, unwrapping the typed-value envelope
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|value| value.get("stringValue"))
            .and_then(|value| value.as_str())
    }

    /// Extract an integer field (Firestore encodes integers as strings)
    pub fn integer_field(&self, name: &str) -> Option<i64> {
        self.fields
            .get(name)
            .and_then(|value| value.get("integerValue"))
            .and_then(|value| value.as_str())
            .and_then(|value| value.parse().ok())
    }
}
