use serde::{Deserialize, Serialize};

pub const DEFAULT_NOTIFICATION_TITLE: &str = "New Notification";
pub const DEFAULT_NOTIFICATION_MESSAGE: &str = "You have a new update";

/// A notification record as written by upstream producers
///
/// Read-only to this service; arrives as the field map of the created
/// document. Upstream writers are sloppy about optional fields, so every
/// field is guarded here rather than at the schema level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
}

impl NotificationRecord {
    /// Target user id, with empty strings treated as absent
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Push title, defaulted when absent or empty
    pub fn title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(DEFAULT_NOTIFICATION_TITLE)
    }

    /// Push body, defaulted when absent or empty
    pub fn message(&self) -> &str {
        non_empty(self.message.as_deref()).unwrap_or(DEFAULT_NOTIFICATION_MESSAGE)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_with_only_user_id_gets_defaults() {
        let record: NotificationRecord =
            serde_json::from_value(json!({"userId": "u1"})).unwrap();

        assert_eq!(record.user_id(), Some("u1"));
        assert_eq!(record.title(), DEFAULT_NOTIFICATION_TITLE);
        assert_eq!(record.message(), DEFAULT_NOTIFICATION_MESSAGE);
    }

    #[test]
    fn test_record_keeps_explicit_title_and_message() {
        let record: NotificationRecord = serde_json::from_value(json!({
            "userId": "u1",
            "title": "Meeting starting",
            "message": "Your 3pm standup is live"
        }))
        .unwrap();

        assert_eq!(record.title(), "Meeting starting");
        assert_eq!(record.message(), "Your 3pm standup is live");
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let record: NotificationRecord = serde_json::from_value(json!({
            "userId": "",
            "title": "",
            "message": ""
        }))
        .unwrap();

        assert_eq!(record.user_id(), None);
        assert_eq!(record.title(), DEFAULT_NOTIFICATION_TITLE);
        assert_eq!(record.message(), DEFAULT_NOTIFICATION_MESSAGE);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record: NotificationRecord = serde_json::from_value(json!({
            "userId": "u1",
            "createdBy": "scheduler"
        }))
        .unwrap();

        assert_eq!(record.user_id(), Some("u1"));
    }
}
