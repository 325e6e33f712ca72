//! Professional contacts made at events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A recorded contact, tied to the event where the user met them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Handle without the leading `@`
    pub social_handle: String,

    // Weak back-reference; the event may no longer exist
    pub event_id: String,
    pub event_title: String,

    pub added_date: DateTime<Utc>,
    /// Short initials for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Connection {
    /// Case-insensitive substring match on name, role, company and event title.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [
            Some(self.name.as_str()),
            Some(self.role.as_str()),
            self.company.as_deref(),
            Some(self.event_title.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }

    /// Avatar initials, falling back to the first letter of the name.
    pub fn display_avatar(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| self.name.chars().take(1).collect())
    }
}

/// What the add-connection form submits. The store fills in `id` and
/// `added_date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConnection {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    pub social_handle: String,
    pub event_id: String,
    pub event_title: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl NewConnection {
    /// Check required fields and return the cleaned-up record.
    ///
    /// Name, role and social handle must be non-blank. Text is trimmed, a
    /// blank company becomes `None`, and the handle loses its leading `@`.
    pub fn validate(self) -> StoreResult<NewConnection> {
        let name = self.name.trim().to_string();
        let role = self.role.trim().to_string();
        let social_handle = normalize_handle(&self.social_handle);

        let missing: Vec<&str> = [
            ("name", name.is_empty()),
            ("role", role.is_empty()),
            ("social handle", social_handle.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, blank)| blank.then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(StoreError::Validation(format!(
                "Required fields missing: {}",
                missing.join(", ")
            )));
        }

        let company = self
            .company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let avatar = self
            .avatar
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .or_else(|| initials(&name));

        Ok(NewConnection {
            name,
            role,
            company,
            social_handle,
            event_id: self.event_id,
            event_title: self.event_title,
            avatar,
        })
    }

    pub(crate) fn into_connection(self, id: String, added_date: DateTime<Utc>) -> Connection {
        Connection {
            id,
            name: self.name,
            role: self.role,
            company: self.company,
            social_handle: self.social_handle,
            event_id: self.event_id,
            event_title: self.event_title,
            added_date,
            avatar: self.avatar,
        }
    }
}

/// Strip surrounding whitespace and a leading `@` from a social handle.
pub fn normalize_handle(handle: &str) -> String {
    let trimmed = handle.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_string()
}

/// Up to two upper-cased initials from a name ("Jane Doe" -> "JD").
pub fn initials(name: &str) -> Option<String> {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() { None } else { Some(letters) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> NewConnection {
        NewConnection {
            name: "  Jane Doe ".to_string(),
            role: "Engineer".to_string(),
            company: Some("   ".to_string()),
            social_handle: "@janedoe".to_string(),
            event_id: "1".to_string(),
            event_title: "Tech Networking Mixer".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn validate_cleans_fields() {
        let cleaned = jane().validate().unwrap();
        assert_eq!(cleaned.name, "Jane Doe");
        assert_eq!(cleaned.company, None);
        assert_eq!(cleaned.social_handle, "janedoe");
        assert_eq!(cleaned.avatar.as_deref(), Some("JD"));
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let input = NewConnection {
            name: " ".to_string(),
            role: String::new(),
            social_handle: "@".to_string(),
            ..jane()
        };

        let message = match input.validate() {
            Err(StoreError::Validation(message)) => message,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert!(message.contains("name"));
        assert!(message.contains("role"));
        assert!(message.contains("social handle"));
    }

    #[test]
    fn explicit_avatar_is_kept() {
        let input = NewConnection {
            avatar: Some("J".to_string()),
            ..jane()
        };
        assert_eq!(input.validate().unwrap().avatar.as_deref(), Some("J"));
    }

    #[test]
    fn normalize_handle_strips_single_at() {
        assert_eq!(normalize_handle("@janedoe"), "janedoe");
        assert_eq!(normalize_handle(" janedoe "), "janedoe");
        assert_eq!(normalize_handle("@ jane"), "jane");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("maya rodriguez lopez").as_deref(), Some("MR"));
        assert_eq!(initials("Cher").as_deref(), Some("C"));
        assert_eq!(initials("   "), None);
    }

    #[test]
    fn matches_searches_company_and_event_title() {
        let conn = jane()
            .validate()
            .unwrap()
            .into_connection("c1".to_string(), Utc::now());
        let with_company = Connection {
            company: Some("Acme Corp".to_string()),
            ..conn.clone()
        };

        assert!(conn.matches("jane"));
        assert!(conn.matches("MIXER"));
        assert!(conn.matches(""));
        assert!(!conn.matches("acme"));
        assert!(with_company.matches("acme"));
    }

    #[test]
    fn browser_shaped_record_keeps_its_keys() {
        let raw = r#"{
            "id": "1726221600000",
            "name": "Jane Doe",
            "role": "Engineer",
            "company": "Acme Corp",
            "socialHandle": "janedoe",
            "eventId": "1",
            "eventTitle": "Chicago Tech Mixer",
            "addedDate": "2025-09-13T10:00:00.000Z"
        }"#;

        let conn: Connection = serde_json::from_str(raw).unwrap();
        assert_eq!(conn.social_handle, "janedoe");
        assert_eq!(conn.event_title, "Chicago Tech Mixer");
        assert_eq!(conn.added_date.to_rfc3339(), "2025-09-13T10:00:00+00:00");
        assert_eq!(conn.avatar, None);

        let written = serde_json::to_value(&conn).unwrap();
        let original: serde_json::Value = serde_json::from_str(raw).unwrap();
        let keys = |v: &serde_json::Value| {
            let mut keys: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        };
        assert_eq!(keys(&written), keys(&original));

        let reread: Connection = serde_json::from_value(written).unwrap();
        assert_eq!(reread, conn);
    }
}
