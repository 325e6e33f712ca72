//! Data export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::connection::Connection;
use crate::error::StoreResult;
use crate::event::Event;
use crate::profile::UserProfile;

/// Everything the user has stored, plus when it was exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub events: Vec<Event>,
    pub connections: Vec<Connection>,
    pub profile: UserProfile,
    pub export_date: DateTime<Utc>,
}

impl ExportDocument {
    /// Pretty-printed JSON, as written to the download file.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `chiconnect-data-YYYY-MM-DD.json`, dated by the export timestamp.
    pub fn file_name(&self) -> String {
        format!("chiconnect-data-{}.json", self.export_date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn doc() -> ExportDocument {
        ExportDocument {
            events: Vec::new(),
            connections: Vec::new(),
            profile: UserProfile::default(),
            export_date: Utc.with_ymd_and_hms(2025, 9, 27, 15, 30, 0).unwrap(),
        }
    }

    #[test]
    fn file_name_uses_export_date() {
        assert_eq!(doc().file_name(), "chiconnect-data-2025-09-27.json");
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = doc().to_json().unwrap();
        assert!(json.contains("\"exportDate\": \"2025-09-27T15:30:00Z\""));
        assert!(json.contains("\"connections\": []"));
    }
}
