//! Community event records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A community event as shown in the feed.
///
/// Field names serialize in camelCase to stay compatible with documents
/// exported from the browser build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    /// Display time, e.g. "6:00 PM"
    pub time: String,
    /// Relative path of a static image asset
    pub image: String,
    #[serde(default)]
    pub badges: Vec<String>,

    /// None until the user responds (or after the response is cleared)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_status: Option<RsvpStatus>,
    /// Set independently of `rsvp_status`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attended: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Event {
    pub fn is_attended(&self) -> bool {
        self.attended.unwrap_or(false)
    }

    pub fn is_rsvped(&self) -> bool {
        self.rsvp_status == Some(RsvpStatus::Rsvp)
    }

    /// Parsed `date`, if it is a well-formed ISO date.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The user's response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Interested,
    NotInterested,
    Rsvp,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Interested => "interested",
            RsvpStatus::NotInterested => "not_interested",
            RsvpStatus::Rsvp => "rsvp",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = String;

    /// Accepts the stored names plus the spellings a person would type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "interested" => Ok(RsvpStatus::Interested),
            "not_interested" | "pass" => Ok(RsvpStatus::NotInterested),
            "rsvp" | "going" => Ok(RsvpStatus::Rsvp),
            other => Err(format!(
                "Unknown RSVP status '{other}'. Expected interested, not-interested or rsvp"
            )),
        }
    }
}
