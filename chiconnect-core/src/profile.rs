//! The user's own profile.

use serde::{Deserialize, Serialize};

/// Singleton profile record. Saved as a whole, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl UserProfile {
    /// True until the user has entered a name or bio.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.bio.trim().is_empty()
    }

    /// Add a skill. Returns false for blanks and duplicates.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        push_unique(&mut self.skills, skill)
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        remove_value(&mut self.skills, skill)
    }

    /// Add a networking goal. Returns false for blanks and duplicates.
    pub fn add_goal(&mut self, goal: &str) -> bool {
        push_unique(&mut self.goals, goal)
    }

    pub fn remove_goal(&mut self, goal: &str) -> bool {
        remove_value(&mut self.goals, goal)
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

fn remove_value(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    let before = list.len();
    list.retain(|v| v != value);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_trimmed_and_deduplicated() {
        let mut profile = UserProfile::default();
        assert!(profile.add_skill(" Rust "));
        assert!(!profile.add_skill("Rust"));
        assert!(!profile.add_skill("   "));
        assert!(profile.add_skill("Design"));
        assert_eq!(profile.skills, vec!["Rust", "Design"]);
    }

    #[test]
    fn remove_goal_keeps_order_of_the_rest() {
        let mut profile = UserProfile::default();
        profile.add_goal("Find a mentor");
        profile.add_goal("Hire");
        profile.add_goal("Learn");

        assert!(profile.remove_goal("Hire"));
        assert!(!profile.remove_goal("Hire"));
        assert_eq!(profile.goals, vec!["Find a mentor", "Learn"]);
    }

    #[test]
    fn empty_object_parses_as_default() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
        assert!(profile.is_blank());
    }

    #[test]
    fn profile_image_uses_browser_key() {
        let raw = r#"{"name":"Ada","bio":"","skills":["Rust"],"goals":[],"profileImage":"data:image/png;base64,AAAA"}"#;

        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(
            profile.profile_image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );

        let written = serde_json::to_value(&profile).unwrap();
        assert_eq!(written["profileImage"], "data:image/png;base64,AAAA");
        assert!(written.get("profile_image").is_none());
        assert_eq!(written, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }
}
