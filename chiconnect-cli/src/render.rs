//! TUI rendering traits for chiconnect types.
//!
//! Extension traits that add colored terminal rendering to chiconnect-core
//! types using owo_colors.

use chiconnect_core::event::{Event, RsvpStatus};
use chiconnect_core::{Connection, UserProfile};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for RsvpStatus {
    fn render(&self) -> String {
        match self {
            RsvpStatus::Rsvp => "going".green().to_string(),
            RsvpStatus::Interested => "interested".yellow().to_string(),
            RsvpStatus::NotInterested => "not interested".dimmed().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut header = format!("{} {}", format!("[{}]", self.id).dimmed(), self.title.bold());
        if let Some(status) = &self.rsvp_status {
            header.push_str(&format!(" ({})", status.render()));
        }
        if self.is_attended() {
            header.push_str(&format!(" {}", "✓ attended".cyan()));
        }

        let mut lines = vec![
            header,
            format!("   📅 {} {}", self.date, self.time).dimmed().to_string(),
            format!("   📍 {}", self.location).dimmed().to_string(),
        ];
        if let Some(host) = &self.host {
            lines.push(format!("   Hosted by {}", host).dimmed().to_string());
        }
        if !self.badges.is_empty() {
            let badges: Vec<String> = self
                .badges
                .iter()
                .map(|b| format!("#{}", b.replace(' ', "-")))
                .collect();
            lines.push(format!("   {}", badges.join(" ").magenta()));
        }

        lines.join("\n")
    }
}

impl Render for Connection {
    fn render(&self) -> String {
        let company = self
            .company
            .as_ref()
            .map(|c| format!(" at {}", c))
            .unwrap_or_default();

        format!(
            "{} {} {}{}\n   @{} · met at {} · {}\n   {}",
            format!("({})", self.display_avatar()).cyan(),
            self.name.bold(),
            self.role,
            company,
            self.social_handle,
            self.event_title,
            self.added_date.format("%b %-d, %Y"),
            self.id.dimmed()
        )
    }
}

impl Render for UserProfile {
    fn render(&self) -> String {
        if self.is_blank() {
            return "   No profile yet. Run `chiconnect profile edit --name <name>` to create one."
                .dimmed()
                .to_string();
        }

        let mut lines = vec![format!("👤 {}", self.name.bold())];
        if !self.bio.is_empty() {
            lines.push(format!("   {}", self.bio));
        }

        lines.push(String::new());
        lines.push("   Skills:".dimmed().to_string());
        if self.skills.is_empty() {
            lines.push("   No skills added yet.".dimmed().to_string());
        } else {
            lines.push(format!("   {}", self.skills.join(", ").green()));
        }

        lines.push("   Goals:".dimmed().to_string());
        if self.goals.is_empty() {
            lines.push("   No goals set yet.".dimmed().to_string());
        } else {
            for goal in &self.goals {
                lines.push(format!("   • {}", goal));
            }
        }

        lines.join("\n")
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
