use anyhow::Result;
use chiconnect_core::kv::KeyValueStore;
use chiconnect_core::{Store, UserProfile};
use clap::Subcommand;
use owo_colors::OwoColorize;

use crate::render::Render;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show your profile (default)
    Show,
    /// Change your name, bio or picture
    Edit {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        bio: Option<String>,

        /// Path or URL of a profile picture
        #[arg(long)]
        image: Option<String>,
    },
    /// Add or remove a skill
    Skill {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Add or remove a networking goal
    Goal {
        #[command(subcommand)]
        action: ListAction,
    },
}

#[derive(Subcommand)]
pub enum ListAction {
    Add { value: String },
    Remove { value: String },
}

pub fn run<S: KeyValueStore>(store: &mut Store<S>, command: Option<ProfileCommand>) -> Result<()> {
    let mut profile = store.profile();

    let message = match command.unwrap_or(ProfileCommand::Show) {
        ProfileCommand::Show => {
            println!("{}", profile.render());
            if !store.profile_visible() {
                println!("\n   {}", "Hidden from other attendees".dimmed());
            }
            return Ok(());
        }
        ProfileCommand::Edit { name, bio, image } => {
            if let Some(name) = name {
                profile.name = name.trim().to_string();
            }
            if let Some(bio) = bio {
                profile.bio = bio.trim().to_string();
            }
            if let Some(image) = image {
                profile.profile_image = Some(image).filter(|i| !i.trim().is_empty());
            }
            require_name(&profile)?;
            "Profile saved".to_string()
        }
        ProfileCommand::Skill { action } => apply(&mut profile, action, Field::Skill)?,
        ProfileCommand::Goal { action } => apply(&mut profile, action, Field::Goal)?,
    };

    store.save_profile(&profile)?;
    println!("{}", format!("  {}", message).green());

    Ok(())
}

/// Edits from the profile form need a name; skill and goal edits do not.
fn require_name(profile: &UserProfile) -> Result<()> {
    if profile.name.trim().is_empty() {
        anyhow::bail!("Name required: enter your name to save your profile");
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Field {
    Skill,
    Goal,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Skill => "skill",
            Field::Goal => "goal",
        }
    }
}

fn apply(profile: &mut UserProfile, action: ListAction, field: Field) -> Result<String> {
    match action {
        ListAction::Add { value } => {
            let added = match field {
                Field::Skill => profile.add_skill(&value),
                Field::Goal => profile.add_goal(&value),
            };
            if !added {
                anyhow::bail!(
                    "{} '{}' is empty or already on your profile",
                    field.label(),
                    value.trim()
                );
            }
            Ok(format!("Added {}: {}", field.label(), value.trim()))
        }
        ListAction::Remove { value } => {
            let removed = match field {
                Field::Skill => profile.remove_skill(&value),
                Field::Goal => profile.remove_goal(&value),
            };
            if !removed {
                anyhow::bail!("{} '{}' is not on your profile", field.label(), value.trim());
            }
            Ok(format!("Removed {}: {}", field.label(), value.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use chiconnect_core::kv::MemoryStore;

    use super::*;

    #[test]
    fn apply_adds_and_rejects_duplicates() {
        let mut profile = UserProfile::default();
        let message = apply(
            &mut profile,
            ListAction::Add { value: " Rust ".to_string() },
            Field::Skill,
        )
        .unwrap();
        assert_eq!(message, "Added skill: Rust");

        let again = apply(
            &mut profile,
            ListAction::Add { value: "Rust".to_string() },
            Field::Skill,
        );
        assert!(again.is_err());
        assert_eq!(profile.skills, vec!["Rust"]);
    }

    #[test]
    fn edit_without_a_name_is_refused() {
        let profile = UserProfile {
            bio: "No name".to_string(),
            ..UserProfile::default()
        };
        let err = require_name(&profile).unwrap_err();
        assert!(err.to_string().starts_with("Name required"));

        let named = UserProfile {
            name: "Ada".to_string(),
            ..profile
        };
        assert!(require_name(&named).is_ok());
    }

    #[test]
    fn skill_edit_saves_without_a_name() {
        let mut store = Store::new(MemoryStore::new());
        run(
            &mut store,
            Some(ProfileCommand::Skill {
                action: ListAction::Add { value: "Rust".to_string() },
            }),
        )
        .unwrap();
        assert_eq!(store.profile().skills, vec!["Rust"]);
        assert!(store.profile().name.is_empty());
    }

    #[test]
    fn nameless_edit_writes_nothing() {
        let mut store = Store::new(MemoryStore::new());
        let result = run(
            &mut store,
            Some(ProfileCommand::Edit {
                name: None,
                bio: Some("Just a bio".to_string()),
                image: None,
            }),
        );
        assert!(result.is_err());
        assert_eq!(store.profile(), UserProfile::default());
    }

    #[test]
    fn apply_remove_missing_goal_fails() {
        let mut profile = UserProfile::default();
        let result = apply(
            &mut profile,
            ListAction::Remove { value: "Hire".to_string() },
            Field::Goal,
        );
        assert!(result.is_err());
    }
}
