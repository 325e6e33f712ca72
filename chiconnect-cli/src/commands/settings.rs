use anyhow::Result;
use chiconnect_core::Store;
use chiconnect_core::kv::KeyValueStore;
use clap::ValueEnum;
use owo_colors::OwoColorize;

#[derive(Clone, Copy, ValueEnum)]
pub enum Visibility {
    On,
    Off,
}

pub fn visibility<S: KeyValueStore>(
    store: &mut Store<S>,
    visibility: Option<Visibility>,
) -> Result<()> {
    if let Some(visibility) = visibility {
        store.set_profile_visible(matches!(visibility, Visibility::On))?;
    }

    if store.profile_visible() {
        println!("Profile visibility: {}", "visible to other attendees".green());
    } else {
        println!("Profile visibility: {}", "hidden".yellow());
    }

    Ok(())
}

pub fn onboard<S: KeyValueStore>(store: &mut Store<S>, reset: bool) -> Result<()> {
    if reset {
        store.set_onboarding_completed(false)?;
        println!("{}", "  Onboarding reset.".yellow());
        return Ok(());
    }

    if store.onboarding_completed() {
        println!("{}", "  Onboarding already completed.".dimmed());
        return Ok(());
    }

    store.set_onboarding_completed(true)?;
    println!("{}", "  Welcome to ChiConnect! Onboarding completed.".green());
    println!("  Next: `chiconnect feed` to browse events, `chiconnect profile edit` to introduce yourself.");

    Ok(())
}
