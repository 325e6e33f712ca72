use anyhow::Result;
use chiconnect_core::Store;
use chiconnect_core::event::RsvpStatus;
use chiconnect_core::kv::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(store: &mut Store<S>, event_id: &str, status: &str) -> Result<()> {
    let status = parse_status(status)?;

    // Fails early on unknown ids instead of silently doing nothing
    let event = store.event(event_id)?;
    store.update_event_status(event_id, status)?;

    match status {
        Some(status) => println!("{} {}: {}", "✓".green(), event.title, status.render()),
        None => println!("{} Removed {} from your timeline", "✓".green(), event.title),
    }

    Ok(())
}

pub fn attend<S: KeyValueStore>(store: &mut Store<S>, event_id: &str) -> Result<()> {
    let event = store.event(event_id)?;
    store.mark_attended(event_id)?;

    println!("{} Marked {} as attended", "✓".green(), event.title);
    if event.rsvp_status != Some(RsvpStatus::Rsvp) {
        println!(
            "{}",
            "  (You hadn't RSVP'd, your RSVP status was left as is.)".dimmed()
        );
    }

    Ok(())
}

/// `clear` (or `none`) removes the response, anything else must be a status.
fn parse_status(input: &str) -> Result<Option<RsvpStatus>> {
    match input.trim().to_lowercase().as_str() {
        "clear" | "none" => Ok(None),
        other => other
            .parse::<RsvpStatus>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!(e)),
    }
}
