use std::path::PathBuf;

use anyhow::{Context, Result};
use chiconnect_core::Store;
use chiconnect_core::kv::KeyValueStore;
use chrono::Utc;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn export<S: KeyValueStore>(store: &Store<S>, output: Option<PathBuf>) -> Result<()> {
    let document = store.export(Utc::now());
    let path = output.unwrap_or_else(|| PathBuf::from(document.file_name()));

    let json = document.to_json()?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    println!(
        "{}",
        format!("  Data exported to {}", path.display()).green()
    );
    println!(
        "{}",
        format!(
            "  {} events, {} connections",
            document.events.len(),
            document.connections.len()
        )
        .dimmed()
    );

    Ok(())
}

pub fn clear<S: KeyValueStore>(store: &mut Store<S>, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(
                "  Delete all events, connections and your profile? This cannot be undone. \
                 Consider `chiconnect export` first",
            )
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Nothing deleted.".dimmed());
            return Ok(());
        }
    }

    store.clear_all()?;
    println!("{}", "  All app data has been cleared.".red());

    Ok(())
}
