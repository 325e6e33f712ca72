use anyhow::Result;
use chiconnect_core::kv::KeyValueStore;
use chiconnect_core::{NewConnection, Store};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn list<S: KeyValueStore>(store: &Store<S>, search: Option<&str>) -> Result<()> {
    let total = store.connections().len();
    let connections = store.search_connections(search.unwrap_or_default());

    println!(
        "{} {}",
        "Connections".bold(),
        format!("({} professional {})", total, pluralize("contact", total)).dimmed()
    );

    if connections.is_empty() {
        let hint = if total == 0 {
            "No connections yet. Add one with `chiconnect connect <event-id> ...`."
        } else {
            "No connections match your search."
        };
        println!("   {}", hint.dimmed());
        return Ok(());
    }

    for connection in &connections {
        println!();
        println!("{}", connection.render());
    }

    Ok(())
}

pub fn add<S: KeyValueStore>(
    store: &mut Store<S>,
    event_id: &str,
    name: String,
    role: String,
    handle: String,
    company: Option<String>,
) -> Result<()> {
    let event = store.event(event_id)?;

    let connection = store.add_connection(NewConnection {
        name,
        role,
        company,
        social_handle: handle,
        event_id: event.id,
        event_title: event.title,
        avatar: None,
    })?;

    println!(
        "{}",
        format!("  {} has been added to your connections.", connection.name).green()
    );

    Ok(())
}

pub fn delete<S: KeyValueStore>(
    store: &mut Store<S>,
    connection_id: &str,
    yes: bool,
) -> Result<()> {
    let Some(connection) = store
        .connections()
        .into_iter()
        .find(|c| c.id == connection_id)
    else {
        anyhow::bail!("Connection '{}' not found", connection_id);
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete {} from your connections?", connection.name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Nothing deleted.".dimmed());
            return Ok(());
        }
    }

    let remaining = store.delete_connection(connection_id)?;
    println!(
        "{} {}",
        format!("  Deleted {}.", connection.name).red(),
        format!("{} remaining", remaining.len()).dimmed()
    );

    Ok(())
}
