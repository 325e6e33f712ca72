use anyhow::Result;
use chiconnect_core::Store;
use chiconnect_core::event::Event;
use chiconnect_core::kv::KeyValueStore;
use chiconnect_core::timeline::Timeline;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn run<S: KeyValueStore>(store: &Store<S>) -> Result<()> {
    let timeline = Timeline::build(&store.events(), store.today());

    if timeline.is_empty() {
        println!("{}", "Nothing on your timeline yet.".dimmed());
        println!("RSVP to an event with `chiconnect rsvp <event-id> going`.");
        return Ok(());
    }

    print_section(store, "Upcoming", &timeline.upcoming);
    print_section(store, "Past", &timeline.past);

    Ok(())
}

fn print_section<S: KeyValueStore>(store: &Store<S>, title: &str, events: &[Event]) {
    if events.is_empty() {
        return;
    }

    println!("\n{}", title.bold());
    for event in events {
        println!("{}", event.render());

        let connections = store.connections_for_event(&event.id);
        if connections.is_empty() {
            println!("   {}", "No connections yet".dimmed());
            continue;
        }

        let label = format!(
            "{} {}",
            connections.len(),
            pluralize("connection", connections.len())
        );
        println!("   {}", label.cyan());
        for connection in &connections {
            println!("     {} · {}", connection.name, connection.role);
        }
    }
}
