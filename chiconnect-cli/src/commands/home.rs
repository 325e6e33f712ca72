use anyhow::Result;
use chiconnect_core::Store;
use chiconnect_core::kv::KeyValueStore;
use chiconnect_core::stats::DashboardStats;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(store: &Store<S>) -> Result<()> {
    let profile = store.profile();
    let stats = DashboardStats::compute(&store.events(), &store.connections());

    let greeting = if profile.name.is_empty() {
        "Welcome back".to_string()
    } else {
        format!("Welcome back, {}", profile.name)
    };
    println!("{}", greeting.bold());
    println!("{}", store.today().format("%B %Y").to_string().dimmed());
    println!();
    println!("  Events attended:  {}", stats.events_attended.green());
    println!("  Connections made: {}", stats.connections_made.green());

    println!("\n{}", "Upcoming RSVPs".bold());
    if stats.upcoming_rsvps.is_empty() {
        println!("  {}", "No upcoming RSVPs. Browse the feed with `chiconnect feed`.".dimmed());
    }
    for event in &stats.upcoming_rsvps {
        println!("  {} {} {}", event.date.dimmed(), event.time.dimmed(), event.title);
    }

    Ok(())
}
