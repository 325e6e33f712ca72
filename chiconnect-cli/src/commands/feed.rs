use anyhow::Result;
use chiconnect_core::Store;
use chiconnect_core::kv::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(store: &Store<S>) -> Result<()> {
    let events = store.events();

    println!("{}", "ChiConnect · Discover your next opportunity".bold());
    for event in &events {
        println!();
        println!("{}", event.render());
    }

    Ok(())
}
