//! The local store accessor.
//!
//! `Store` is the only thing that reads or writes the persisted collections.
//! Every mutating call is a full read-modify-write: load the collection, change
//! it, write the whole thing back and hand the result to the caller to render.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::connection::{Connection, NewConnection};
use crate::constants::{
    ALL_KEYS, CONNECTIONS_KEY, EVENTS_KEY, ONBOARDING_KEY, PROFILE_KEY, VISIBILITY_KEY,
};
use crate::error::{StoreError, StoreResult};
use crate::event::{Event, RsvpStatus};
use crate::export::ExportDocument;
use crate::kv::KeyValueStore;
use crate::profile::UserProfile;
use crate::seed::default_events;

pub struct Store<S: KeyValueStore> {
    backend: S,
    /// Fixed "today" for seeding; None means the local calendar date
    today: Option<NaiveDate>,
}

impl<S: KeyValueStore> Store<S> {
    pub fn new(backend: S) -> Self {
        Store {
            backend,
            today: None,
        }
    }

    /// Pin the date default events are seeded relative to.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    // GENERIC ACCESS:

    /// Read and parse the value at `key`.
    ///
    /// Missing or unparsable content yields `default()`. The default is not
    /// written back.
    pub fn load<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default(),
            Err(e) => {
                warn!(key, error = %e, "Could not read key, using default");
                return default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    key,
                    error = %e,
                    "Stored value is not valid, using default; the next save replaces it"
                );
                default()
            }
        }
    }

    /// Serialize `value` and overwrite `key` with it.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "Saved");
        Ok(())
    }

    // EVENTS:

    pub fn events(&self) -> Vec<Event> {
        let today = self.today();
        self.load(EVENTS_KEY, || default_events(today))
    }

    pub fn save_events(&mut self, events: &[Event]) -> StoreResult<()> {
        self.save(EVENTS_KEY, events)
    }

    pub fn event(&self, event_id: &str) -> StoreResult<Event> {
        self.events()
            .into_iter()
            .find(|e| e.id == event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))
    }

    /// Set (or clear, with `None`) the RSVP status of one event.
    ///
    /// Unknown ids leave the list unchanged.
    pub fn update_event_status(
        &mut self,
        event_id: &str,
        status: Option<RsvpStatus>,
    ) -> StoreResult<Vec<Event>> {
        let (events, found) = self.update_event(event_id, |event| event.rsvp_status = status)?;
        if found {
            info!(event_id, status = ?status, "Updated RSVP status");
        }
        Ok(events)
    }

    /// Flag an event as attended. The RSVP status is left alone.
    pub fn mark_attended(&mut self, event_id: &str) -> StoreResult<Vec<Event>> {
        let (events, found) = self.update_event(event_id, |event| event.attended = Some(true))?;
        if found {
            info!(event_id, "Marked attended");
        }
        Ok(events)
    }

    /// Drop an event from the timeline by clearing its RSVP.
    pub fn clear_rsvp(&mut self, event_id: &str) -> StoreResult<Vec<Event>> {
        self.update_event_status(event_id, None)
    }

    /// Apply `change` to the event with `event_id` and persist the full list.
    ///
    /// The list is written even when no event matched, so the seed becomes
    /// persistent. The flag reports whether a match was found.
    fn update_event<F>(&mut self, event_id: &str, change: F) -> StoreResult<(Vec<Event>, bool)>
    where
        F: FnOnce(&mut Event),
    {
        let mut events = self.events();
        let found = match events.iter_mut().find(|e| e.id == event_id) {
            Some(event) => {
                change(event);
                true
            }
            None => {
                debug!(event_id, "No such event, nothing to update");
                false
            }
        };

        self.save_events(&events)?;
        Ok((events, found))
    }

    // CONNECTIONS:

    /// All connections, newest first.
    pub fn connections(&self) -> Vec<Connection> {
        self.load(CONNECTIONS_KEY, Vec::new)
    }

    pub fn save_connections(&mut self, connections: &[Connection]) -> StoreResult<()> {
        self.save(CONNECTIONS_KEY, connections)
    }

    /// Validate and record a new connection at the front of the list.
    ///
    /// Nothing is written if validation fails.
    pub fn add_connection(&mut self, new: NewConnection) -> StoreResult<Connection> {
        let new = new.validate()?;

        let mut connections = self.connections();
        let id = unique_id(&connections);
        let connection = new.into_connection(id, Utc::now());

        connections.insert(0, connection.clone());
        self.save_connections(&connections)?;

        info!(
            connection_id = %connection.id,
            event_id = %connection.event_id,
            "Added connection"
        );
        Ok(connection)
    }

    /// Remove one connection, keeping the order of the rest.
    pub fn delete_connection(&mut self, connection_id: &str) -> StoreResult<Vec<Connection>> {
        let mut connections = self.connections();
        let before = connections.len();
        connections.retain(|c| c.id != connection_id);

        if connections.len() == before {
            debug!(connection_id, "No such connection, nothing to delete");
        } else {
            info!(connection_id, "Deleted connection");
        }

        self.save_connections(&connections)?;
        Ok(connections)
    }

    pub fn connections_for_event(&self, event_id: &str) -> Vec<Connection> {
        self.connections()
            .into_iter()
            .filter(|c| c.event_id == event_id)
            .collect()
    }

    /// Connections matching `query` on name, role, company or event title.
    pub fn search_connections(&self, query: &str) -> Vec<Connection> {
        self.connections()
            .into_iter()
            .filter(|c| c.matches(query))
            .collect()
    }

    // PROFILE:

    pub fn profile(&self) -> UserProfile {
        self.load(PROFILE_KEY, UserProfile::default)
    }

    /// Overwrite the stored profile.
    pub fn save_profile(&mut self, profile: &UserProfile) -> StoreResult<()> {
        self.save(PROFILE_KEY, profile)?;
        info!("Saved profile");
        Ok(())
    }

    // FLAGS:

    pub fn onboarding_completed(&self) -> bool {
        self.flag(ONBOARDING_KEY, false)
    }

    pub fn set_onboarding_completed(&mut self, completed: bool) -> StoreResult<()> {
        self.set_flag(ONBOARDING_KEY, completed)
    }

    /// Whether the profile is shown to other attendees. Visible by default.
    pub fn profile_visible(&self) -> bool {
        self.flag(VISIBILITY_KEY, true)
    }

    pub fn set_profile_visible(&mut self, visible: bool) -> StoreResult<()> {
        self.set_flag(VISIBILITY_KEY, visible)
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.backend.get(key) {
            Ok(Some(raw)) => match raw.trim() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "Could not read flag, using default");
                default
            }
        }
    }

    fn set_flag(&mut self, key: &str, value: bool) -> StoreResult<()> {
        self.backend.set(key, if value { "true" } else { "false" })
    }

    // WHOLE-STORE OPERATIONS:

    /// Snapshot every collection for download.
    pub fn export(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument {
            events: self.events(),
            connections: self.connections(),
            profile: self.profile(),
            export_date: now,
        }
    }

    /// Remove every key the store owns.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        for key in ALL_KEYS {
            self.backend.remove(key)?;
        }
        info!("Cleared all data");
        Ok(())
    }
}

/// A fresh v4 UUID that no existing connection uses.
fn unique_id(existing: &[Connection]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !existing.iter().any(|c| c.id == id) {
            return id;
        }
    }
}
