//! Storage keys and limits shared across the crate.

/// Events collection (JSON array of `Event`).
pub const EVENTS_KEY: &str = "chiconnect-events";

/// Connections collection (JSON array of `Connection`, newest first).
pub const CONNECTIONS_KEY: &str = "chiconnect-connections";

/// The single `UserProfile` record.
pub const PROFILE_KEY: &str = "chiconnect-profile";

/// `"true"` once onboarding has been completed.
pub const ONBOARDING_KEY: &str = "chiconnect-onboarding-completed";

/// `"true"`/`"false"` for whether the profile is visible to other attendees.
pub const VISIBILITY_KEY: &str = "chiconnect-profile-visibility";

/// Every key the store owns. `Store::clear_all` removes exactly these.
pub const ALL_KEYS: [&str; 5] = [
    EVENTS_KEY,
    CONNECTIONS_KEY,
    PROFILE_KEY,
    ONBOARDING_KEY,
    VISIBILITY_KEY,
];

/// Maximum number of upcoming RSVPs shown on the home dashboard.
pub const DASHBOARD_UPCOMING_LIMIT: usize = 3;
