pub mod connections;
pub mod data;
pub mod feed;
pub mod home;
pub mod profile;
pub mod rsvp;
pub mod settings;
pub mod timeline;
