//! Roster client core.
//!
//! Fetches the authoritative activity roster, renders it into cards and a
//! selection control, dispatches enroll/unenroll requests and reconciles the
//! page by re-fetching after every accepted change.

pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod models;
pub mod notifier;
pub mod page;
pub mod render;

pub use api::{HttpRosterApi, Mutation, RosterApi};
pub use app::RosterApp;
pub use config::Config;
pub use errors::{ClientError, Result};
