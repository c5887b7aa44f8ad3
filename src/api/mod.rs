//! Roster service API module.
//!
//! `RosterApi` is the seam between the client core and the backend; the
//! reqwest-backed implementation lives in [`client`].

#![allow(async_fn_in_trait)]

mod client;

pub use client::*;

use crate::errors::Result;
use crate::models::{MutationAck, Roster};

/// The two enrollment mutations the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    /// Last path segment of the mutation endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Mutation::Signup => "signup",
            Mutation::Unregister => "unregister",
        }
    }

    /// Shown when a success body carries no `message`.
    pub fn success_fallback(&self) -> &'static str {
        match self {
            Mutation::Signup => "Signed up successfully",
            Mutation::Unregister => "Successfully unregistered participant",
        }
    }

    /// Shown when a rejection carries no usable `detail`.
    pub fn rejection_fallback(&self) -> &'static str {
        match self {
            Mutation::Signup => "An error occurred",
            Mutation::Unregister => "Failed to unregister participant",
        }
    }

    /// Shown when the request never produced a usable answer.
    pub fn transport_message(&self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to unregister participant. Please try again.",
        }
    }
}

/// Operations the client needs from the roster service.
///
/// Implementations report a non-success status as
/// [`ClientError::Status`](crate::errors::ClientError::Status) and anything
/// that prevented a usable answer as a transport or malformed-response error.
pub trait RosterApi {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<Roster>;

    /// `POST /activities/{activity}/{signup|unregister}?email={email}`
    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> Result<MutationAck>;
}
