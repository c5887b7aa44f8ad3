//! Data models for the roster client.
//!
//! Wire shapes follow the roster service's JSON exactly.

mod activity;
mod notice;
mod responses;

pub use activity::*;
pub use notice::*;
pub use responses::*;
