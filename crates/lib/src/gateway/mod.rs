//! Webhook gateway: the HTTP surface LINE talks to.
//!
//! One port serves a health probe and the webhook callback.

mod server;

pub use server::{run_server, AppState};
