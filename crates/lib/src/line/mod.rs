//! LINE Messaging API integration.
//!
//! Webhook signature verification, typed webhook events, the Flex
//! message model, and the reply API client.

mod client;
mod events;
pub mod flex;
mod signature;

pub use client::{LineClient, LineError};
pub use events::{parse_events, Event, MessageContent, MessageEvent};
pub use signature::{sign, verify};
