//! Typed LINE webhook events.
//!
//! The webhook body carries a batch of events. Event and message kinds
//! are closed tagged unions, so a new kind we care about forces an
//! explicit branch instead of slipping through string comparisons.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WebhookPayload {
    #[serde(default)]
    events: Vec<Event>,
}

/// One webhook event. Only message events are actionable; everything
/// else (follow, unfollow, postback, ...) deserializes to Other and is
/// skipped by the dispatcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Message(MessageEvent),
    #[serde(other)]
    Other,
}

/// A message event: the single-use reply token plus the message content.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    #[serde(rename = "replyToken")]
    pub reply_token: String,
    pub message: MessageContent,
}

/// Message content. Only text carries a payload we act on; stickers,
/// images, and the rest are skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Parse the raw webhook body into its event sequence, in arrival order.
pub fn parse_events(body: &[u8]) -> Result<Vec<Event>, serde_json::Error> {
    let payload: WebhookPayload = serde_json::from_slice(body)?;
    Ok(payload.events)
}
