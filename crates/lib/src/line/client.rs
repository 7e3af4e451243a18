//! LINE Messaging API reply client.

use crate::line::flex::Message;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "https://api.line.me";

#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("line request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("line api error: {0}")]
    Api(String),
}

#[derive(Serialize)]
struct ReplyRequest<'a> {
    #[serde(rename = "replyToken")]
    reply_token: &'a str,
    messages: &'a [Message],
}

/// Client for the reply endpoint. Built once at startup and passed in
/// explicitly; no global state.
#[derive(Clone)]
pub struct LineClient {
    base_url: String,
    channel_token: String,
    client: reqwest::Client,
}

impl LineClient {
    /// `base_url` overrides the production endpoint (tests, proxies).
    pub fn new(channel_token: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            channel_token,
            client: reqwest::Client::new(),
        }
    }

    /// POST /v2/bot/message/reply — answer one event via its reply token.
    pub async fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), LineError> {
        let url = format!("{}/v2/bot/message/reply", self.base_url);
        let body = ReplyRequest {
            reply_token,
            messages,
        };
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.channel_token)
            .json(&body)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(LineError::Api(format!("{} {}", status, body)));
        }
        Ok(())
    }
}
