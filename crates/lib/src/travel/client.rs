//! Keyword hotel search client.
//!
//! One GET per user query, no retries. The response body is either a
//! domain error object ({"error": ...}, e.g. nothing matched) or a
//! "hotels" array with an extra wrapper layer around each record.

use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://app.rakuten.co.jp";
const SEARCH_PATH: &str = "/services/api/Travel/KeywordHotelSearch/20170426";

/// How many hotels to request per search.
const SEARCH_HITS: &str = "5";

#[derive(Debug, thiserror::Error)]
pub enum TravelError {
    #[error("travel search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("travel search returned invalid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("travel search response shape: {0}")]
    Shape(&'static str),
}

/// Happy-path search outcome: hotels in upstream order, or the
/// domain-level "nothing matched" result. Transport and parse failures
/// are a `TravelError`, not an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Hotels(Vec<HotelInfo>),
    NoResults,
}

/// The hotelBasicInfo fields the reply builder renders. All are
/// required; a record missing one fails the parse and the caller
/// degrades to the no-results reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelInfo {
    pub hotel_name: String,
    pub hotel_image_url: String,
    pub hotel_information_url: String,
    pub address1: String,
    pub address2: String,
    pub hotel_min_charge: u64,
    pub telephone_no: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Client for the keyword hotel search API.
#[derive(Clone)]
pub struct TravelClient {
    base_url: String,
    application_id: String,
    client: reqwest::Client,
}

impl TravelClient {
    /// Build a client with a bounded request timeout. `base_url`
    /// overrides the production endpoint (tests, proxies).
    pub fn new(
        application_id: String,
        timeout: Duration,
        base_url: Option<String>,
    ) -> Result<Self, TravelError> {
        let base_url = base_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            application_id,
            client,
        })
    }

    /// GET the keyword search endpoint. The keyword is passed through
    /// verbatim; upstream decides what an empty or odd query means.
    pub async fn search(&self, keyword: &str) -> Result<SearchOutcome, TravelError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let res = self
            .client
            .get(&url)
            .query(&[
                ("keyword", keyword),
                ("applicationId", self.application_id.as_str()),
                ("hits", SEARCH_HITS),
                ("responseType", "small"),
                ("datumType", "1"),
                ("formatVersion", "2"),
            ])
            .send()
            .await?;
        let body = res.text().await?;
        parse_search_response(&body)
    }
}

/// Parse a search response body.
///
/// An "error" key means the domain said no (nothing found, bad query)
/// and maps to NoResults. Otherwise each entry of "hotels" is unwrapped
/// as wrapper[0]["hotelBasicInfo"] — the extra layer is an upstream API
/// quirk and must be peeled exactly this way.
pub fn parse_search_response(body: &str) -> Result<SearchOutcome, TravelError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.get("error").is_some() {
        return Ok(SearchOutcome::NoResults);
    }
    let wrappers = value
        .get("hotels")
        .and_then(|h| h.as_array())
        .ok_or(TravelError::Shape("missing hotels array"))?;
    let mut hotels = Vec::with_capacity(wrappers.len());
    for wrapper in wrappers {
        let info = wrapper
            .get(0)
            .and_then(|w| w.get("hotelBasicInfo"))
            .ok_or(TravelError::Shape("missing hotelBasicInfo"))?;
        hotels.push(serde_json::from_value(info.clone())?);
    }
    Ok(SearchOutcome::Hotels(hotels))
}
