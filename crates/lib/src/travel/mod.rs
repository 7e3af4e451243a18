//! Rakuten Travel keyword hotel search.

mod client;

pub use client::{parse_search_response, HotelInfo, SearchOutcome, TravelClient, TravelError};
