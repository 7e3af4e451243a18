//! Reply building: turn a search outcome into a LINE message.
//!
//! Pure functions — identical input yields an identical document, so
//! tests can compare serialized output directly.

use crate::line::flex::{
    Action, BoxBlock, Bubble, ButtonBlock, Component, Container, ImageBlock, Message, TextBlock,
};
use crate::travel::{HotelInfo, SearchOutcome};

/// Fallback text when the search yields nothing (or failed upstream).
pub const NO_RESULTS_TEXT: &str =
    "この検索条件に該当する宿泊施設が見つかりませんでした。\n条件を変えて再検索してください。";

/// Alternative text shown in chat lists and on clients without Flex support.
pub const RESULTS_ALT_TEXT: &str = "宿泊検索の結果です。";

/// Build the reply message for a search outcome: a text fallback for
/// no results, otherwise a carousel with one bubble per hotel in
/// upstream order.
pub fn build_reply(outcome: &SearchOutcome) -> Message {
    match outcome {
        SearchOutcome::NoResults => Message::text(NO_RESULTS_TEXT),
        SearchOutcome::Hotels(hotels) => Message::flex(
            RESULTS_ALT_TEXT,
            Container::Carousel {
                contents: hotels.iter().map(bubble).collect(),
            },
        ),
    }
}

fn bubble(hotel: &HotelInfo) -> Bubble {
    Bubble::new(hero(hotel), body(hotel), footer(hotel))
}

/// Hero block: the hotel photo, tapping opens the information page.
fn hero(hotel: &HotelInfo) -> Component {
    Component::Image(ImageBlock {
        url: hotel.hotel_image_url.clone(),
        size: "full".to_string(),
        aspect_ratio: "20:13".to_string(),
        aspect_mode: "cover".to_string(),
        action: Action::Uri {
            label: None,
            uri: hotel.hotel_information_url.clone(),
        },
    })
}

/// Body block: bold hotel name over address and price rows.
fn body(hotel: &HotelInfo) -> Component {
    // Prefecture and the rest of the address are concatenated as-is.
    let address = format!("{}{}", hotel.address1, hotel.address2);
    let price = format!("¥{}〜", group_thousands(hotel.hotel_min_charge));
    Component::Box(BoxBlock {
        layout: "vertical".to_string(),
        contents: vec![
            Component::Text(TextBlock {
                text: hotel.hotel_name.clone(),
                wrap: Some(true),
                weight: Some("bold".to_string()),
                size: Some("md".to_string()),
                ..Default::default()
            }),
            Component::Box(BoxBlock {
                layout: "vertical".to_string(),
                margin: Some("lg".to_string()),
                spacing: Some("sm".to_string()),
                contents: vec![detail_row("住所", address), detail_row("料金", price)],
                ..Default::default()
            }),
        ],
        ..Default::default()
    })
}

/// One baseline key/value row (grey label, wrapped value).
fn detail_row(label: &str, value: String) -> Component {
    Component::Box(BoxBlock {
        layout: "baseline".to_string(),
        spacing: Some("sm".to_string()),
        contents: vec![
            Component::Text(TextBlock {
                text: label.to_string(),
                color: Some("#aaaaaa".to_string()),
                size: Some("sm".to_string()),
                flex: Some(1),
                ..Default::default()
            }),
            Component::Text(TextBlock {
                text: value,
                wrap: Some(true),
                color: Some("#666666".to_string()),
                size: Some("sm".to_string()),
                flex: Some(5),
                ..Default::default()
            }),
        ],
        ..Default::default()
    })
}

/// Footer block: call and map link buttons. Phone number and
/// coordinates are embedded verbatim.
fn footer(hotel: &HotelInfo) -> Component {
    Component::Box(BoxBlock {
        layout: "vertical".to_string(),
        spacing: Some("sm".to_string()),
        flex: Some(0),
        contents: vec![
            link_button("電話する", format!("tel:{}", hotel.telephone_no)),
            link_button(
                "地図を見る",
                format!(
                    "https://www.google.com/maps?q={},{}",
                    hotel.latitude, hotel.longitude
                ),
            ),
            Component::Spacer {
                size: "sm".to_string(),
            },
        ],
        ..Default::default()
    })
}

fn link_button(label: &str, uri: String) -> Component {
    Component::Button(ButtonBlock {
        style: "link".to_string(),
        height: "sm".to_string(),
        action: Action::Uri {
            label: Some(label.to_string()),
            uri,
        },
    })
}

/// Group integer digits in threes: 12000 -> "12,000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
