//! Typed LINE Flex message blocks.
//!
//! A small tree of block variants that serializes to the LINE message
//! object schema. Building replies through these types instead of raw
//! JSON maps keeps field names and nesting honest at compile time.
//! Optional styling fields are skipped when unset so the serialized
//! form matches the hand-written schema exactly.

use serde::Serialize;

/// An outgoing LINE message: plain text or a Flex document.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Text {
        text: String,
    },
    Flex {
        #[serde(rename = "altText")]
        alt_text: String,
        contents: Container,
    },
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text { text: text.into() }
    }

    pub fn flex(alt_text: impl Into<String>, contents: Container) -> Self {
        Message::Flex {
            alt_text: alt_text.into(),
            contents,
        }
    }
}

/// Top-level Flex container. Only the carousel is used here.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Container {
    Carousel { contents: Vec<Bubble> },
}

/// One carousel card: hero image, body rows, footer buttons.
#[derive(Debug, Clone, Serialize)]
pub struct Bubble {
    #[serde(rename = "type")]
    kind: &'static str,
    pub hero: Component,
    pub body: Component,
    pub footer: Component,
}

impl Bubble {
    pub fn new(hero: Component, body: Component, footer: Component) -> Self {
        Self {
            kind: "bubble",
            hero,
            body,
            footer,
        }
    }
}

/// A Flex component.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Box(BoxBlock),
    Text(TextBlock),
    Image(ImageBlock),
    Button(ButtonBlock),
    Spacer { size: String },
}

/// Layout container for nested components.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoxBlock {
    pub layout: String,
    pub contents: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u32>,
}

/// Text span with optional styling.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u32>,
}

/// Image with a tap action (the hero block).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub url: String,
    pub size: String,
    pub aspect_ratio: String,
    pub aspect_mode: String,
    pub action: Action,
}

/// Button wrapping a tap action.
#[derive(Debug, Clone, Serialize)]
pub struct ButtonBlock {
    pub style: String,
    pub height: String,
    pub action: Action,
}

/// Tap action. Only URI actions are used (info page, tel:, maps).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Uri {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        uri: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_message_shape() {
        let json = serde_json::to_value(Message::text("hello")).expect("serialize");
        assert_eq!(json, serde_json::json!({"type": "text", "text": "hello"}));
    }

    #[test]
    fn flex_message_carries_alt_text_and_carousel_tag() {
        let message = Message::flex("alt", Container::Carousel { contents: vec![] });
        let json = serde_json::to_value(message).expect("serialize");
        assert_eq!(json["type"], "flex");
        assert_eq!(json["altText"], "alt");
        assert_eq!(json["contents"]["type"], "carousel");
        assert_eq!(json["contents"]["contents"], serde_json::json!([]));
    }

    #[test]
    fn unset_styling_fields_are_omitted() {
        let block = Component::Text(TextBlock {
            text: "plain".to_string(),
            ..Default::default()
        });
        let json = serde_json::to_value(block).expect("serialize");
        assert_eq!(json, serde_json::json!({"type": "text", "text": "plain"}));
    }

    #[test]
    fn image_block_uses_camel_case_wire_names() {
        let block = Component::Image(ImageBlock {
            url: "https://example.com/x.jpg".to_string(),
            size: "full".to_string(),
            aspect_ratio: "20:13".to_string(),
            aspect_mode: "cover".to_string(),
            action: Action::Uri {
                label: None,
                uri: "https://example.com/".to_string(),
            },
        });
        let json = serde_json::to_value(block).expect("serialize");
        assert_eq!(json["aspectRatio"], "20:13");
        assert_eq!(json["aspectMode"], "cover");
        assert_eq!(json["action"]["type"], "uri");
        assert!(json["action"].get("label").is_none());
    }

    #[test]
    fn bubble_carries_type_tag() {
        let bubble = Bubble::new(
            Component::Spacer {
                size: "sm".to_string(),
            },
            Component::Spacer {
                size: "sm".to_string(),
            },
            Component::Spacer {
                size: "sm".to_string(),
            },
        );
        let json = serde_json::to_value(bubble).expect("serialize");
        assert_eq!(json["type"], "bubble");
        assert_eq!(json["hero"]["type"], "spacer");
    }
}
