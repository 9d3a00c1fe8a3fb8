//! # Creation model
//!
//! A [`Creation`] is one piece of generated content: a media reference, the
//! prompt that produced it, its owner and the editorial `picked` flag.
//!
//! Older records name the media reference `imageUrl` instead of `media_url`.
//! Both shapes deserialize through [`CreationRecord`], which folds them into the
//! single `media_url` field, so nothing past this boundary has to know about
//! the legacy name.

use serde::{Deserialize, Serialize};

/// A creation as the views consume it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "CreationRecord")]
pub struct Creation {
    pub id: String,
    pub media_url: String,
    pub prompt: String,
    pub owner_id: String,
    pub picked: bool,
}

/// Raw creation record as stored or sent by older producers.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreationRecord {
    pub id: String,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub picked: bool,
}

impl From<CreationRecord> for Creation {
    fn from(record: CreationRecord) -> Self {
        let media_url = record
            .media_url
            .filter(|url| !url.is_empty())
            .or(record.image_url)
            .unwrap_or_default();

        Self {
            id: record.id,
            media_url,
            prompt: record.prompt,
            owner_id: record.owner_id,
            picked: record.picked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_image_url_is_normalized() {
        let creation: Creation = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "imageUrl": "https://cdn.example.com/c1.png",
            "prompt": "a red coat",
            "owner_id": "u1",
        }))
        .unwrap();

        assert_eq!(creation.media_url, "https://cdn.example.com/c1.png");
        assert!(!creation.picked);
    }

    #[test]
    fn test_media_url_wins_over_legacy_field() {
        let creation: Creation = serde_json::from_value(serde_json::json!({
            "id": "c2",
            "media_url": "https://cdn.example.com/new.png",
            "imageUrl": "https://cdn.example.com/old.png",
            "prompt": "linen dress",
            "owner_id": "u1",
            "picked": true,
        }))
        .unwrap();

        assert_eq!(creation.media_url, "https://cdn.example.com/new.png");
        assert!(creation.picked);
    }

    #[test]
    fn test_serialized_form_reads_back() {
        let creation = Creation {
            id: "c3".into(),
            media_url: "https://cdn.example.com/c3.png".into(),
            prompt: "wool scarf".into(),
            owner_id: "u2".into(),
            picked: false,
        };

        let json = serde_json::to_value(&creation).unwrap();
        assert!(json.get("imageUrl").is_none());
        let back: Creation = serde_json::from_value(json).unwrap();
        assert_eq!(back, creation);
    }
}
