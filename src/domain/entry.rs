use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::domain::range::display_date;

/// Kind of media an entry points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    /// Missing or unrecognised `media_type`.
    #[default]
    Other,
}

impl MediaKind {
    pub fn from_feed(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "image" => MediaKind::Image,
            "video" => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Other => "Media",
        }
    }
}

/// One day's record from the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "non_blank")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub explanation: Option<String>,
    #[serde(rename = "media_type", default, deserialize_with = "media_kind")]
    pub media_kind: MediaKind,
    #[serde(default, deserialize_with = "non_blank")]
    pub url: Option<String>,
    #[serde(rename = "hdurl", default, deserialize_with = "non_blank")]
    pub hd_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub copyright: Option<String>,
}

impl Entry {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    pub fn display_explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    pub fn display_date(&self) -> String {
        self.date.map(display_date).unwrap_or_default()
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

fn media_kind<'de, D>(deserializer: D) -> Result<MediaKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(MediaKind::from_feed).unwrap_or_default())
}
