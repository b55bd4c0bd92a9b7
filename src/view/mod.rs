//! Render-ready projections of feed entries.

pub mod embed;

use url::Url;

use crate::domain::{Entry, MediaKind};

const WEB_SCHEMES: [&str; 2] = ["http", "https"];

/// Card model derived from one [`Entry`].
///
/// Built fresh on every load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewItem {
    pub title: String,
    pub date_display: String,
    /// `None` renders as a placeholder block.
    pub thumbnail: Option<String>,
    pub media_kind: MediaKind,
    pub entry: Entry,
}

pub fn to_view_item(entry: Entry) -> ViewItem {
    ViewItem {
        title: entry.display_title().to_string(),
        date_display: entry.display_date(),
        thumbnail: resolve_thumbnail(&entry),
        media_kind: entry.media_kind,
        entry,
    }
}

/// Feed links that may be rendered or opened: absolute `http`/`https` only.
pub fn web_url(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    let url = Url::parse(raw).ok()?;
    WEB_SCHEMES
        .contains(&url.scheme())
        .then(|| raw.to_string())
}

/// Pick the thumbnail for a card.
///
/// Images use their own URL (falling back to the HD variant). Everything
/// else tries an explicit thumbnail, then one derived from the embed id,
/// then the raw link. Links with other schemes are never used.
pub fn resolve_thumbnail(entry: &Entry) -> Option<String> {
    match entry.media_kind {
        MediaKind::Image => {
            web_url(entry.url.as_deref()).or_else(|| web_url(entry.hd_url.as_deref()))
        }
        MediaKind::Video | MediaKind::Other => web_url(entry.thumbnail_url.as_deref())
            .or_else(|| {
                web_url(entry.url.as_deref())
                    .as_deref()
                    .and_then(embed::embed_id)
                    .map(|id| embed::thumbnail_url(&id))
            })
            .or_else(|| web_url(entry.url.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(kind: MediaKind) -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2024, 1, 10),
            media_kind: kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_image_prefers_url_then_hd() {
        let mut e = entry(MediaKind::Image);
        e.url = Some("https://example.com/small.jpg".into());
        e.hd_url = Some("https://example.com/big.jpg".into());
        assert_eq!(
            to_view_item(e.clone()).thumbnail.as_deref(),
            Some("https://example.com/small.jpg")
        );

        e.url = None;
        assert_eq!(
            to_view_item(e).thumbnail.as_deref(),
            Some("https://example.com/big.jpg")
        );
    }

    #[test]
    fn test_video_explicit_thumbnail_wins() {
        let mut e = entry(MediaKind::Video);
        e.url = Some("https://youtu.be/abc123".into());
        e.thumbnail_url = Some("https://example.com/thumb.jpg".into());

        assert_eq!(
            to_view_item(e).thumbnail.as_deref(),
            Some("https://example.com/thumb.jpg")
        );
    }

    #[test]
    fn test_video_derived_thumbnail() {
        let mut e = entry(MediaKind::Video);
        e.url = Some("https://www.youtube.com/watch?v=abc123".into());

        let item = to_view_item(e);
        assert_eq!(
            item.thumbnail.as_deref(),
            Some("https://img.youtube.com/vi/abc123/hqdefault.jpg")
        );
        assert_eq!(item.media_kind, MediaKind::Video);
    }

    #[test]
    fn test_video_falls_back_to_raw_link() {
        let mut e = entry(MediaKind::Video);
        e.url = Some("https://vimeo.com/12345".into());
        assert_eq!(
            to_view_item(e).thumbnail.as_deref(),
            Some("https://vimeo.com/12345")
        );
    }

    #[test]
    fn test_no_thumbnail_is_representable() {
        for kind in [MediaKind::Image, MediaKind::Video, MediaKind::Other] {
            let item = to_view_item(entry(kind));
            assert_eq!(item.thumbnail, None);
            assert_eq!(item.title, "Untitled");
            assert_eq!(item.date_display, "January 10, 2024");
        }
    }

    #[test]
    fn test_every_optional_field_combination() {
        let url = Some("https://youtu.be/abc123".to_string());
        let hd = Some("https://example.com/hd.jpg".to_string());
        let thumb = Some("https://example.com/t.jpg".to_string());

        for mask in 0..16u8 {
            for kind in [MediaKind::Image, MediaKind::Video, MediaKind::Other] {
                let e = Entry {
                    date: None,
                    title: (mask & 1 != 0).then(|| "T".to_string()),
                    url: (mask & 2 != 0).then(|| url.clone()).flatten(),
                    hd_url: (mask & 4 != 0).then(|| hd.clone()).flatten(),
                    thumbnail_url: (mask & 8 != 0).then(|| thumb.clone()).flatten(),
                    media_kind: kind,
                    ..Default::default()
                };
                let has_source = e.url.is_some()
                    || (kind == MediaKind::Image && e.hd_url.is_some())
                    || (kind != MediaKind::Image && e.thumbnail_url.is_some());

                let item = to_view_item(e);
                assert_eq!(item.thumbnail.is_some(), has_source, "mask {} {:?}", mask, kind);
            }
        }
    }

    #[test]
    fn test_web_url_keeps_only_http_schemes() {
        assert_eq!(
            web_url(Some(" https://example.com/a.jpg ")),
            Some("https://example.com/a.jpg".to_string())
        );
        assert!(web_url(Some("http://example.com/a.jpg")).is_some());

        for raw in [
            "javascript:alert(document.cookie)",
            "data:text/html,<script>alert(1)</script>",
            "file:///etc/passwd",
            "/relative/path.jpg",
        ] {
            assert_eq!(web_url(Some(raw)), None, "{}", raw);
        }
        assert_eq!(web_url(None), None);
    }

    #[test]
    fn test_unsafe_links_never_become_thumbnails() {
        let mut e = entry(MediaKind::Video);
        e.url = Some("javascript:alert(1)".into());
        e.thumbnail_url = Some("data:image/svg+xml,<svg onload=alert(1)>".into());
        assert_eq!(resolve_thumbnail(&e), None);

        let mut e = entry(MediaKind::Image);
        e.url = Some("file:///tmp/a.jpg".into());
        e.hd_url = Some("https://example.com/hd.jpg".into());
        assert_eq!(resolve_thumbnail(&e).as_deref(), Some("https://example.com/hd.jpg"));
    }
}
