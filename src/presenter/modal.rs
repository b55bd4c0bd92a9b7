use crate::domain::{Entry, MediaKind};
use crate::view::{embed, resolve_thumbnail, web_url};

/// Single-slot detail state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub current: Option<Entry>,
}

/// Primary media shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    Image { src: Option<String> },
    /// Embedded player for a recognised video id.
    Player { video_id: String, embed_url: String },
    /// Video without an embed id: optional thumbnail plus an outbound link.
    Linked {
        thumbnail: Option<String>,
        url: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub date_display: String,
    pub explanation: String,
    pub media: DetailMedia,
    pub hd_link: Option<String>,
    pub source_link: Option<String>,
    pub copyright: Option<String>,
}

impl DetailView {
    pub fn from_entry(entry: &Entry) -> Self {
        let url = web_url(entry.url.as_deref());
        let hd_url = web_url(entry.hd_url.as_deref());

        let media = match entry.media_kind {
            MediaKind::Image => DetailMedia::Image {
                src: hd_url.clone().or_else(|| url.clone()),
            },
            MediaKind::Video | MediaKind::Other => {
                match url.as_deref().and_then(embed::embed_id) {
                    Some(id) => DetailMedia::Player {
                        embed_url: embed::player_url(&id),
                        video_id: id,
                    },
                    None => DetailMedia::Linked {
                        thumbnail: resolve_thumbnail(entry),
                        url: url.clone(),
                    },
                }
            }
        };

        let source_link = url.filter(|url| hd_url.as_deref() != Some(url.as_str()));

        Self {
            title: entry.display_title().to_string(),
            date_display: entry.display_date(),
            explanation: entry.display_explanation().to_string(),
            media,
            hd_link: hd_url,
            source_link,
            copyright: entry.copyright.as_deref().map(|c| c.trim().to_string()),
        }
    }

    /// URL to hand off when the user asks to play the media.
    pub fn play_target(&self) -> Option<&str> {
        match &self.media {
            DetailMedia::Player { embed_url, .. } => Some(embed_url),
            DetailMedia::Linked { url, .. } => url.as_deref(),
            DetailMedia::Image { .. } => None,
        }
    }
}

/// Input routed to the modal while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalInput {
    Escape,
    /// Pointer activation outside the content area.
    Backdrop,
    CloseControl,
    /// Pointer activation inside the content area.
    Content,
}

/// The one detail overlay of the application.
#[derive(Debug, Default)]
pub struct Modal {
    state: ModalState,
    detail: Option<DetailView>,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn has_player(&self) -> bool {
        matches!(
            self.detail.as_ref().map(|d| &d.media),
            Some(DetailMedia::Player { .. })
        )
    }

    /// Show `entry`, replacing whatever was displayed.
    pub fn open(&mut self, entry: Entry) {
        tracing::debug!("Opening detail for {}", entry.display_title());
        self.detail = Some(DetailView::from_entry(&entry));
        self.state = ModalState {
            open: true,
            current: Some(entry),
        };
    }

    /// Hide the modal and drop its media, stopping any player.
    pub fn close(&mut self) {
        self.detail = None;
        self.state = ModalState::default();
    }

    /// Returns true when the input closed the modal.
    pub fn handle(&mut self, input: ModalInput) -> bool {
        if !self.state.open {
            return false;
        }
        match input {
            ModalInput::Escape | ModalInput::Backdrop | ModalInput::CloseControl => {
                self.close();
                true
            }
            ModalInput::Content => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn video(url: &str) -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2024, 1, 10),
            title: Some("Launch".into()),
            media_kind: MediaKind::Video,
            url: Some(url.into()),
            ..Default::default()
        }
    }

    fn image() -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            title: Some("Galaxy".into()),
            explanation: Some("Spiral arms.".into()),
            media_kind: MediaKind::Image,
            url: Some("https://example.com/small.jpg".into()),
            hd_url: Some("https://example.com/big.jpg".into()),
            copyright: Some(" Jane Doe \n".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_image_prefers_hd() {
        let mut modal = Modal::new();
        modal.open(image());

        let detail = modal.detail().unwrap();
        assert_eq!(
            detail.media,
            DetailMedia::Image {
                src: Some("https://example.com/big.jpg".into())
            }
        );
        assert_eq!(detail.hd_link.as_deref(), Some("https://example.com/big.jpg"));
        assert_eq!(
            detail.source_link.as_deref(),
            Some("https://example.com/small.jpg")
        );
        assert_eq!(detail.copyright.as_deref(), Some("Jane Doe"));
        assert_eq!(detail.explanation, "Spiral arms.");
        assert_eq!(detail.date_display, "January 1, 2024");
        assert!(modal.is_open());
    }

    #[test]
    fn test_source_link_hidden_when_same_as_hd() {
        let mut entry = image();
        entry.url = entry.hd_url.clone();

        let detail = DetailView::from_entry(&entry);
        assert!(detail.hd_link.is_some());
        assert_eq!(detail.source_link, None);
    }

    #[test]
    fn test_open_video_embeds_player() {
        let mut modal = Modal::new();
        modal.open(video("https://www.youtube.com/watch?v=abc123"));

        assert!(modal.has_player());
        assert_eq!(
            modal.detail().unwrap().media,
            DetailMedia::Player {
                video_id: "abc123".into(),
                embed_url: "https://www.youtube.com/embed/abc123".into(),
            }
        );
        assert_eq!(
            modal.detail().unwrap().play_target(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn test_open_other_video_links_out() {
        let mut entry = video("https://vimeo.com/12345");
        entry.thumbnail_url = Some("https://example.com/t.jpg".into());

        let detail = DetailView::from_entry(&entry);
        assert_eq!(
            detail.media,
            DetailMedia::Linked {
                thumbnail: Some("https://example.com/t.jpg".into()),
                url: Some("https://vimeo.com/12345".into()),
            }
        );
        assert_eq!(detail.play_target(), Some("https://vimeo.com/12345"));
    }

    #[test]
    fn test_open_replaces_current() {
        let mut modal = Modal::new();
        modal.open(image());
        modal.open(video("https://youtu.be/abc123"));

        assert_eq!(
            modal.state().current.as_ref().unwrap().display_title(),
            "Launch"
        );
        assert!(modal.has_player());
    }

    #[test]
    fn test_close_clears_state_and_player() {
        let mut modal = Modal::new();
        modal.open(video("https://youtu.be/abc123"));
        modal.close();

        assert_eq!(modal.state(), &ModalState { open: false, current: None });
        assert!(modal.detail().is_none());
        assert!(!modal.has_player());
    }

    #[test]
    fn test_inputs() {
        let mut modal = Modal::new();
        assert!(!modal.handle(ModalInput::Escape));

        for input in [ModalInput::Escape, ModalInput::Backdrop, ModalInput::CloseControl] {
            modal.open(image());
            assert!(!modal.handle(ModalInput::Content));
            assert!(modal.is_open());
            assert!(modal.handle(input));
            assert!(!modal.is_open());
        }
    }

    #[test]
    fn test_unsafe_links_are_dropped_from_detail() {
        let detail = DetailView::from_entry(&video("javascript:alert(document.cookie)"));
        assert_eq!(
            detail.media,
            DetailMedia::Linked {
                thumbnail: None,
                url: None
            }
        );
        assert_eq!(detail.source_link, None);
        assert_eq!(detail.play_target(), None);

        let mut entry = image();
        entry.hd_url = Some("file:///etc/passwd".into());
        entry.url = Some("data:image/png;base64,AAAA".into());
        let detail = DetailView::from_entry(&entry);
        assert_eq!(detail.media, DetailMedia::Image { src: None });
        assert_eq!(detail.hd_link, None);
        assert_eq!(detail.source_link, None);
    }
}

