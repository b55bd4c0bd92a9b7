use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::app::Result;
use crate::config::Config;
use crate::domain::DateRange;
use crate::fetcher::{FeedClient, Fetcher, LoadTracker};
use crate::pipeline;
use crate::view::ViewItem;

/// Everything the front ends need, built once at startup.
pub struct AppContext {
    pub config: Config,
    pub client: Arc<FeedClient>,
    pub loads: Arc<LoadTracker>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(FeedClient::new(config.feed.url.clone())?);
        Ok(Self::with_client(config, client))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let client = Arc::new(FeedClient::with_fetcher(config.feed.url.clone(), fetcher));
        Self::with_client(config, client)
    }

    fn with_client(config: Config, client: Arc<FeedClient>) -> Self {
        Self {
            config,
            client,
            loads: Arc::new(LoadTracker::new()),
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// The configured window ending today.
    pub fn default_range(&self) -> DateRange {
        DateRange::default_window(Self::today(), self.config.feed.window_days)
    }

    /// Build a validated range from optional bounds, clamped to `today`.
    pub fn resolve_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<DateRange> {
        let window = DateRange::default_window(today, self.config.feed.window_days);
        let start = start.unwrap_or(window.start()).min(today);
        let end = end.unwrap_or(window.end()).min(today);
        DateRange::new(start, end)
    }

    /// Fetch, filter, order and map, once.
    pub async fn load_view(&self, range: &DateRange) -> Result<Vec<ViewItem>> {
        let entries = self.client.fetch_entries().await?;
        Ok(pipeline::build_view(entries, range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ErrorKind, NebulaError};
    use crate::fetcher::testing::{Canned, StaticFetcher};
    use crate::presenter::{Activation, Gallery, GalleryState, Modal};

    const FEED: &str = r#"[
      {"date": "2024-01-01", "title": "New Year", "media_type": "image",
       "url": "https://example.com/ny.jpg", "hdurl": "https://example.com/ny_hd.jpg"},
      {"date": "2024-01-10", "title": "Launch", "media_type": "video",
       "url": "https://www.youtube.com/watch?v=abc123"}
    ]"#;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn context(fetcher: StaticFetcher) -> AppContext {
        AppContext::with_fetcher(Config::default(), Arc::new(fetcher))
    }

    fn load(ctx: &AppContext, gallery: &mut Gallery, range: &DateRange) {
        gallery.show_loading();
        let result = tokio_test::block_on(ctx.load_view(range));
        gallery.apply_load(result);
    }

    #[test]
    fn test_scenario_both_entries_newest_first() {
        let ctx = context(StaticFetcher::body(FEED));
        let mut gallery = Gallery::new();
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 10)).unwrap();

        load(&ctx, &mut gallery, &range);

        let titles: Vec<_> = gallery.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Launch", "New Year"]);
    }

    #[test]
    fn test_scenario_no_matches_shows_placeholder() {
        let ctx = context(StaticFetcher::body(FEED));
        let mut gallery = Gallery::new();
        let range = DateRange::new(day(2024, 2, 1), day(2024, 2, 28)).unwrap();

        load(&ctx, &mut gallery, &range);

        assert_eq!(gallery.state(), &GalleryState::Empty);
        assert!(gallery.cards().is_empty());
    }

    #[test]
    fn test_scenario_video_thumbnail_and_player() {
        let ctx = context(StaticFetcher::body(FEED));
        let mut gallery = Gallery::new();
        let range = DateRange::new(day(2024, 1, 10), day(2024, 1, 10)).unwrap();

        load(&ctx, &mut gallery, &range);

        let card = &gallery.cards()[0];
        assert!(card.thumbnail.as_deref().unwrap().contains("abc123"));

        let mut modal = Modal::new();
        let entry = gallery.activate(0, Activation::Space).unwrap().clone();
        modal.open(entry);
        assert!(modal.has_player());
        assert_eq!(
            modal.detail().unwrap().play_target(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn test_scenario_failure_clears_previous_cards() {
        let ctx = context(StaticFetcher::new(vec![
            Canned::Body(FEED.to_string()),
            Canned::Status(503),
        ]));
        let mut gallery = Gallery::new();
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 10)).unwrap();

        load(&ctx, &mut gallery, &range);
        assert_eq!(gallery.cards().len(), 2);

        load(&ctx, &mut gallery, &range);
        assert_eq!(gallery.state(), &GalleryState::Failed);
        assert!(gallery.cards().is_empty());
        assert_eq!(gallery.listener_count(), 0);
    }

    #[test]
    fn test_load_view_surfaces_parse_error() {
        let ctx = context(StaticFetcher::body(r#"{"unexpected": true}"#));
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 10)).unwrap();

        let err = tokio_test::block_on(ctx.load_view(&range)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_resolve_range_defaults_and_clamps() {
        let ctx = context(StaticFetcher::body("[]"));
        let today = day(2024, 3, 14);

        let range = ctx.resolve_range(None, None, today).unwrap();
        assert_eq!(range.start(), day(2024, 3, 1));
        assert_eq!(range.end(), today);

        let range = ctx
            .resolve_range(Some(day(2024, 3, 10)), Some(day(2024, 12, 31)), today)
            .unwrap();
        assert_eq!(range.end(), today);

        let err = ctx
            .resolve_range(Some(day(2024, 3, 12)), Some(day(2024, 3, 11)), today)
            .unwrap_err();
        assert!(matches!(err, NebulaError::InvalidRange { .. }));
    }
}
