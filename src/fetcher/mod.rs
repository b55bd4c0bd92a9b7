pub mod client;
pub mod http_fetcher;
pub mod loader;

use async_trait::async_trait;

use crate::app::Result;

pub use client::FeedClient;
pub use loader::{LoadTicket, LoadTracker};

/// Transport for the feed document.
///
/// Implementations perform exactly one request per call and never cache.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::Fetcher;
    use crate::app::{NebulaError, Result};

    /// Canned response served by [`StaticFetcher`].
    #[derive(Debug, Clone)]
    pub enum Canned {
        Body(String),
        Status(u16),
    }

    /// In-memory fetcher that replays canned responses in order.
    ///
    /// The last response is repeated once the queue runs dry.
    pub struct StaticFetcher {
        responses: Mutex<VecDeque<Canned>>,
        last: Mutex<Option<Canned>>,
        calls: AtomicUsize,
    }

    impl StaticFetcher {
        pub fn new(responses: Vec<Canned>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                last: Mutex::new(None),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn body(body: &str) -> Self {
            Self::new(vec![Canned::Body(body.to_string())])
        }

        pub fn status(code: u16) -> Self {
            Self::new(vec![Canned::Status(code)])
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            let next = self.responses.lock().unwrap().pop_front();
            let response = match next {
                Some(r) => {
                    *self.last.lock().unwrap() = Some(r.clone());
                    r
                }
                None => self
                    .last
                    .lock()
                    .unwrap()
                    .clone()
                    .unwrap_or(Canned::Status(404)),
            };

            match response {
                Canned::Body(body) => Ok(body.into_bytes()),
                Canned::Status(code) => Err(NebulaError::Status(code)),
            }
        }
    }
}
