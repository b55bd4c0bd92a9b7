use crate::app::{ErrorKind, NebulaError};
use crate::domain::Entry;
use crate::presenter::listeners::{Activation, Disposable, ListenerRegistry, Trigger};
use crate::view::ViewItem;

pub const INTRO_MESSAGE: &str = "Pick a date range and load the gallery to explore the cosmos.";
pub const LOADING_MESSAGE: &str = "Loading space photos...";
pub const EMPTY_MESSAGE: &str = "No results for that date range. Try widening your search.";
pub const FAILURE_MESSAGE: &str = "Couldn't load the gallery right now. Please try again.";

/// What the gallery area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    /// Before the first load.
    Intro,
    Loading,
    /// A load succeeded with zero matches.
    Empty,
    /// The last load failed.
    Failed,
    Cards(Vec<ViewItem>),
}

impl GalleryState {
    /// Placeholder text for every state without cards.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GalleryState::Intro => Some(INTRO_MESSAGE),
            GalleryState::Loading => Some(LOADING_MESSAGE),
            GalleryState::Empty => Some(EMPTY_MESSAGE),
            GalleryState::Failed => Some(FAILURE_MESSAGE),
            GalleryState::Cards(_) => None,
        }
    }
}

/// Card list presenter. Every state change replaces the content wholesale
/// and rewires card listeners from scratch.
pub struct Gallery {
    state: GalleryState,
    listeners: ListenerRegistry,
    bindings: Vec<Disposable>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            state: GalleryState::Intro,
            listeners: ListenerRegistry::new(),
            bindings: Vec::new(),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn cards(&self) -> &[ViewItem] {
        match &self.state {
            GalleryState::Cards(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == GalleryState::Loading
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn show_loading(&mut self) {
        self.replace(GalleryState::Loading);
    }

    pub fn show_failure(&mut self) {
        self.replace(GalleryState::Failed);
    }

    pub fn render(&mut self, items: Vec<ViewItem>) {
        if items.is_empty() {
            self.replace(GalleryState::Empty);
        } else {
            self.replace(GalleryState::Cards(items));
        }
    }

    /// Apply the outcome of a load; failures collapse into one placeholder.
    pub fn apply_load(&mut self, result: Result<Vec<ViewItem>, NebulaError>) {
        match result {
            Ok(items) => {
                tracing::info!("Rendering {} cards", items.len());
                self.render(items);
            }
            Err(e) => {
                match e.kind() {
                    ErrorKind::Network => {
                        tracing::error!(kind = "network", "Feed request failed: {}", e)
                    }
                    ErrorKind::Parse => {
                        tracing::error!(kind = "parse", "Feed body rejected: {}", e)
                    }
                    ErrorKind::Input | ErrorKind::Local => tracing::error!("Load failed: {}", e),
                }
                self.show_failure();
            }
        }
    }

    /// Resolve a click, Enter or Space on `card` to its source entry.
    pub fn activate(&self, card: usize, activation: Activation) -> Option<&Entry> {
        let index = self.listeners.dispatch(card, activation)?;
        self.cards().get(index).map(|item| &item.entry)
    }

    fn replace(&mut self, state: GalleryState) {
        for binding in self.bindings.drain(..) {
            binding.dispose(&mut self.listeners);
        }

        self.state = state;

        let count = self.cards().len();
        for index in 0..count {
            self.bindings
                .push(self.listeners.register(index, Trigger::Pointer));
            self.bindings
                .push(self.listeners.register(index, Trigger::Keyboard));
        }
    }
}
