use chrono::{Days, NaiveDate};
use ratatui::layout::Rect;

use crate::app::Result;
use crate::domain::DateRange;
use crate::fetcher::{LoadTicket, LoadTracker};
use crate::presenter::{Activation, Gallery, GalleryState, Modal};
use crate::view::ViewItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    StartDate,
    EndDate,
    LoadButton,
    Gallery,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::StartDate => Focus::EndDate,
            Focus::EndDate => Focus::LoadButton,
            Focus::LoadButton => Focus::Gallery,
            Focus::Gallery => Focus::StartDate,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::StartDate => Focus::Gallery,
            Focus::EndDate => Focus::StartDate,
            Focus::LoadButton => Focus::EndDate,
            Focus::Gallery => Focus::LoadButton,
        }
    }
}

/// Screen regions recorded during the last draw, used for mouse hit tests.
#[derive(Debug, Default, Clone)]
pub struct HitAreas {
    pub start_field: Rect,
    pub end_field: Rect,
    pub load_button: Rect,
    pub cards: Vec<(Rect, usize)>,
    pub modal: Option<Rect>,
    pub close_control: Option<Rect>,
}

pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

pub struct TuiApp {
    pub focus: Focus,
    pub today: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub gallery: Gallery,
    pub modal: Modal,
    pub selected: usize,
    /// Grid width as of the last draw.
    pub columns: usize,
    pub scroll_row: usize,
    pub detail_scroll: u16,
    pub fact: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub pending: Option<LoadTicket>,
    pub areas: HitAreas,
}

impl TuiApp {
    pub fn new(range: DateRange, today: NaiveDate, fact: String) -> Self {
        let range = range.clamp_to(today);
        Self {
            focus: Focus::LoadButton,
            today,
            start: range.start(),
            end: range.end(),
            gallery: Gallery::new(),
            modal: Modal::new(),
            selected: 0,
            columns: 1,
            scroll_row: 0,
            detail_scroll: 0,
            fact,
            status_message: None,
            should_quit: false,
            pending: None,
            areas: HitAreas::default(),
        }
    }

    /// The range currently entered, validated.
    pub fn requested_range(&self) -> Result<DateRange> {
        DateRange::new(self.start, self.end)
    }

    /// Move the focused date field by `days`, never past today.
    pub fn shift_date(&mut self, days: i64) {
        let field = match self.focus {
            Focus::StartDate => &mut self.start,
            Focus::EndDate => &mut self.end,
            _ => return,
        };

        let magnitude = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            field.checked_add_days(magnitude)
        } else {
            field.checked_sub_days(magnitude)
        };
        if let Some(date) = moved {
            *field = date.min(self.today);
        }
    }

    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let count = self.gallery.cards().len();
        if count == 0 {
            return;
        }
        let columns = self.columns.max(1) as isize;
        let target = self.selected as isize + dx + dy * columns;
        self.selected = target.clamp(0, count as isize - 1) as usize;
    }

    /// Open the detail view for `card`, if the activation resolves.
    pub fn activate_card(&mut self, card: usize, activation: Activation) -> bool {
        let Some(entry) = self.gallery.activate(card, activation).cloned() else {
            return false;
        };
        self.selected = card;
        self.detail_scroll = 0;
        self.modal.open(entry);
        true
    }

    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.areas
            .cards
            .iter()
            .find(|(area, _)| hit(*area, column, row))
            .map(|(_, index)| *index)
    }

    pub fn begin_load(&mut self, ticket: LoadTicket) {
        self.gallery.show_loading();
        self.pending = Some(ticket);
        self.selected = 0;
        self.scroll_row = 0;
        self.status_message = None;
    }

    /// Apply a finished load unless a newer one has started since.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<ViewItem>>,
        tracker: &LoadTracker,
    ) -> bool {
        if !tracker.is_current(ticket) {
            tracing::debug!("Discarding stale load {:?}", ticket);
            return false;
        }

        self.pending = None;
        self.gallery.apply_load(result);
        let status = match self.gallery.state() {
            GalleryState::Cards(items) => format!("Showing {} entries", items.len()),
            GalleryState::Empty => "No entries in that range".to_string(),
            _ => "Load failed, press g to retry".to_string(),
        };
        self.set_status(status);
        true
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
