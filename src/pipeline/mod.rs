//! Filter, order and map fetched entries for display.

use crate::domain::{DateRange, Entry};
use crate::view::{to_view_item, ViewItem};

/// Keep entries dated inside `range`; undated entries are always dropped.
pub fn filter_by_range(entries: Vec<Entry>, range: &DateRange) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| entry.date.is_some_and(|date| range.contains(date)))
        .collect()
}

/// Newest first. Stable, so entries sharing a date keep feed order.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn build_view(entries: Vec<Entry>, range: &DateRange) -> Vec<ViewItem> {
    let mut matching = filter_by_range(entries, range);
    sort_newest_first(&mut matching);
    matching.into_iter().map(to_view_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated(date: Option<NaiveDate>, title: &str) -> Entry {
        Entry {
            date,
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let range = DateRange::new(day(2024, 1, 2), day(2024, 1, 4)).unwrap();
        let entries = vec![
            dated(Some(day(2024, 1, 1)), "before"),
            dated(Some(day(2024, 1, 2)), "start"),
            dated(Some(day(2024, 1, 3)), "middle"),
            dated(Some(day(2024, 1, 4)), "end"),
            dated(Some(day(2024, 1, 5)), "after"),
            dated(None, "undated"),
        ];

        let titles: Vec<_> = filter_by_range(entries, &range)
            .iter()
            .map(|e| e.display_title().to_string())
            .collect();
        assert_eq!(titles, vec!["start", "middle", "end"]);
    }

    #[test]
    fn test_filter_empty_input() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 1)).unwrap();
        assert!(filter_by_range(Vec::new(), &range).is_empty());
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let mut entries = vec![
            dated(Some(day(2024, 1, 1)), "a"),
            dated(Some(day(2024, 1, 3)), "b"),
            dated(Some(day(2024, 1, 1)), "c"),
            dated(Some(day(2024, 1, 3)), "d"),
            dated(Some(day(2024, 1, 2)), "e"),
        ];
        sort_newest_first(&mut entries);

        let titles: Vec<_> = entries.iter().map(|e| e.display_title()).collect();
        assert_eq!(titles, vec!["b", "d", "e", "a", "c"]);
        assert!(entries.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_build_view_orders_cards() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 10)).unwrap();
        let entries = vec![
            dated(Some(day(2024, 1, 1)), "old"),
            dated(Some(day(2024, 1, 10)), "new"),
        ];

        let items = build_view(entries, &range);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "new");
        assert_eq!(items[0].date_display, "January 10, 2024");
        assert_eq!(items[1].title, "old");
    }
}
