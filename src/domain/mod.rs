pub mod entry;
pub mod range;

pub use entry::{Entry, MediaKind};
pub use range::{display_date, DateRange};
