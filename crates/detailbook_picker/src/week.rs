// --- File: crates/detailbook_picker/src/week.rs ---
use chrono::{Datelike, Duration, NaiveDate};

/// A 7-day calendar window, always starting on the Sunday on or before its
/// reference date. Only week navigation moves it, always by whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// The window containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let back = i64::from(date.weekday().num_days_from_sunday());
        WeekWindow {
            start: date - Duration::days(back),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (the following Saturday).
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn next(self) -> Self {
        WeekWindow {
            start: self.start + Duration::days(7),
        }
    }

    pub fn prev(self) -> Self {
        WeekWindow {
            start: self.start - Duration::days(7),
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(|offset| self.start + Duration::days(offset))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// Header label, e.g. "Jan 5 - Jan 11, 2025".
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %-d"),
            self.end().format("%b %-d, %Y")
        )
    }
}
