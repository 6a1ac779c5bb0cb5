// --- File: crates/detailbook_picker/src/model.rs ---
use crate::week::WeekWindow;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Availability for one (service, week) pair: slot start instants keyed by
/// the venue-local day they belong to.
///
/// Keys exist only for days with at least one slot. The whole set is
/// replaced on every week navigation or service change, never merged, so
/// slots can't leak across selection changes.
#[derive(Debug, Clone, Default)]
pub struct SlotSet {
    days: BTreeMap<NaiveDate, Vec<DateTime<Utc>>>,
}

impl SlotSet {
    /// Records a day's slots. Empty days are not stored; order is
    /// normalized to ascending regardless of what the source returned.
    pub fn insert_day(&mut self, date: NaiveDate, mut times: Vec<DateTime<Utc>>) {
        if times.is_empty() {
            return;
        }
        times.sort_unstable();
        self.days.insert(date, times);
    }

    pub fn day(&self, date: NaiveDate) -> Option<&[DateTime<Utc>]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    pub fn has_slots(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn contains_time(&self, date: NaiveDate, time: DateTime<Utc>) -> bool {
        self.days
            .get(&date)
            .map(|times| times.contains(&time))
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }
}

/// The visitor's chosen day and start time. The time is only meaningful
/// once a day is set, and picking a new day always discards the old time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    date: Option<NaiveDate>,
    time: Option<DateTime<Utc>>,
}

impl Selection {
    pub fn pick_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.time = None;
    }

    pub fn pick_time(&mut self, time: DateTime<Utc>) {
        self.time = Some(time);
    }

    pub fn clear_time(&mut self) {
        self.time = None;
    }

    pub fn clear(&mut self) {
        self.date = None;
        self.time = None;
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }
}

/// Why a rendered day can or cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Has slots and lies in the future
    Open,
    /// Fetch succeeded, nothing bookable
    Empty,
    /// The day's availability fetch failed
    Unavailable,
    /// Today or earlier; never interactive
    Elapsed,
}

/// One rendered day of the week view.
#[derive(Debug, Clone)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub slots: Vec<DateTime<Utc>>,
}

impl DayAvailability {
    pub fn selectable(&self) -> bool {
        self.status == DayStatus::Open
    }
}

/// Everything the week view needs to render.
#[derive(Debug, Clone)]
pub struct WeekSnapshot {
    pub window: WeekWindow,
    pub title: String,
    pub days: Vec<DayAvailability>,
}

impl WeekSnapshot {
    pub fn day(&self, date: NaiveDate) -> Option<&DayAvailability> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// Everything the time view needs to render.
#[derive(Debug, Clone)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub title: String,
    /// Ascending start instants
    pub times: Vec<DateTime<Utc>>,
}

/// A committed date-time choice, handed to the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedSelection {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    /// Venue-local display string, e.g. "Jan 5, 2025 at 2:30 PM"
    pub display: String,
}
