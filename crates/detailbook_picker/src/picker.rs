// --- File: crates/detailbook_picker/src/picker.rs ---
use crate::model::{
    ConfirmedSelection, DayAvailability, DaySnapshot, DayStatus, Selection, SlotSet, WeekSnapshot,
};
use crate::week::WeekWindow;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use detailbook_catalog::{SelectedService, SelectionObserver, Service};
use detailbook_common::{state_error, validation_error, BookingError, SchedulingService};
use futures_util::future::join_all;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

/// Which level of the picker the visitor is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerView {
    Closed,
    WeekView,
    TimeView,
}

struct PickerState {
    view: PickerView,
    window: WeekWindow,
    slots: SlotSet,
    /// Days whose availability fetch failed this window; rendered as
    /// unavailable instead of failing the whole view.
    failed: BTreeSet<NaiveDate>,
    selection: Selection,
}

/// The availability picker state machine.
///
/// Owns the week window, the slot set and the selection for the lifetime of
/// the booking page. All mutation goes through single user actions; the
/// internal mutex is never held across an await. In-flight week fetches are
/// never cancelled: each fetch captures a generation number and results are
/// dropped at commit time if a newer fetch (week navigation or service
/// change) started meanwhile.
pub struct AvailabilityPicker {
    client: Arc<dyn SchedulingService>,
    selected: SelectedService,
    zone: Tz,
    state: Mutex<PickerState>,
    generation: AtomicU64,
}

impl AvailabilityPicker {
    pub fn new(client: Arc<dyn SchedulingService>, selected: SelectedService, zone: Tz) -> Self {
        let today = Utc::now().with_timezone(&zone).date_naive();
        AvailabilityPicker {
            client,
            selected,
            zone,
            state: Mutex::new(PickerState {
                view: PickerView::Closed,
                window: WeekWindow::containing(today),
                slots: SlotSet::default(),
                failed: BTreeSet::new(),
                selection: Selection::default(),
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Today's date on the venue's calendar. Availability days are business
    /// days there, wherever the visitor is.
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.zone).date_naive()
    }

    pub fn view(&self) -> PickerView {
        self.state.lock().unwrap().view
    }

    /// The committed (or in-progress) date/time choice.
    pub fn selection(&self) -> Selection {
        self.state.lock().unwrap().selection.clone()
    }

    /// Opens the picker into the week view and fetches availability.
    ///
    /// Fails closed when no service is selected; the caller shows the
    /// "pick a service first" prompt and the picker stays as it was.
    pub async fn open(&self) -> Result<WeekSnapshot, BookingError> {
        let slug = self.selected.slug().ok_or_else(|| {
            validation_error("Select a service before choosing a date and time.")
        })?;
        {
            let mut state = self.state.lock().unwrap();
            state.view = PickerView::WeekView;
        }
        Ok(self.refresh_week(&slug).await)
    }

    /// Hides the picker without touching window or selection.
    pub fn close(&self) {
        self.state.lock().unwrap().view = PickerView::Closed;
    }

    /// Moves the window one week forward and refetches it.
    pub async fn next_week(&self) -> Result<WeekSnapshot, BookingError> {
        self.navigate_week(true).await
    }

    /// Moves the window one week back and refetches it.
    pub async fn prev_week(&self) -> Result<WeekSnapshot, BookingError> {
        self.navigate_week(false).await
    }

    async fn navigate_week(&self, forward: bool) -> Result<WeekSnapshot, BookingError> {
        let slug = self
            .selected
            .slug()
            .ok_or_else(|| state_error("week navigation without a selected service"))?;
        {
            let mut state = self.state.lock().unwrap();
            if state.view != PickerView::WeekView {
                error!(view = ?state.view, "week navigation outside the week view");
                return Err(state_error("week navigation is only available in the week view"));
            }
            state.window = if forward {
                state.window.next()
            } else {
                state.window.prev()
            };
            // The old window's slots are gone the moment we navigate
            state.slots.clear();
            state.failed.clear();
        }
        Ok(self.refresh_week(&slug).await)
    }

    /// Fetches the current window's availability: one request per day, all
    /// seven in flight together, rendered only once every fetch settled. A
    /// single day failing never blocks the other six.
    async fn refresh_week(&self, slug: &str) -> WeekSnapshot {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let window = self.state.lock().unwrap().window;

        let fetches = window.dates().map(|date| {
            let client = Arc::clone(&self.client);
            let slug = slug.to_string();
            async move { (date, client.slots_for_date(&slug, date).await) }
        });
        let results = join_all(fetches).await;

        let mut state = self.state.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) == generation {
            state.slots.clear();
            state.failed.clear();
            for (date, outcome) in results {
                match outcome {
                    Ok(times) => state.slots.insert_day(date, times),
                    Err(err) => {
                        warn!(%date, error = %err, "availability fetch failed; day rendered as unavailable");
                        state.failed.insert(date);
                    }
                }
            }
        } else {
            // A newer fetch superseded this one while it was in flight
            debug!(generation, "discarding stale availability results");
        }
        self.week_snapshot(&state)
    }

    fn week_snapshot(&self, state: &PickerState) -> WeekSnapshot {
        let today = self.today();
        let days = state
            .window
            .dates()
            .map(|date| {
                let slots = state
                    .slots
                    .day(date)
                    .map(<[DateTime<Utc>]>::to_vec)
                    .unwrap_or_default();
                let status = if date <= today {
                    DayStatus::Elapsed
                } else if state.failed.contains(&date) {
                    DayStatus::Unavailable
                } else if slots.is_empty() {
                    DayStatus::Empty
                } else {
                    DayStatus::Open
                };
                DayAvailability {
                    date,
                    status,
                    slots,
                }
            })
            .collect();
        WeekSnapshot {
            window: state.window,
            title: state.window.label(),
            days,
        }
    }

    /// Picks a day in the week view, moving to the time view. Any earlier
    /// time pick is discarded before the time view renders.
    pub fn select_day(&self, date: NaiveDate) -> Result<DaySnapshot, BookingError> {
        let mut state = self.state.lock().unwrap();
        if state.view != PickerView::WeekView {
            error!(view = ?state.view, "day selection outside the week view");
            return Err(state_error("day selection is only available in the week view"));
        }
        let today = self.today();
        if !state.window.contains(date) || date <= today || !state.slots.has_slots(date) {
            error!(%date, "attempted to select a day that is not bookable");
            return Err(state_error("selected day is not bookable"));
        }

        state.selection.pick_date(date);
        state.view = PickerView::TimeView;

        let times = state
            .slots
            .day(date)
            .map(<[DateTime<Utc>]>::to_vec)
            .unwrap_or_default();
        Ok(DaySnapshot {
            date,
            title: date.format("%A, %b %-d, %Y").to_string(),
            times,
        })
    }

    /// Leaves the time view back to the week view, discarding the day's
    /// time pick. The cached window renders as-is; only week navigation or
    /// a service change refetch.
    pub fn back(&self) -> Result<WeekSnapshot, BookingError> {
        let mut state = self.state.lock().unwrap();
        if state.view != PickerView::TimeView {
            error!(view = ?state.view, "back navigation outside the time view");
            return Err(state_error("back navigation is only available in the time view"));
        }
        state.selection.clear_time();
        state.view = PickerView::WeekView;
        Ok(self.week_snapshot(&state))
    }

    /// Confirms a start time, committing the selection and closing the
    /// picker. Returns the display string for the booking-form input.
    pub fn confirm_time(&self, start: DateTime<Utc>) -> Result<ConfirmedSelection, BookingError> {
        let mut state = self.state.lock().unwrap();
        if state.view != PickerView::TimeView {
            error!(view = ?state.view, "time confirmation outside the time view");
            return Err(state_error("time confirmation is only available in the time view"));
        }
        let date = state
            .selection
            .date()
            .ok_or_else(|| state_error("time view without a selected day"))?;
        if !state.slots.contains_time(date, start) {
            error!(%date, %start, "confirmed time is not an offered slot");
            return Err(state_error("confirmed time is not an offered slot"));
        }

        state.selection.pick_time(start);
        state.view = PickerView::Closed;

        let local = start.with_timezone(&self.zone);
        let display_text = format!(
            "{} at {}",
            local.format("%b %-d, %Y"),
            local.format("%-I:%M %p")
        );
        info!(%date, display = %display_text, "date and time selected");
        Ok(ConfirmedSelection {
            date,
            start,
            display: display_text,
        })
    }

    /// A different service is now selected: whatever was on screen is for
    /// the wrong service, so the picker lands on the current week with
    /// slots and selection cleared, and any in-flight fetch is invalidated.
    pub fn handle_service_changed(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.view = PickerView::WeekView;
        state.window = WeekWindow::containing(self.today());
        state.slots.clear();
        state.failed.clear();
        state.selection.clear();
    }

    /// Returns the picker to its initial state (after a successful booking
    /// or when the service selection is emptied).
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.view = PickerView::Closed;
        state.window = WeekWindow::containing(self.today());
        state.slots.clear();
        state.failed.clear();
        state.selection.clear();
    }
}

impl SelectionObserver for AvailabilityPicker {
    fn service_selected(&self, _service: &Service) {
        self.handle_service_changed();
    }

    fn selection_cleared(&self) {
        self.reset();
    }
}
