// --- File: crates/detailbook_picker/src/lib.rs ---
// Declare modules within this crate
pub mod model;
pub mod picker;
pub mod week;
#[cfg(test)]
mod week_proptest;

pub use model::{
    ConfirmedSelection, DayAvailability, DaySnapshot, DayStatus, Selection, SlotSet, WeekSnapshot,
};
pub use picker::{AvailabilityPicker, PickerView};
pub use week::WeekWindow;
