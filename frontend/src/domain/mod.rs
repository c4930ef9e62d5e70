//! Pure reservation logic: no I/O, no reactive state.

pub mod calendar;
pub mod reservation;
pub mod selection;
pub mod slot_time;
pub mod status;
