//! Date/time selection for one venue.
//!
//! Every time fetch is issued against a [`FetchTicket`]. Results are applied
//! only while their ticket is still the current one, so a slow response for
//! a date the user already left can never overwrite the list for the date
//! now selected.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use super::slot_time::{SlotTime, SlotTimeError};
use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Selecciona primero una fecha.")]
    NoDate,
    #[error("Los horarios todavía se están cargando.")]
    TimesNotLoaded,
    #[error("El horario {0} no está disponible para la fecha seleccionada.")]
    UnavailableTime(SlotTime),
    #[error(transparent)]
    Slot(#[from] SlotTimeError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TimesState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<SlotTime>),
    Failed(ApiError),
}

impl TimesState {
    pub fn times(&self) -> &[SlotTime] {
        match self {
            TimesState::Loaded(times) => times,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, TimesState::Loading)
    }

    /// Loaded and nothing open: the day is fully booked.
    pub fn is_fully_booked(&self) -> bool {
        matches!(self, TimesState::Loaded(times) if times.is_empty())
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            TimesState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Identifies one time fetch: the venue and date it was issued for plus
/// the selection generation at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub venue_id: i64,
    pub date: NaiveDate,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotSelection {
    venue_id: Option<i64>,
    date: Option<NaiveDate>,
    time: Option<SlotTime>,
    times: TimesState,
    generation: u64,
}

impl SlotSelection {
    pub fn for_venue(venue_id: i64) -> Self {
        Self {
            venue_id: Some(venue_id),
            ..Self::default()
        }
    }

    pub fn venue_id(&self) -> Option<i64> {
        self.venue_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<SlotTime> {
        self.time
    }

    pub fn times(&self) -> &TimesState {
        &self.times
    }

    /// Switches venue: the selection starts over and any fetch still in
    /// flight becomes stale.
    pub fn reset_for_venue(&mut self, venue_id: i64) {
        *self = Self {
            venue_id: Some(venue_id),
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    /// Selects `date`, clearing the chosen time. Returns the ticket for the
    /// time fetch the caller must issue, or `None` when the date is in the
    /// past or no venue is set (nothing changes then).
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Option<FetchTicket> {
        let venue_id = self.venue_id?;
        if date < today {
            log::debug!("ignoring past date {}", date);
            return None;
        }
        self.generation += 1;
        self.date = Some(date);
        self.time = None;
        self.times = TimesState::Loading;
        Some(FetchTicket {
            venue_id,
            date,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
            && Some(ticket.date) == self.date
            && Some(ticket.venue_id) == self.venue_id
    }

    /// Applies a fetch result. Returns `false` (and changes nothing) when the
    /// ticket was superseded.
    pub fn apply_times(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<SlotTime>, ApiError>,
    ) -> bool {
        if !self.is_current(&ticket) {
            log::debug!("discarding stale times for {}", ticket.date);
            return false;
        }
        self.times = match result {
            Ok(times) => TimesState::Loaded(times),
            Err(error) => TimesState::Failed(error),
        };
        true
    }

    pub fn select_time(&mut self, time: SlotTime) -> Result<(), SelectionError> {
        if self.date.is_none() {
            return Err(SelectionError::NoDate);
        }
        match &self.times {
            TimesState::Loaded(times) if times.contains(&time) => {
                time.reservation_end()?;
                self.time = Some(time);
                Ok(())
            }
            TimesState::Loaded(_) | TimesState::Failed(_) => {
                Err(SelectionError::UnavailableTime(time))
            }
            TimesState::Idle | TimesState::Loading => Err(SelectionError::TimesNotLoaded),
        }
    }

    pub fn clear_time(&mut self) {
        self.time = None;
    }

    /// `(venue, date, time)` once all three are chosen.
    pub fn complete(&self) -> Option<(i64, NaiveDate, SlotTime)> {
        Some((self.venue_id?, self.date?, self.time?))
    }
}

/// Whether a calendar day can be clicked. Unknown availability (still
/// loading or failed) counts as closed.
pub fn is_selectable(
    date: NaiveDate,
    today: NaiveDate,
    open_days: Option<&BTreeSet<NaiveDate>>,
) -> bool {
    date >= today && open_days.map_or(false, |days| days.contains(&date))
}
