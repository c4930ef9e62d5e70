use std::collections::BTreeSet;

use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError},
    domain::{
        calendar::{CalendarMonth, MonthCursor},
        selection::{FetchTicket, SlotSelection},
        slot_time::SlotTime,
    },
    utils::time,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum OpenDays {
    #[default]
    Loading,
    Loaded(BTreeSet<NaiveDate>),
    /// The call failed; shown as "no availability".
    Failed,
}

impl OpenDays {
    pub fn as_set(&self) -> Option<&BTreeSet<NaiveDate>> {
        match self {
            OpenDays::Loaded(days) => Some(days),
            _ => None,
        }
    }
}

/// Calendar, open days and slot selection for one venue.
#[derive(Debug, Clone, Copy)]
pub struct BookingState {
    pub selection: RwSignal<SlotSelection>,
    pub cursor: RwSignal<MonthCursor>,
    open_days: RwSignal<(u32, OpenDays)>,
}

impl BookingState {
    pub fn new(venue_id: i64) -> Self {
        Self {
            selection: create_rw_signal(SlotSelection::for_venue(venue_id)),
            cursor: create_rw_signal(MonthCursor::default()),
            open_days: create_rw_signal((0, OpenDays::Loading)),
        }
    }

    pub fn open_days(&self) -> Signal<OpenDays> {
        let open_days = self.open_days;
        Signal::derive(move || open_days.with(|(_, days)| days.clone()))
    }

    pub fn month(&self) -> Result<CalendarMonth, ApiError> {
        self.cursor
            .get()
            .month(time::today())
            .map_err(|err| ApiError::validation(err.to_string()))
    }

    pub fn reset_for_venue(&self, venue_id: i64) {
        self.selection.update(|s| s.reset_for_venue(venue_id));
        self.cursor.set(MonthCursor::default());
        self.open_days.set((0, OpenDays::Loading));
    }

    /// Loads open days for the month under the cursor. A response for a month
    /// or venue the user already navigated away from is dropped.
    pub async fn load_open_days(&self, api: &ApiClient) -> Result<(), ApiError> {
        let Some(venue_id) = self.selection.with_untracked(|s| s.venue_id()) else {
            return Ok(());
        };
        let offset = self.cursor.get_untracked().offset();
        let month = self.cursor.get_untracked().month(time::today());
        let range = month.ok().and_then(|m| m.bookable_range());
        self.open_days.set((offset, OpenDays::Loading));
        let result = match range {
            Some((start, end)) => api.get_open_days(venue_id, start, end).await,
            None => Ok(BTreeSet::new()),
        };
        let current_venue = self.selection.try_with_untracked(|s| s.venue_id()).flatten();
        if current_venue != Some(venue_id) || self.cursor.get_untracked().offset() != offset {
            log::debug!("discarding stale open days for venue {}", venue_id);
            return Ok(());
        }
        match result {
            Ok(days) => {
                self.open_days.set((offset, OpenDays::Loaded(days)));
                Ok(())
            }
            Err(error) => {
                self.open_days.set((offset, OpenDays::Failed));
                Err(error)
            }
        }
    }

    /// Selects a date; returns the fetch ticket when times must be loaded.
    pub fn choose_date(&self, date: NaiveDate) -> Option<FetchTicket> {
        self.selection
            .try_update(|s| s.select_date(date, time::today()))
            .flatten()
    }

    /// Fetches times for `ticket` and applies them if still current. The
    /// error is returned only when it belongs to the current selection.
    pub async fn load_times(&self, api: &ApiClient, ticket: FetchTicket) -> Option<ApiError> {
        let result = api.get_open_times(ticket.venue_id, ticket.date).await;
        let error = result.as_ref().err().cloned();
        let applied = self
            .selection
            .try_update(|s| s.apply_times(ticket, result))
            .unwrap_or(false);
        if applied {
            error
        } else {
            None
        }
    }

    pub fn choose_time(&self, time: SlotTime) -> Result<(), ApiError> {
        self.selection
            .try_update(|s| s.select_time(time))
            .ok_or_else(|| ApiError::unknown("La selección ya no está disponible."))?
            .map_err(|err| ApiError::validation(err.to_string()))
    }
}
