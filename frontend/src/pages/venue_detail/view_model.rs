use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Venue},
    domain::{
        calendar::CalendarMonth,
        selection::{is_selectable, SlotSelection},
        slot_time::SlotTime,
    },
    pages::venue_detail::utils::reserve_target,
    state::{
        booking::BookingState,
        session::{use_session, SessionStore},
        toast::{use_toaster, Toaster},
    },
    utils::{navigation, time},
};

#[derive(Clone, Copy)]
pub struct VenueDetailViewModel {
    pub venue_id: Signal<i64>,
    pub venue: Resource<i64, Result<Venue, ApiError>>,
    pub booking: BookingState,
    api: StoredValue<ApiClient>,
    session: SessionStore,
    toaster: Toaster,
}

impl VenueDetailViewModel {
    pub fn month(&self) -> Signal<Option<CalendarMonth>> {
        let booking = self.booking;
        Signal::derive(move || booking.month().ok())
    }

    pub fn selection(&self) -> Signal<SlotSelection> {
        self.booking.selection.into()
    }

    pub fn previous_month(&self) {
        self.booking.cursor.update(|cursor| *cursor = cursor.previous());
    }

    pub fn next_month(&self) {
        self.booking.cursor.update(|cursor| *cursor = cursor.next());
    }

    /// Closed, past or still-unknown days are ignored; otherwise the times
    /// for the new date are fetched.
    pub fn select_date(&self, date: NaiveDate) {
        let open_days = self.booking.open_days().get_untracked();
        if !is_selectable(date, time::today(), open_days.as_set()) {
            log::debug!("date {} is not selectable", date);
            return;
        }
        if let Some(ticket) = self.booking.choose_date(date) {
            let api = self.api.get_value();
            let booking = self.booking;
            let toaster = self.toaster;
            spawn_local(async move {
                if let Some(error) = booking.load_times(&api, ticket).await {
                    log::error!("could not load times for {}: {}", ticket.date, error);
                    toaster.api_error(&error);
                }
            });
        }
    }

    pub fn select_time(&self, time: SlotTime) {
        if let Err(error) = self.booking.choose_time(time) {
            self.toaster.api_error(&error);
        }
    }

    pub fn reserve(&self) {
        let Some((venue_id, date, time)) = self.booking.selection.with_untracked(|s| s.complete())
        else {
            self.toaster.info("Selecciona una fecha y un horario.");
            return;
        };
        let target = self
            .session
            .phase()
            .with_untracked(|phase| reserve_target(phase, venue_id, date, time));
        navigation::redirect_to(&target);
    }
}

/// Another venue starts over: selection, month and open days. Returns the
/// venue now shown.
pub fn follow_venue(booking: BookingState, previous: Option<i64>, venue_id: i64) -> i64 {
    if previous.is_some_and(|previous| previous != venue_id) {
        log::debug!("venue changed to {}, resetting the selection", venue_id);
        booking.reset_for_venue(venue_id);
    }
    venue_id
}

pub fn use_venue_detail_view_model(venue_id: Signal<i64>) -> VenueDetailViewModel {
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let toaster = use_toaster();
    let booking = BookingState::new(venue_id.get_untracked());
    let venue = create_resource(
        move || venue_id.get(),
        move |id| {
            let api = api.get_value();
            async move { api.get_venue(id).await }
        },
    );

    create_effect(move |previous: Option<i64>| follow_venue(booking, previous, venue_id.get()));

    // Reload open days whenever the venue or the displayed month changes.
    let selected_venue = create_memo(move |_| booking.selection.with(|s| s.venue_id()));
    create_effect(move |_| {
        selected_venue.track();
        booking.cursor.track();
        let api = api.get_value();
        spawn_local(async move {
            if let Err(error) = booking.load_open_days(&api).await {
                log::error!("could not load open days: {}", error);
                toaster.api_error(&error);
            }
        });
    });

    VenueDetailViewModel {
        venue_id,
        venue,
        booking,
        api,
        session: use_session(),
        toaster,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::booking::OpenDays;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn closed_days_are_ignored() {
        with_runtime(|| {
            let vm = use_venue_detail_view_model(Signal::derive(|| 5));
            // Open days never loaded: nothing is selectable.
            vm.select_date(time::today());
            assert_eq!(vm.booking.selection.get().date(), None);
        });
    }

    #[test]
    fn month_navigation_is_clamped() {
        with_runtime(|| {
            let vm = use_venue_detail_view_model(Signal::derive(|| 5));
            vm.previous_month();
            assert_eq!(vm.booking.cursor.get().offset(), 0);
            for _ in 0..5 {
                vm.next_month();
            }
            assert_eq!(vm.booking.cursor.get().offset(), 2);
            assert!(vm.month().get().is_some());
        });
    }

    #[test]
    fn changing_venue_resets_the_booking_state() {
        with_runtime(|| {
            let booking = BookingState::new(5);
            booking.cursor.update(|cursor| *cursor = cursor.next());

            assert_eq!(follow_venue(booking, None, 5), 5);
            assert_eq!(follow_venue(booking, Some(5), 5), 5);
            assert_eq!(booking.cursor.get().offset(), 1);

            assert_eq!(follow_venue(booking, Some(5), 9), 9);
            assert_eq!(booking.selection.get().venue_id(), Some(9));
            assert_eq!(booking.cursor.get().offset(), 0);
            assert_eq!(booking.open_days().get(), OpenDays::Loading);
        });
    }

    #[test]
    fn reserve_without_complete_selection_stays_put() {
        with_runtime(|| {
            let toaster = crate::state::toast::provide_toaster();
            let vm = use_venue_detail_view_model(Signal::derive(|| 5));
            vm.reserve();
            let toasts = toaster.toasts().get();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].message, "Selecciona una fecha y un horario.");
        });
    }
}
