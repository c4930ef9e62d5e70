use leptos::*;

use crate::{
    api::{ApiClient, ApiError, CreateReservationRequest, Purpose, Venue},
    domain::{reservation::ReservationDraft, slot_time::SlotTime},
    pages::reservation::{
        repository::{restore_selection, ReservationRepository},
        utils::{ReservationFormState, ReservationQuery, MY_RESERVATIONS_PATH, REDIRECT_DELAY_MS},
    },
    state::{
        booking::BookingState,
        toast::{use_toaster, Toaster},
    },
    utils::{navigation, time},
};

#[derive(Clone, Copy)]
pub struct ReservationViewModel {
    pub query: ReservationQuery,
    pub form: ReservationFormState,
    pub booking: BookingState,
    pub venue: Resource<i64, Result<Venue, ApiError>>,
    pub purposes: Resource<(), Result<Vec<Purpose>, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub confirmation: RwSignal<Option<CreateReservationRequest>>,
    pub submit_action: Action<ReservationDraft, Result<CreateReservationRequest, ApiError>>,
    toaster: Toaster,
}

impl ReservationViewModel {
    /// Purposes as `(value, label)` select options; empty until loaded.
    pub fn purpose_options(&self) -> Signal<Vec<(String, String)>> {
        let purposes = self.purposes;
        Signal::derive(move || {
            purposes
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
                .into_iter()
                .map(|purpose| (purpose.id.to_string(), purpose.name))
                .collect()
        })
    }

    /// Capacity of the loaded venue; `None` while it is loading or failed.
    pub fn capacity(&self) -> Option<u32> {
        let venue = self.venue;
        untrack(move || venue.get())
            .and_then(|result| result.ok())
            .map(|venue| venue.capacity)
    }

    pub fn select_time(&self, time: SlotTime) {
        if let Err(error) = self.booking.choose_time(time) {
            self.toaster.api_error(&error);
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked()
            || self.confirmation.with_untracked(Option::is_some)
        {
            return;
        }
        let slot = self.booking.selection.with_untracked(|s| s.complete());
        // The action re-resolves the capacity before anything is posted.
        match self.form.to_draft(slot, self.capacity().unwrap_or_default()) {
            Ok(draft) => {
                self.error.set(None);
                self.submit_action.dispatch(draft);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

/// Shows the outcome of a submission. Success records the confirmation and
/// schedules the move to the personal list; failure keeps the form with the
/// API message.
pub fn apply_submit_result(
    result: Option<Result<CreateReservationRequest, ApiError>>,
    confirmation: RwSignal<Option<CreateReservationRequest>>,
    error: RwSignal<Option<ApiError>>,
    toaster: Toaster,
) {
    if let Some(result) = result {
        match result {
            Ok(payload) => {
                log::info!("reservation requested for venue {}", payload.venue_id);
                error.set(None);
                confirmation.set(Some(payload));
                toaster.success("Solicitud de reserva enviada.");
                navigation::schedule_redirect(MY_RESERVATIONS_PATH, REDIRECT_DELAY_MS);
            }
            Err(err) => {
                log::error!("reservation request failed: {}", err);
                toaster.api_error(&err);
                error.set(Some(err));
            }
        }
    }
}

pub fn use_reservation_view_model(query: ReservationQuery) -> ReservationViewModel {
    let repository = store_value(ReservationRepository::new(
        use_context::<ApiClient>().unwrap_or_else(ApiClient::new),
    ));
    let toaster = use_toaster();
    let form = ReservationFormState::default();
    let booking = BookingState::new(query.venue_id);
    let error = create_rw_signal(None::<ApiError>);
    let confirmation = create_rw_signal(None::<CreateReservationRequest>);

    let venue = create_resource(
        move || query.venue_id,
        move |id| {
            let repo = repository.get_value();
            async move { repo.load_venue(id).await }
        },
    );
    let purposes = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.load_purposes().await }
        },
    );

    let submit_action = create_action(move |draft: &ReservationDraft| {
        let repo = repository.get_value();
        let draft = draft.clone();
        let loaded_venue = untrack(move || venue.get());
        let loaded_purposes = untrack(move || purposes.get());
        async move {
            repo.submit_with_venue(draft, loaded_venue, loaded_purposes, time::today())
                .await
        }
    });

    create_effect(move |_| {
        apply_submit_result(submit_action.value().get(), confirmation, error, toaster);
    });

    // Nothing tracked: runs once on mount.
    create_effect(move |_| {
        let repo = repository.get_value();
        spawn_local(async move {
            if let Err(err) = restore_selection(&booking, repo.client(), &query).await {
                log::warn!("could not restore the selected slot: {}", err);
                toaster.api_error(&err);
            }
        });
    });

    ReservationViewModel {
        query,
        form,
        booking,
        venue,
        purposes,
        error,
        confirmation,
        submit_action,
        toaster,
    }
}
