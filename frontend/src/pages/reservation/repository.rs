use chrono::NaiveDate;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, CreateReservationRequest, Purpose, Venue},
    domain::reservation::ReservationDraft,
    pages::reservation::utils::ReservationQuery,
    state::booking::BookingState,
};

#[derive(Clone)]
pub struct ReservationRepository {
    client: Rc<ApiClient>,
}

impl ReservationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn load_venue(&self, id: i64) -> Result<Venue, ApiError> {
        self.client.get_venue(id).await
    }

    pub async fn load_purposes(&self) -> Result<Vec<Purpose>, ApiError> {
        self.client.purposes().await
    }

    pub async fn submit(
        &self,
        draft: &ReservationDraft,
        purposes: &[Purpose],
        today: NaiveDate,
    ) -> Result<CreateReservationRequest, ApiError> {
        submit_reservation(&self.client, draft, purposes, today).await
    }

    /// Submits against the capacity of a loaded venue. Whatever the page
    /// resources have not resolved yet is fetched here first; if the venue
    /// cannot be loaded nothing is posted.
    pub async fn submit_with_venue(
        &self,
        draft: ReservationDraft,
        venue: Option<Result<Venue, ApiError>>,
        purposes: Option<Result<Vec<Purpose>, ApiError>>,
        today: NaiveDate,
    ) -> Result<CreateReservationRequest, ApiError> {
        let venue = match venue {
            Some(Ok(venue)) if venue.id == draft.venue_id => venue,
            _ => self.load_venue(draft.venue_id).await?,
        };
        let purposes = match purposes {
            Some(Ok(purposes)) => purposes,
            _ => self.load_purposes().await?,
        };
        let draft = ReservationDraft {
            capacity: venue.capacity,
            ..draft
        };
        self.submit(&draft, &purposes, today).await
    }
}

/// Validates the draft and posts it. Nothing reaches the network when the
/// draft is invalid, and a failed post is never retried.
pub async fn submit_reservation(
    api: &ApiClient,
    draft: &ReservationDraft,
    purposes: &[Purpose],
    today: NaiveDate,
) -> Result<CreateReservationRequest, ApiError> {
    let payload = draft.validate(purposes, today)?;
    api.create_request(&payload).await?;
    Ok(payload)
}

/// Restores the slot from the query string: selects the date, loads its
/// times and picks the requested time if it is still open.
pub async fn restore_selection(
    booking: &BookingState,
    api: &ApiClient,
    query: &ReservationQuery,
) -> Result<(), ApiError> {
    let Some(ticket) = booking.choose_date(query.date) else {
        return Err(ApiError::validation("No se pueden reservar fechas pasadas."));
    };
    if let Some(error) = booking.load_times(api, ticket).await {
        return Err(error);
    }
    booking.choose_time(query.time)
}
