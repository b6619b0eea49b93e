//! Search page controller
//!
//! Owns the state of one flight search session: which response is active,
//! and whether a manual search or an autonomous booking is in flight.
//!
//! At most one response kind is active at a time. Starting a search or an
//! autonomous booking clears the active response before the request is
//! issued; a manual booking keeps the current response until it succeeds.

use super::loading::LoadingFlag;
use super::Outcome;
use crate::api::types::{
    AgentThought, AutonomousBookingResponse, BookingRequest, BookingResult, PassengerDetails,
    SearchParams, SearchResponse,
};
use crate::api::TravelApi;
use crate::notice::{Notice, Notifier};
use std::sync::Arc;

pub(crate) const SEARCH_FAILED: &str = "Error searching flights. Please try again.";
pub(crate) const AUTONOMOUS_FAILED: &str =
    "Error during autonomous booking. Please try again or use manual search.";
pub(crate) const BOOKING_FAILED: &str = "Error booking flight. Please try again.";

/// The single response shown by the search page
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveResult {
    /// Nothing to show
    #[default]
    None,
    /// Offers from a manual search
    Search(SearchResponse),
    /// Result of an autonomous search-and-book
    Autonomous(AutonomousBookingResponse),
    /// Confirmation of a manual booking
    Booking(BookingResult),
}

/// User actions raised by the search form and result list
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Search form submitted
    Search(SearchParams),
    /// "Book for me" submitted with passenger details
    SearchAndBook {
        params: SearchParams,
        passenger: PassengerDetails,
    },
    /// Booking form submitted for one offer
    Book(BookingRequest),
}

/// Controller of the flight search page
pub struct SearchController {
    api: Arc<dyn TravelApi>,
    notifier: Arc<dyn Notifier>,
    active: ActiveResult,
    loading: LoadingFlag,
    autonomous_loading: LoadingFlag,
}

impl SearchController {
    /// Create a controller with nothing active
    pub fn new(api: Arc<dyn TravelApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            active: ActiveResult::None,
            loading: LoadingFlag::new(),
            autonomous_loading: LoadingFlag::new(),
        }
    }

    /// Currently active response
    pub fn active(&self) -> &ActiveResult {
        &self.active
    }

    /// Active manual search response, if any
    pub fn search_response(&self) -> Option<&SearchResponse> {
        match &self.active {
            ActiveResult::Search(response) => Some(response),
            _ => None,
        }
    }

    /// Active autonomous booking response, if any
    pub fn autonomous_response(&self) -> Option<&AutonomousBookingResponse> {
        match &self.active {
            ActiveResult::Autonomous(response) => Some(response),
            _ => None,
        }
    }

    /// Active booking confirmation, if any
    pub fn booking_status(&self) -> Option<&BookingResult> {
        match &self.active {
            ActiveResult::Booking(result) => Some(result),
            _ => None,
        }
    }

    /// Flag raised while a manual search is in flight
    pub fn loading(&self) -> &LoadingFlag {
        &self.loading
    }

    /// Flag raised while an autonomous booking is in flight
    pub fn autonomous_loading(&self) -> &LoadingFlag {
        &self.autonomous_loading
    }

    /// Whether any request started from the search form is in flight
    pub fn is_processing(&self) -> bool {
        self.loading.is_set() || self.autonomous_loading.is_set()
    }

    /// Reasoning trace to display: autonomous first, then manual search
    pub fn current_thoughts(&self) -> &[AgentThought] {
        match &self.active {
            ActiveResult::Autonomous(response) => &response.thoughts,
            ActiveResult::Search(response) => &response.thoughts,
            _ => &[],
        }
    }

    /// Route a UI event to the matching action
    pub async fn dispatch(&mut self, event: SearchEvent) -> Outcome {
        match event {
            SearchEvent::Search(params) => self.search(params).await,
            SearchEvent::SearchAndBook { params, passenger } => {
                self.search_and_book(params, passenger).await
            }
            SearchEvent::Book(request) => self.book(request).await,
        }
    }

    /// Run a manual flight search
    pub async fn search(&mut self, params: SearchParams) -> Outcome {
        self.active = ActiveResult::None;
        let _loading = self.loading.begin();

        tracing::info!(
            origin = %params.origin,
            destination = %params.destination,
            date = %params.departure_date,
            "Searching flights"
        );

        match self.api.search_flights(&params).await {
            Ok(response) => {
                tracing::info!(count = response.flights.len(), "Search completed");
                self.active = ActiveResult::Search(response);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Search error");
                self.notifier.notify(Notice::Failure(SEARCH_FAILED.to_string()));
                Outcome::Failed
            }
        }
    }

    /// Let the backend pick and book the best flight
    pub async fn search_and_book(
        &mut self,
        params: SearchParams,
        passenger: PassengerDetails,
    ) -> Outcome {
        self.active = ActiveResult::None;
        let _loading = self.autonomous_loading.begin();

        tracing::info!(
            origin = %params.origin,
            destination = %params.destination,
            "Starting autonomous booking"
        );

        match self.api.search_and_book(&params, &passenger).await {
            Ok(response) => {
                let flight = &response.selected_flight;
                self.notifier.notify(Notice::Success(format!(
                    "AI has successfully booked your flight!\n\nConfirmation Code: {}\n\nFlight: {} {}\n\nCheck your email for details!",
                    response.booking_result.confirmation(),
                    flight.airline,
                    flight.flight_number
                )));
                self.active = ActiveResult::Autonomous(response);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Autonomous booking error");
                self.notifier
                    .notify(Notice::Failure(AUTONOMOUS_FAILED.to_string()));
                Outcome::Failed
            }
        }
    }

    /// Book one offer from the active search results
    pub async fn book(&mut self, request: BookingRequest) -> Outcome {
        tracing::info!(flight_id = %request.flight_id, "Booking flight");

        match self.api.book_flight(&request).await {
            Ok(result) => {
                self.notifier.notify(Notice::Success(format!(
                    "Booking successful! Confirmation code: {}",
                    result.confirmation()
                )));
                self.active = ActiveResult::Booking(result);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Booking error");
                self.notifier.notify(Notice::Failure(BOOKING_FAILED.to_string()));
                Outcome::Failed
            }
        }
    }
}
