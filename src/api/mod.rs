//! Travel agent backend API
//!
//! [`TravelApi`] binds one request shape to one response shape per backend
//! operation. Implementations forward the request, unwrap the response
//! payload and return any [`TransportError`](crate::error::TransportError)
//! unchanged: no local validation, no retries, no added context.
//!
//! [`BackendApi`] is the HTTP implementation used by the terminal front end.
//! Page controllers only depend on the trait, so they can be driven by any
//! other implementation.

pub mod backend;
pub mod types;

pub use backend::BackendApi;

use crate::error::ApiResult;
use async_trait::async_trait;
use types::{
    AutonomousBookingResponse, BookingRequest, BookingResult, ChatRequest, ChatResponse,
    HealthStatus, HistoryItem, PassengerDetails, PlanBookingRequest, PlanBookingResponse,
    SearchParams, SearchResponse, TravelPlan, TripRequest, UserProfile,
};

/// Operations offered by the travel agent backend
#[async_trait]
pub trait TravelApi: Send + Sync {
    /// Search flights (`POST /api/search`)
    async fn search_flights(&self, params: &SearchParams) -> ApiResult<SearchResponse>;

    /// Search and immediately book the best flight (`POST /api/search-and-book`)
    async fn search_and_book(
        &self,
        params: &SearchParams,
        passenger: &PassengerDetails,
    ) -> ApiResult<AutonomousBookingResponse>;

    /// Book a flight from a previous search (`POST /api/book`)
    async fn book_flight(&self, request: &BookingRequest) -> ApiResult<BookingResult>;

    /// Send one chat turn to the trip planner
    async fn chat(&self, request: &ChatRequest) -> ApiResult<ChatResponse>;

    /// Generate a travel plan from the trip details gathered in chat
    async fn create_travel_plan(&self, request: &TripRequest) -> ApiResult<TravelPlan>;

    /// Book the flight and hotel of a generated plan
    async fn book_complete_plan(
        &self,
        request: &PlanBookingRequest,
    ) -> ApiResult<PlanBookingResponse>;

    /// Recent searches (`GET /api/history`)
    async fn search_history(&self) -> ApiResult<Vec<HistoryItem>>;

    /// Liveness check (`GET /api/health`)
    async fn health(&self) -> ApiResult<HealthStatus>;

    /// Profile of the signed-in user
    async fn profile(&self) -> ApiResult<UserProfile>;
}
