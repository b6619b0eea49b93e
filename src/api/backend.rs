//! HTTP implementation of [`TravelApi`]

use super::types::{
    AutonomousBookingRequest, AutonomousBookingResponse, BookingRequest, BookingResult,
    ChatRequest, ChatResponse, HealthStatus, HistoryItem, PassengerDetails, PlanBookingRequest,
    PlanBookingResponse, SearchParams, SearchResponse, TravelPlan, TripRequest, UserProfile,
};
use super::TravelApi;
use crate::client::HttpClient;
use crate::config::{ApiConfig, RoutesConfig};
use crate::error::{ApiResult, Result};

use async_trait::async_trait;

const SEARCH_PATH: &str = "/api/search";
const SEARCH_AND_BOOK_PATH: &str = "/api/search-and-book";
const BOOK_PATH: &str = "/api/book";
const HISTORY_PATH: &str = "/api/history";
const HEALTH_PATH: &str = "/api/health";

/// Travel agent backend reached over HTTP
///
/// # Examples
///
/// ```no_run
/// use tripwise::api::{BackendApi, TravelApi};
/// use tripwise::config::ApiConfig;
///
/// # async fn example() -> tripwise::error::Result<()> {
/// let api = BackendApi::new(&ApiConfig::default())?;
/// let health = api.health().await?;
/// println!("{}", health.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BackendApi {
    http: HttpClient,
    routes: RoutesConfig,
}

impl BackendApi {
    /// Create the API from configuration
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_client(HttpClient::new(config)?, config.routes.clone()))
    }

    /// Create the API over an existing HTTP client
    pub fn with_client(http: HttpClient, routes: RoutesConfig) -> Self {
        Self { http, routes }
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[async_trait]
impl TravelApi for BackendApi {
    async fn search_flights(&self, params: &SearchParams) -> ApiResult<SearchResponse> {
        self.http.post(SEARCH_PATH, params).await
    }

    async fn search_and_book(
        &self,
        params: &SearchParams,
        passenger: &PassengerDetails,
    ) -> ApiResult<AutonomousBookingResponse> {
        let body = AutonomousBookingRequest {
            search_params: params.clone(),
            passenger_details: passenger.clone(),
        };
        self.http.post(SEARCH_AND_BOOK_PATH, &body).await
    }

    async fn book_flight(&self, request: &BookingRequest) -> ApiResult<BookingResult> {
        self.http.post(BOOK_PATH, request).await
    }

    async fn chat(&self, request: &ChatRequest) -> ApiResult<ChatResponse> {
        self.http.post(&self.routes.chat, request).await
    }

    async fn create_travel_plan(&self, request: &TripRequest) -> ApiResult<TravelPlan> {
        self.http.post(&self.routes.create_plan, request).await
    }

    async fn book_complete_plan(
        &self,
        request: &PlanBookingRequest,
    ) -> ApiResult<PlanBookingResponse> {
        self.http.post(&self.routes.book_plan, request).await
    }

    async fn search_history(&self) -> ApiResult<Vec<HistoryItem>> {
        self.http.get(HISTORY_PATH).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.http.get(HEALTH_PATH).await
    }

    async fn profile(&self) -> ApiResult<UserProfile> {
        self.http.get(&self.routes.profile).await
    }
}
