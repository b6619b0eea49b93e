//! Test utilities for Tripwise
//!
//! Provides a scripted [`TravelApi`] implementation and sample backend
//! payloads for controller and view tests.

use crate::api::types::{
    AgentThought, AutonomousBookingResponse, BookingRequest, BookingResult, CabinClass,
    ChatRequest, ChatResponse, ExtractedInfo, Flight, HealthStatus, HistoryItem,
    PassengerDetails, PlanBookingRequest, PlanBookingResponse, SearchParams, SearchResponse,
    TravelPlan, TripRequest, TripType, UserProfile,
};
use crate::api::TravelApi;
use crate::controllers::LoadingFlag;
use crate::error::{ApiResult, TransportError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted backend
///
/// Each operation answers with the next queued result and panics when
/// nothing was queued, so a test fails loudly on an unexpected request.
/// Request bodies are recorded for later assertions.
#[derive(Default)]
pub struct FakeApi {
    search: Mutex<VecDeque<ApiResult<SearchResponse>>>,
    search_and_book: Mutex<VecDeque<ApiResult<AutonomousBookingResponse>>>,
    book: Mutex<VecDeque<ApiResult<BookingResult>>>,
    chat: Mutex<VecDeque<ApiResult<ChatResponse>>>,
    plan: Mutex<VecDeque<ApiResult<TravelPlan>>>,
    plan_booking: Mutex<VecDeque<ApiResult<PlanBookingResponse>>>,
    history: Mutex<VecDeque<ApiResult<Vec<HistoryItem>>>>,
    health: Mutex<VecDeque<ApiResult<HealthStatus>>>,
    profile: Mutex<VecDeque<ApiResult<UserProfile>>>,

    chat_requests: Mutex<Vec<ChatRequest>>,
    plan_requests: Mutex<Vec<TripRequest>>,
    plan_booking_requests: Mutex<Vec<PlanBookingRequest>>,
    book_requests: Mutex<Vec<BookingRequest>>,

    watched: Mutex<Option<LoadingFlag>>,
    observed: Mutex<Vec<bool>>,
}

fn next<T>(queue: &Mutex<VecDeque<ApiResult<T>>>, operation: &str) -> ApiResult<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| panic!("unexpected {} request", operation))
}

impl FakeApi {
    pub fn push_search(&self, result: ApiResult<SearchResponse>) {
        self.search.lock().unwrap().push_back(result);
    }

    pub fn push_search_and_book(&self, result: ApiResult<AutonomousBookingResponse>) {
        self.search_and_book.lock().unwrap().push_back(result);
    }

    pub fn push_book(&self, result: ApiResult<BookingResult>) {
        self.book.lock().unwrap().push_back(result);
    }

    pub fn push_chat(&self, result: ApiResult<ChatResponse>) {
        self.chat.lock().unwrap().push_back(result);
    }

    pub fn push_plan(&self, result: ApiResult<TravelPlan>) {
        self.plan.lock().unwrap().push_back(result);
    }

    pub fn push_plan_booking(&self, result: ApiResult<PlanBookingResponse>) {
        self.plan_booking.lock().unwrap().push_back(result);
    }

    pub fn push_history(&self, result: ApiResult<Vec<HistoryItem>>) {
        self.history.lock().unwrap().push_back(result);
    }

    pub fn push_health(&self, result: ApiResult<HealthStatus>) {
        self.health.lock().unwrap().push_back(result);
    }

    pub fn push_profile(&self, result: ApiResult<UserProfile>) {
        self.profile.lock().unwrap().push_back(result);
    }

    /// Record the state of `flag` each time a request arrives
    pub fn observe(&self, flag: LoadingFlag) {
        *self.watched.lock().unwrap() = Some(flag);
    }

    /// Flag states seen at request time
    pub fn observed_loading(&self) -> Vec<bool> {
        self.observed.lock().unwrap().clone()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub fn plan_requests(&self) -> Vec<TripRequest> {
        self.plan_requests.lock().unwrap().clone()
    }

    pub fn plan_booking_requests(&self) -> Vec<PlanBookingRequest> {
        self.plan_booking_requests.lock().unwrap().clone()
    }

    pub fn book_requests(&self) -> Vec<BookingRequest> {
        self.book_requests.lock().unwrap().clone()
    }

    fn record_flag(&self) {
        if let Some(flag) = self.watched.lock().unwrap().as_ref() {
            self.observed.lock().unwrap().push(flag.is_set());
        }
    }
}

#[async_trait]
impl TravelApi for FakeApi {
    async fn search_flights(&self, _params: &SearchParams) -> ApiResult<SearchResponse> {
        self.record_flag();
        next(&self.search, "search")
    }

    async fn search_and_book(
        &self,
        _params: &SearchParams,
        _passenger: &PassengerDetails,
    ) -> ApiResult<AutonomousBookingResponse> {
        self.record_flag();
        next(&self.search_and_book, "search-and-book")
    }

    async fn book_flight(&self, request: &BookingRequest) -> ApiResult<BookingResult> {
        self.record_flag();
        self.book_requests.lock().unwrap().push(request.clone());
        next(&self.book, "book")
    }

    async fn chat(&self, request: &ChatRequest) -> ApiResult<ChatResponse> {
        self.record_flag();
        self.chat_requests.lock().unwrap().push(request.clone());
        next(&self.chat, "chat")
    }

    async fn create_travel_plan(&self, request: &TripRequest) -> ApiResult<TravelPlan> {
        self.record_flag();
        self.plan_requests.lock().unwrap().push(request.clone());
        next(&self.plan, "create-plan")
    }

    async fn book_complete_plan(
        &self,
        request: &PlanBookingRequest,
    ) -> ApiResult<PlanBookingResponse> {
        self.record_flag();
        self.plan_booking_requests
            .lock()
            .unwrap()
            .push(request.clone());
        next(&self.plan_booking, "book-plan")
    }

    async fn search_history(&self) -> ApiResult<Vec<HistoryItem>> {
        self.record_flag();
        next(&self.history, "history")
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.record_flag();
        next(&self.health, "health")
    }

    async fn profile(&self) -> ApiResult<UserProfile> {
        self.record_flag();
        next(&self.profile, "profile")
    }
}

/// Transport failure carrying the given HTTP status
pub fn backend_error(status: u16) -> TransportError {
    TransportError::status(status, "http://fake.test/api", "Internal Server Error")
}

pub fn sample_params() -> SearchParams {
    SearchParams {
        origin: "DEL".to_string(),
        destination: "BOM".to_string(),
        departure_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        return_date: None,
        passengers: 1,
        trip_type: TripType::OneWay,
        cabin_class: CabinClass::Economy,
    }
}

pub fn sample_passenger() -> PassengerDetails {
    PassengerDetails {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "+91 98000 00000".to_string(),
    }
}

pub fn sample_flight(id: &str, airline: &str, number: &str, price: f64) -> Flight {
    Flight {
        flight_id: id.to_string(),
        airline: airline.to_string(),
        flight_number: number.to_string(),
        origin: "DEL".to_string(),
        destination: "BOM".to_string(),
        departure_time: "2025-06-01T06:00:00".to_string(),
        arrival_time: "2025-06-01T08:10:00".to_string(),
        duration: "2h 10m".to_string(),
        stops: 0,
        cabin_class: "economy".to_string(),
        currency: "INR".to_string(),
        price,
    }
}

fn thought(step: u32, text: &str) -> AgentThought {
    AgentThought {
        step,
        thought: text.to_string(),
        action: "analyze".to_string(),
        timestamp: "2025-05-20T10:00:00".to_string(),
    }
}

pub fn sample_search_response() -> SearchResponse {
    SearchResponse {
        search_id: "S1".to_string(),
        status: "success".to_string(),
        message: "ok".to_string(),
        flights: vec![sample_flight("F1", "X", "X-100", 5000.0)],
        thoughts: vec![thought(1, "Searching DEL to BOM")],
        search_params: serde_json::Value::Null,
    }
}

pub fn sample_booking(code: &str) -> BookingResult {
    BookingResult {
        booking_id: format!("B-{}", code),
        confirmation_code: Some(code.to_string()),
        status: "confirmed".to_string(),
        message: "Booking confirmed".to_string(),
    }
}

pub fn sample_autonomous_response() -> AutonomousBookingResponse {
    let selected = sample_flight("F2", "IndiGo", "6E-201", 4200.0);
    AutonomousBookingResponse {
        search_id: "S2".to_string(),
        status: "success".to_string(),
        thoughts: vec![thought(1, "Picked cheapest non-stop")],
        all_flights: vec![
            selected.clone(),
            sample_flight("F3", "Vistara", "UK-995", 6100.0),
        ],
        selected_flight: selected,
        selection_reason: "Cheapest non-stop option".to_string(),
        booking_result: sample_booking("AUTO42"),
        message: "Booked".to_string(),
    }
}

pub fn sample_chat_response(message: &str, ready: bool) -> ChatResponse {
    ChatResponse {
        message: message.to_string(),
        extracted_info: ExtractedInfo {
            destination: Some("Goa".to_string()),
            days: Some(4),
            budget: Some(40000.0),
            ..Default::default()
        },
        is_ready_to_plan: ready,
    }
}

pub fn sample_plan() -> TravelPlan {
    TravelPlan {
        destination: Some("Goa".to_string()),
        flight: Some(serde_json::json!({"airline": "IndiGo", "flight_number": "6E-501"})),
        hotel: Some(serde_json::json!({"name": "Sea View Resort"})),
        itinerary: Some(serde_json::json!([{"day": 1, "activities": ["Baga Beach"]}])),
        total_cost: Some(52000.0),
        extra: serde_json::Map::new(),
    }
}

pub fn sample_plan_booking() -> PlanBookingResponse {
    PlanBookingResponse {
        flight_booking: sample_booking("FL123"),
        hotel_booking: sample_booking("HT456"),
        total_cost: 52000.0,
    }
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: 7,
        email: "asha@example.com".to_string(),
        full_name: "Asha Rao".to_string(),
        is_active: true,
        created_at: "2025-01-15T09:30:00".to_string(),
    }
}

pub fn sample_history() -> Vec<HistoryItem> {
    vec![
        HistoryItem {
            search_id: "S1".to_string(),
            search_params: serde_json::json!({"origin": "DEL", "destination": "BOM"}),
            timestamp: "2025-05-20T10:00:00".to_string(),
            result_count: 12,
        },
        HistoryItem {
            search_id: "S2".to_string(),
            search_params: serde_json::json!({"origin": "BLR", "destination": "GOI"}),
            timestamp: "2025-05-21T11:00:00".to_string(),
            result_count: 4,
        },
    ]
}
