//! Page controller integration tests
//!
//! Drives the controllers through the real HTTP backend implementation
//! against a `wiremock` server and checks state, notices and rendering.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tripwise::api::types::{
    BookingRequest, CabinClass, ChatRole, ExtractedInfo, PassengerDetails, SearchParams, TripType,
};
use tripwise::api::BackendApi;
use tripwise::controllers::{
    ActiveResult, Outcome, PlannerController, PlannerEvent, ProfileController, SearchController,
    SearchEvent,
};
use tripwise::notice::{Notice, RecordingNotifier};
use tripwise::view;

fn params() -> SearchParams {
    SearchParams {
        origin: "DEL".to_string(),
        destination: "BOM".to_string(),
        departure_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("date"),
        return_date: None,
        passengers: 1,
        trip_type: TripType::OneWay,
        cabin_class: CabinClass::Economy,
    }
}

fn passenger() -> PassengerDetails {
    PassengerDetails {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "+91 98000 00000".to_string(),
    }
}

fn backend(server: &MockServer) -> Arc<BackendApi> {
    Arc::new(BackendApi::new(&common::api_config(&server.uri())).expect("api"))
}

#[tokio::test]
async fn test_search_renders_single_offer_with_grouped_price() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::search_response_json()))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = SearchController::new(backend(&server), notifier.clone());

    let outcome = controller.dispatch(SearchEvent::Search(params())).await;
    assert_eq!(outcome, Outcome::Completed);
    assert!(!controller.loading().is_set());

    let response = controller.search_response().expect("search response");
    let rendered = view::render_flight_list(&response.flights);
    assert!(rendered.contains("Found 1 flights"));
    assert_eq!(rendered.matches("X-100").count(), 1);
    assert!(rendered.contains("5,000"));
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_booking_failure_keeps_search_and_notifies_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::search_response_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/book"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = SearchController::new(backend(&server), notifier.clone());
    controller.search(params()).await;

    let outcome = controller
        .dispatch(SearchEvent::Book(BookingRequest {
            flight_id: "F1".to_string(),
            passenger_details: passenger(),
        }))
        .await;

    assert_eq!(outcome, Outcome::Failed);
    assert!(controller.booking_status().is_none());
    assert!(controller.search_response().is_some());
    assert_eq!(notifier.notices().len(), 1);
    assert!(notifier.notices()[0].is_failure());
}

#[tokio::test]
async fn test_booking_success_replaces_search() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::search_response_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/book"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::booking_json("ABC123")))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = SearchController::new(backend(&server), notifier.clone());
    controller.search(params()).await;
    controller
        .book(BookingRequest {
            flight_id: "F1".to_string(),
            passenger_details: passenger(),
        })
        .await;

    assert!(matches!(controller.active(), ActiveResult::Booking(_)));
    assert_eq!(
        controller.booking_status().map(|b| b.confirmation()),
        Some("ABC123")
    );
    assert_eq!(
        notifier.notices(),
        vec![Notice::Success(
            "Booking successful! Confirmation code: ABC123".to_string()
        )]
    );
}

#[tokio::test]
async fn test_autonomous_booking_then_failed_search_clears_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search-and-book"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::autonomous_response_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = SearchController::new(backend(&server), notifier.clone());

    let outcome = controller
        .dispatch(SearchEvent::SearchAndBook {
            params: params(),
            passenger: passenger(),
        })
        .await;
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(controller.current_thoughts().len(), 1);
    assert!(notifier.notices()[0].text().contains("AUTO42"));
    assert!(notifier.notices()[0].text().contains("IndiGo 6E-201"));

    let outcome = controller.search(params()).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(controller.active(), &ActiveResult::None);
    assert!(!controller.is_processing());
    assert!(notifier.notices()[1].is_failure());
}

#[tokio::test]
async fn test_planner_conversation_plan_and_booking() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::chat_response_json("Sounds great!", true)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/create-plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::plan_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/book-plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::plan_booking_json()))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = PlannerController::new(backend(&server), notifier.clone());

    let outcome = controller
        .dispatch(PlannerEvent::SendMessage(
            "Goa for 4 days, budget 40000".to_string(),
        ))
        .await;
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(controller.conversation().len(), 2);
    assert_eq!(controller.conversation()[1].role, ChatRole::Assistant);
    assert!(controller.is_ready_to_plan());

    assert_eq!(
        controller.dispatch(PlannerEvent::GeneratePlan).await,
        Outcome::Completed
    );
    let plan = controller.plan().expect("plan");
    assert_eq!(plan.extra.get("weather"), Some(&json!("sunny")));

    assert_eq!(
        controller
            .dispatch(PlannerEvent::BookPlan(passenger()))
            .await,
        Outcome::Completed
    );
    let booking = controller.plan_booking().expect("plan booking");
    assert_eq!(booking.flight_booking.confirmation(), "FL123");
    assert!(notifier
        .notices()
        .iter()
        .any(|n| n.text().contains("₹52,000")));
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_planner_chat_failure_appends_error_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = PlannerController::new(backend(&server), notifier.clone());

    let outcome = controller.send_message("Take me somewhere warm").await;

    assert_eq!(outcome, Outcome::Failed);
    let log = controller.conversation();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].role, ChatRole::User);
    assert_eq!(log[1].role, ChatRole::Assistant);
    assert!(log[1].content.contains("error"));
    assert!(!controller.chat_loading().is_set());
}

#[tokio::test]
async fn test_planner_echoes_loosely_typed_extracted_info() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({"message": "Goa on a budget"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "How many days?",
            "extracted_info": {"destination": "Goa", "budget": "40000 INR"},
            "is_ready_to_plan": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "message": "4 days",
            "extracted_info": {"destination": "Goa", "budget": "40000 INR"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Let me think about that.",
            "extracted_info": null,
            "is_ready_to_plan": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = PlannerController::new(backend(&server), notifier.clone());

    assert_eq!(
        controller.send_message("Goa on a budget").await,
        Outcome::Completed
    );
    let info = controller.extracted_info();
    assert_eq!(info.destination.as_deref(), Some("Goa"));
    assert_eq!(info.budget, None);
    assert_eq!(info.extra.get("budget"), Some(&json!("40000 INR")));

    assert_eq!(controller.send_message("4 days").await, Outcome::Completed);
    assert_eq!(controller.extracted_info(), &ExtractedInfo::default());
    assert_eq!(controller.conversation().len(), 4);
    assert_eq!(
        controller.conversation()[3].content,
        "Let me think about that."
    );
}

#[tokio::test]
async fn test_profile_with_history_statistics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "email": "asha@example.com",
            "full_name": "Asha Rao",
            "is_active": true,
            "created_at": "2025-01-15T09:30:00"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"search_id": "S1", "search_params": common::search_params_json(), "timestamp": "2025-05-20T10:00:00", "result_count": 12}
        ])))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = ProfileController::new(backend(&server), notifier.clone());

    assert_eq!(controller.load_profile().await, Outcome::Completed);
    assert_eq!(controller.load_history().await, Outcome::Completed);

    let rendered = view::render_profile(
        controller.profile().expect("profile"),
        controller.total_searches(),
    );
    assert!(rendered.contains("Asha Rao"));
    assert!(rendered.contains("Total Searches: 1"));
    assert!(notifier.notices().is_empty());
}
