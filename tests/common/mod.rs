use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tripwise::config::ApiConfig;

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

#[allow(dead_code)]
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn search_params_json() -> Value {
    json!({
        "origin": "DEL",
        "destination": "BOM",
        "departure_date": "2025-06-01",
        "passengers": 1,
        "trip_type": "one_way",
        "cabin_class": "economy"
    })
}

#[allow(dead_code)]
pub fn passenger_json() -> Value {
    json!({
        "firstName": "Asha",
        "lastName": "Rao",
        "email": "asha@example.com",
        "phone": "+91 98000 00000"
    })
}

#[allow(dead_code)]
pub fn flight_json(id: &str, airline: &str, number: &str, price: f64) -> Value {
    json!({
        "flight_id": id,
        "airline": airline,
        "flight_number": number,
        "origin": "DEL",
        "destination": "BOM",
        "departure_time": "2025-06-01T06:00:00",
        "arrival_time": "2025-06-01T08:10:00",
        "duration": "2h 10m",
        "stops": 0,
        "cabin_class": "economy",
        "price": price,
        "currency": "INR"
    })
}

#[allow(dead_code)]
pub fn search_response_json() -> Value {
    json!({
        "search_id": "S1",
        "status": "success",
        "message": "Found 1 flights",
        "flights": [flight_json("F1", "X", "X-100", 5000.0)],
        "thoughts": [
            {"step": 1, "thought": "Searching DEL to BOM", "action": "search", "timestamp": "2025-05-20T10:00:00"}
        ],
        "search_params": search_params_json()
    })
}

#[allow(dead_code)]
pub fn booking_json(code: &str) -> Value {
    json!({
        "booking_id": format!("B-{}", code),
        "confirmation_code": code,
        "status": "confirmed",
        "message": "Booking confirmed"
    })
}

#[allow(dead_code)]
pub fn autonomous_response_json() -> Value {
    json!({
        "search_id": "S2",
        "status": "success",
        "thoughts": [
            {"step": 1, "thought": "Picked cheapest non-stop", "action": "select", "timestamp": "2025-05-20T10:00:00"}
        ],
        "all_flights": [
            flight_json("F2", "IndiGo", "6E-201", 4200.0),
            flight_json("F3", "Vistara", "UK-995", 6100.0)
        ],
        "selected_flight": flight_json("F2", "IndiGo", "6E-201", 4200.0),
        "selection_reason": "Cheapest non-stop option",
        "booking_result": booking_json("AUTO42"),
        "message": "Booked"
    })
}

#[allow(dead_code)]
pub fn chat_response_json(message: &str, ready: bool) -> Value {
    json!({
        "message": message,
        "extracted_info": {"destination": "Goa", "days": 4, "budget": 40000.0},
        "is_ready_to_plan": ready
    })
}

#[allow(dead_code)]
pub fn plan_json() -> Value {
    json!({
        "destination": "Goa",
        "flight": {"airline": "IndiGo", "flight_number": "6E-501"},
        "hotel": {"name": "Sea View Resort"},
        "itinerary": [{"day": 1, "activities": ["Baga Beach"]}],
        "total_cost": 52000.0,
        "weather": "sunny"
    })
}

#[allow(dead_code)]
pub fn plan_booking_json() -> Value {
    json!({
        "flight_booking": booking_json("FL123"),
        "hotel_booking": booking_json("HT456"),
        "total_cost": 52000.0
    })
}
