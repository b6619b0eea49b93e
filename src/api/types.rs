//! Request and response types of the travel agent backend
//!
//! Field names follow the backend's JSON contract exactly. Types that the
//! client sends back to the backend after receiving them (extracted trip
//! info, travel plans) keep unknown fields so nothing is lost in transit.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One-way or round trip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

/// Cabin class preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

/// Flight search form contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Departure city or airport code
    pub origin: String,
    /// Arrival city or airport code
    pub destination: String,
    /// Departure date, serialized as `YYYY-MM-DD`
    pub departure_date: NaiveDate,
    /// Return date for round trips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    /// Number of passengers
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub trip_type: TripType,
    #[serde(default)]
    pub cabin_class: CabinClass,
}

fn default_passengers() -> u32 {
    1
}

/// Passenger contact details as entered in the booking forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// A single flight offer returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: String,
    pub airline: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub stops: u32,
    #[serde(default)]
    pub cabin_class: String,
    pub currency: String,
    pub price: f64,
}

/// One step of the backend agent's reasoning trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentThought {
    pub step: u32,
    pub thought: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Response of a manual flight search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search_id: String,
    #[serde(default)]
    pub status: String,
    pub message: String,
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub thoughts: Vec<AgentThought>,
    #[serde(default)]
    pub search_params: Value,
}

/// Body of `POST /api/search-and-book`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutonomousBookingRequest {
    pub search_params: SearchParams,
    pub passenger_details: PassengerDetails,
}

/// Outcome of a booking call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResult {
    pub booking_id: String,
    #[serde(default)]
    pub confirmation_code: Option<String>,
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl BookingResult {
    /// Confirmation code for display, `-` when the backend sent none
    pub fn confirmation(&self) -> &str {
        self.confirmation_code.as_deref().unwrap_or("-")
    }
}

/// Response of the autonomous search-and-book flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutonomousBookingResponse {
    #[serde(default)]
    pub search_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub thoughts: Vec<AgentThought>,
    pub all_flights: Vec<Flight>,
    pub selected_flight: Flight,
    pub selection_reason: String,
    pub booking_result: BookingResult,
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /api/book`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub flight_id: String,
    pub passenger_details: PassengerDetails,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    #[serde(alias = "ai")]
    Assistant,
}

/// One entry of the planner conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Message typed by the user, stamped now
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Message from the assistant, stamped now
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Trip details the backend has inferred from the conversation so far
///
/// The backend fills these in from free text, so a field whose value does
/// not have the expected shape is left untyped in `extra` instead of failing
/// the whole reply. It still goes back to the backend on the next turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ExtractedInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passengers: Option<u32>,
    /// Fields this client does not interpret, echoed back on the next turn
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for ExtractedInfo {
    fn from(mut extra: Map<String, Value>) -> Self {
        Self {
            destination: take_typed(&mut extra, "destination"),
            origin: take_typed(&mut extra, "origin"),
            budget: take_amount(&mut extra, "budget"),
            days: take_count(&mut extra, "days"),
            interests: take_typed(&mut extra, "interests"),
            departure_date: take_typed(&mut extra, "departure_date"),
            passengers: take_count(&mut extra, "passengers"),
            extra,
        }
    }
}

/// Remove `key` from `map` and decode it as `T`
///
/// `null` is dropped. A value that does not decode is put back untouched.
fn take_with<T>(
    map: &mut Map<String, Value>,
    key: &str,
    decode: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let raw = map.remove(key)?;
    if raw.is_null() {
        return None;
    }
    let decoded = decode(&raw);
    if decoded.is_none() {
        map.insert(key.to_string(), raw);
    }
    decoded
}

fn take_typed<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    take_with(map, key, |raw| T::deserialize(raw).ok())
}

/// Amounts arrive as numbers or as plain numeric strings
fn take_amount(map: &mut Map<String, Value>, key: &str) -> Option<f64> {
    take_with(map, key, |raw| match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Counts are accepted as integers or as whole floats such as `4.0`
fn take_count(map: &mut Map<String, Value>, key: &str) -> Option<u32> {
    take_with(map, key, |raw| {
        let n = raw.as_f64()?;
        (n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n)).then_some(n as u32)
    })
}

/// `null` or a non-object `extracted_info` reads as empty
fn lenient_extracted_info<'de, D>(deserializer: D) -> Result<ExtractedInfo, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => ExtractedInfo::from(map),
        Some(other) => {
            tracing::debug!(value = %other, "Ignoring malformed extracted_info");
            ExtractedInfo::default()
        }
        None => ExtractedInfo::default(),
    })
}

/// Body of a chat turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<ChatMessage>,
    pub extracted_info: ExtractedInfo,
}

/// Backend reply to a chat turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    #[serde(default, deserialize_with = "lenient_extracted_info")]
    pub extracted_info: ExtractedInfo,
    #[serde(default)]
    pub is_ready_to_plan: bool,
}

/// Origin assumed when the conversation never mentioned one
pub const DEFAULT_ORIGIN: &str = "Delhi";

/// Body of the travel plan creation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    pub passengers: u32,
}

impl From<&ExtractedInfo> for TripRequest {
    fn from(info: &ExtractedInfo) -> Self {
        Self {
            destination: info.destination.clone(),
            origin: info
                .origin
                .clone()
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            budget: info.budget,
            days: info.days,
            interests: info.interests.clone().unwrap_or_default(),
            departure_date: info.departure_date.clone(),
            passengers: info.passengers.filter(|p| *p > 0).unwrap_or(1),
        }
    }
}

/// Itinerary bundle generated by the backend
///
/// Only the fields the terminal view shows are typed; the full object is
/// sent back untouched when the plan is booked. A `total_cost` that is not
/// a number stays in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct TravelPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for TravelPlan {
    fn from(mut extra: Map<String, Value>) -> Self {
        Self {
            destination: take_typed(&mut extra, "destination"),
            flight: take_typed(&mut extra, "flight"),
            hotel: take_typed(&mut extra, "hotel"),
            itinerary: take_typed(&mut extra, "itinerary"),
            total_cost: take_amount(&mut extra, "total_cost"),
            extra,
        }
    }
}

/// Body of the complete plan booking call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBookingRequest {
    pub plan: TravelPlan,
    pub passenger_details: PassengerDetails,
}

/// Result of booking a complete travel plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBookingResponse {
    pub flight_booking: BookingResult,
    pub hotel_booking: BookingResult,
    pub total_cost: f64,
}

/// One past search as recorded by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub search_id: String,
    #[serde(default)]
    pub search_params: Value,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub result_count: u32,
}

/// Liveness payload of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Signed-in user as returned by the profile read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}
