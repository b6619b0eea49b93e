//! Terminal rendering of controller state
//!
//! Everything here is a pure function of the state it is given. Functions
//! return the rendered text so commands decide where it goes; the history
//! table is returned as a [`Table`] for `printstd`.

use crate::api::types::{
    AgentThought, AutonomousBookingResponse, BookingResult, ChatMessage, ChatRole, Flight,
    HealthStatus, HistoryItem, PlanBookingResponse, SearchResponse, TravelPlan, UserProfile,
};
use crate::controllers::planner::GREETING;
use colored::Colorize;
use prettytable::{format, row, Table};
use serde_json::Value;
use std::fmt::Write;

/// Other offers listed under an autonomous booking
pub const MAX_OTHER_FLIGHTS: usize = 5;

/// Format an amount with thousands grouping
///
/// At most three fractional digits are kept and trailing zeros are dropped,
/// so `5000.0` renders as `5,000` and `1234.5` as `1,234.5`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (whole != "0" || !fraction.is_empty());
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Human label for a stop count
pub fn stops_text(stops: u32) -> String {
    match stops {
        0 => "Non-stop".to_string(),
        1 => "1 Stop".to_string(),
        n => format!("{} Stops", n),
    }
}

/// Display time of a backend timestamp
///
/// Takes the `HH:MM` part of an ISO-8601 date-time and falls back to the
/// raw value when it does not parse.
pub fn clock_time(timestamp: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// One flight offer as shown in a result list
#[derive(Debug, Clone, PartialEq)]
pub struct FlightCard {
    pub title: String,
    pub route: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub stops: String,
    pub cabin: String,
    pub price: String,
}

impl From<&Flight> for FlightCard {
    fn from(flight: &Flight) -> Self {
        let title = if flight.flight_number.is_empty() {
            flight.airline.clone()
        } else {
            format!("{} {}", flight.airline, flight.flight_number)
        };
        Self {
            title,
            route: format!("{} → {}", flight.origin, flight.destination),
            departure: clock_time(&flight.departure_time),
            arrival: clock_time(&flight.arrival_time),
            duration: flight.duration.clone(),
            stops: stops_text(flight.stops),
            cabin: flight.cabin_class.clone(),
            price: format!("{} {}", flight.currency, format_amount(flight.price)),
        }
    }
}

impl FlightCard {
    /// Two-line rendering used in every flight list
    pub fn render(&self) -> String {
        let mut times = format!("{} - {}", self.departure, self.arrival);
        if !self.duration.is_empty() {
            times.push_str(&format!(" ({})", self.duration));
        }
        let mut details = vec![self.stops.clone()];
        if !self.cabin.is_empty() {
            details.push(self.cabin.clone());
        }
        format!(
            "{}  {}\n    {}  {}  {}",
            self.title.bold(),
            self.price.green().bold(),
            self.route,
            times,
            details.join(" · ")
        )
    }
}

/// Render the flights of a search
pub fn render_flight_list(flights: &[Flight]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Found {} flights", flights.len()).bold());
    for (i, flight) in flights.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, FlightCard::from(flight).render());
    }
    out
}

/// Render the agent's reasoning trace
pub fn render_thoughts(thoughts: &[AgentThought]) -> String {
    if thoughts.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{}", "AI Agent Reasoning".cyan().bold());
    for thought in thoughts {
        let action = if thought.action.is_empty() {
            String::new()
        } else {
            format!(" [{}]", thought.action).dimmed().to_string()
        };
        let _ = writeln!(out, "  {}. {}{}", thought.step, thought.thought, action);
    }
    out
}

/// Render a search response: reasoning trace followed by the offers
pub fn render_search(response: &SearchResponse) -> String {
    let mut out = render_thoughts(&response.thoughts);
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&render_flight_list(&response.flights));
    out
}

/// Render a booking confirmation
pub fn render_booking(booking: &BookingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Booking Confirmed".green().bold());
    let _ = writeln!(out, "  Booking ID:        {}", booking.booking_id);
    let _ = writeln!(out, "  Confirmation Code: {}", booking.confirmation());
    let _ = writeln!(out, "  Status:            {}", booking.status);
    if !booking.message.is_empty() {
        let _ = writeln!(out, "  {}", booking.message);
    }
    out
}

/// Render the result of an autonomous search-and-book
pub fn render_autonomous(response: &AutonomousBookingResponse) -> String {
    let mut out = render_thoughts(&response.thoughts);
    if !out.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(out, "{}", "Booked Flight".bold());
    let _ = writeln!(
        out,
        "    {}",
        FlightCard::from(&response.selected_flight).render()
    );
    let _ = writeln!(out, "{} {}", "AI Decision:".yellow().bold(), response.selection_reason);
    out.push('\n');
    out.push_str(&render_booking(&response.booking_result));

    let others: Vec<&Flight> = response
        .all_flights
        .iter()
        .filter(|f| f.flight_id != response.selected_flight.flight_id)
        .take(MAX_OTHER_FLIGHTS)
        .collect();
    if !others.is_empty() {
        let _ = writeln!(out, "\n{}", "Other Flights Considered".bold());
        for flight in others {
            let card = FlightCard::from(flight);
            let _ = writeln!(out, "  - {}  {}  {}", card.title, card.stops, card.price);
        }
    }
    out
}

/// Render the chat transcript, or the greeting when it is empty
pub fn render_conversation(conversation: &[ChatMessage]) -> String {
    if conversation.is_empty() {
        return format!("{} {}\n", "AI:".cyan().bold(), GREETING);
    }
    let mut out = String::new();
    for message in conversation {
        let _ = writeln!(out, "{}", render_message(message));
    }
    out
}

/// Render one chat message
pub fn render_message(message: &ChatMessage) -> String {
    match message.role {
        ChatRole::User => format!("{} {}", "You:".blue().bold(), message.content),
        ChatRole::Assistant => format!("{} {}", "AI:".cyan().bold(), message.content),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_f64()
            .map(format_amount)
            .unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn write_object(out: &mut String, value: &Value, indent: &str) {
    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                let _ = writeln!(out, "{}{}: {}", indent, key.replace('_', " "), value_text(field));
            }
        }
        other => {
            let _ = writeln!(out, "{}{}", indent, value_text(other));
        }
    }
}

/// Render a generated travel plan
pub fn render_plan(plan: &TravelPlan) -> String {
    let mut out = String::new();
    let title = match &plan.destination {
        Some(destination) => format!("Your Trip to {}", destination),
        None => "Your Travel Plan".to_string(),
    };
    let _ = writeln!(out, "{}", title.bold());

    if let Some(flight) = &plan.flight {
        let _ = writeln!(out, "\n{}", "Flight".cyan().bold());
        write_object(&mut out, flight, "  ");
    }
    if let Some(hotel) = &plan.hotel {
        let _ = writeln!(out, "\n{}", "Hotel".cyan().bold());
        write_object(&mut out, hotel, "  ");
    }
    if let Some(itinerary) = &plan.itinerary {
        let _ = writeln!(out, "\n{}", "Itinerary".cyan().bold());
        match itinerary {
            Value::Array(days) => {
                for (i, day) in days.iter().enumerate() {
                    let label = day
                        .get("day")
                        .map(value_text)
                        .unwrap_or_else(|| (i + 1).to_string());
                    let _ = writeln!(out, "  Day {}", label);
                    if let Value::Object(fields) = day {
                        for (key, field) in fields.iter().filter(|(k, _)| k.as_str() != "day") {
                            let _ = writeln!(
                                out,
                                "    {}: {}",
                                key.replace('_', " "),
                                value_text(field)
                            );
                        }
                    } else {
                        let _ = writeln!(out, "    {}", value_text(day));
                    }
                }
            }
            other => write_object(&mut out, other, "  "),
        }
    }
    if let Some(total) = plan.total_cost {
        let _ = writeln!(
            out,
            "\n{} {}",
            "Total Cost:".bold(),
            format!("₹{}", format_amount(total)).green().bold()
        );
    }
    out
}

/// Render the bookings made for a plan
pub fn render_plan_booking(booking: &PlanBookingResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Trip Booked Successfully".green().bold());
    let _ = writeln!(
        out,
        "  Flight: {} ({})",
        booking.flight_booking.confirmation(),
        booking.flight_booking.status
    );
    let _ = writeln!(
        out,
        "  Hotel:  {} ({})",
        booking.hotel_booking.confirmation(),
        booking.hotel_booking.status
    );
    let _ = writeln!(out, "  Total:  ₹{}", format_amount(booking.total_cost));
    out
}

fn route_of(params: &Value) -> String {
    let field = |name: &str| {
        params
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string()
    };
    format!("{} → {}", field("origin"), field("destination"))
}

/// Build the search history table
pub fn history_table(history: &[HistoryItem]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.set_titles(row!["Search ID", "Route", "Date", "Results"]);
    for item in history {
        let date = item
            .search_params
            .get("departure_date")
            .and_then(Value::as_str)
            .unwrap_or("-");
        table.add_row(row![
            item.search_id,
            route_of(&item.search_params),
            date,
            item.result_count
        ]);
    }
    table
}

/// Render the profile panel
pub fn render_profile(profile: &UserProfile, total_searches: usize) -> String {
    let member_since = chrono::NaiveDateTime::parse_from_str(&profile.created_at, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format("%B %Y").to_string())
        .unwrap_or_else(|_| profile.created_at.clone());
    let status = if profile.is_active {
        "Active".green().to_string()
    } else {
        "Inactive".red().to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.full_name.bold());
    let _ = writeln!(out, "  Email:          {}", profile.email);
    let _ = writeln!(out, "  Status:         {}", status);
    let _ = writeln!(out, "  Member Since:   {}", member_since);
    let _ = writeln!(out, "  Total Searches: {}", total_searches);
    out
}

/// Render a health check answer
pub fn render_health(health: &HealthStatus) -> String {
    let status = if health.status.eq_ignore_ascii_case("healthy") {
        health.status.green().bold()
    } else {
        health.status.yellow().bold()
    };
    if health.message.is_empty() {
        format!("Backend: {}", status)
    } else {
        format!("Backend: {} ({})", status, health.message)
    }
}
