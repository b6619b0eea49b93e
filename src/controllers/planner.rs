//! Chat trip planner controller
//!
//! Holds the planner conversation, the trip details the backend has
//! extracted from it, the generated plan and its booking. The conversation
//! log is append-only for the lifetime of a session; only
//! [`PlannerController::start_new_conversation`] empties it.

use super::loading::LoadingFlag;
use super::Outcome;
use crate::api::types::{
    ChatMessage, ChatRequest, ExtractedInfo, PassengerDetails, PlanBookingRequest,
    PlanBookingResponse, TravelPlan, TripRequest,
};
use crate::api::TravelApi;
use crate::notice::{Notice, Notifier};
use crate::view::format_amount;
use std::sync::Arc;

pub(crate) const CHAT_FAILED: &str = "Sorry, I encountered an error. Please try again.";
pub(crate) const PLAN_FAILED: &str = "Sorry, I couldn't generate your travel plan. Please try again.";
pub(crate) const PLAN_READY: &str =
    "Your personalized travel plan is ready! Scroll down to see all the details.";
pub(crate) const PLAN_BOOKING_FAILED: &str = "Error booking your travel plan. Please try again.";
pub(crate) const NO_PLAN: &str = "There is no travel plan to book yet. Generate one first.";

/// Greeting shown above an empty conversation
pub const GREETING: &str = "Hi! I'm your AI travel assistant. Tell me where you'd like to travel and I'll help you plan the perfect trip!";

/// User actions raised by the chat view and plan display
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerEvent {
    /// Message typed into the chat box
    SendMessage(String),
    /// "Generate plan" pressed
    GeneratePlan,
    /// Plan booking form submitted
    BookPlan(PassengerDetails),
    /// "Start new conversation" pressed
    StartNewConversation,
}

/// Controller of the chat-driven trip planner
pub struct PlannerController {
    api: Arc<dyn TravelApi>,
    notifier: Arc<dyn Notifier>,
    conversation: Vec<ChatMessage>,
    extracted_info: ExtractedInfo,
    ready_to_plan: bool,
    plan: Option<TravelPlan>,
    plan_booking: Option<PlanBookingResponse>,
    chat_loading: LoadingFlag,
    plan_loading: LoadingFlag,
    booking_loading: LoadingFlag,
}

impl PlannerController {
    /// Create a controller with an empty conversation
    pub fn new(api: Arc<dyn TravelApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            conversation: Vec::new(),
            extracted_info: ExtractedInfo::default(),
            ready_to_plan: false,
            plan: None,
            plan_booking: None,
            chat_loading: LoadingFlag::new(),
            plan_loading: LoadingFlag::new(),
            booking_loading: LoadingFlag::new(),
        }
    }

    /// Conversation so far, oldest first
    pub fn conversation(&self) -> &[ChatMessage] {
        &self.conversation
    }

    /// Trip details extracted by the backend on the last successful turn
    pub fn extracted_info(&self) -> &ExtractedInfo {
        &self.extracted_info
    }

    /// Backend's advice on whether enough is known to generate a plan
    ///
    /// This only decides whether the view offers plan generation;
    /// [`generate_plan`](Self::generate_plan) does not check it.
    pub fn is_ready_to_plan(&self) -> bool {
        self.ready_to_plan
    }

    /// Generated plan, if any
    pub fn plan(&self) -> Option<&TravelPlan> {
        self.plan.as_ref()
    }

    /// Booking of the generated plan, if any
    pub fn plan_booking(&self) -> Option<&PlanBookingResponse> {
        self.plan_booking.as_ref()
    }

    pub fn chat_loading(&self) -> &LoadingFlag {
        &self.chat_loading
    }

    pub fn plan_loading(&self) -> &LoadingFlag {
        &self.plan_loading
    }

    pub fn booking_loading(&self) -> &LoadingFlag {
        &self.booking_loading
    }

    /// Whether the chat input should be disabled
    pub fn is_busy(&self) -> bool {
        self.chat_loading.is_set() || self.plan_loading.is_set() || self.booking_loading.is_set()
    }

    /// Route a UI event to the matching action
    pub async fn dispatch(&mut self, event: PlannerEvent) -> Outcome {
        match event {
            PlannerEvent::SendMessage(text) => self.send_message(text).await,
            PlannerEvent::GeneratePlan => self.generate_plan().await,
            PlannerEvent::BookPlan(passenger) => self.book_plan(passenger).await,
            PlannerEvent::StartNewConversation => {
                self.start_new_conversation();
                Outcome::Completed
            }
        }
    }

    /// Send one chat turn
    ///
    /// The request carries the conversation as it stood before this turn.
    /// A failed turn still leaves the user entry in the log, followed by an
    /// assistant error entry.
    pub async fn send_message(&mut self, text: impl Into<String>) -> Outcome {
        let text = text.into();
        let request = ChatRequest {
            message: text.clone(),
            conversation_history: self.conversation.clone(),
            extracted_info: self.extracted_info.clone(),
        };

        self.conversation.push(ChatMessage::user(text));
        let _loading = self.chat_loading.begin();

        match self.api.chat(&request).await {
            Ok(response) => {
                tracing::debug!(
                    ready_to_plan = response.is_ready_to_plan,
                    "Chat turn completed"
                );
                self.conversation.push(ChatMessage::assistant(response.message));
                self.extracted_info = response.extracted_info;
                self.ready_to_plan = response.is_ready_to_plan;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Chat error");
                self.conversation.push(ChatMessage::assistant(CHAT_FAILED));
                Outcome::Failed
            }
        }
    }

    /// Ask the backend for a travel plan built from the extracted trip info
    pub async fn generate_plan(&mut self) -> Outcome {
        let _loading = self.plan_loading.begin();
        let request = TripRequest::from(&self.extracted_info);

        tracing::info!(
            destination = request.destination.as_deref().unwrap_or("-"),
            origin = %request.origin,
            "Generating travel plan"
        );

        match self.api.create_travel_plan(&request).await {
            Ok(plan) => {
                self.plan = Some(plan);
                self.conversation.push(ChatMessage::assistant(PLAN_READY));
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Plan generation error");
                self.conversation.push(ChatMessage::assistant(PLAN_FAILED));
                Outcome::Failed
            }
        }
    }

    /// Book the flight and hotel of the generated plan
    pub async fn book_plan(&mut self, passenger: PassengerDetails) -> Outcome {
        let Some(plan) = self.plan.clone() else {
            tracing::warn!("Plan booking requested without a plan");
            self.notifier.notify(Notice::Failure(NO_PLAN.to_string()));
            return Outcome::Failed;
        };

        let _loading = self.booking_loading.begin();
        let request = PlanBookingRequest {
            plan,
            passenger_details: passenger,
        };

        match self.api.book_complete_plan(&request).await {
            Ok(response) => {
                let flight_code = response.flight_booking.confirmation().to_string();
                let hotel_code = response.hotel_booking.confirmation().to_string();

                self.notifier.notify(Notice::Success(format!(
                    "Booking Successful!\n\nFlight Confirmation: {}\nHotel Confirmation: {}\n\nTotal Cost: ₹{}\n\nCheck your email for details!",
                    flight_code,
                    hotel_code,
                    format_amount(response.total_cost)
                )));
                self.conversation.push(ChatMessage::assistant(format!(
                    "Perfect! Your complete travel plan has been booked successfully!\n\nConfirmation codes:\n- Flight: {}\n- Hotel: {}\n\nYou'll receive confirmation emails shortly. Have an amazing trip!",
                    flight_code, hotel_code
                )));
                self.plan_booking = Some(response);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Plan booking error");
                self.notifier
                    .notify(Notice::Failure(PLAN_BOOKING_FAILED.to_string()));
                Outcome::Failed
            }
        }
    }

    /// Forget the conversation and everything derived from it
    pub fn start_new_conversation(&mut self) {
        self.conversation.clear();
        self.extracted_info = ExtractedInfo::default();
        self.ready_to_plan = false;
        self.plan = None;
        self.plan_booking = None;
    }
}
