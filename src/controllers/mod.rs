//! Page controllers
//!
//! Each controller owns the transient state of one page and turns user
//! actions into backend calls:
//!
//! - [`SearchController`]: flight search, autonomous booking and manual booking
//! - [`PlannerController`]: chat-driven trip planning and plan booking
//! - [`ProfileController`]: profile read and search history
//!
//! Controllers never retry and never surface transport errors to their
//! caller. They log the error, send one generic notice and leave their
//! state as it was before the request, minus anything the action cleared
//! up front.

pub mod loading;
pub mod planner;
pub mod profile;
pub mod search;

pub use loading::{LoadingFlag, LoadingGuard};
pub use planner::{PlannerController, PlannerEvent};
pub use profile::ProfileController;
pub use search::{ActiveResult, SearchController, SearchEvent};

/// How a user action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The backend answered and the state was updated
    Completed,
    /// The request failed and the user was notified
    Failed,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}
