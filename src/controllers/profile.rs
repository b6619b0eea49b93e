//! Profile page controller
//!
//! Loads the signed-in user's profile and their recent searches for the
//! account statistics panel.

use super::loading::LoadingFlag;
use super::Outcome;
use crate::api::types::{HistoryItem, UserProfile};
use crate::api::TravelApi;
use crate::notice::{Notice, Notifier};
use std::sync::Arc;

pub(crate) const PROFILE_FAILED: &str = "Error loading your profile. Please try again.";
pub(crate) const HISTORY_FAILED: &str = "Error loading search history. Please try again.";

/// Controller of the profile page
pub struct ProfileController {
    api: Arc<dyn TravelApi>,
    notifier: Arc<dyn Notifier>,
    profile: Option<UserProfile>,
    history: Vec<HistoryItem>,
    loading: LoadingFlag,
    history_loading: LoadingFlag,
}

impl ProfileController {
    pub fn new(api: Arc<dyn TravelApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            profile: None,
            history: Vec::new(),
            loading: LoadingFlag::new(),
            history_loading: LoadingFlag::new(),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Recent searches, oldest first as sent by the backend
    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn loading(&self) -> &LoadingFlag {
        &self.loading
    }

    pub fn history_loading(&self) -> &LoadingFlag {
        &self.history_loading
    }

    /// Number of searches shown in the account statistics
    pub fn total_searches(&self) -> usize {
        self.history.len()
    }

    /// Read the signed-in user's profile
    pub async fn load_profile(&mut self) -> Outcome {
        let _loading = self.loading.begin();

        match self.api.profile().await {
            Ok(profile) => {
                tracing::debug!(user_id = profile.id, "Profile loaded");
                self.profile = Some(profile);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Profile error");
                self.notifier.notify(Notice::Failure(PROFILE_FAILED.to_string()));
                Outcome::Failed
            }
        }
    }

    /// Fetch recent searches
    pub async fn load_history(&mut self) -> Outcome {
        let _loading = self.history_loading.begin();

        match self.api.search_history().await {
            Ok(history) => {
                tracing::debug!(count = history.len(), "History loaded");
                self.history = history;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "History error");
                self.notifier.notify(Notice::Failure(HISTORY_FAILED.to_string()));
                Outcome::Failed
            }
        }
    }
}
