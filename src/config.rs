//! Configuration management for Tripwise
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::api::types::PassengerDetails;
use crate::error::{Result, TripwiseError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Tripwise
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Default passenger used by booking commands when flags are omitted
    #[serde(default)]
    pub passenger: Option<PassengerDetails>,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the travel agent backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request (needed for the profile read)
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Routes whose paths are not fixed by the backend contract
    #[serde(default)]
    pub routes: RoutesConfig,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            routes: RoutesConfig::default(),
        }
    }
}

/// Configurable backend routes
///
/// Search, booking, history and health live at fixed paths. The chat,
/// planning and profile endpoints are deployment specific, so their
/// paths can be overridden here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutesConfig {
    /// Chat turn endpoint
    #[serde(default = "default_chat_route")]
    pub chat: String,

    /// Travel plan creation endpoint
    #[serde(default = "default_create_plan_route")]
    pub create_plan: String,

    /// Complete plan booking endpoint
    #[serde(default = "default_book_plan_route")]
    pub book_plan: String,

    /// Current user profile endpoint
    #[serde(default = "default_profile_route")]
    pub profile: String,
}

fn default_chat_route() -> String {
    "/api/chat".to_string()
}

fn default_create_plan_route() -> String {
    "/api/create-plan".to_string()
}

fn default_book_plan_route() -> String {
    "/api/book-plan".to_string()
}

fn default_profile_route() -> String {
    "/api/auth/me".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            chat: default_chat_route(),
            create_plan: default_create_plan_route(),
            book_plan: default_book_plan_route(),
            profile: default_profile_route(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TripwiseError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| TripwiseError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("TRIPWISE_API_URL") {
            tracing::debug!(base_url = %base_url, "Env override: TRIPWISE_API_URL");
            self.api.base_url = base_url;
        }

        if let Ok(token) = std::env::var("TRIPWISE_AUTH_TOKEN") {
            if token.is_empty() {
                self.api.auth_token = None;
            } else {
                tracing::debug!("Env override: TRIPWISE_AUTH_TOKEN");
                self.api.auth_token = Some(token);
            }
        }

        let routes = &mut self.api.routes;
        for (var, slot) in [
            ("TRIPWISE_CHAT_ROUTE", &mut routes.chat),
            ("TRIPWISE_PLAN_ROUTE", &mut routes.create_plan),
            ("TRIPWISE_BOOK_PLAN_ROUTE", &mut routes.book_plan),
            ("TRIPWISE_PROFILE_ROUTE", &mut routes.profile),
        ] {
            if let Ok(value) = std::env::var(var) {
                tracing::debug!(route = %value, "Env override: {}", var);
                *slot = value;
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(api_url) = &cli.api_url {
            self.api.base_url = api_url.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url).map_err(|e| {
            TripwiseError::Config(format!(
                "Invalid api.base_url '{}': {}",
                self.api.base_url, e
            ))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(TripwiseError::Config(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            ))
            .into());
        }

        let routes = &self.api.routes;
        for (name, route) in [
            ("chat", &routes.chat),
            ("create_plan", &routes.create_plan),
            ("book_plan", &routes.book_plan),
            ("profile", &routes.profile),
        ] {
            if !route.starts_with('/') {
                return Err(TripwiseError::Config(format!(
                    "api.routes.{} must start with '/', got '{}'",
                    name, route
                ))
                .into());
            }
        }

        if let Some(token) = &self.api.auth_token {
            if token.trim().is_empty() {
                return Err(
                    TripwiseError::Config("api.auth_token cannot be blank".to_string()).into(),
                );
            }
        }

        Ok(())
    }
}
