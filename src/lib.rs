//! Tripwise - Terminal travel planner library
//!
//! This library provides the client side of a travel agent backend:
//! a typed API contract, page controllers that own transient view state,
//! and terminal rendering of that state.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: Request/response types and the [`TravelApi`] contract
//! - `client`: JSON-over-HTTP transport used by the backend implementation
//! - `controllers`: Search, trip planner and profile page controllers
//! - `view`: Rendering of controller state for the terminal
//! - `notice`: User-facing success and failure notices
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tripwise::api::BackendApi;
//! use tripwise::controllers::SearchController;
//! use tripwise::notice::RecordingNotifier;
//! use tripwise::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let api = Arc::new(BackendApi::new(&config.api)?);
//!     let mut search = SearchController::new(api, Arc::new(RecordingNotifier::default()));
//!     // search.search(params).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod controllers;
pub mod error;
pub mod notice;
pub mod view;

// Re-export commonly used types
pub use api::{BackendApi, TravelApi};
pub use config::Config;
pub use controllers::{Outcome, PlannerController, ProfileController, SearchController};
pub use error::{ApiResult, Result, TransportError, TripwiseError};

#[cfg(test)]
pub mod test_utils;
