//! Command-line interface definition for Tripwise
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for flight search, booking, trip planning chat,
//! search history, profile and backend health.

use crate::api::types::{CabinClass, PassengerDetails, SearchParams, TripType};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tripwise - AI travel planner in your terminal
///
/// Search flights, let the agent book the best option for you, or plan a
/// whole trip by chatting with the travel assistant.
#[derive(Parser, Debug, Clone)]
#[command(name = "tripwise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the backend base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Tripwise
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search for flights
    Search {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Search and let the agent book the best flight without confirmation
    Autobook {
        #[command(flatten)]
        search: SearchArgs,

        #[command(flatten)]
        passenger: PassengerArgs,
    },

    /// Book a flight from earlier search results
    Book {
        /// Identifier of the flight offer to book
        #[arg(long)]
        flight_id: String,

        #[command(flatten)]
        passenger: PassengerArgs,
    },

    /// Plan a trip by chatting with the travel assistant
    Chat,

    /// Show recent searches
    History,

    /// Show the signed-in user's profile
    Profile,

    /// Check that the backend is reachable
    Health,
}

/// Trip type as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripTypeArg {
    OneWay,
    RoundTrip,
}

impl From<TripTypeArg> for TripType {
    fn from(value: TripTypeArg) -> Self {
        match value {
            TripTypeArg::OneWay => TripType::OneWay,
            TripTypeArg::RoundTrip => TripType::RoundTrip,
        }
    }
}

/// Cabin class as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinArg {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl From<CabinArg> for CabinClass {
    fn from(value: CabinArg) -> Self {
        match value {
            CabinArg::Economy => CabinClass::Economy,
            CabinArg::PremiumEconomy => CabinClass::PremiumEconomy,
            CabinArg::Business => CabinClass::Business,
            CabinArg::First => CabinClass::First,
        }
    }
}

/// Flight search form
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Departure city or airport code
    #[arg(long)]
    pub origin: String,

    /// Arrival city or airport code
    #[arg(long)]
    pub destination: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long = "date")]
    pub departure_date: NaiveDate,

    /// Return date for round trips (YYYY-MM-DD)
    #[arg(long)]
    pub return_date: Option<NaiveDate>,

    /// Number of passengers
    #[arg(long, default_value_t = 1)]
    pub passengers: u32,

    /// Trip type
    #[arg(long, value_enum, default_value = "one-way")]
    pub trip_type: TripTypeArg,

    /// Cabin class
    #[arg(long = "cabin", value_enum, default_value = "economy")]
    pub cabin_class: CabinArg,
}

impl From<SearchArgs> for SearchParams {
    fn from(args: SearchArgs) -> Self {
        Self {
            origin: args.origin,
            destination: args.destination,
            departure_date: args.departure_date,
            return_date: args.return_date,
            passengers: args.passengers,
            trip_type: args.trip_type.into(),
            cabin_class: args.cabin_class.into(),
        }
    }
}

/// Passenger form; omitted fields come from the `passenger` config section
#[derive(Args, Debug, Clone, Default)]
pub struct PassengerArgs {
    /// Passenger first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Passenger last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,
}

impl PassengerArgs {
    /// Merge the flags over a configured default passenger
    ///
    /// Returns `None` when a field is missing from both sources.
    pub fn resolve(&self, fallback: Option<&PassengerDetails>) -> Option<PassengerDetails> {
        let pick = |flag: &Option<String>, default: Option<&String>| {
            flag.clone().or_else(|| default.cloned()).filter(|v| !v.is_empty())
        };

        Some(PassengerDetails {
            first_name: pick(&self.first_name, fallback.map(|p| &p.first_name))?,
            last_name: pick(&self.last_name, fallback.map(|p| &p.last_name))?,
            email: pick(&self.email, fallback.map(|p| &p.email))?,
            phone: pick(&self.phone, fallback.map(|p| &p.phone))?,
        })
    }
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            api_url: None,
            verbose: false,
            command: Commands::Health,
        }
    }
}
