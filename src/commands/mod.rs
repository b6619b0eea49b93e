/*!
Command handlers for the CLI

Each handler builds the backend API from configuration, drives one page
controller and prints the resulting state through [`crate::view`]:

- `search`: flight search
- `booking`: autonomous search-and-book and manual booking
- `chat`: interactive trip planner
- `account`: search history and profile
- `health`: backend health check

A failed action has already been reported to the user by the controller's
notifier; handlers turn it into an error so the process exits non-zero.
*/

use crate::api::types::PassengerDetails;
use crate::api::{BackendApi, TravelApi};
use crate::cli::PassengerArgs;
use crate::config::Config;
use crate::error::{Result, TripwiseError};
use crate::notice::TerminalNotifier;
use std::sync::Arc;

// Special commands parser for the planner chat
pub mod special_commands;

fn backend(config: &Config) -> Result<Arc<dyn TravelApi>> {
    let api: Arc<dyn TravelApi> = Arc::new(BackendApi::new(&config.api)?);
    Ok(api)
}

fn notifier() -> Arc<TerminalNotifier> {
    Arc::new(TerminalNotifier)
}

/// Resolve passenger details from flags, falling back to configuration
///
/// # Errors
///
/// Returns a configuration error naming the missing flags when neither
/// source provides a complete passenger.
pub fn resolve_passenger(args: &PassengerArgs, config: &Config) -> Result<PassengerDetails> {
    args.resolve(config.passenger.as_ref()).ok_or_else(|| {
        TripwiseError::Config(
            "Passenger details are incomplete. Pass --first-name, --last-name, --email and \
             --phone or add a `passenger` section to the config file"
                .to_string(),
        )
        .into()
    })
}

// Flight search command handler
pub mod search {
    //! Flight search handler.

    use super::*;
    use crate::api::types::SearchParams;
    use crate::controllers::SearchController;
    use crate::view;

    /// Search flights and print the offers
    ///
    /// # Errors
    ///
    /// Returns error if the API cannot be built or the search fails
    pub async fn run_search(config: Config, params: SearchParams) -> Result<()> {
        let mut controller = SearchController::new(backend(&config)?, notifier());
        if !controller.search(params).await.is_completed() {
            anyhow::bail!("Flight search failed");
        }

        if let Some(response) = controller.search_response() {
            print!("{}", view::render_search(response));
        }
        Ok(())
    }
}

// Booking command handlers
pub mod booking {
    //! Autonomous search-and-book and manual booking handlers.

    use super::*;
    use crate::api::types::{BookingRequest, SearchParams};
    use crate::controllers::SearchController;
    use crate::view;

    /// Let the backend agent search, pick and book a flight
    ///
    /// # Errors
    ///
    /// Returns error if passenger details are incomplete or the booking fails
    pub async fn run_autobook(
        config: Config,
        params: SearchParams,
        passenger: PassengerArgs,
    ) -> Result<()> {
        let passenger = resolve_passenger(&passenger, &config)?;
        let mut controller = SearchController::new(backend(&config)?, notifier());
        if !controller
            .search_and_book(params, passenger)
            .await
            .is_completed()
        {
            anyhow::bail!("Autonomous booking failed");
        }

        if let Some(response) = controller.autonomous_response() {
            print!("{}", view::render_autonomous(response));
        }
        Ok(())
    }

    /// Book a flight by id
    ///
    /// # Errors
    ///
    /// Returns error if passenger details are incomplete or the booking fails
    pub async fn run_book(config: Config, flight_id: String, passenger: PassengerArgs) -> Result<()> {
        let passenger_details = resolve_passenger(&passenger, &config)?;

        let mut controller = SearchController::new(backend(&config)?, notifier());
        let request = BookingRequest {
            flight_id,
            passenger_details,
        };
        if !controller.book(request).await.is_completed() {
            anyhow::bail!("Booking failed");
        }

        if let Some(booking) = controller.booking_status() {
            print!("{}", view::render_booking(booking));
        }
        Ok(())
    }
}

// Chat command handler
pub mod chat {
    //! Interactive trip planner.
    //!
    //! Runs a readline loop that sends each line to the planner chat and
    //! handles the special commands listed in [`special_commands`].

    use super::special_commands::{parse_special_command, print_help, SpecialCommand};
    use super::*;
    use crate::api::types::ExtractedInfo;
    use crate::controllers::{PlannerController, PlannerEvent};
    use crate::view;
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start the interactive trip planner
    ///
    /// # Errors
    ///
    /// Returns error if the API or the line editor cannot be created
    pub async fn run_chat(config: Config) -> Result<()> {
        let mut controller = PlannerController::new(backend(&config)?, notifier());
        let mut rl = DefaultEditor::new()?;

        println!("{}", "Tripwise Trip Planner".bold());
        println!("Type '/help' for commands, 'exit' to leave.\n");
        print!("{}", view::render_conversation(controller.conversation()));

        loop {
            match rl.readline(&format!("{} ", "You>".blue().bold())) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(trimmed)?;

                    let command = match parse_special_command(trimmed) {
                        Ok(command) => command,
                        Err(e) => {
                            eprintln!("{}", e.to_string().red());
                            continue;
                        }
                    };

                    match command {
                        SpecialCommand::Exit => break,
                        SpecialCommand::Help => print_help(),
                        SpecialCommand::ShowStatus => print_status(&controller),
                        SpecialCommand::NewConversation => {
                            controller.dispatch(PlannerEvent::StartNewConversation).await;
                            print!("{}", view::render_conversation(controller.conversation()));
                        }
                        SpecialCommand::GeneratePlan => {
                            println!("{}", "Generating your travel plan...".dimmed());
                            let outcome = controller.dispatch(PlannerEvent::GeneratePlan).await;
                            if let Some(reply) = controller.conversation().last() {
                                println!("{}", view::render_message(reply));
                            }
                            if outcome.is_completed() {
                                if let Some(plan) = controller.plan() {
                                    print!("\n{}", view::render_plan(plan));
                                }
                            }
                        }
                        SpecialCommand::BookPlan => match resolve_passenger(
                            &PassengerArgs::default(),
                            &config,
                        ) {
                            Ok(passenger) => {
                                if controller
                                    .dispatch(PlannerEvent::BookPlan(passenger))
                                    .await
                                    .is_completed()
                                {
                                    if let Some(booking) = controller.plan_booking() {
                                        print!("{}", view::render_plan_booking(booking));
                                    }
                                }
                            }
                            Err(e) => eprintln!("{}", e.to_string().red()),
                        },
                        SpecialCommand::None => {
                            let outcome = controller
                                .dispatch(PlannerEvent::SendMessage(trimmed.to_string()))
                                .await;
                            if let Some(reply) = controller.conversation().last() {
                                println!("{}", view::render_message(reply));
                            }
                            if outcome.is_completed()
                                && controller.is_ready_to_plan()
                                && controller.plan().is_none()
                            {
                                println!(
                                    "{}",
                                    "I have enough details. Type /plan to generate your travel plan."
                                        .yellow()
                                );
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Happy travels!");
        Ok(())
    }

    fn print_status(controller: &PlannerController) {
        println!("\n{}", "Trip Details".bold());
        for line in extracted_lines(controller.extracted_info()) {
            println!("  {}", line);
        }
        println!("  Messages:       {}", controller.conversation().len());
        println!(
            "  Ready to plan:  {}",
            if controller.is_ready_to_plan() { "yes" } else { "no" }
        );
        println!(
            "  Plan:           {}",
            if controller.plan().is_some() { "generated" } else { "none" }
        );
        println!();
    }

    pub(crate) fn extracted_lines(info: &ExtractedInfo) -> Vec<String> {
        let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        vec![
            format!("Destination:    {}", or_dash(info.destination.clone())),
            format!("Origin:         {}", or_dash(info.origin.clone())),
            format!("Days:           {}", or_dash(info.days.map(|d| d.to_string()))),
            format!(
                "Budget:         {}",
                or_dash(info.budget.map(|b| format!("₹{}", view::format_amount(b))))
            ),
            format!(
                "Interests:      {}",
                or_dash(info.interests.as_ref().map(|i| i.join(", ")))
            ),
            format!("Departure date: {}", or_dash(info.departure_date.clone())),
            format!(
                "Passengers:     {}",
                or_dash(info.passengers.map(|p| p.to_string()))
            ),
        ]
    }

}

// History and profile command handlers
pub mod account {
    //! Search history and profile handlers.

    use super::*;
    use crate::controllers::ProfileController;
    use crate::view;

    /// Print recent searches
    ///
    /// # Errors
    ///
    /// Returns error if the history cannot be loaded
    pub async fn run_history(config: Config) -> Result<()> {
        let mut controller = ProfileController::new(backend(&config)?, notifier());
        if !controller.load_history().await.is_completed() {
            anyhow::bail!("Loading search history failed");
        }

        if controller.history().is_empty() {
            println!("No searches yet.");
        } else {
            view::history_table(controller.history()).printstd();
        }
        Ok(())
    }

    /// Print the signed-in user's profile with account statistics
    ///
    /// # Errors
    ///
    /// Returns error if the profile cannot be loaded
    pub async fn run_profile(config: Config) -> Result<()> {
        let mut controller = ProfileController::new(backend(&config)?, notifier());
        if !controller.load_profile().await.is_completed() {
            anyhow::bail!("Loading profile failed");
        }
        let _ = controller.load_history().await;

        if let Some(profile) = controller.profile() {
            print!(
                "{}",
                view::render_profile(profile, controller.total_searches())
            );
        }
        Ok(())
    }
}

// Health command handler
pub mod health {
    //! Backend health check.

    use super::*;
    use crate::view;

    /// Query the backend health endpoint
    ///
    /// # Errors
    ///
    /// Returns the transport error when the backend is unreachable or unhealthy
    pub async fn run_health(config: Config) -> Result<()> {
        let api = backend(&config)?;
        let health = api.health().await.map_err(TripwiseError::from)?;
        println!("{}", view::render_health(&health));
        Ok(())
    }
}
