//! User-facing notices
//!
//! Controllers report the outcome of an action through a [`Notifier`]
//! instead of printing directly. The terminal front end uses
//! [`TerminalNotifier`]; embedders that render notices themselves can
//! collect them with [`RecordingNotifier`].

use colored::Colorize;
use std::sync::Mutex;

/// A message shown to the user once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An action completed
    Success(String),
    /// An action failed; the text is generic, details go to the log
    Failure(String),
}

impl Notice {
    /// Text of the notice
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    /// Whether this notice reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Sink for user-facing notices
pub trait Notifier: Send + Sync {
    /// Present a notice to the user
    fn notify(&self, notice: Notice);
}

/// Prints notices to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(text) => println!("\n{}\n", text.green().bold()),
            Notice::Failure(text) => eprintln!("\n{}\n", text.red().bold()),
        }
    }
}

/// Keeps every notice in order of arrival
///
/// # Examples
///
/// ```
/// use tripwise::notice::{Notice, Notifier, RecordingNotifier};
///
/// let notifier = RecordingNotifier::default();
/// notifier.notify(Notice::Failure("Error booking flight. Please try again.".to_string()));
/// assert_eq!(notifier.failures().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// All notices received so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Failure notices received so far
    pub fn failures(&self) -> Vec<Notice> {
        self.notices()
            .into_iter()
            .filter(Notice::is_failure)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
