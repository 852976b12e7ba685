//! # User Notifications
//!
//! Failed cart operations are reported to the user through a fire-and-forget
//! [`Notifier`]: one short, localized message per failure category. Nothing
//! is returned from the sink and nothing waits on it.

use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::warn;

/// Category of a user-visible failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Adding a product failed (catalog lookup, persistence, ...).
    AddFailed,
    /// Removing a product failed (typically: it was not in the cart).
    RemoveFailed,
    /// Changing a quantity failed for a reason other than stock.
    UpdateFailed,
    /// The requested quantity exceeds the available stock.
    OutOfStock,
}

impl Notice {
    pub fn message(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Notice::AddFailed) => "Could not add the product",
            (Locale::En, Notice::RemoveFailed) => "Could not remove the product",
            (Locale::En, Notice::UpdateFailed) => "Could not change the product quantity",
            (Locale::En, Notice::OutOfStock) => "Requested quantity is out of stock",
            (Locale::PtBr, Notice::AddFailed) => "Erro na adição do produto",
            (Locale::PtBr, Notice::RemoveFailed) => "Erro na remoção do produto",
            (Locale::PtBr, Notice::UpdateFailed) => "Erro na alteração de quantidade do produto",
            (Locale::PtBr, Notice::OutOfStock) => "Quantidade solicitada fora de estoque",
        }
    }
}

/// Language of notification messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown locale: {0} (expected `en` or `pt-BR`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "pt-br" | "pt" => Ok(Locale::PtBr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// One-way "display error message" sink.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Notifier that writes messages to the log, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        warn!(message, "User notification");
    }
}

/// Notifier that keeps every message, for tests and embedders that render
/// notifications themselves.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
