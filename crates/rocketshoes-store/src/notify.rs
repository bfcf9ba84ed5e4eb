//! # Notification Channel
//!
//! The sink for user-facing messages, decoupled from the cart logic.
//!
//! ## Why a Trait?
//! The storefront UI surfaces these as toast messages; tests record them and
//! assert on their content. The store only ever sees the trait, so failure
//! reporting has no dependency on any UI toolkit.
//!
//! ## Delivery Semantics
//! Fire-and-forget: no return value, no retry. A notification that is lost
//! (e.g. `NoOpNotifier`) is lost silently.

use tracing::{error, info};

// =============================================================================
// Severity
// =============================================================================

/// How prominently the UI should surface a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message (neutral toast).
    Info,

    /// Failure the user should see (error toast).
    Error,
}

// =============================================================================
// Notifier Trait
// =============================================================================

/// Sink for user-facing cart messages (implemented by the UI layer).
pub trait CartNotifier: Send + Sync {
    /// Delivers a message. Fire-and-forget.
    fn notify(&self, severity: Severity, message: &str);
}

/// No-op notifier for embedders that surface cart state some other way.
pub struct NoOpNotifier;

impl CartNotifier for NoOpNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}

/// Notifier that writes messages to the tracing log.
///
/// The default for headless embedding; real storefronts plug in their toast
/// implementation instead.
pub struct TracingNotifier;

impl CartNotifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!(target: "rocketshoes::notify", "{message}"),
            Severity::Error => error!(target: "rocketshoes::notify", "{message}"),
        }
    }
}
