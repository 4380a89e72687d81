//! Per-row actions and their lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Row action kinds. Together with the row key they address one busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    SendCredentials,
    GenerateCertificate,
    SendCertificate,
    UpdateLead,
    ToggleCoupon,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::SendCredentials => "Send mail",
            ActionKind::GenerateCertificate => "Generate",
            ActionKind::SendCertificate => "Send certificate",
            ActionKind::UpdateLead => "Update",
            ActionKind::ToggleCoupon => "Toggle",
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            ActionKind::SendCredentials => "Sending...",
            ActionKind::GenerateCertificate => "Generating...",
            ActionKind::SendCertificate => "Sending...",
            ActionKind::UpdateLead => "Updating...",
            ActionKind::ToggleCoupon => "Updating...",
        }
    }

    /// Toast text when the request fails without a server message.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ActionKind::SendCredentials => "Failed to send password",
            ActionKind::GenerateCertificate => "Failed to generate certificate",
            ActionKind::SendCertificate => "Failed to send certificate",
            ActionKind::UpdateLead => "Failed to update lead",
            ActionKind::ToggleCoupon => "Failed to update coupon status",
        }
    }
}

/// Состояние асинхронного действия
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> ActionState<T> {
    /// Idle / finished -> Pending. Returns false if already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = ActionState::Pending;
        true
    }

    /// Pending -> Succeeded / Failed. Ignored unless pending.
    pub fn finish(&mut self, result: Result<T, String>) {
        if !self.is_pending() {
            return;
        }
        *self = match result {
            Ok(value) => ActionState::Succeeded(value),
            Err(message) => ActionState::Failed(message),
        };
    }

    pub fn reset(&mut self) {
        *self = ActionState::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ActionState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ActionState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

/// Cancellation token for a mounted page. Responses arriving after
/// `cancel()` are dropped by their handlers.
#[derive(Debug, Clone)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_state_transitions() {
        let mut state: ActionState<String> = ActionState::default();
        assert_eq!(state, ActionState::Idle);

        // finish without begin is ignored
        state.finish(Ok("ignored".into()));
        assert_eq!(state, ActionState::Idle);

        assert!(state.begin());
        assert!(state.is_pending());
        assert!(!state.begin());

        state.finish(Ok("https://cdn.example.com/cert.pdf".into()));
        assert_eq!(state.value().map(String::as_str), Some("https://cdn.example.com/cert.pdf"));

        assert!(state.begin());
        state.finish(Err("Failed to generate certificate".into()));
        assert_eq!(state.error(), Some("Failed to generate certificate"));

        state.reset();
        assert_eq!(state, ActionState::Idle);
    }

    #[test]
    fn test_lifetime_cancel_is_shared() {
        let lifetime = Lifetime::new();
        let handle = lifetime.clone();
        assert!(handle.is_active());
        lifetime.cancel();
        assert!(!handle.is_active());
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(ActionKind::SendCredentials.failure_message(), "Failed to send password");
        assert_eq!(ActionKind::GenerateCertificate.pending_label(), "Generating...");
    }
}
