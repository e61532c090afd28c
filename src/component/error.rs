//! Error types for widget operations

/// Errors that can occur while driving a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    /// A new action was triggered while the previous one is still running.
    #[error("action already in flight")]
    ActionInFlight,

    /// The card was configured without a close affordance.
    #[error("component cannot be hidden")]
    HideDisabled,
}
