//! Error normalization for presentation
//!
//! Widgets never raise. Failures from host-driven operations are captured
//! as data and normalized here into a stable title/message pair that the
//! host can render in whatever alert or banner mechanism it owns.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Alert title used when an error carries no structured reason.
const FALLBACK_TITLE: &str = "Error";

/// Alert message used when an error carries no usable description.
const FALLBACK_MESSAGE: &str = "Please try again.";

/// Capability surface inspected when normalizing an error for display.
///
/// All accessors are optional and default to `None`; [`ErrorModel`]
/// dispatches on which ones return text. An empty string counts as text —
/// only `None` moves the dispatch to the next tier.
pub trait PresentableError: fmt::Debug + Send + Sync {
    /// Structured failure reason, shown as the alert title.
    fn failure_reason(&self) -> Option<String> {
        None
    }

    /// Structured failure description, shown as the alert message.
    fn error_description(&self) -> Option<String> {
        None
    }

    /// Generic single-line description for errors without structured text.
    fn localized_description(&self) -> Option<String> {
        None
    }
}

/// Shared handle to an error captured for presentation.
///
/// Carried by [`LoadingState::Failure`](crate::state::LoadingState) and by
/// every widget that holds a failure for the user to see.
pub type DynError = Arc<dyn PresentableError>;

/// Captures any standard error for presentation.
///
/// The error's `Display` output becomes its generic description, so it
/// normalizes with the default "Error" title.
pub fn capture<E>(error: E) -> DynError
where
    E: StdError + Send + Sync + 'static,
{
    Arc::new(Captured(error))
}

/// Captures an [`anyhow::Error`] coming out of host application code.
pub fn capture_anyhow(error: anyhow::Error) -> DynError {
    Arc::new(CapturedAnyhow(error))
}

#[derive(Debug)]
struct Captured<E>(E);

impl<E> PresentableError for Captured<E>
where
    E: StdError + Send + Sync,
{
    fn localized_description(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

#[derive(Debug)]
struct CapturedAnyhow(anyhow::Error);

impl PresentableError for CapturedAnyhow {
    fn localized_description(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Default error for the rare case where nothing presentable was captured.
/// There should be none of these if we can help it.
#[derive(Debug, Clone, Copy, Default, thiserror::Error)]
#[error("Please try again.")]
pub struct UnknownError;

impl PresentableError for UnknownError {
    fn failure_reason(&self) -> Option<String> {
        Some(FALLBACK_TITLE.to_string())
    }

    fn error_description(&self) -> Option<String> {
        Some(FALLBACK_MESSAGE.to_string())
    }
}

/// Model used to parse and process errors of all types.
///
/// Derived fresh on every presentation pass from whatever error is
/// currently bound, and discarded after producing its two strings. The
/// derivation is total: every input, however malformed, resolves to a
/// non-empty title and message suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorModel {
    /// Alert title.
    pub title: String,
    /// Alert message.
    pub message: String,
}

impl ErrorModel {
    /// Normalizes an optional error into a displayable title/message pair.
    ///
    /// Dispatch order: structured reason/description fields first, then the
    /// generic description, then the canonical unknown-error text.
    pub fn new(error: Option<&dyn PresentableError>) -> Self {
        let Some(error) = error else {
            return Self::unknown();
        };

        let reason = error.failure_reason();
        let description = error.error_description();
        if reason.is_some() || description.is_some() {
            return Self {
                title: reason.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
                message: description.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            };
        }

        match error.localized_description() {
            Some(message) => Self::from_message(message),
            None => {
                log::warn!("presenting unknown-error fallback for {error:?}");
                Self::unknown()
            }
        }
    }

    /// Model for a custom display message, without declaring an error type.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            message: message.into(),
        }
    }

    /// A single line error description.
    pub fn description(&self) -> String {
        if self.title.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n{}", self.title, self.message)
        }
    }

    fn unknown() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            message: FALLBACK_MESSAGE.to_string(),
        }
    }
}
