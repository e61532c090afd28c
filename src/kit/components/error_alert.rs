// Error alert presentation for LumenKit

use std::future::Future;

use crate::error::{DynError, ErrorModel};

/// Presentation model binding an optional error to the host's alert
/// mechanism.
///
/// The alert is presented exactly while an error is bound; dismissing
/// unbinds it. The displayable model is derived fresh on every call from
/// whatever error is currently bound, so presenting a different error
/// needs no further bookkeeping.
#[derive(Debug, Default)]
pub struct ErrorAlert {
    error: Option<DynError>,
}

impl ErrorAlert {
    /// Alert with no error bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an error, presenting the alert.
    pub fn present(&mut self, error: DynError) {
        self.error = Some(error);
    }

    /// True while an error is bound.
    pub fn is_presented(&self) -> bool {
        self.error.is_some()
    }

    /// The bound error, if any.
    pub fn error(&self) -> Option<&DynError> {
        self.error.as_ref()
    }

    /// Unbinds the error, dismissing the alert.
    pub fn dismiss(&mut self) {
        self.error = None;
    }

    /// The model making the bound error readable.
    pub fn model(&self) -> ErrorModel {
        ErrorModel::new(self.error.as_deref())
    }

    /// Runs a fallible async task, binding any failure for presentation.
    ///
    /// The success path leaves the alert untouched.
    pub async fn capture<F>(&mut self, task: F)
    where
        F: Future<Output = Result<(), DynError>>,
    {
        if let Err(error) = task.await {
            self.present(error);
        }
    }
}
