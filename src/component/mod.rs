//! Component model for the Lumen UI kit
//!
//! Every kit widget shares the same minimal contract: it is constructed
//! from a props struct and absorbs prop updates in place. Internal widget
//! state (hidden flags, in-flight flags, captured errors) survives
//! updates. Rendering belongs to the host shell, which reads the widget's
//! accessors each pass.

mod callback;
mod error;

#[cfg(test)]
mod tests;

pub use callback::{callback, Callback};
pub use error::ComponentError;

/// Common contract for kit widgets.
pub trait Component: Sized {
    /// Props the widget is configured with.
    type Props;

    /// Creates the widget from its props.
    fn create(props: Self::Props) -> Self;

    /// Absorbs a prop update in place, keeping internal widget state.
    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError>;
}
