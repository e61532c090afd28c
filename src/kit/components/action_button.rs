// Async action button for LumenKit

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::component::{Callback, Component, ComponentError};
use crate::error::DynError;
use crate::kit::components::error_alert::ErrorAlert;

/// Type-erased fallible async action.
pub type AsyncAction = Callback<(), BoxFuture<'static, Result<(), DynError>>>;

/// Wraps an async closure into an [`AsyncAction`].
pub fn async_action<F, Fut>(action: F) -> AsyncAction
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<(), DynError>> + Send + 'static,
{
    Callback::new(move |()| action().boxed())
}

/// Semantic role of a button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonRole {
    /// The action deletes something or otherwise cannot be undone.
    Destructive,
    /// The action abandons the current flow.
    Cancel,
}

/// Label content of an action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonLabel {
    /// Text-only label.
    Text(String),
    /// Text with a named icon asset.
    Labeled {
        /// Label text.
        title: String,
        /// Icon asset name, resolved by the host.
        icon: String,
    },
}

/// Button that runs a fallible async action, tracking the in-flight flag
/// and capturing any failure for alert presentation.
///
/// The drive is two-phase so the host owns scheduling: [`trigger`] marks
/// the button busy and hands back the action's future, [`finish`] applies
/// the outcome. Hosts that await inline can use [`run`] instead. While an
/// action is in flight the button is disabled and the host should render
/// its spinner in place of the label.
///
/// [`trigger`]: ActionButton::trigger
/// [`finish`]: ActionButton::finish
/// [`run`]: ActionButton::run
#[derive(Debug)]
pub struct ActionButton {
    label: ButtonLabel,
    role: Option<ButtonRole>,
    action: AsyncAction,
    performing: bool,
    alert: ErrorAlert,
}

/// Props for [`ActionButton`].
#[derive(Debug)]
pub struct ActionButtonProps {
    /// Label content of the button.
    pub label: ButtonLabel,
    /// Semantic role of the action. `None` if no specific role.
    pub role: Option<ButtonRole>,
    /// The action to run on trigger.
    pub action: AsyncAction,
}

impl Component for ActionButton {
    type Props = ActionButtonProps;

    fn create(props: Self::Props) -> Self {
        Self {
            label: props.label,
            role: props.role,
            action: props.action,
            performing: false,
            alert: ErrorAlert::new(),
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.label = props.label;
        self.role = props.role;
        self.action = props.action;
        Ok(())
    }
}

impl ActionButton {
    /// Text-only button.
    pub fn text(title: impl Into<String>, action: AsyncAction) -> Self {
        Self::create(ActionButtonProps {
            label: ButtonLabel::Text(title.into()),
            role: None,
            action,
        })
    }

    /// Button with text and a named icon asset.
    pub fn with_icon(
        title: impl Into<String>,
        icon: impl Into<String>,
        action: AsyncAction,
    ) -> Self {
        Self::create(ActionButtonProps {
            label: ButtonLabel::Labeled {
                title: title.into(),
                icon: icon.into(),
            },
            role: None,
            action,
        })
    }

    /// Assigns a semantic role to the action.
    pub fn with_role(mut self, role: ButtonRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Starts the configured action, marking the button busy.
    ///
    /// Returns the action's future for the host to schedule; the outcome
    /// must be reported back through [`finish`](ActionButton::finish).
    /// A trigger while an action is already in flight is rejected rather
    /// than queued.
    pub fn trigger(&mut self) -> Result<BoxFuture<'static, Result<(), DynError>>, ComponentError> {
        if self.performing {
            return Err(ComponentError::ActionInFlight);
        }
        self.performing = true;
        Ok(self.action.call(()))
    }

    /// Applies the outcome of a triggered action.
    ///
    /// Clears the in-flight flag; a failure is bound to the button's alert
    /// for presentation.
    pub fn finish(&mut self, result: Result<(), DynError>) {
        self.performing = false;
        if let Err(error) = result {
            log::debug!("action failed: {error:?}");
            self.alert.present(error);
        }
    }

    /// Drives a full trigger/finish cycle inline.
    pub async fn run(&mut self) -> Result<(), ComponentError> {
        let action = self.trigger()?;
        let result = action.await;
        self.finish(result);
        Ok(())
    }

    /// True while the action is running.
    pub fn is_performing(&self) -> bool {
        self.performing
    }

    /// The button is disabled for the whole in-flight window.
    pub fn is_disabled(&self) -> bool {
        self.performing
    }

    /// Label content of the button.
    pub fn label(&self) -> &ButtonLabel {
        &self.label
    }

    /// Semantic role of the action, if any.
    pub fn role(&self) -> Option<ButtonRole> {
        self.role
    }

    /// Alert presenting the most recent failure, if any.
    pub fn alert(&self) -> &ErrorAlert {
        &self.alert
    }

    /// Mutable alert access, used by the host to dismiss.
    pub fn alert_mut(&mut self) -> &mut ErrorAlert {
        &mut self.alert
    }
}
