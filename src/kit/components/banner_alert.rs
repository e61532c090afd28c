// Banner alert for LumenKit

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentError};

/// Severity of a banner alert.
///
/// Semantic only; the icon and color it maps to belong to the host theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerStyle {
    /// Time sensitive; the user should act on it immediately.
    #[default]
    Critical,
    /// Positive outcome.
    Success,
    /// Worth knowing, lower priority.
    Passive,
}

/// Inline alert styled as a banner, bound to an optional message.
///
/// The banner is visible exactly while a message is bound; the close
/// affordance clears it.
#[derive(Debug, Default)]
pub struct BannerAlert {
    /// Severity the host styles the banner with.
    pub style: BannerStyle,
    text: Option<String>,
}

/// Props for [`BannerAlert`].
#[derive(Debug, Clone)]
pub struct BannerAlertProps {
    /// Severity the host styles the banner with.
    pub style: Option<BannerStyle>,
}

impl Component for BannerAlert {
    type Props = BannerAlertProps;

    fn create(props: Self::Props) -> Self {
        Self {
            style: props.style.unwrap_or_default(),
            text: None,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.style = props.style.unwrap_or(self.style);
        Ok(())
    }
}

impl BannerAlert {
    /// Banner with the given severity and no message bound.
    pub fn new(style: BannerStyle) -> Self {
        Self {
            style,
            text: None,
        }
    }

    /// Binds a message, making the banner visible.
    pub fn present(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Clears the message in response to the close action.
    pub fn dismiss(&mut self) {
        self.text = None;
    }

    /// True while a message is bound.
    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }

    /// The bound message, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
