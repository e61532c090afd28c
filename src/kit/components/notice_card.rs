// Notice card for LumenKit

use crate::component::{Component, ComponentError};

/// Dismissable notice with a header line, headline, and supporting text.
///
/// A hidden card renders nothing; hiding is user-driven through the close
/// affordance and survives prop updates.
#[derive(Debug)]
pub struct NoticeCard {
    /// Header line, rendered uppercase by the host.
    pub header: String,
    /// Named icon asset, if any.
    pub icon: Option<String>,
    /// Primary line of the notice.
    pub headline: String,
    /// Supporting line of the notice.
    pub subheadline: String,
    /// Small print under the notice, if any.
    pub footnote: Option<String>,
    /// Whether the card offers a close affordance.
    pub can_hide: bool,
    hidden: bool,
}

/// Props for [`NoticeCard`].
#[derive(Debug, Clone)]
pub struct NoticeCardProps {
    /// Header line, rendered uppercase by the host.
    pub header: String,
    /// Named icon asset, if any.
    pub icon: Option<String>,
    /// Primary line of the notice.
    pub headline: String,
    /// Supporting line of the notice.
    pub subheadline: String,
    /// Small print under the notice, if any.
    pub footnote: Option<String>,
    /// Whether the card offers a close affordance.
    pub can_hide: Option<bool>,
}

impl Component for NoticeCard {
    type Props = NoticeCardProps;

    fn create(props: Self::Props) -> Self {
        Self {
            header: props.header,
            icon: props.icon,
            headline: props.headline,
            subheadline: props.subheadline,
            footnote: props.footnote,
            can_hide: props.can_hide.unwrap_or(true),
            hidden: false,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.header = props.header;
        self.icon = props.icon;
        self.headline = props.headline;
        self.subheadline = props.subheadline;
        self.footnote = props.footnote;
        self.can_hide = props.can_hide.unwrap_or(self.can_hide);
        Ok(())
    }
}

impl NoticeCard {
    /// Hides the card in response to the close action.
    pub fn hide(&mut self) -> Result<(), ComponentError> {
        if !self.can_hide {
            return Err(ComponentError::HideDisabled);
        }
        self.hidden = true;
        Ok(())
    }

    /// True once the user closed the card.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
