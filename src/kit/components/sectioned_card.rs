// Sectioned card for LumenKit

use crate::component::{Component, ComponentError};

/// Headered, dismissable container around arbitrary content.
///
/// The content is whatever the host composes into the card; this widget
/// only owns the header and the hide state.
#[derive(Debug)]
pub struct SectionedCard<C> {
    /// Header line, rendered uppercase by the host.
    pub header: String,
    /// Whether the card offers a close affordance.
    pub can_hide: bool,
    content: C,
    hidden: bool,
}

/// Props for [`SectionedCard`].
#[derive(Debug, Clone)]
pub struct SectionedCardProps<C> {
    /// Header line, rendered uppercase by the host.
    pub header: String,
    /// Whether the card offers a close affordance.
    pub can_hide: Option<bool>,
    /// Content composed into the card.
    pub content: C,
}

impl<C> Component for SectionedCard<C> {
    type Props = SectionedCardProps<C>;

    fn create(props: Self::Props) -> Self {
        Self {
            header: props.header,
            can_hide: props.can_hide.unwrap_or(true),
            content: props.content,
            hidden: false,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.header = props.header;
        self.can_hide = props.can_hide.unwrap_or(self.can_hide);
        self.content = props.content;
        Ok(())
    }
}

impl<C> SectionedCard<C> {
    /// The composed content, for the host to render under the header.
    pub fn content(&self) -> &C {
        &self.content
    }

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
