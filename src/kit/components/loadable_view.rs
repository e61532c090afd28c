// Loadable-state container for LumenKit

use crate::component::{Callback, Component, ComponentError};
use crate::error::ErrorModel;
use crate::state::LoadingState;

/// What the host should render for the container's current state.
///
/// Exactly one section is produced per pass.
#[derive(Debug)]
pub enum LoadableSection<'a, T> {
    /// The operation is still running; render the spinner.
    Loading,
    /// Render the produced value.
    Content(&'a T),
    /// A value arrived but there is nothing in it to show; render the
    /// empty-content title with the retry button.
    Empty,
    /// The operation failed; render the model with the retry button.
    Failure(ErrorModel),
}

/// Container that maps a [`LoadingState`] to state-dependent UI and
/// forwards retries to the caller.
///
/// The container never drives the operation itself: the caller replaces
/// the bound state on every transition and re-reads [`section`] each
/// render pass.
///
/// [`section`]: LoadableView::section
#[derive(Debug)]
pub struct LoadableView<T> {
    state: LoadingState<T>,
    empty_content_title: String,
    retry_action_title: String,
    empty_when: Option<fn(&T) -> bool>,
    on_retry: Callback<()>,
}

/// Props for [`LoadableView`].
#[derive(Debug)]
pub struct LoadableViewProps<T> {
    /// Current state of the host-driven operation.
    pub state: LoadingState<T>,
    /// Title shown when content is present but empty.
    pub empty_content_title: Option<String>,
    /// Title of the retry button.
    pub retry_action_title: Option<String>,
    /// Emptiness predicate for the content value. Without one, content is
    /// always rendered as-is.
    pub empty_when: Option<fn(&T) -> bool>,
    /// Caller-supplied retry action, invoked from the empty and failure
    /// sections.
    pub on_retry: Callback<()>,
}

impl<T> Component for LoadableView<T> {
    type Props = LoadableViewProps<T>;

    fn create(props: Self::Props) -> Self {
        Self {
            state: props.state,
            empty_content_title: props
                .empty_content_title
                .unwrap_or_else(|| "No Results".to_string()),
            retry_action_title: props
                .retry_action_title
                .unwrap_or_else(|| "Retry?".to_string()),
            empty_when: props.empty_when,
            on_retry: props.on_retry,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.state = props.state;
        if let Some(title) = props.empty_content_title {
            self.empty_content_title = title;
        }
        if let Some(title) = props.retry_action_title {
            self.retry_action_title = title;
        }
        self.empty_when = props.empty_when;
        self.on_retry = props.on_retry;
        Ok(())
    }
}

impl<T> LoadableView<T> {
    /// The section the host should render for the current state.
    pub fn section(&self) -> LoadableSection<'_, T> {
        match &self.state {
            LoadingState::Loading => LoadableSection::Loading,
            LoadingState::Content(value) => {
                if self.empty_when.is_some_and(|is_empty| is_empty(value)) {
                    LoadableSection::Empty
                } else {
                    LoadableSection::Content(value)
                }
            }
            LoadingState::Failure(error) => {
                LoadableSection::Failure(ErrorModel::new(Some(error.as_ref())))
            }
        }
    }

    /// Invokes the caller's retry action.
    pub fn retry(&self) {
        self.on_retry.call(());
    }

    /// Replaces the bound state; the caller owns all transitions.
    pub fn set_state(&mut self, state: LoadingState<T>) {
        self.state = state;
    }

    /// The currently bound state.
    pub fn state(&self) -> &LoadingState<T> {
        &self.state
    }

    /// Title shown when content is present but empty.
    pub fn empty_content_title(&self) -> &str {
        &self.empty_content_title
    }

    /// Title of the retry button.
    pub fn retry_action_title(&self) -> &str {
        &self.retry_action_title
    }
}
