// Core module of the Lumen UI component kit
pub mod component;
pub mod error;
pub mod state;

pub mod kit;

/// Version of the Lumen component kit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{callback, Callback, Component, ComponentError};
    pub use crate::error::{
        capture, capture_anyhow, DynError, ErrorModel, PresentableError, UnknownError,
    };
    pub use crate::kit::components::action_button::{
        async_action, ActionButton, AsyncAction, ButtonLabel, ButtonRole,
    };
    pub use crate::kit::components::banner_alert::{BannerAlert, BannerStyle};
    pub use crate::kit::components::error_alert::ErrorAlert;
    pub use crate::kit::components::loadable_view::{
        LoadableSection, LoadableView, LoadableViewProps,
    };
    pub use crate::kit::components::notice_card::NoticeCard;
    pub use crate::kit::components::sectioned_card::SectionedCard;
    pub use crate::state::LoadingState;
}
