// LumenKit widget library

pub mod components;

/// Re-export of common widgets for convenience
pub mod prelude {
    pub use crate::kit::components::action_button::ActionButton;
    pub use crate::kit::components::banner_alert::{BannerAlert, BannerStyle};
    pub use crate::kit::components::error_alert::ErrorAlert;
    pub use crate::kit::components::loadable_view::{LoadableSection, LoadableView};
    pub use crate::kit::components::notice_card::NoticeCard;
    pub use crate::kit::components::sectioned_card::SectionedCard;
}
