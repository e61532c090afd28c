// LumenKit widget module organization

// State-dependent containers
pub mod loadable_view;

// Input widgets
pub mod action_button;

// Notices and cards
pub mod banner_alert;
pub mod notice_card;
pub mod sectioned_card;

// Alert presentation
pub mod error_alert;


// Re-export commonly used widgets
pub use action_button::ActionButton;
pub use banner_alert::BannerAlert;
pub use error_alert::ErrorAlert;
pub use loadable_view::LoadableView;
pub use notice_card::NoticeCard;
pub use sectioned_card::SectionedCard;
