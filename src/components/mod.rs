//! UI Components
//!
//! Reusable Leptos components shared across sections.

pub mod loading;
pub mod nav;
pub mod progress;
pub mod stat_card;
pub mod toast;

pub use loading::Loading;
pub use nav::{Header, MobileSidebar, Sidebar};
pub use progress::ProgressBar;
pub use stat_card::StatCard;
pub use toast::Toast;
