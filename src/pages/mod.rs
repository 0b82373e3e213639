//! Pages
//!
//! Top-level components for each section of the app.

pub mod auth_form;
pub mod dashboard;
pub mod gamification;
pub mod hero;
pub mod mathematics;
pub mod problem;
pub mod science;
pub mod singapore;
pub mod tutor_chat;

pub use auth_form::AuthForm;
pub use dashboard::Dashboard;
pub use gamification::Gamification;
pub use hero::Hero;
pub use mathematics::Mathematics;
pub use problem::Problem;
pub use science::Science;
pub use singapore::Singapore;
pub use tutor_chat::TutorChat;
