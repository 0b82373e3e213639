//! State Management
//!
//! Global application state plus the pure session models behind the
//! teaching flow, tutor chat and dashboard aggregation.

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod gamification;
pub mod global;
pub mod section;
pub mod stage;

pub use global::{provide_global_state, GlobalState};
pub use section::Section;
