//! Global Application State
//!
//! Reactive state management using Leptos signals. One explicit state
//! object is provided through context with a clear lifecycle: created on
//! load, updated by auth and fetch events, cleared on logout.

use leptos::*;

use super::auth::AuthState;
use super::dashboard::{Activity, DailyProblem, ProgressSummary, Student};
use super::section::Section;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Authentication gate
    pub auth: AuthState,
    /// Section currently rendered by the shell
    pub active_section: RwSignal<Section>,
    /// Mobile sidebar overlay
    pub sidebar_open: RwSignal<bool>,
    /// Dashboard slice: student profile
    pub student: RwSignal<Option<Student>>,
    /// Dashboard slice: aggregated progress
    pub progress: RwSignal<Option<ProgressSummary>>,
    /// Dashboard slice: recent activities
    pub activities: RwSignal<Vec<Activity>>,
    /// Dashboard slice: today's problem
    pub today_problem: RwSignal<Option<DailyProblem>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        auth: AuthState::new(),
        active_section: create_rw_signal(Section::Dashboard),
        sidebar_open: create_rw_signal(false),
        student: create_rw_signal(None),
        progress: create_rw_signal(None),
        activities: create_rw_signal(Vec::new()),
        today_problem: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Navigate to a section and close the mobile sidebar
    pub fn navigate(&self, section: Section) {
        self.active_section.set(section);
        self.sidebar_open.set(false);
    }

    /// Drop everything tied to the session. Called on logout.
    pub fn clear(&self) {
        self.student.set(None);
        self.progress.set(None);
        self.activities.set(Vec::new());
        self.today_problem.set(None);
        self.active_section.set(Section::Dashboard);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
