//! App Root Component
//!
//! Global providers, the authentication gate and the section shell.

use leptos::*;

use crate::components::{Header, MobileSidebar, Sidebar, Toast};
use crate::pages::{
    AuthForm, Dashboard, Gamification, Hero, Mathematics, Problem, Science, Singapore, TutorChat,
};
use crate::state::auth::AuthPhase;
use crate::state::{provide_global_state, GlobalState, Section};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Resolve the stored token before rendering anything session-bound
    state.auth.init();

    view! {
        {move || {
            match state.auth.phase.get() {
                AuthPhase::Loading => view! {
                    <div class="min-h-screen flex items-center justify-center">
                        <div class="text-center">
                            <div class="loading-spinner w-8 h-8 mx-auto mb-4" />
                            <p>"Carregando..."</p>
                        </div>
                    </div>
                }.into_view(),
                AuthPhase::Unauthenticated => view! { <AuthForm /> }.into_view(),
                AuthPhase::Authenticated => view! { <Shell /> }.into_view(),
            }
        }}
    }
}

/// Authenticated shell: sidebar, header and the active section
#[component]
fn Shell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex h-screen bg-gray-50">
            <Sidebar />
            <MobileSidebar />

            <main class="flex-1 flex flex-col overflow-y-auto">
                <Header />

                <div class="flex-1 p-4 overflow-y-auto">
                    {move || {
                        match state.active_section.get() {
                            Section::Hero => view! { <Hero /> }.into_view(),
                            Section::Dashboard => view! { <Dashboard /> }.into_view(),
                            Section::Singapore => view! { <Singapore /> }.into_view(),
                            Section::Problem => view! { <Problem /> }.into_view(),
                            Section::Tutor => view! { <TutorChat /> }.into_view(),
                            Section::Gamification => view! { <Gamification /> }.into_view(),
                            Section::Mathematics => view! { <Mathematics /> }.into_view(),
                            Section::Science => view! { <Science /> }.into_view(),
                        }
                    }}
                </div>
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
