//! Stat Card Component
//!
//! Small dashboard card with a title, a headline value and an optional
//! progress bar or caption.

use leptos::*;

use super::progress::ProgressBar;

/// Dashboard stat card
#[component]
pub fn StatCard(
    title: &'static str,
    icon: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional, into)]
    progress: Option<Signal<u32>>,
    #[prop(optional, into)]
    caption: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-white border rounded-lg p-4">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium text-gray-700">{title}</span>
                <span class="text-gray-400">{icon}</span>
            </div>
            <div class="text-2xl font-bold">
                {move || value.get()}
            </div>
            {progress.map(|p| view! {
                <div class="mt-2">
                    <ProgressBar value=p />
                </div>
            })}
            {caption.map(|c| view! {
                <p class="text-xs text-gray-500 mt-2">{move || c.get()}</p>
            })}
        </div>
    }
}
