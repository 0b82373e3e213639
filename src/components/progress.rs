//! Progress Bar Component

use leptos::*;

/// Horizontal progress bar, value in percent
#[component]
pub fn ProgressBar(
    #[prop(into)]
    value: Signal<u32>,
    #[prop(default = "bg-blue-500")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="w-full bg-gray-200 rounded-full h-2">
            <div
                class=format!("{} rounded-full h-2 transition-all", color)
                style=move || format!("width: {}%", value.get().min(100))
            />
        </div>
    }
}
