//! Navigation Components
//!
//! Desktop sidebar, mobile overlay sidebar and the header bar. Section
//! switching is plain state: no URLs, no history.

use leptos::*;

use crate::state::section::SECTIONS;
use crate::state::GlobalState;

/// Desktop sidebar, hidden on small screens
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <aside class="hidden sm:flex flex-col w-60 bg-gray-100 border-r">
            <div class="p-4 text-xl font-bold">"Curió 🐦"</div>
            <nav class="flex-1 overflow-y-auto">
                <SectionLinks />
            </nav>

            // Logged-in user at the base of the sidebar
            <div class="p-4 border-t text-sm">
                {move || {
                    state.auth.user.get().map(|user| view! {
                        <div>
                            <div class="font-semibold">{user.name}</div>
                            <div class="text-gray-500">{user.grade}</div>
                        </div>
                    })
                }}
                <button
                    on:click=move |_| {
                        state.auth.logout();
                        state.clear();
                    }
                    class="mt-2 text-gray-500 hover:text-gray-900 text-sm"
                >
                    "Sair"
                </button>
            </div>
        </aside>
    }
}

/// Mobile sidebar overlay, rendered only while open
#[component]
pub fn MobileSidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if state.sidebar_open.get() {
                view! {
                    <div class="fixed inset-0 z-40 sm:hidden flex">
                        // Translucent backdrop closes the panel
                        <div
                            class="absolute inset-0 bg-black/50"
                            on:click=move |_| state.sidebar_open.set(false)
                        />
                        <aside class="relative z-50 w-60 bg-gray-100 h-full shadow-xl">
                            <div class="flex items-center justify-between p-4">
                                <span class="text-xl font-bold">"Curió 🐦"</span>
                                <button on:click=move |_| state.sidebar_open.set(false)>
                                    "✕"
                                </button>
                            </div>
                            <SectionLinks />
                        </aside>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Header bar with the mobile sidebar toggle and the active section name
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <header class="flex items-center justify-between px-4 py-3 border-b bg-white">
            <button
                class="sm:hidden p-2"
                on:click=move |_| state.sidebar_open.update(|open| *open = !*open)
            >
                {move || if state.sidebar_open.get() { "✕" } else { "☰" }}
            </button>
            <h1 class="text-lg font-semibold">
                {move || state.active_section.get().label()}
            </h1>
            <div class="flex items-center space-x-2">
                <span class="hidden sm:inline text-sm text-gray-600">
                    {move || {
                        state.auth.user.get()
                            .map(|user| user.name)
                            .unwrap_or_default()
                    }}
                </span>
            </div>
        </header>
    }
}

/// One button per section, driven by the lookup table
#[component]
fn SectionLinks() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {SECTIONS.iter().map(|meta| {
            let section = meta.section;
            view! {
                <button
                    on:click=move |_| state.navigate(section)
                    class=move || {
                        let base = "flex items-center p-4 w-full text-left hover:bg-gray-200";
                        if state.active_section.get() == section {
                            format!("{} bg-gray-200 font-semibold", base)
                        } else {
                            base.to_string()
                        }
                    }
                >
                    <span class="mr-2">{meta.icon}</span>
                    {meta.label}
                </button>
            }
        }).collect_view()}
    }
}
