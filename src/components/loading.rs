//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading(
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-2">
            <div class="loading-spinner w-8 h-8" />
            {label.map(|text| view! { <span class="text-gray-600">{text}</span> })}
        </div>
    }
}

/// Skeleton loader for stat cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white border rounded-lg p-4 animate-pulse">
            <div class="h-4 bg-gray-200 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-200 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-200 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 rounded h-12" />
            }).collect_view()}
        </div>
    }
}

/// Skeleton grid matching the dashboard layout
#[component]
pub fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-6 animate-pulse">
            <div class="h-8 bg-gray-200 rounded w-64" />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="h-48 bg-gray-200 rounded" />
                <div class="h-48 bg-gray-200 rounded" />
            </div>
        </div>
    }
}
