//! Loading Component
//!
//! Placeholder shown while the newest request is in flight.

use leptos::*;

/// Skeleton for the summary panel
#[component]
pub fn SummarySkeleton() -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-2xl shadow border border-gray-100 animate-pulse">
            <div class="h-6 bg-gray-200 rounded w-1/4 mb-6" />
            <div class="h-4 bg-gray-200 rounded w-3/4 mb-2" />
            <div class="h-4 bg-gray-200 rounded w-full mb-2" />
            <div class="h-4 bg-gray-200 rounded w-5/6" />
        </div>
    }
}
