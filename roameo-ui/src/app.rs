//! App Root Component
//!
//! Provides the planner state and renders the single page.

use leptos::*;

use crate::pages::Planner;
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-gray-50 px-6 py-16">
            <main class="w-full px-6 space-y-14">
                <h1 class="text-4xl font-bold text-center text-blue-700">
                    "🧠 This is Roameo"
                </h1>

                <Planner />
            </main>
        </div>
    }
}
