//! Prompt Input Component
//!
//! Text box and Plan button. The prompt is never cleared.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn PromptInput() -> impl IntoView {
    let state = use_global_state();
    let prompt = state.prompt;
    let loading = state.loading();

    let submit_state = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_state.submit();
    };

    view! {
        <div class="flex justify-center">
            <form on:submit=on_submit class="w-full max-w-3xl space-y-6">
                <div class="flex flex-col sm:flex-row gap-6 items-stretch">
                    <input
                        type="text"
                        placeholder="e.g. I want to visit Chicago on May 7"
                        class="border border-gray-300 rounded-lg p-4 flex-1 shadow-sm focus:ring focus:ring-blue-200 w-full"
                        prop:value=move || prompt.get()
                        on:input=move |ev| prompt.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-4 rounded-lg shadow w-full sm:w-auto font-semibold"
                    >
                        {move || if loading.get() { "Planning..." } else { "Plan" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
