//! Planner Page
//!
//! Prompt box on top, then trip header, summary, sections and error for the
//! current result.

use leptos::*;

use crate::components::{
    ErrorBanner, PromptInput, Section, Summary, SummarySkeleton, TripBanner,
};
use crate::state::use_global_state;

#[component]
pub fn Planner() -> impl IntoView {
    let state = use_global_state();
    let dashboard = state.dashboard();
    let loading = state.loading();

    view! {
        <PromptInput />

        <Show when=move || loading.get()>
            <SummarySkeleton />
        </Show>

        {move || {
            let dashboard = dashboard.get();

            view! {
                {dashboard.trip.map(|trip| view! { <TripBanner trip=trip /> })}

                {dashboard.summary.map(|text| view! { <Summary text=text /> })}

                {dashboard
                    .sections
                    .into_iter()
                    .map(|section| view! { <Section section=section /> })
                    .collect_view()}

                {dashboard.error.map(|message| view! { <ErrorBanner message=message /> })}
            }
        }}
    }
}
