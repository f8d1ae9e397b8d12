//! Summary and error panels

use leptos::*;
use roameo::render::TripHeader;

use super::section::SectionTitle;

/// Destination and date line; renders nothing when both are missing
#[component]
pub fn TripBanner(trip: TripHeader) -> impl IntoView {
    let label = trip.label();
    (!label.is_empty()).then(|| {
        view! {
            <p class="text-center text-sm uppercase tracking-wide text-blue-600">{label}</p>
        }
    })
}

#[component]
pub fn Summary(text: String) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-2xl shadow border border-gray-100 whitespace-pre-wrap">
            <SectionTitle title="📝 Plan Summary" />
            <p class="text-gray-700 text-lg">{text}</p>
        </div>
    }
}

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="text-red-500 bg-white p-4 rounded shadow border text-center">
            "Error: " {message}
        </div>
    }
}
