//! Section Component
//!
//! Title plus card grid; the attractions section also gets its map.

use leptos::*;
use roameo::render::{Section as SectionModel, SectionKind};

use super::card::Card;
use super::map::AttractionsMap;

#[component]
pub fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold text-gray-800 border-b border-gray-300 pb-2 mb-6">
            {title}
        </h2>
    }
}

#[component]
pub fn Section(section: SectionModel) -> impl IntoView {
    let grid_class = match section.kind {
        SectionKind::Flights => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
        SectionKind::Attractions => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-6",
        _ => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
    };

    view! {
        <section id=section.kind.label()>
            <SectionTitle title=section.title />

            {section.map.map(|map| view! { <AttractionsMap map=map /> })}

            <div class=grid_class>
                {section.cards.into_iter().map(|card| view! { <Card card=card /> }).collect_view()}
            </div>
        </section>
    }
}
