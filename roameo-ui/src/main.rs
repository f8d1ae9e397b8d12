//! Roameo Planner
//!
//! Single-page travel planner built with Leptos (WASM).
//!
//! # Features
//!
//! - One prompt box, one request per submission
//! - Summary, events, flights, hotels and attractions as card grids
//! - Attractions map on OpenStreetMap tiles
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It posts prompts to the Roameo server's `/api/agent` and
//! renders the answer with the view models from the `roameo` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
