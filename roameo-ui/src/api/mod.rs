//! Server API
//!
//! HTTP calls from the browser to the Roameo server.

pub mod client;

pub use client::fetch_plan;
