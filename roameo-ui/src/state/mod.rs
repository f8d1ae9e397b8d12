//! State Management
//!
//! The planner panel's prompt and session, shared through context.

pub mod global;

pub use global::{provide_global_state, use_global_state};
