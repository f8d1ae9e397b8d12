//! API Routes
//!
//! Route handlers organized by functionality.

pub mod agent;
pub mod health;
