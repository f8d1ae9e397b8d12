//! UI Components
//!
//! Leptos components for the planner page.

pub mod card;
pub mod loading;
pub mod map;
pub mod prompt;
pub mod section;
pub mod summary;

pub use loading::SummarySkeleton;
pub use prompt::PromptInput;
pub use section::Section;
pub use summary::{ErrorBanner, Summary, TripBanner};
