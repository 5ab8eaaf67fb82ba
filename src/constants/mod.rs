//! Page constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod animation;
mod scroll;
mod ui;

// Re-export all constants at the module level for easy glob imports
pub use animation::*;
pub use scroll::*;
pub use ui::*;
