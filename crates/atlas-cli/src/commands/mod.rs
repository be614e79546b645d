//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `catalog` - Catalog commands (countries, classify, map export)
//! - `explore` - Session commands (insights, explore)

pub mod catalog;
pub mod explore;

// Re-export command functions for main.rs
pub use catalog::*;
pub use explore::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
