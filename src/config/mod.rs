//! Configuration module for the pair tracker.

mod api;
mod persistence;
mod theme;

// Re-export commonly used items
pub use api::{DEXSCREENER, DexScreenerConfig};
pub use persistence::PERSISTENCE;
pub use theme::Theme;
