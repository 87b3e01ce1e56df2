//! Skirmish Services Layer
//!
//! Platform-facing services the game reads at startup and writes back on
//! change: the player's preference store and the game configuration tree.

pub mod game_config;
pub mod settings;
pub mod store;

pub use game_config::{AdvancedPreference, GameConfig, GameConfigError};
pub use store::{PreferenceStore, StoreError};
