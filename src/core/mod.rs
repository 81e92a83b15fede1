// src/core/mod.rs
pub mod config;
pub mod settings;
pub mod state;

pub use config::Config;
pub use settings::{FileSettingsStore, MemorySettingsStore, Settings, SettingsStore, Theme};
pub use state::GeneratorState;
