//! goto-marker - searchable bookmark picker dialog
//!
//! This crate provides the core types and logic for a marker-jump dialog
//! implementing the Elm Architecture pattern: a filterable list of
//! bookmarked lines in a host document, with navigate/delete actions.
//! The GUI shell (view + runtime) lives in the binary.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PickerConfig;
pub use host::{DocumentHandle, EditorHost, MemoryHost};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
