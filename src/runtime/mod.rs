//! Window runtime - event loop, input routing, command execution

mod app;
mod input;

pub use app::{run, StartupOptions};
