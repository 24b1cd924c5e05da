//! Keyboard settings shell - CLI, desktop collaborators and service wiring
//!
//! The Makepad application itself lives in the binary (`src/app.rs`); this
//! library holds everything that can be exercised without a window.

pub mod cli;
pub mod platform;
pub mod services;

pub use cli::Args;
pub use platform::{DesktopImeStatus, ImeEnv, OverriddenStatus, SystemUrlLauncher};
pub use services::{drain_commands, open_store, status_source, Services};
