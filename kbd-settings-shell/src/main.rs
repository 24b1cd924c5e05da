//! Keyboard settings - Main entry point
//!
//! Parses command-line arguments and starts the application.
//!
//! # Usage
//!
//! ```bash
//! kbd-settings --help               # Show help
//! kbd-settings --dark-mode          # Start in dark mode
//! kbd-settings --log-level debug    # Enable debug logging
//! ```

mod app;

use clap::Parser;
use kbd_settings_shell::Args;

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter()),
    )
    .init();

    log::info!("Starting keyboard settings");
    log::debug!("CLI args: {:?}", args);

    if let Some(ref prefs) = args.prefs {
        log::info!("Using preferences file: {}", prefs.display());
    }

    app::set_cli_args(args);

    app::app_main();
}
