//! One-way commands emitted by the home screen
//!
//! The screen never performs side effects itself. Each interaction becomes a
//! [`HomeCommand`] handed to a [`CommandSink`]; the shell drains the queue
//! and routes every command to its collaborator with [`execute_command`].

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;

use kbd_prefs::PlatformStatusSource;
use kbd_widgets::{Navigator, Route};

/// Side effect requested by the home screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeCommand {
    /// Open a settings section
    Navigate(Route),
    /// Open an external URL
    LaunchUrl(String),
    /// Open the system UI for enabling input methods
    OpenImeEnabler,
    /// Open the system input method picker
    OpenImePicker,
}

/// Destination for commands; fire-and-forget
pub trait CommandSink: Send {
    fn dispatch(&self, command: HomeCommand);
}

impl CommandSink for Sender<HomeCommand> {
    fn dispatch(&self, command: HomeCommand) {
        if let Err(e) = self.send(command) {
            log::warn!("Command channel closed, dropping {:?}", e.into_inner());
        }
    }
}

/// Channel connecting a screen to the shell's command pump
pub fn command_channel() -> (Sender<HomeCommand>, Receiver<HomeCommand>) {
    unbounded()
}

/// Sink that keeps every dispatched command, in order
///
/// Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    commands: Arc<Mutex<Vec<HomeCommand>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands dispatched so far
    pub fn commands(&self) -> Vec<HomeCommand> {
        self.commands.lock().clone()
    }

    /// Remove and return the recorded commands
    pub fn take(&self) -> Vec<HomeCommand> {
        std::mem::take(&mut *self.commands.lock())
    }
}

impl CommandSink for RecordingSink {
    fn dispatch(&self, command: HomeCommand) {
        self.commands.lock().push(command);
    }
}

/// Opens URLs in the platform's handler; fire-and-forget
pub trait UrlLauncher {
    fn launch(&self, url: &str);
}

/// Route `command` to the collaborator responsible for it
pub fn execute_command(
    command: HomeCommand,
    navigator: &mut dyn Navigator,
    launcher: &dyn UrlLauncher,
    platform: &dyn PlatformStatusSource,
) {
    log::debug!("Executing {:?}", command);
    match command {
        HomeCommand::Navigate(route) => navigator.navigate(route),
        HomeCommand::LaunchUrl(url) => launcher.launch(&url),
        HomeCommand::OpenImeEnabler => platform.open_enabler_ui(),
        HomeCommand::OpenImePicker => platform.open_picker_ui(),
    }
}
