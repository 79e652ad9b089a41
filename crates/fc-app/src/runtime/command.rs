use thiserror::Error;
use tokio::sync::mpsc;

const COMMAND_BUFFER: usize = 32;

/// Requests handled by [`AppRuntime`](super::AppRuntime), in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Write the entry at this index back to the system clipboard.
    Select(usize),
    Clear,
    SetCapacity(usize),
    /// Show or hide the popup.
    ToggleVisibility,
    Shutdown,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandSendError {
    #[error("app runtime is no longer running")]
    RuntimeStopped,
}

pub type AppCommandReceiver = mpsc::Receiver<AppCommand>;

/// Cloneable handle for submitting commands to the runtime.
///
/// Hotkey listeners and IPC servers never touch the history; they send a
/// command and the runtime applies it on its own task.
#[derive(Debug, Clone)]
pub struct AppCommandSender {
    tx: mpsc::Sender<AppCommand>,
}

impl AppCommandSender {
    pub async fn send(&self, command: AppCommand) -> Result<(), CommandSendError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| CommandSendError::RuntimeStopped)
    }

    /// Sends from a plain OS thread, such as a global hotkey callback.
    ///
    /// Must not be called from async code; it panics inside a tokio runtime.
    pub fn blocking_send(&self, command: AppCommand) -> Result<(), CommandSendError> {
        self.tx
            .blocking_send(command)
            .map_err(|_| CommandSendError::RuntimeStopped)
    }
}

pub fn app_command_channel() -> (AppCommandSender, AppCommandReceiver) {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    (AppCommandSender { tx }, rx)
}
