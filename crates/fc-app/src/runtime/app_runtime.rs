use std::sync::Arc;

use fc_core::ports::UiPort;
use fc_platform::{PlatformEvent, PlatformEventReceiver};
use tracing::{debug, error, info, warn};

use super::command::{AppCommand, AppCommandReceiver};
use crate::deps::AppDeps;
use crate::history::ClipboardHistory;
use crate::usecases::{
    CaptureClipboardUseCase, ClearHistoryUseCase, RestoreEntryUseCase, SetCapacityUseCase,
    UseCases,
};

/// The only task that mutates the history while the app runs.
///
/// Platform events and user commands arrive on two channels and are handled
/// one at a time, so the history needs no locking.
pub struct AppRuntime {
    history: ClipboardHistory,
    capture: CaptureClipboardUseCase,
    restore: RestoreEntryUseCase,
    clear: ClearHistoryUseCase,
    set_capacity: SetCapacityUseCase,
    ui: Arc<dyn UiPort>,
    event_rx: PlatformEventReceiver,
    command_rx: AppCommandReceiver,
    visible: bool,
    shutting_down: bool,
}

impl AppRuntime {
    pub fn new(
        deps: &AppDeps,
        history: ClipboardHistory,
        event_rx: PlatformEventReceiver,
        command_rx: AppCommandReceiver,
    ) -> Self {
        let usecases = UseCases::new(deps);
        Self {
            history,
            capture: usecases.capture_clipboard(),
            restore: usecases.restore_entry(),
            clear: usecases.clear_history(),
            set_capacity: usecases.set_capacity(),
            ui: deps.ui_port.clone(),
            event_rx,
            command_rx,
            visible: false,
            shutting_down: false,
        }
    }

    /// Runs until [`AppCommand::Shutdown`] arrives or every command sender is
    /// dropped, then hands the history back.
    pub async fn run(mut self) -> ClipboardHistory {
        info!(entries = self.history.len(), "App runtime started");
        let mut events_open = true;

        while !self.shutting_down {
            tokio::select! {
                // Captures queued before a command are applied before it.
                biased;

                event = self.event_rx.recv(), if events_open => match event {
                    Some(event) => self.handle_event(event).await,
                    None => {
                        debug!("Platform event channel closed");
                        events_open = false;
                    }
                },
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command).await,
                    None => {
                        info!("All command senders dropped");
                        break;
                    }
                },
            }
        }

        info!("App runtime stopped");
        self.history
    }

    async fn handle_event(&mut self, event: PlatformEvent) {
        match event {
            PlatformEvent::ClipboardCaptured(snapshot) => {
                self.capture.execute(&mut self.history, snapshot).await;
            }
            PlatformEvent::WatcherStopped => {
                warn!("Clipboard watcher stopped; new clipboard values will not be captured");
            }
        }
    }

    async fn handle_command(&mut self, command: AppCommand) {
        debug!(?command, "Handling command");
        match command {
            AppCommand::Select(index) => {
                let restored = self.restore.execute(&self.history, index).await;
                match restored {
                    Ok(summary) => {
                        self.ui.entry_restored(&summary);
                        if self.visible {
                            self.set_visible(false);
                        }
                    }
                    Err(e) => warn!(error = %e, index, "Failed to restore entry"),
                }
            }
            AppCommand::Clear => {
                self.clear.execute(&mut self.history).await;
            }
            AppCommand::SetCapacity(capacity) => {
                if let Err(e) = self.set_capacity.execute(&mut self.history, capacity).await {
                    error!(error = %e, "Rejected capacity change");
                }
            }
            AppCommand::ToggleVisibility => {
                self.set_visible(!self.visible);
            }
            AppCommand::Shutdown => {
                info!("App runtime shutting down");
                self.shutting_down = true;
            }
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.ui.visibility_changed(visible);
        if visible {
            self.ui.history_changed(self.history.entries());
        }
    }
}
