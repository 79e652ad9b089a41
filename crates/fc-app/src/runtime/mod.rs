mod app_runtime;
mod command;

pub use app_runtime::AppRuntime;
pub use command::{
    app_command_channel, AppCommand, AppCommandReceiver, AppCommandSender, CommandSendError,
};
