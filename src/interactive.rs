//! Line-based commands for `run --interactive`.

use std::io::BufRead;
use std::thread;

use fc_app::{AppCommand, AppCommandSender};
use tracing::{debug, warn};

pub const HELP: &str = "commands: select N | clear | capacity N | toggle | quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<AppCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("too many arguments; {HELP}"));
    }

    let command = match (verb.to_ascii_lowercase().as_str(), arg) {
        ("select", Some(n)) => AppCommand::Select(parse_number(n)?),
        ("capacity", Some(n)) => AppCommand::SetCapacity(parse_number(n)?),
        ("clear", None) => AppCommand::Clear,
        ("toggle", None) => AppCommand::ToggleVisibility,
        ("quit" | "exit", None) => AppCommand::Shutdown,
        _ => return Err(format!("unknown command '{}'; {HELP}", line.trim())),
    };
    Ok(Some(command))
}

fn parse_number(word: &str) -> Result<usize, String> {
    word.parse()
        .map_err(|_| format!("'{word}' is not a non-negative number"))
}

/// Reads commands from stdin on a dedicated thread.
///
/// End of input shuts the runtime down. The thread exits once the runtime
/// stops accepting commands.
pub fn spawn_stdin_reader(commands: AppCommandSender) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            };
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if commands.blocking_send(command).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(message) => eprintln!("{message}"),
            }
        }
        debug!("stdin closed");
        let _ = commands.blocking_send(AppCommand::Shutdown);
    })
}
