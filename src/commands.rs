//! Subcommand handlers.
//!
//! `run` owns the history through [`AppRuntime`] for the life of the process.
//! Every other command loads the history file, applies one use case and
//! exits. Commands that write the history (`run`, `clear`, `capacity`) hold
//! the data directory's [`InstanceLock`] while they work; the read-only ones
//! do not take it.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use fc_app::{
    app_command_channel, items_footer, AppCommand, AppDeps, AppRuntime, ClipboardHistory,
    HistoryRow, UseCases,
};
use fc_core::clipboard::EntryKind;
use fc_core::ports::{SystemClipboardPort, UiPort};
use fc_infra::InstanceLock;
use fc_platform::{platform_event_channel, LocalClipboard, PollingClipboardWatcher, WatcherConfig};
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};

use crate::adapters::{TerminalUi, UnavailableClipboard};
use crate::bootstrap::{wiring::build_deps, AppContext};
use crate::cli::Command;
use crate::interactive;

pub async fn execute(command: Command, ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Run { interactive } => {
            run(ctx, interactive, out)
                .instrument(info_span!("command.run", interactive))
                .await
        }
        Command::List { json } => list(ctx, json, out).await,
        Command::Search { query } => search(ctx, &query, out).await,
        Command::Select { index } => select(ctx, index, out).await,
        Command::Clear => clear(ctx, out).await,
        Command::Capacity { capacity } => set_capacity(ctx, capacity, out).await,
    }
}

async fn open_history(
    ctx: &AppContext,
    clipboard: Arc<dyn SystemClipboardPort>,
    ui: Arc<dyn UiPort>,
) -> (AppDeps, ClipboardHistory) {
    let deps = build_deps(&ctx.paths, clipboard, ui);
    let settings = UseCases::new(&deps).get_settings().execute().await;
    let history = ClipboardHistory::load(&deps, settings.history.capacity).await;
    (deps, history)
}

/// History opened without a clipboard connection.
async fn open_offline(ctx: &AppContext) -> (AppDeps, ClipboardHistory) {
    open_history(
        ctx,
        Arc::new(UnavailableClipboard),
        Arc::new(TerminalUi::quiet()),
    )
    .await
}

fn lock_data_dir(ctx: &AppContext) -> Result<InstanceLock> {
    Ok(InstanceLock::acquire(&ctx.paths.lock_path)?)
}

async fn run(ctx: &AppContext, interactive: bool, out: &mut dyn Write) -> Result<()> {
    let _lock = lock_data_dir(ctx)?;
    let clipboard: Arc<dyn SystemClipboardPort> = Arc::new(LocalClipboard::new()?);
    let ui: Arc<dyn UiPort> = if interactive {
        Arc::new(TerminalUi::interactive())
    } else {
        Arc::new(TerminalUi::quiet())
    };

    let deps = build_deps(&ctx.paths, clipboard.clone(), ui);
    let settings = UseCases::new(&deps).get_settings().execute().await;
    let history = ClipboardHistory::load(&deps, settings.history.capacity).await;
    info!(
        entries = history.len(),
        capacity = history.capacity(),
        path = %ctx.paths.history_path.display(),
        "History loaded"
    );

    let (event_tx, event_rx) = platform_event_channel();
    let (command_tx, command_rx) = app_command_channel();

    let watcher = PollingClipboardWatcher::new(
        clipboard,
        event_tx,
        WatcherConfig::from_settings(&settings.watcher),
    )
    .spawn();
    let runtime = AppRuntime::new(&deps, history, event_rx, command_rx);

    let shutdown_tx = command_tx.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = shutdown_tx.send(AppCommand::Shutdown).await;
            }
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    if interactive {
        writeln!(out, "{}", interactive::HELP)?;
        out.flush()?;
        // Not joined: it stays blocked on stdin until the process exits.
        let _reader = interactive::spawn_stdin_reader(command_tx.clone());
    }
    drop(command_tx);

    let history = runtime.run().await;
    watcher.stop().await;
    info!(entries = history.len(), "FluentClip stopped");
    Ok(())
}

fn print_rows(out: &mut dyn Write, rows: &[HistoryRow]) -> Result<()> {
    for row in rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonRow {
    index: usize,
    kind: EntryKind,
    preview: String,
    timestamp: DateTime<Utc>,
}

async fn list(ctx: &AppContext, json: bool, out: &mut dyn Write) -> Result<()> {
    let (deps, history) = open_offline(ctx).await;

    if json {
        let rows: Vec<JsonRow> = history
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| JsonRow {
                index,
                kind: entry.kind,
                preview: HistoryRow::from_entry(index, entry).preview,
                timestamp: entry.timestamp,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    let rows = UseCases::new(&deps).list_history().execute(&history);
    print_rows(out, &rows)?;
    writeln!(out, "{}", items_footer(history.len()))?;
    Ok(())
}

async fn search(ctx: &AppContext, query: &str, out: &mut dyn Write) -> Result<()> {
    let (deps, history) = open_offline(ctx).await;
    let rows = UseCases::new(&deps)
        .search_history()
        .execute(&history, query);
    print_rows(out, &rows)?;
    writeln!(out, "{}", items_footer(rows.len()))?;
    Ok(())
}

async fn select(ctx: &AppContext, index: usize, out: &mut dyn Write) -> Result<()> {
    let clipboard: Arc<dyn SystemClipboardPort> = Arc::new(LocalClipboard::new()?);
    select_with(ctx, clipboard, index, out).await
}

/// `select` against any clipboard adapter.
pub async fn select_with(
    ctx: &AppContext,
    clipboard: Arc<dyn SystemClipboardPort>,
    index: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let (deps, history) = open_history(ctx, clipboard, Arc::new(TerminalUi::quiet())).await;
    let summary = UseCases::new(&deps)
        .restore_entry()
        .execute(&history, index)
        .await?;
    writeln!(out, "Copied to clipboard: {summary}")?;
    Ok(())
}

async fn clear(ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let _lock = lock_data_dir(ctx)?;
    let (deps, mut history) = open_offline(ctx).await;
    let removed = UseCases::new(&deps)
        .clear_history()
        .execute(&mut history)
        .await;
    writeln!(out, "Cleared {removed} entries")?;
    Ok(())
}

async fn set_capacity(ctx: &AppContext, capacity: usize, out: &mut dyn Write) -> Result<()> {
    let _lock = lock_data_dir(ctx)?;
    let (deps, mut history) = open_offline(ctx).await;
    let evicted = UseCases::new(&deps)
        .set_capacity()
        .execute(&mut history, capacity)
        .await?;
    writeln!(
        out,
        "Capacity set to {capacity} ({evicted} entries evicted)"
    )?;
    Ok(())
}
