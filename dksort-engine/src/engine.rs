//! The sort engine — panel controller and refresh scheduler.
//!
//! One engine instance owns the selected [`SortMode`] and every timer.
//! Startup is gated twice, independently: the panel attaches once the
//! story anchor renders, and the refresh loop starts once entries
//! exist. After that a single task multiplexes the periodic refresh
//! timer, the mode-change debounce deadline, and panel commands.

use crate::error::{EngineError, EngineResult};
use crate::sorter::sort_entries;
use crate::waiter::{wait_until, WaitConfig};
use dksort_export::build_download;
use dksort_page::{LivePage, PanelSpec};
use dksort_types::{EntrySnapshot, SortMode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Panel commands buffered while the engine is mid-tick.
const COMMAND_BUFFER: usize = 16;

/// Configuration for the sort engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Period of the entry refresh timer.
    pub refresh_interval: Duration,

    /// Settle delay between a mode change and its refresh.
    pub mode_debounce: Duration,

    /// Polling cadence and deadline for the startup gates.
    pub readiness: WaitConfig,

    /// The control surface to attach once the anchor renders.
    pub panel: PanelSpec,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(3000),
            mode_debounce: Duration::from_millis(10),
            readiness: WaitConfig::default(),
            panel: PanelSpec::default(),
        }
    }
}

/// A user action dispatched from the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Select a sort mode.
    SetMode(SortMode),

    /// Show the about blurb.
    ShowAbout,

    /// Export the entries as a CSV download.
    Download,

    /// Stop the engine.
    Shutdown,
}

/// Cloneable handle the host's panel wiring uses to reach the engine.
///
/// Dropping every handle stops the engine, the stand-in for navigation
/// discarding the page.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands: mpsc::Sender<PanelCommand>,
}

impl EngineHandle {
    /// Sends a raw panel command.
    pub async fn send(&self, command: PanelCommand) -> EngineResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| EngineError::ChannelClosed)
    }

    /// Selects a sort mode; the reorder follows after the debounce
    /// delay rather than synchronously.
    pub async fn set_mode(&self, mode: SortMode) -> EngineResult<()> {
        self.send(PanelCommand::SetMode(mode)).await
    }

    /// Shows the about blurb.
    pub async fn show_about(&self) -> EngineResult<()> {
        self.send(PanelCommand::ShowAbout).await
    }

    /// Exports the current entries as a CSV download.
    pub async fn download(&self) -> EngineResult<()> {
        self.send(PanelCommand::Download).await
    }

    /// Stops the engine loop.
    pub async fn shutdown(&self) -> EngineResult<()> {
        self.send(PanelCommand::Shutdown).await
    }
}

/// The sort engine: waits for the page, attaches the panel, and keeps
/// the entries ordered until shut down.
pub struct SortEngine {
    page: Arc<dyn LivePage>,
    config: EngineConfig,
    mode: SortMode,
    commands: mpsc::Receiver<PanelCommand>,
}

impl SortEngine {
    /// Creates an engine for the given page along with its handle.
    ///
    /// The starting mode is the panel's initially selected option
    /// (ascending on the stock panel).
    #[must_use]
    pub fn new(page: Arc<dyn LivePage>, config: EngineConfig) -> (Self, EngineHandle) {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let mode = config.panel.selected_mode().unwrap_or_default();
        (
            Self {
                page,
                config,
                mode,
                commands: rx,
            },
            EngineHandle { commands: tx },
        )
    }

    /// The currently selected sort mode.
    #[must_use]
    pub fn mode(&self) -> SortMode {
        self.mode
    }

    /// Runs the engine until shutdown.
    ///
    /// The panel gate runs on its own task: if the anchor never renders
    /// within the deadline, the panel silently never attaches and the
    /// rest of the engine keeps going. The entries gate runs inline: if
    /// entries never appear, startup is abandoned and the timeout
    /// returned.
    pub async fn run(self) -> EngineResult<()> {
        let Self {
            page,
            config,
            mode,
            commands,
        } = self;

        let wait = config.readiness.clone();
        let panel = config.panel.clone();
        let panel_page = Arc::clone(&page);
        tokio::spawn(async move {
            let anchor_page = Arc::clone(&panel_page);
            match wait_until(&wait, move || anchor_page.anchor_ready()).await {
                Ok(()) => match panel_page.attach_panel(&panel) {
                    Ok(()) => info!("panel attached"),
                    Err(err) => warn!("could not attach panel: {err}"),
                },
                Err(err) => warn!("story anchor never rendered: {err}"),
            }
        });

        let entries_page = Arc::clone(&page);
        if let Err(err) = wait_until(&config.readiness, move || entries_page.has_entries()).await {
            warn!("no live update entries appeared: {err}");
            return Err(err.into());
        }

        Self::run_loop(page, config, mode, commands).await
    }

    /// Multiplexes the refresh timer, the debounce deadline, and panel
    /// commands. The first refresh fires immediately.
    async fn run_loop(
        page: Arc<dyn LivePage>,
        config: EngineConfig,
        mut mode: SortMode,
        mut commands: mpsc::Receiver<PanelCommand>,
    ) -> EngineResult<()> {
        let mut ticker = time::interval(config.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut pending_mode_refresh: Option<Instant> = None;

        loop {
            tokio::select! {
                _ = ticker.tick() => refresh(page.as_ref(), mode),

                _ = time::sleep_until(pending_mode_refresh.unwrap_or_else(Instant::now)),
                    if pending_mode_refresh.is_some() =>
                {
                    pending_mode_refresh = None;
                    refresh(page.as_ref(), mode);
                }

                command = commands.recv() => match command {
                    Some(PanelCommand::SetMode(new_mode)) => {
                        debug!(mode = %new_mode, "sort mode selected");
                        mode = new_mode;
                        // let the selector's own state settle first;
                        // a second change replaces the pending deadline
                        pending_mode_refresh = Some(Instant::now() + config.mode_debounce);
                    }
                    Some(PanelCommand::ShowAbout) => page.show_notice(&config.panel.about),
                    Some(PanelCommand::Download) => download(page.as_ref(), mode),
                    Some(PanelCommand::Shutdown) | None => {
                        debug!("engine stopping");
                        return Ok(());
                    }
                },
            }
        }
    }
}

/// One refresh pass: read, sort, write back in place, update the count.
fn refresh(page: &dyn LivePage, mode: SortMode) {
    let sorted = sort_entries(page.entries(), mode);
    let count = sorted.len();
    let contents: Vec<_> = sorted.into_iter().map(EntrySnapshot::into_content).collect();
    if let Err(err) = page.apply_entries(&contents) {
        warn!("skipping refresh, page changed underneath us: {err}");
        return;
    }
    page.set_entry_count(count);
    debug!(count, mode = %mode, "entries refreshed");
}

/// Re-reads and re-sorts the entries under the active mode, encodes
/// them, and hands the payload to the download sink.
fn download(page: &dyn LivePage, mode: SortMode) {
    let file = build_download(&sort_entries(page.entries(), mode));
    match page.deliver_file(&file) {
        Ok(()) => info!(name = %file.name, "export delivered"),
        Err(err) => warn!("export failed: {err}"),
    }
}
