// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` (active tab, table query, input modes) and
// re-renders at ~30 fps. Every frame recomputes the roster transforms from
// the immutable snapshot; at tens of records that is far below interactive
// latency budgets, so there is no caching layer to invalidate.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyModifiers};
use futures_util::StreamExt;
use ratatui::Frame;

use crate::config::Config;
use crate::data::RosterSnapshot;
use crate::roster::squads::partition_squads;
use crate::roster::summary::{overview, power_series, score_series};
use crate::roster::view::{filter_and_sort, TableQuery};

use layout::{build_leaderboard_layout, build_squads_layout};

// ---------------------------------------------------------------------------
// Tabs and commands
// ---------------------------------------------------------------------------

/// The two dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Leaderboard,
    Squads,
}

impl TabId {
    pub fn toggled(&self) -> TabId {
        match self {
            TabId::Leaderboard => TabId::Squads,
            TabId::Squads => TabId::Leaderboard,
        }
    }
}

/// Commands the input layer hands back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state; together with the immutable snapshot it fully
/// determines every rendered frame.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Which dashboard view is active.
    pub active_tab: TabId,
    /// Leaderboard filter/sort state.
    pub query: TableQuery,
    /// Whether keystrokes currently edit the search term.
    pub filter_mode: bool,
    /// Whether a quit confirmation prompt is showing.
    pub confirm_quit: bool,
    /// Table scroll offset (rows hidden above the viewport).
    pub table_scroll: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            active_tab: TabId::Leaderboard,
            query: TableQuery::default(),
            filter_mode: false,
            confirm_quit: false,
            table_scroll: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame for the active tab.
pub fn render_frame(
    frame: &mut Frame,
    snapshot: &RosterSnapshot,
    config: &Config,
    state: &ViewState,
) {
    match state.active_tab {
        TabId::Leaderboard => render_leaderboard_tab(frame, snapshot, config, state),
        TabId::Squads => render_squads_tab(frame, snapshot, config, state),
    }
}

fn render_leaderboard_tab(
    frame: &mut Frame,
    snapshot: &RosterSnapshot,
    config: &Config,
    state: &ViewState,
) {
    let layout = build_leaderboard_layout(frame.area());

    let rows = filter_and_sort(&snapshot.players, &state.query);
    let cards = overview(&snapshot.players, snapshot.averages);
    let scores = score_series(&snapshot.players, config.chart_top_n);
    let powers = power_series(&snapshot.players, config.chart_top_n);

    widgets::status_bar::render(frame, layout.status_bar, snapshot, state);
    widgets::cards::render(frame, layout.cards, &cards, config.locale);
    widgets::chart::render(
        frame,
        layout.score_chart,
        &format!("Top {} Final Scores", config.chart_top_n),
        &scores,
        widgets::chart::ALPHA_ACCENT,
    );
    widgets::chart::render(
        frame,
        layout.power_chart,
        &format!("Top {} Power (Millions)", config.chart_top_n),
        &powers,
        widgets::chart::BRAVO_ACCENT,
    );
    widgets::leaderboard::render(frame, layout.table, &rows, state, config.locale);
    widgets::help_bar(frame, layout.help_bar, state);
}

fn render_squads_tab(
    frame: &mut Frame,
    snapshot: &RosterSnapshot,
    config: &Config,
    state: &ViewState,
) {
    let layout = build_squads_layout(frame.area());
    let assignment = partition_squads(&snapshot.players, &config.squads);

    widgets::status_bar::render(frame, layout.status_bar, snapshot, state);
    widgets::squads::render_alpha(frame, layout.alpha, &assignment, config.locale);
    widgets::squads::render_bravo(frame, layout.bravo, &assignment, config.locale);
    widgets::squads::render_summary(frame, layout.summary, &assignment);
    widgets::help_bar(frame, layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal on crash.
/// 3. Runs an async select loop over keyboard input and render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(snapshot: RosterSnapshot, config: Config) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Chain our restore in front of the original panic hook.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        // Ctrl+C always quits immediately (escape hatch).
                        if key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        if let Some(UserCommand::Quit) =
                            input::handle_key(key_event, &mut view_state)
                        {
                            break;
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events need no handling; the next
                        // render tick picks up the new frame area.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| {
                    render_frame(frame, &snapshot, &config, &view_state)
                })?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
