//! topline — browse top US news headlines in the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐ FetchRequest ┌───────────┐  FetchMsg  ┌──────────┐
//! │  app.rs   │ ───────────► │ fetch.rs  │ ─────────► │  app.rs  │
//! │ (filters) │   (channel)  │ (worker)  │  (channel) │ (state)  │
//! └───────────┘              └───────────┘            └──────────┘
//!       ▲                                                  │
//!       │ handle_key_event()                               │ draw()
//! ┌──────────┐                                        ┌──────────┐
//! │ input.rs │                                        │  ui.rs   │
//! └──────────┘                                        └──────────┘
//! ```
//!
//! * **`source/`** — the `HeadlinesSource` trait, the NewsAPI client, and
//!   the wire types.
//! * **`fetch`** — spawns the worker thread that performs one blocking HTTP
//!   request at a time.
//! * **`app`** — owns all application state (filters, fetch state, scroll
//!   position) and the sequence-guarded fetch lifecycle.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations and fetch triggers.
//! * **`main`** — wires everything together: read config, set up the
//!   terminal, and run the event loop.

mod app;
mod category;
mod fetch;
mod input;
mod source;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;
use category::Category;
use source::NewsApiSource;

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.  This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Set up file-based tracing when `TOPLINE_LOG` names a log file.
///
/// The TUI owns the terminal, so logs never go to stdout; with the variable
/// unset, tracing stays disabled entirely.  `RUST_LOG` controls the filter.
fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var("TOPLINE_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();
    init_tracing()?;

    // -- parse arguments -----------------------------------------------------
    // Optional first argument: the starting category. Unknown values fall
    // back to the default rather than erroring.
    let category = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<Category>().ok())
        .unwrap_or_default();

    // -- start the fetch worker ----------------------------------------------
    // A missing NEWS_API_KEY is not fatal here: the first fetch fails fast
    // and the message lands in the error pane.
    let (req_tx, msg_rx) = fetch::spawn(Box::new(NewsApiSource::from_env()));

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(category);

    // -- initial fetch -------------------------------------------------------
    req_tx
        .send(app.begin_fetch())
        .map_err(|_| anyhow!("fetch worker exited"))?;

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any replies from the fetch worker (stale ones are dropped).
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate); dispatch
    //      a new fetch when the filters changed.
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process fetch replies
        while let Ok(msg) = msg_rx.try_recv() {
            app.apply_fetch(msg);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if input::handle_key_event(&mut app, key) {
                    req_tx
                        .send(app.begin_fetch())
                        .map_err(|_| anyhow!("fetch worker exited"))?;
                }
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
