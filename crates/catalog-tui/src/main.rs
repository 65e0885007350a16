//! Catalog: a terminal product browser built with ratatui.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

mod app;
mod debounce;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use catalog_core::Catalog;

use crate::app::{App, AppMode};
use crate::debounce::QueryDebouncer;
use crate::input::{handle_key, InputAction, InputState};
use crate::render::{render, RenderState};

const LOG_FILE: &str = "catalog.log";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs go to a file in the temp dir so they never reach the terminal.
fn init_tracing() -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(path)
}

fn load_catalog() -> anyhow::Result<Catalog> {
    match std::env::args().nth(1) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            Catalog::load(&path)
                .with_context(|| format!("failed to load dataset {}", path.display()))
        }
        None => {
            let catalog = Catalog::bundled().context("bundled dataset is invalid")?;
            tracing::info!(products = catalog.len(), "bundled dataset loaded");
            Ok(catalog)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_path = init_tracing()?;
    tracing::info!(log = %log_path.display(), "catalog starting");

    // Fail on a bad dataset before touching the terminal.
    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, catalog).await;

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    tracing::info!("catalog exited");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: Catalog,
) -> anyhow::Result<()> {
    let mut app = App::new(catalog);
    let mut input_state = InputState::new();
    let mut render_state = RenderState::default();

    let search = &app.config().search;
    let mut debouncer =
        QueryDebouncer::new(Duration::from_millis(search.debounce_ms), search.min_query_len);

    let size = terminal.size()?;
    app = app.with_viewport(size.width, size.height);

    loop {
        // 1. Drain debounced queries
        app = drain_queries(app, &mut debouncer);
        render_state.query_pending = debouncer.is_pending();

        // 2. Render
        terminal.draw(|f| render(f, &app, &mut render_state))?;

        if app.should_quit() {
            break;
        }

        // 3. Poll for crossterm events
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let (action, new_input_state) =
                    handle_key(key, app.mode(), &input_state, app.keymap());
                input_state = new_input_state;
                app = apply(app, action, &mut debouncer);
            }
            Event::Resize(width, height) => {
                app = app.with_viewport(width, height);
            }
            _ => {}
        }
    }

    Ok(())
}

/// Applies every debounced query that has arrived since the last frame.
fn drain_queries(mut app: App, debouncer: &mut QueryDebouncer) -> App {
    while let Some(query) = debouncer.try_recv() {
        tracing::debug!(%query, "applying query");
        app = app.with_query(query);
    }
    app
}

/// Applies one input action to the app. Search text changes are routed
/// through the debouncer rather than applied directly.
fn apply(app: App, action: InputAction, debouncer: &mut QueryDebouncer) -> App {
    match action {
        InputAction::Quit => app.with_quit(),
        InputAction::CursorUp => app.with_cursor_up(),
        InputAction::CursorDown => app.with_cursor_down(),
        InputAction::CursorLeft => app.with_cursor_left(),
        InputAction::CursorRight => app.with_cursor_right(),
        InputAction::CursorTop => app.with_cursor_top(),
        InputAction::CursorBottom => app.with_cursor_bottom(),
        InputAction::ToggleSelect => app.with_clear_status().with_toggle_focused(),
        InputAction::RequestDelete => app.with_clear_status().request_delete(),
        InputAction::ConfirmApproved => app.with_confirm_approved(),
        InputAction::Reset => {
            debouncer.cancel();
            app.with_reset()
        }
        InputAction::SortCycle => app.with_sort_cycle(),
        InputAction::EnterMode(mode) => app.with_clear_status().with_mode(mode),
        InputAction::SearchChar(c) => {
            let app = app.with_search_char(c);
            debouncer.input(app.search_text());
            app
        }
        InputAction::SearchBackspace => {
            let app = app.with_search_backspace();
            debouncer.input(app.search_text());
            app
        }
        InputAction::SearchSubmit => {
            debouncer.flush();
            app.with_mode(AppMode::Normal)
        }
        InputAction::SearchCancel => app.with_mode(AppMode::Normal),
        InputAction::None => app,
    }
}
