//! dPackChain shipment dashboard - terminal UI for viewing and filtering shipments.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod filter;
mod nav;
mod shipments;
mod summary;
mod ui;

use anyhow::Context;
use app::{App, UiMode};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use filter::Tab;
use ratatui::{Terminal, backend::CrosstermBackend};
use shipments::{DemoSource, JsonFileSource, Shipment, ShipmentSource};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Key help shown when there is no status message.
const KEY_HELP: &str =
    "q quit | / search | Tab/Shift-Tab or 1-5 tabs | j/k move | Enter actions | m menu";

/// Terminal dashboard for blockchain-verified shipments.
#[derive(Debug, Parser)]
#[command(name = "dpack-tui", version, about, long_about = None)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, env = "DPACK_TUI_CONFIG")]
    config: Option<PathBuf>,

    /// JSON file with shipment records (overrides the config file).
    #[arg(short, long)]
    shipments: Option<PathBuf>,

    /// Tab selected on start-up (overrides the config file).
    #[arg(short, long)]
    tab: Option<Tab>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Write a default config file and exit.
    #[arg(long)]
    init_config: bool,

    /// Let --init-config overwrite an existing config file.
    #[arg(long, requires = "init_config")]
    force: bool,
}

/// Main application entry point.
///
/// # Details
/// Parses arguments, loads configuration and shipments, then runs the event
/// loop until the user quits.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => Config::default_config_path()?,
    };

    if cli.init_config {
        write_default_config(&config_path, cli.force)?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let config = Config::load(Some(&config_path))?;
    init_tracing(&config.log_file_path(&config_path), cli.verbose)?;
    info!(path = %config_path.display(), "configuration loaded");

    let shipments_path = match cli.shipments {
        Some(path) => Some(path),
        None => config.shipments_file_path(&config_path),
    };
    let shipments = match shipments_path {
        Some(path) => load_shipments(&JsonFileSource::new(path)).await?,
        None => load_shipments(&DemoSource).await?,
    };

    let default_tab = cli.tab.unwrap_or(config.default_tab);
    let mut app = App::new(shipments, default_tab, config.local_time);
    app.set_status(format!("Loaded {} shipments", app.shipments.len()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

/// Write the default configuration to `config_path`.
///
/// # Details
/// An existing file is left alone unless `force` is set.
fn write_default_config(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default().save(Some(config_path))
}

/// Install the tracing subscriber, writing to `log_path`.
///
/// # Details
/// The terminal belongs to the UI, so logs go to a file. Respects `RUST_LOG`;
/// otherwise uses `debug` with `--verbose` and `info` by default.
fn init_tracing(log_path: &Path, verbose: bool) -> anyhow::Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// List shipments from `source`, logging where they came from.
async fn load_shipments<S: ShipmentSource>(source: &S) -> anyhow::Result<Vec<Shipment>> {
    let shipments = source
        .list_shipments()
        .await
        .with_context(|| format!("Failed to load shipments from {}", source.describe()))?;
    info!(source = %source.describe(), count = shipments.len(), "shipments loaded");
    Ok(shipments)
}

/// Render the complete UI.
///
/// # Details
/// Lays out the navigation bar, summary cards, search, tabs, table and
/// status line, then draws the overlays on top.
fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let area = f.area();
    let layout = ui::dashboard_layout(area);

    ui::render_nav(app, layout.nav, f.buffer_mut());
    ui::render_summary(app, layout.summary, f.buffer_mut());
    ui::render_search(app, layout.search, f.buffer_mut());
    ui::render_tabs(app, layout.tabs, f.buffer_mut());
    ui::render_table(app, layout.table, f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(KEY_HELP);
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text));
    f.render_widget(status, layout.status);

    ui::render_actions(app, layout.table, f.buffer_mut());
    ui::render_menu(app, area, f.buffer_mut());
}

/// Main event loop.
///
/// # Details
/// Redraws, then polls for input with a short timeout so the UI stays
/// responsive. Returns when the user quits.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Apply a key press to the application state.
///
/// # Returns
/// * `bool` - True when the application should quit
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.mode {
        UiMode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(tab) = c
                    .to_digit(10)
                    .and_then(|d| Tab::ALL.get(d as usize - 1))
                {
                    app.select_tab(*tab);
                }
            }
            KeyCode::Char('/') => app.mode = UiMode::Search,
            KeyCode::Char('m') => app.toggle_menu(),
            KeyCode::Enter => app.open_actions(),
            _ => {}
        },
        UiMode::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.mode = UiMode::List,
            KeyCode::Backspace => app.remove_search_char(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_search();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                app.add_search_char(c)
            }
            _ => {}
        },
        UiMode::Menu => match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.close_menu(),
            KeyCode::Up | KeyCode::Char('k') => app.menu_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.menu_next(),
            KeyCode::Enter => app.activate_menu_entry(),
            _ => {}
        },
        UiMode::Actions => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.close_actions(),
            KeyCode::Up | KeyCode::Char('k') => app.action_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.action_next(),
            KeyCode::Enter => app.run_selected_action(),
            _ => {}
        },
    }

    false
}

/// Handle mouse scroll for navigation in the table, menu and action popup.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    match (mouse.kind, app.mode) {
        (MouseEventKind::ScrollUp, UiMode::List) => app.move_up(),
        (MouseEventKind::ScrollDown, UiMode::List) => app.move_down(),
        (MouseEventKind::ScrollUp, UiMode::Menu) => app.menu_prev(),
        (MouseEventKind::ScrollDown, UiMode::Menu) => app.menu_next(),
        (MouseEventKind::ScrollUp, UiMode::Actions) => app.action_prev(),
        (MouseEventKind::ScrollDown, UiMode::Actions) => app.action_next(),
        _ => {}
    }
}
