mod app;
mod config;
mod domain;
mod input;
mod logging;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{config_file, detect_color_scheme, load_settings, log_file, resolve_theme, Settings, ThemePreference};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doer")]
#[command(about = "Daily Doer: a small terminal to-do list with task history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Starting theme. Defaults to the config file, then the terminal's colour scheme.
    #[arg(short, long, value_enum, global = true)]
    theme: Option<ThemePreference>,

    /// Config file path. Defaults to ~/.doer/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (e.g. "debug"). Defaults to RUST_LOG, then "info".
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved settings and where they were loaded from
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config_file()?,
    };
    let settings = load_settings(&config_path)?;

    match cli.command {
        Some(Commands::Config) => {
            let theme = resolve_theme(cli.theme, &settings, detect_color_scheme());
            println!("Config file: {}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
            println!("Starting theme: {}", theme.label());
            Ok(())
        }
        None => {
            // Run the TUI
            run_tui(&cli, &settings, &config_path)
        }
    }
}

fn run_tui(cli: &Cli, settings: &Settings, config_path: &std::path::Path) -> Result<()> {
    let log_path = log_file()?;
    logging::init_logging(&log_path, cli.log_level.as_deref())?;

    // The platform hint is read once; only the user toggle changes the theme afterwards
    let theme = resolve_theme(cli.theme, settings, detect_color_scheme());
    tracing::info!(
        config = %config_path.display(),
        theme = theme.label(),
        "starting doer"
    );

    let mut app = AppState::new(theme, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        active = app.tasks.len(),
        completed = app.tasks.history().len(),
        "shutting down"
    );

    result.context("Error while running the UI")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    settings: &Settings,
) -> Result<()> {
    let tick_rate = settings.tick_rate();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for the next key press; redraw on timeout to pick up resizes
        if let Some(key) = ticker::next_key_press(tick_rate)? {
            if input::handle_key(app, key) {
                return Ok(());
            }
        }
    }
}
