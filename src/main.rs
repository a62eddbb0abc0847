//! Portfolio TUI - a personal portfolio in the terminal
//!
//! A Ratatui-based single scrolling page with entrance animations, project
//! details and a validated contact form.

mod app;
mod config;
mod content;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (TuiConfig::default(), Some(err)),
    };

    // Initialize logging; the terminal belongs to the UI, so logs go to a file
    init_logging(&config)?;
    if let Some(err) = config_error {
        tracing::warn!("Ignoring unreadable config: {err:#}");
    }
    tracing::info!("Starting portfolio-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!("Exiting portfolio-tui");
    Ok(())
}

fn init_logging(config: &TuiConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(config.log_filter())
        .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into());

    let Some(path) = TuiConfig::log_path() else {
        // No home directory: run without logs rather than scribbling on the UI
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Get terminal size for page layout
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        let now = Instant::now();
        app.update(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while sections animate in (16ms = ~60fps)
        let poll_duration = app.poll_interval(now);

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(_width, _height) => {
                    // Page is re-measured on the next update
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
