use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;

mod action;
mod app;
mod backend;
mod input;
mod theme;
mod tui_event;
mod view;

use ludex_core::config_file;
use ludex_core::{CatalogSession, SessionOptions, YearDomain};
use ludex_rawg::RawgClient;

use app::App;

/// ludex — browse the RAWG game catalog from your terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// RAWG API key (falls back to RAWG_API_KEY, then the config file)
    #[arg(long)]
    api_key: Option<String>,

    /// Items per catalog page
    #[arg(long)]
    page_size: Option<u32>,

    /// Number of years offered by the year filter
    #[arg(long)]
    year_span: Option<u32>,

    /// Proactively fetch one extra page when the filtered view is empty
    #[arg(long)]
    auto_backfill: bool,

    /// Color theme: dark or light (overrides the persisted preference)
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = config_file::load_config();

    // Resolve settings: CLI flags > env vars > config file > defaults
    let api_key = args
        .api_key
        .or_else(|| std::env::var("RAWG_API_KEY").ok())
        .or_else(|| config.api_key().map(String::from));
    let Some(api_key) = api_key else {
        anyhow::bail!(
            "no RAWG API key configured; pass --api-key, set RAWG_API_KEY, \
             or add it to the config file"
        );
    };

    let catalog_cfg = config.catalog.clone().unwrap_or_default();
    let page_size = args
        .page_size
        .or(catalog_cfg.page_size)
        .unwrap_or(ludex_rawg::DEFAULT_PAGE_SIZE);
    let year_span = args
        .year_span
        .or(catalog_cfg.year_span)
        .unwrap_or(ludex_core::filter::DEFAULT_YEAR_SPAN);
    let backfill = args.auto_backfill || catalog_cfg.auto_backfill.unwrap_or(false);
    let theme_name = args
        .theme
        .or_else(|| config.theme().map(String::from))
        .unwrap_or_else(|| "dark".to_string());

    // A TUI can't log to stdout; send tracing output to a file instead.
    let _log_guard = init_file_logging();

    let client = RawgClient::new(api_key).with_page_size(page_size);
    let session = CatalogSession::new(SessionOptions {
        year_domain: YearDomain::current(year_span),
        backfill,
    });

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    // Wire the backend fetch task
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    backend::spawn(Arc::new(client), cmd_rx, event_tx);

    let mut app = App::new(session, &theme_name, config);
    app.cmd_tx = Some(cmd_tx);
    app.config_path = config_file::config_path();

    // The first page loads on startup.
    app.request_next_page();

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events (non-blocking drain)
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    let action = input::map_event(&evt, &app.input_mode);
                    app.update(action);
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

/// Route tracing output to `<cache_dir>/ludex/ludex.log`. Returns the guard
/// keeping the non-blocking writer alive.
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::cache_dir()?.join("ludex");
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::never(log_dir, "ludex.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
