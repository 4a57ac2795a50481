mod app;
mod data;
mod logos;
mod model;
mod offline;
mod pages;
mod router;
mod teams;
mod views;

use std::{fs::File, io, sync::Arc, sync::Mutex, time::Duration};

use anyhow::{anyhow, Context, Result};
use app::{App, AppMessage};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use data::{DataClient, ScheduleApi};
use offline::OfflineSource;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use router::Route;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Golden State Warriors schedule in the terminal", long_about = None)]
struct Args {
    /// Base URL of the schedule backend
    #[arg(long, env = "WARRIORS_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    /// Serve the bundled season schedule instead of calling the backend
    #[arg(long, env = "WARRIORS_OFFLINE")]
    offline: bool,

    /// Do not download or draw team logos
    #[arg(long)]
    no_logos: bool,

    /// Screen to open first, e.g. "/" or "/game/22500150"
    #[arg(long, default_value = "/")]
    open: String,

    /// Diagnostics go here; the terminal belongs to the UI
    #[arg(long, env = "WARRIORS_LOG_FILE", default_value = "warriors-tui.log")]
    log_file: String,

    /// tracing filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

fn init_tracing(args: &Args) -> Result<()> {
    let file = File::create(&args.log_file)
        .with_context(|| format!("cannot open log file {}", args.log_file))?;
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log filter {:?}", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let start = Route::parse(&args.open).ok_or_else(|| anyhow!("unknown route {:?}", args.open))?;
    let client = Arc::new(DataClient::new(&args.api_url));
    let api: Arc<dyn ScheduleApi> = if args.offline {
        Arc::new(OfflineSource::bundled()?)
    } else {
        client.clone()
    };
    let logo_client = (!args.no_logos).then_some(client);
    info!(api_url = %args.api_url, offline = args.offline, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Page loads and logo downloads report back over this channel
    let (tx, mut rx) = mpsc::channel::<AppMessage>(100);
    let mut app = App::new(api, tx, logo_client, start);

    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    res.context("terminal loop failed")
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut mpsc::Receiver<AppMessage>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app::ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }

        while let Ok(msg) = rx.try_recv() {
            app.on_message(msg);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
