// sortty: sorting algorithm visualizer with recorded playback

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::config::{Algorithm, Config, PlaybackMode, ValueRange};
use sortty::session::Visualizer;
use sortty::ui::App;

/// Animate sorting algorithms in the terminal
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
struct Args {
    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// bubble, selection, insertion, merge, quick or heap
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Number of bars
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Smallest generated value
    #[arg(long)]
    min: Option<u32>,

    /// Largest generated value
    #[arg(long)]
    max: Option<u32>,

    /// Delay between playback steps in milliseconds
    #[arg(short, long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Show the tone frequency of every value change
    #[arg(long)]
    sound: bool,

    /// Use the light colour theme
    #[arg(long)]
    light: bool,

    /// Run the algorithm step by step instead of replaying a recorded trace
    #[arg(long)]
    live: bool,

    /// Seed for reproducible arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Build the run configuration: file (or defaults), then flag overrides
    fn into_config(self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if self.min.is_some() || self.max.is_some() {
            config.range = ValueRange {
                min: self.min.unwrap_or(config.range.min),
                max: self.max.unwrap_or(config.range.max),
            };
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if self.sound {
            config.sound = true;
        }
        if self.light {
            config.dark_theme = false;
        }
        if self.live {
            config.mode = PlaybackMode::Live;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// The TUI owns the terminal, so logs only go to a file when asked for
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Args::parse();

    if let Some(path) = args.log_file.take() {
        init_logging(&path)?;
    }

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        algorithm = config.algorithm.key(),
        length = config.length,
        delay_ms = config.delay_ms,
        mode = %config.mode,
        "starting sortty"
    );

    let visualizer = Visualizer::new(config)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(visualizer);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
