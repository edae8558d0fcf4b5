//! Chronoscope - a terminal-based historical statistics dashboard.

use anyhow::Result;
use chronoscope::app::App;
use chronoscope::timeline::FrameClock;
use chronoscope::ui;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "chronoscope")]
#[command(about = "A terminal-based historical statistics dashboard", long_about = None)]
struct Args {
    /// Dataset file (CSV or JSON) to import at startup
    data: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Seed for the generator's random jitter (reproducible datasets)
    #[arg(long)]
    seed: Option<u64>,

    /// Initial playback speed in years per second (0.5 to 2)
    #[arg(long)]
    speed: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Chronoscope");
    }

    // Validate path if provided
    if let Some(ref path) = args.data {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    let mut app = App::new(args.seed);

    // The CLI is a programmatic caller, so an out-of-range speed is a
    // startup error rather than being silently clamped.
    if let Some(speed) = args.speed {
        app.set_speed(speed)?;
    }

    if let Some(ref path) = args.data {
        app.import_file(path);
        if let Some(ref message) = app.error_message {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Chronoscope exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut clock = FrameClock::new();
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        // Drive dataset loading and playback from wall time, then render.
        app.on_tick(clock.elapsed_ms());
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // File browser mode - handle separately
                if app.file_browser_mode {
                    match (key.modifiers, key.code) {
                        (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                            app.close_file_browser();
                        }
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.browser_up();
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.browser_down();
                        }
                        (KeyModifiers::NONE, KeyCode::Enter)
                        | (KeyModifiers::NONE, KeyCode::Char('l'))
                        | (KeyModifiers::NONE, KeyCode::Right) => {
                            app.browser_select();
                        }
                        (KeyModifiers::NONE, KeyCode::Char('h'))
                        | (KeyModifiers::NONE, KeyCode::Left) => {
                            app.browser_parent();
                        }
                        (KeyModifiers::NONE, KeyCode::Char('.')) => {
                            app.toggle_hidden();
                        }
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Playback
                    (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                        app.toggle_playback();
                    }

                    // Scrubbing
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.step_year(-1);
                    }
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.step_year(1);
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('b')) => {
                        app.step_year(-10);
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('f')) => {
                        app.step_year(10);
                    }

                    // Vim navigation to the timeline ends
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            let min = app.timeline.min_year();
                            let _ = app.set_year(min);
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        let max = app.timeline.max_year();
                        let _ = app.set_year(max);
                    }

                    // Speed
                    (KeyModifiers::NONE, KeyCode::Char('+'))
                    | (KeyModifiers::NONE, KeyCode::Char('=')) => {
                        app.speed_up();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('-'))
                    | (KeyModifiers::NONE, KeyCode::Char('_')) => {
                        app.speed_down();
                    }

                    // Dataset
                    (KeyModifiers::NONE, KeyCode::Char('i')) => {
                        app.open_file_browser();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('R')) => {
                        app.reset_data();
                    }

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_current_record();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.copy_series();
                    }

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }

                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, Space=play, h/l=scrub, g/G=ends, +/-=speed, i=import, R=reset, y/c=copy, T=theme".to_string();
                    }

                    _ => {
                        pending_g = false;
                    }
                }
            }
        }
    }
}
