mod types;
mod config;
mod content;
mod error;
mod export;
mod lessons;
mod units;
mod ui;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::process::exit;
use std::time::{Duration, Instant};

use config::{Cli, SavedConfig, load_config, reset_config, save_config};
use error::Result;
use types::{App, TICK_RATE_MS};

fn display_startup_info(config: &SavedConfig) {
    eprintln!("🚀 Starting ByteWise...");
    match config.seed {
        Some(seed) => eprintln!("🎲 Question order: seeded ({})", seed),
        None => eprintln!("🎲 Question order: random"),
    }
    eprintln!("🎯 Tip: F1 for help, F5 to start over, Esc to quit");
    eprintln!();
}

fn run_tui(config: &SavedConfig) -> Result<()> {
    let mut app = App::new(config.seed, config.pacing(), config.show_help);
    let mut terminal = ui::setup_terminal()?;

    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    let mut last_tick = Instant::now();

    let result = (|| -> Result<()> {
        loop {
            // --- Draw UI ---
            ui::render_ui(&app, &mut terminal)?;

            // --- Input Handling ---
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && ui::input::handle_key_event(&mut app, key, Instant::now())
                    {
                        return Ok(()); // Exit condition
                    }
                }
            }

            // --- Tick-based updates ---
            if last_tick.elapsed() >= tick_rate {
                app.on_tick(Instant::now());
                last_tick = Instant::now();
            }
        }
    })();

    ui::restore_terminal(&mut terminal)?;
    result
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    // Handle reset flag first
    if cli.reset {
        match reset_config() {
            Ok(true) => println!("✅ Saved configuration has been reset."),
            Ok(false) => println!("ℹ️  No saved configuration found to reset."),
            Err(e) => {
                eprintln!("❌ Error resetting configuration: {}", e);
                exit(1);
            }
        }
        return Ok(());
    }

    let config = load_config().merged_with(&cli);

    if cli.save_config {
        let path = save_config(&config)?;
        eprintln!("💾 Configuration saved to {}", path.display());
    }

    if cli.json {
        println!("{}", export::course_json()?);
        return Ok(());
    }

    display_startup_info(&config);
    run_tui(&config)
}
