mod app;
mod config;
mod error;
mod keymap;
mod mirror;
mod paths;
mod terminal;
mod text;

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::Event;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::{App, Flow};
use crate::config::HostConfig;
use crate::error::HostError;
use crate::keymap::action_for;
use crate::terminal::Terminal;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HostError> {
    init_logging()?;

    let mut app = App::new(HostConfig::default());
    let mut term = Terminal::new()?;

    loop {
        let (width, height) = term.size();
        term.draw(&app.frame(width, height))?;

        for event in term.poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event
                && let Some(action) = action_for(key)
                && app.handle(action) == Flow::Quit
            {
                info!("Quit with {} items", app.adapter().item_count());
                return Ok(());
            }
        }
    }
}

fn init_logging() -> Result<(), HostError> {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("swipelist-tui.log"));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    info!("Logging to {}", path.display());
    Ok(())
}
