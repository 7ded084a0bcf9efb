mod app;
mod error;
mod paths;
mod sample;
mod terminal;

use std::fs::{self, File};

use grouplist::model::load_items_from;
use grouplist::{Item, WidgetConfig};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::TuiError;
use crate::terminal::Terminal;

fn main() {
    paths::rotate_logs();
    init_logging();

    if let Err(e) = run() {
        log::error!("[main] {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to `<cache dir>/latest.log`, or the working directory when no
/// cache directory is available.
fn init_logging() {
    let log_file = paths::log_file()
        .and_then(|path| {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).ok()?;
            }
            File::create(path).ok()
        })
        .or_else(|| File::create("grouplist-tui.log").ok());

    let Some(log_file) = log_file else {
        eprintln!("logging disabled: no writable log file");
        return;
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("logging disabled: {e}");
    }
}

fn run() -> Result<(), TuiError> {
    let config = load_config()?;
    let items = load_items()?;
    log::info!("[main] starting with {} items", items.len());

    let mut app = App::new(items, config)?;
    let mut terminal = Terminal::new()?;
    app.run(&mut terminal)
}

fn load_config() -> Result<WidgetConfig, TuiError> {
    match paths::config_file() {
        Some(path) if path.exists() => {
            log::debug!("[main] config from {}", path.display());
            Ok(WidgetConfig::load(path)?)
        }
        _ => Ok(WidgetConfig::default()),
    }
}

fn load_items() -> Result<Vec<Item>, TuiError> {
    match paths::items_file() {
        Some(path) if path.exists() => {
            log::debug!("[main] items from {}", path.display());
            Ok(load_items_from(path)?)
        }
        _ => Ok(sample::items()),
    }
}
