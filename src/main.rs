mod app;
mod change;
mod config;
mod logging;
mod presenter;
mod store;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;
use logging::ErrorLog;
use presenter::{ColorMode, Presenter};
use std::io;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    let config = Config::load().unwrap_or_default();
    let log = ErrorLog::new(&config.log_file);

    let mut app = App::new(config);
    if let Err(e) = app.run() {
        let _ = log.append(&format!("Unexpected error: {}", e));
        let mut presenter = Presenter::new(io::stdout(), ColorMode::Ansi);
        let _ = presenter.unexpected_error_notice();
    }

    // Failures are reported through the log and a user-facing message; the
    // process itself terminates normally either way.
    Ok(())
}
