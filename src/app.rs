use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::change::{percentage_change, price_change};
use crate::config::Config;
use crate::logging::ErrorLog;
use crate::presenter::{ColorMode, Presenter};
use crate::store::PriceStore;

pub struct App {
    config: Config,
    store: PriceStore,
    log: ErrorLog,
}

impl App {
    pub fn new(config: Config) -> Self {
        let store = PriceStore::new(&config.data_file);
        let log = ErrorLog::new(&config.log_file);
        Self { config, store, log }
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let presenter = Presenter::new(io::stdout(), ColorMode::Ansi);
        self.run_with(&mut input, presenter)
    }

    fn run_with<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        mut presenter: Presenter<W>,
    ) -> Result<()> {
        // A corrupt or unreadable data file is logged and then treated the
        // same as having no prior data.
        let last_price = match self.store.read_last_price() {
            Ok(price) => price,
            Err(e) => {
                let _ = self.log.append(&format!("Error reading last price: {}", e));
                None
            }
        };

        presenter.prompt(&self.config.stock_name)?;
        let mut line = String::new();
        input.read_line(&mut line)?;

        let current_price: f64 = match line.trim().parse() {
            Ok(price) => price,
            Err(_) => {
                let _ = self
                    .log
                    .append("Invalid input. Please enter a valid number.");
                presenter.invalid_input_notice()?;
                return Ok(());
            }
        };

        // Best-effort write: a failure is logged but does not stop the run.
        if let Err(e) = self.store.append_price(current_price) {
            let _ = self
                .log
                .append(&format!("Error writing current price: {}", e));
        }

        match last_price {
            Some(last) => {
                let change = price_change(last, current_price);
                let percent = percentage_change(last, current_price);
                presenter.display_result(current_price, change, percent)?;
            }
            None => presenter.first_run_notice()?,
        }

        Ok(())
    }
}
