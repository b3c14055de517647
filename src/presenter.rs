use anyhow::Result;
use std::io::Write;

pub const GREEN: &str = "\x1b[92m";
pub const RED: &str = "\x1b[91m";
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Ansi,
    Plain,
}

impl ColorMode {
    fn wrap(&self, color: &str, text: &str) -> String {
        match self {
            ColorMode::Ansi => format!("{}{}{}", color, text, RESET),
            ColorMode::Plain => text.to_string(),
        }
    }
}

/// Zero counts as non-positive and takes the red path.
pub fn change_color(change: f64) -> &'static str {
    if change > 0.0 {
        GREEN
    } else {
        RED
    }
}

pub struct Presenter<W: Write> {
    out: W,
    mode: ColorMode,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, mode: ColorMode) -> Self {
        Self { out, mode }
    }

    pub fn prompt(&mut self, stock_name: &str) -> Result<()> {
        write!(self.out, "Enter the current price for {}: ", stock_name)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn display_result(&mut self, current: f64, change: f64, percent_change: f64) -> Result<()> {
        let color = change_color(change);
        writeln!(self.out, "Current price: {}", current)?;
        let change_line = self.mode.wrap(color, &format!("Change: {:.2}", change));
        writeln!(self.out, "{}", change_line)?;
        let percent_line = self
            .mode
            .wrap(color, &format!("Percent change: {:.2}%", percent_change));
        writeln!(self.out, "{}", percent_line)?;
        Ok(())
    }

    pub fn first_run_notice(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "No previous data available. Current price recorded."
        )?;
        Ok(())
    }

    pub fn invalid_input_notice(&mut self) -> Result<()> {
        writeln!(self.out, "Invalid input. Please enter a valid number.")?;
        Ok(())
    }

    pub fn unexpected_error_notice(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "An unexpected error occurred. Please check the log file."
        )?;
        Ok(())
    }
}
