//! Display layer: runs calculations and writes them out.
//!
//! A session owns its presentation state (format, colors); the calculator
//! stays a pure function of the input string.

use crate::config::{Config, OutputFormat};
use crate::error::FormatError;
use crate::models::SubnetResult;
use crate::output::{render_csv, render_json, render_table};
use crate::processing::SubnetCalculator;
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter IP with NEW Prefix (Ex: 192.168.1.50/26): ";

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

pub struct Session {
    calculator: SubnetCalculator,
    format: OutputFormat,
    color: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            calculator: SubnetCalculator::new(config.max_rows),
            format: config.format,
            color: config.color,
        }
    }

    /// Calculate one input and render it in the session's format.
    pub fn render(&self, raw_input: &str) -> Result<String, Box<dyn Error>> {
        let raw_input = raw_input.trim();
        let result = self.calculator.compute(raw_input)?;
        log::info!(
            "{raw_input} -> {} ({} of {} subnets listed)",
            result.network,
            result.rows.len(),
            result.total_subnets()
        );
        self.render_result(raw_input, &result)
    }

    fn render_result(
        &self,
        raw_input: &str,
        result: &SubnetResult,
    ) -> Result<String, Box<dyn Error>> {
        let text = match self.format {
            OutputFormat::Table => render_table(result, self.color),
            OutputFormat::Csv => render_csv(result),
            OutputFormat::Json => {
                let mut json = render_json(raw_input, result, chrono::Utc::now())?;
                json.push('\n');
                json
            }
        };
        Ok(text)
    }

    /// Message for a rejected input, red when colors are on.
    pub fn error_message(&self, err: &FormatError) -> String {
        let msg = format!("Error: {err}");
        if self.color {
            msg.red().to_string()
        } else {
            msg
        }
    }

    /// Prompt for inputs until a blank line, a quit word or EOF.
    ///
    /// Rendered results go to `out`. Prompts and error messages go to `term`,
    /// so `out` holds nothing but CSV or JSON when piped.
    /// A rejected input prints its message and prompts again; output already
    /// written is left as it was.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of inputs calculated successfully
    pub fn run_interactive<R, W, T>(
        &self,
        input: R,
        out: &mut W,
        term: &mut T,
    ) -> Result<usize, Box<dyn Error>>
    where
        R: BufRead,
        W: Write,
        T: Write,
    {
        let mut calculated = 0;
        let mut lines = input.lines();
        loop {
            write!(term, "{PROMPT}")?;
            term.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(term)?;
                    break;
                }
            };
            let line = line.trim();
            if line.is_empty() || QUIT_WORDS.contains(&line.to_ascii_lowercase().as_str()) {
                break;
            }

            match self.render(line) {
                Ok(text) => {
                    write!(out, "{text}")?;
                    out.flush()?;
                    calculated += 1;
                }
                Err(e) => match e.downcast_ref::<FormatError>() {
                    Some(format_err) => {
                        log::warn!("Rejected input '{line}': {format_err}");
                        writeln!(term, "{}", self.error_message(format_err))?;
                    }
                    None => return Err(e),
                },
            }
        }
        log::info!("Session ended after {calculated} calculations");
        Ok(calculated)
    }
}
