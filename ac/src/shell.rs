//! Interactive session: load data, propose counts, browse reports
//!
//! Accepted records live only as long as the session.

use std::path::PathBuf;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::ReportsConfig;
use crate::desk::Desk;
use crate::render;
use crate::reports;
use crate::validator::Decision;

/// Result of handling one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashResult {
    Continue,
    Quit,
}

/// Interactive session over a [`Desk`]
pub struct ShellSession {
    desk: Desk,
    reports: ReportsConfig,
}

impl ShellSession {
    pub fn new(desk: Desk, reports: ReportsConfig) -> Self {
        Self { desk, reports }
    }

    pub fn desk(&self) -> &Desk {
        &self.desk
    }

    /// Run the readline loop until /quit or Ctrl+D
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            match rl.readline(&format!("{} ", ">".bright_green())) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    if self.handle_line(input) == SlashResult::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Control de Artículos".bright_cyan().bold());
        println!("Publications loaded: {}", self.desk.history().len());
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, input: &str) -> SlashResult {
        let (cmd, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        let rest = rest.trim();

        match cmd {
            "/help" | "/h" => self.print_help(),
            "/quit" | "/q" | "/exit" => return SlashResult::Quit,
            "/load" => self.load(rest),
            "/list" | "/ls" => self.list(),
            "/save" | "/s" => self.save(rest),
            "/records" | "/r" => self.print_records(),
            "/history" => self.print_history(rest),
            "/report" => self.print_report(),
            "/predict" => self.print_predictions(),
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
            }
        }

        SlashResult::Continue
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:26} Load a historical CSV file", "/load <file>".yellow());
        println!("  {:26} List publications", "/list".yellow());
        println!("  {:26} Validate and record a count", "/save <diario> <cantidad>".yellow());
        println!("  {:26} Show accepted records", "/records".yellow());
        println!("  {:26} Show the historical grid", "/history [weeks]".yellow());
        println!("  {:26} Random report for the last week", "/report".yellow());
        println!("  {:26} Naive predictions", "/predict".yellow());
        println!("  {:26} Exit", "/quit".yellow());
        println!();
    }

    fn load(&mut self, path: &str) {
        if path.is_empty() {
            println!("{} Usage: /load <file>", "?".yellow());
            return;
        }
        match self.desk.load(PathBuf::from(path)) {
            Ok(summary) => println!(
                "{} Loaded {} rows for {} publications",
                "✓".green(),
                summary.rows,
                summary.publications
            ),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }

    fn list(&self) {
        let publications = self.desk.history().publications();
        if publications.is_empty() {
            println!("{}", "No publications loaded.".dimmed());
        }
        for name in publications {
            println!("  {}", name);
        }
    }

    fn save(&mut self, args: &str) {
        // The publication name may contain spaces; the count is the last word
        let (publication, count) = args.rsplit_once(char::is_whitespace).unwrap_or(("", args));
        let today = chrono::Local::now().date_naive();

        match self.desk.submit(publication, count, today) {
            Ok(Decision::Accepted) => {
                println!("{} Saved {} articles for {}", "✓".green(), count.trim(), publication.trim());
                self.print_records();
            }
            Ok(rejection) => println!("{} Rejected: {}", "✗".red(), rejection),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }

    fn print_records(&self) {
        let records = self.desk.records().records();
        if records.is_empty() {
            println!("{}", "No accepted records.".dimmed());
            return;
        }
        println!("{}", render::records_table(records));
    }

    fn print_history(&self, weeks: &str) {
        let weeks = match weeks {
            "" => self.reports.grid_weeks,
            n => match n.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    println!("{} Usage: /history [weeks]", "?".yellow());
                    return;
                }
            },
        };
        match reports::historical_grid(self.desk.history(), weeks) {
            Ok(rows) => println!("{}", render::grid_table(&rows)),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }

    fn print_report(&self) {
        match reports::weekly_report(self.desk.history(), &mut rand::rng()) {
            Ok(rows) => println!("{}", render::weekly_table(&rows)),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }

    fn print_predictions(&self) {
        match reports::predictions(self.desk.history(), &mut rand::rng(), self.reports.prediction_jitter) {
            Ok(rows) => println!("{}", render::predictions_table(&rows)),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }
}
