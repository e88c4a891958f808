//! Play command handler
//!
//! Runs an interactive round on stdin/stdout.

use crate::catalog::Catalog;
use crate::cli::{init_logging, parse_date};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{get_formatter, OutputFormatter};
use crate::game::{Game, GameMode};
use crate::selector::{get_picker, today_utc, TargetPicker};
use clap::Args;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Play command arguments
#[derive(Args)]
pub struct PlayArgs {
    /// Play the daily round of this date (YYYY-MM-DD) instead of today
    #[arg(long, conflicts_with = "practice")]
    pub date: Option<String>,

    /// Practice with a random secret
    #[arg(long)]
    pub practice: bool,

    /// Seed for practice secrets
    #[arg(long, requires = "practice")]
    pub seed: Option<u64>,

    /// Catalog JSON file (defaults to the built-in countries)
    #[arg(long, short = 'c')]
    pub catalog: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the play command
pub fn run(args: PlayArgs) -> Result<()> {
    init_logging("warn");

    let config = Config::load()?;
    let catalog = Catalog::load(args.catalog.as_deref().or(config.catalog_path()))?;

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let picker = get_picker(args.seed);
    let pinned = args.date.is_some();
    let game = if args.practice {
        Game::practice(&catalog, picker.as_ref(), today_utc())?
    } else {
        let date = match args.date.as_deref() {
            Some(date) => parse_date(date)?,
            None => today_utc(),
        };
        Game::daily(&catalog, date)?
    };

    info!(mode = %game.mode(), date = %game.date(), locations = catalog.len(), "Starting round");

    let mut session = Session {
        game,
        catalog: &catalog,
        config: &config,
        formatter: formatter.as_ref(),
        picker: picker.as_ref(),
        pinned,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

/// Interactive round over any line reader and writer
struct Session<'a> {
    game: Game,
    catalog: &'a Catalog,
    config: &'a Config,
    formatter: &'a dyn OutputFormatter,
    picker: &'a dyn TargetPicker,
    /// Daily round for an explicit date: never rolls over
    pinned: bool,
}

impl Session<'_> {
    fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(
            out,
            "Guess the {} location in {} tries. Type :quit to leave{}.",
            self.game.mode(),
            self.game.round().max_attempts(),
            if self.game.mode() == GameMode::Practice { ", :reset for a new secret" } else { "" }
        )?;
        self.render(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            match line {
                "" => continue,
                ":quit" | ":q" => break,
                ":reset" => {
                    match self.game.reset(self.catalog, self.picker) {
                        Ok(()) => {
                            writeln!(out, "New practice secret chosen.")?;
                            self.render(&mut out)?;
                        }
                        Err(e) => writeln!(out, "{}", e)?,
                    }
                    continue;
                }
                _ => {}
            }

            if !self.pinned && self.game.roll_over(self.catalog, today_utc())? {
                writeln!(out, "A new day has started; the round was reset.")?;
            }

            match self.game.guess(self.catalog, line) {
                Ok(guess) => {
                    debug!(guess = %guess.name, distance_km = guess.distance_km, "Guess evaluated");
                    self.render(&mut out)?;
                }
                Err(Error::UnknownLocation(name)) => {
                    let suggestions = self.catalog.suggest(&name, self.config.game.suggestions);
                    if suggestions.is_empty() {
                        writeln!(out, "Unknown location: {}", name)?;
                    } else {
                        let names: Vec<&str> = suggestions.iter().map(|l| l.name.as_str()).collect();
                        writeln!(out, "Did you mean: {}", names.join(", "))?;
                    }
                }
                Err(e @ (Error::DuplicateGuess(_) | Error::RoundAlreadyOver)) => {
                    writeln!(out, "{}", e)?;
                }
                Err(e) => return Err(e),
            }

            if self.game.status().is_terminal() && self.game.mode() == GameMode::Daily {
                break;
            }
        }

        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let zoom = self.config.map_zoom(self.game.round().guesses().len());
        let text = self.formatter.format(&self.game.view(zoom))?;
        writeln!(out, "{}", text.trim_end())?;
        Ok(())
    }
}
