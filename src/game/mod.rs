//! Game sessions
//!
//! A [`Game`] ties a secret location to a [`Round`]. Daily games derive
//! the secret from the date and follow the calendar; practice games draw
//! a random secret and may be reset at will.

use crate::catalog::{Catalog, Location};
use crate::error::{Error, Result};
use crate::round::{Guess, Round, RoundStatus};
use crate::selector::{select_daily_target, select_random_target, TargetPicker};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the secret was chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Secret is a pure function of the date
    #[default]
    Daily,
    /// Secret is drawn at random (development and testing)
    Practice,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Practice => write!(f, "practice"),
        }
    }
}

/// A secret plus the round being played against it
#[derive(Debug, Clone)]
pub struct Game {
    mode: GameMode,
    date: NaiveDate,
    secret: Location,
    round: Round,
}

impl Game {
    /// Start the daily game for `date`
    pub fn daily(catalog: &Catalog, date: NaiveDate) -> Result<Self> {
        let secret = select_daily_target(date, catalog)?.clone();
        Ok(Self {
            mode: GameMode::Daily,
            date,
            secret,
            round: Round::new(),
        })
    }

    /// Start a practice game with a random secret
    pub fn practice(catalog: &Catalog, picker: &dyn TargetPicker, date: NaiveDate) -> Result<Self> {
        let secret = select_random_target(catalog, picker)?.clone();
        Ok(Self {
            mode: GameMode::Practice,
            date,
            secret,
            round: Round::new(),
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn secret(&self) -> &Location {
        &self.secret
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    /// Resolve free text against the catalog and evaluate it
    ///
    /// Unknown names fail with [`Error::UnknownLocation`] without using an attempt.
    pub fn guess(&mut self, catalog: &Catalog, input: &str) -> Result<&Guess> {
        let guessed = catalog
            .resolve(input)
            .ok_or_else(|| Error::UnknownLocation(input.trim().to_string()))?;
        self.round.submit(guessed, &self.secret)
    }

    /// Move a daily game onto `today`, discarding the old round
    ///
    /// Returns true when the day changed. Practice games never roll over.
    pub fn roll_over(&mut self, catalog: &Catalog, today: NaiveDate) -> Result<bool> {
        if self.mode != GameMode::Daily || self.date == today {
            return Ok(false);
        }

        *self = Self::daily(catalog, today)?;
        Ok(true)
    }

    /// Start over with a fresh random secret (practice games only)
    pub fn reset(&mut self, catalog: &Catalog, picker: &dyn TargetPicker) -> Result<()> {
        if self.mode != GameMode::Practice {
            return Err(Error::ResetNotAllowed);
        }

        *self = Self::practice(catalog, picker, self.date)?;
        Ok(())
    }

    /// Serializable snapshot for rendering
    ///
    /// The answer is only revealed once the round is over.
    pub fn view(&self, zoom: u8) -> GameView {
        let status = self.round.status();
        GameView {
            mode: self.mode,
            date: self.date,
            status,
            guesses: self.round.guesses().to_vec(),
            attempts: self.round.guesses().len(),
            max_attempts: self.round.max_attempts(),
            remaining: self.round.remaining(),
            zoom,
            answer: status.is_terminal().then(|| self.secret.name.clone()),
        }
    }
}

/// Snapshot of a game as shown to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub mode: GameMode,
    pub date: NaiveDate,
    pub status: RoundStatus,
    pub guesses: Vec<Guess>,
    pub attempts: usize,
    pub max_attempts: usize,
    pub remaining: usize,
    /// Map zoom level for the current number of guesses
    pub zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}
