//! Guess evaluation and round state
//!
//! A [`Round`] is the append-only list of guesses made against one secret.
//! It is over when the latest guess is correct or all attempts are used,
//! and nothing can be appended after that.

use crate::catalog::{names_match, Location};
use crate::constants::game::MAX_ATTEMPTS;
use crate::error::{Error, Result};
use crate::geo::{distance_km, initial_bearing, CompassDirection};
use serde::{Deserialize, Serialize};

/// One evaluated attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// Catalog name of the guessed location
    pub name: String,
    /// Great-circle distance to the secret, rounded to whole kilometers
    pub distance_km: u32,
    /// Octant pointing from the guess toward the secret
    pub direction: CompassDirection,
    /// Whether the guess names the secret
    pub is_correct: bool,
}

impl Guess {
    /// Score `guessed` against `secret`
    pub fn score(guessed: &Location, secret: &Location) -> Self {
        let from = guessed.coords();
        let to = secret.coords();

        Self {
            name: guessed.name.clone(),
            distance_km: distance_km(from, to),
            direction: CompassDirection::from_bearing(initial_bearing(from, to)),
            is_correct: guessed.is_named(&secret.name),
        }
    }
}

/// Round lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Won and Lost are terminal
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in_progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Guesses made against one secret
///
/// Only built through [`Round::new`] and [`Round::submit`], so it never
/// holds more than [`MAX_ATTEMPTS`] guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    guesses: Vec<Guess>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    /// Create an empty round with the standard attempt cap
    pub fn new() -> Self {
        Self {
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Guesses in attempt order
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Maximum number of guesses
    pub fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }

    /// Attempts left before the round is lost
    pub fn remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Most recent guess
    pub fn last(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// Current lifecycle state
    pub fn status(&self) -> RoundStatus {
        match self.guesses.last() {
            Some(guess) if guess.is_correct => RoundStatus::Won,
            _ if self.guesses.len() >= MAX_ATTEMPTS => RoundStatus::Lost,
            _ => RoundStatus::InProgress,
        }
    }

    /// Terminal flag: won or out of attempts
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Check whether a name was already guessed this round
    pub fn has_guessed(&self, name: &str) -> bool {
        self.guesses.iter().any(|g| names_match(&g.name, name))
    }

    /// Evaluate a guess and append it to this round
    ///
    /// Fails with [`Error::RoundAlreadyOver`] once terminal and with
    /// [`Error::DuplicateGuess`] for a repeated name. Neither failure
    /// changes the round.
    pub fn submit(&mut self, guessed: &Location, secret: &Location) -> Result<&Guess> {
        if self.is_over() {
            return Err(Error::RoundAlreadyOver);
        }
        if self.has_guessed(&guessed.name) {
            return Err(Error::DuplicateGuess(guessed.name.clone()));
        }

        let index = self.guesses.len();
        self.guesses.push(Guess::score(guessed, secret));
        Ok(&self.guesses[index])
    }
}

/// Evaluate a guess against the secret, returning the updated round
///
/// The input round is left untouched.
pub fn evaluate_guess(guessed: &Location, secret: &Location, round: &Round) -> Result<Round> {
    let mut next = round.clone();
    next.submit(guessed, secret)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn japan() -> Location {
        Location::new("Japan", 36.2048, 138.2529)
    }

    fn france() -> Location {
        Location::new("France", 46.2276, 2.2137)
    }

    fn wrong_guesses() -> Vec<Location> {
        vec![
            france(),
            Location::new("Chile", -35.6751, -71.543),
            Location::new("Kenya", -0.0236, 37.9062),
            Location::new("Canada", 56.1304, -106.3468),
            Location::new("India", 20.5937, 78.9629),
            Location::new("Spain", 40.4637, -3.7492),
            Location::new("Peru", -9.19, -75.0152),
        ]
    }

    #[test]
    fn test_new_round() {
        let round = Round::new();
        assert!(round.guesses().is_empty());
        assert_eq!(round.max_attempts(), 6);
        assert_eq!(round.remaining(), 6);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert!(!round.is_over());
    }

    #[test]
    fn test_france_against_japan() {
        let round = evaluate_guess(&france(), &japan(), &Round::new()).unwrap();
        let guess = round.last().unwrap();

        assert_eq!(guess.name, "France");
        assert!((9840..=9860).contains(&guess.distance_km));
        assert_eq!(guess.direction, CompassDirection::NE);
        assert!(!guess.is_correct);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_lowercase_name_is_correct() {
        let guessed = Location::new("japan", 36.2048, 138.2529);
        let round = evaluate_guess(&guessed, &japan(), &Round::new()).unwrap();
        assert!(round.last().unwrap().is_correct);
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_correctness_ignores_coordinates() {
        let far_japan = Location::new("Japan", -40.0, -70.0);
        let round = evaluate_guess(&far_japan, &japan(), &Round::new()).unwrap();
        let guess = round.last().unwrap();
        assert!(guess.is_correct);
        assert!(guess.distance_km > 0);
    }

    #[test]
    fn test_shared_coordinates_not_correct() {
        let twin = Location::new("Not Japan", 36.2048, 138.2529);
        let round = evaluate_guess(&twin, &japan(), &Round::new()).unwrap();
        let guess = round.last().unwrap();
        assert_eq!(guess.distance_km, 0);
        assert!(!guess.is_correct);
    }

    #[test]
    fn test_six_wrong_guesses_lose() {
        let secret = japan();
        let mut round = Round::new();
        let guesses = wrong_guesses();

        for guessed in &guesses[..6] {
            round = evaluate_guess(guessed, &secret, &round).unwrap();
        }

        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.remaining(), 0);

        let result = evaluate_guess(&guesses[6], &secret, &round);
        assert!(matches!(result, Err(Error::RoundAlreadyOver)));
        assert_eq!(round.guesses().len(), 6);
    }

    #[test]
    fn test_win_on_third_attempt() {
        let secret = japan();
        let mut round = Round::new();
        let guesses = wrong_guesses();

        round.submit(&guesses[0], &secret).unwrap();
        round.submit(&guesses[1], &secret).unwrap();
        round.submit(&secret, &secret).unwrap();

        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.guesses().len(), 3);

        for guessed in &guesses[2..] {
            assert!(matches!(round.submit(guessed, &secret), Err(Error::RoundAlreadyOver)));
        }
        assert_eq!(round.guesses().len(), 3);
    }

    #[test]
    fn test_duplicate_guess_rejected() {
        let secret = japan();
        let round = evaluate_guess(&france(), &secret, &Round::new()).unwrap();

        let shouting = Location::new("FRANCE", 46.2276, 2.2137);
        let result = evaluate_guess(&shouting, &secret, &round);

        assert!(matches!(result, Err(Error::DuplicateGuess(_))));
        assert_eq!(round.guesses().len(), 1);
        assert_eq!(round.remaining(), 5);
    }

    #[test]
    fn test_evaluate_leaves_input_untouched() {
        let before = Round::new();
        let after = evaluate_guess(&france(), &japan(), &before).unwrap();
        assert!(before.guesses().is_empty());
        assert_eq!(after.guesses().len(), 1);
    }

    #[test]
    fn test_attempt_cap_never_exceeded() {
        let secret = japan();
        let mut round = Round::new();
        for guessed in wrong_guesses().iter().cycle().take(20) {
            let _ = round.submit(guessed, &secret);
            assert!(round.guesses().len() <= MAX_ATTEMPTS);
        }
    }

    #[test]
    fn test_round_serialization() {
        let round = evaluate_guess(&france(), &japan(), &Round::new()).unwrap();
        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["guesses"][0]["name"], "France");
        assert_eq!(json["guesses"][0]["direction"], "NE");
        assert!(json.get("max_attempts").is_none());
    }

    #[test]
    fn test_submit_returns_appended_guess() {
        let secret = japan();
        let mut round = Round::new();
        round.submit(&france(), &secret).unwrap();

        let spain = Location::new("Spain", 40.4637, -3.7492);
        let guess = round.submit(&spain, &secret).unwrap().clone();
        assert_eq!(guess.name, "Spain");
        assert_eq!(round.guesses()[1], guess);
        assert_eq!(round.remaining(), 4);
    }

    #[test]
    fn test_cap_fixed_at_six() {
        let secret = japan();
        let mut round = Round::new();
        for guessed in &wrong_guesses()[..3] {
            round.submit(guessed, &secret).unwrap();
        }
        let copy = round.clone();
        assert_eq!(copy.max_attempts(), MAX_ATTEMPTS);
        assert_eq!(copy.remaining(), MAX_ATTEMPTS - 3);
    }
}
