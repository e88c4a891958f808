//! Human-readable text output formatter

use crate::error::Result;
use crate::format::{direction_arrow, OutputFormatter};
use crate::game::GameView;
use crate::round::RoundStatus;

/// Text formatter - one line per guess plus the outcome
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable guess list"
    }

    fn format(&self, view: &GameView) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Zoomle - {} ({})\n", view.date, view.mode));
        output.push_str(&format!("Map zoom: {}\n", view.zoom));

        for (i, guess) in view.guesses.iter().enumerate() {
            let hint = if guess.is_correct {
                "correct!".to_string()
            } else {
                format!(
                    "{} km {} {}",
                    guess.distance_km,
                    direction_arrow(guess.direction),
                    guess.direction
                )
            };
            output.push_str(&format!(
                "  {}/{} - {} - {}\n",
                i + 1,
                view.max_attempts,
                guess.name,
                hint
            ));
        }

        match (view.status, view.answer.as_deref()) {
            (RoundStatus::Won, _) => {
                output.push_str(&format!("Solved in {} of {}!\n", view.attempts, view.max_attempts));
            }
            (RoundStatus::Lost, Some(answer)) => {
                output.push_str(&format!("The correct answer was: {}\n", answer));
            }
            _ => {
                output.push_str(&format!("{} guesses left\n", view.remaining));
            }
        }

        Ok(output)
    }
}
