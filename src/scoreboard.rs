//! Scoring and the end-of-game summary
//!
//! This module tracks the outcome of every answered round and condenses
//! them into the final summary shown once the deck is exhausted.

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

use crate::catalog::message::Message;
use crate::catalog::roster::Sender;

/// The outcome of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Verdict {
    /// The guess named the true sender
    Correct,
    /// The guess named someone else
    Incorrect,
}

impl Verdict {
    /// Judges a guess against the message it was made for
    pub fn judge(message: &Message, guess: &Sender) -> Self {
        if message.is_sent_by(guess) {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Checks if this verdict earns a point
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// How well the player did over a whole deck
///
/// Thresholds: every round correct is `Perfect`, more than half is
/// `Engaged`, anything else is `Oblivious`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Every round was answered correctly
    Perfect,
    /// Strictly more than half of the rounds were answered correctly
    Engaged,
    /// Half or fewer of the rounds were answered correctly
    Oblivious,
}

impl Rating {
    /// Rates a final score out of `total` rounds
    pub fn rate(score: usize, total: usize) -> Self {
        if score == total {
            Self::Perfect
        } else if score * 2 > total {
            Self::Engaged
        } else {
            Self::Oblivious
        }
    }

    /// A one-line remark to show alongside the final score
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Perfect => "You are the ultimate lurker. 👁️",
            Self::Engaged => "You're definitely in the group chat.",
            Self::Oblivious => "Do you even read the messages? 💀",
        }
    }
}

/// Final statistics for a completed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of correct guesses
    score: usize,
    /// Number of rounds in the deck
    total: usize,
    /// Number of guesses with each verdict
    tally: EnumMap<Verdict, usize>,
    /// Overall rating of the score
    rating: Rating,
}

impl Summary {
    /// Returns the number of correct guesses
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the number of rounds in the deck
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns how many guesses received each verdict
    pub fn tally(&self) -> &EnumMap<Verdict, usize> {
        &self.tally
    }

    /// Returns the rating of the score
    pub fn rating(&self) -> Rating {
        self.rating
    }
}

/// Running record of one game's verdicts
///
/// Verdicts are only ever appended, so the score can never decrease.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    /// Verdict of every answered round, in play order
    history: Vec<Verdict>,
    /// Count of each verdict in `history`
    tally: EnumMap<Verdict, usize>,
}

impl Scoreboard {
    /// Records the verdict of a newly answered round
    pub fn record(&mut self, verdict: Verdict) {
        self.history.push(verdict);
        self.tally[verdict] += 1;
    }

    /// Returns the number of correct guesses so far
    pub fn score(&self) -> usize {
        self.tally[Verdict::Correct]
    }

    /// Returns the number of rounds answered so far
    pub fn answered(&self) -> usize {
        self.history.len()
    }

    /// Returns the verdicts in play order
    pub fn history(&self) -> &[Verdict] {
        &self.history
    }

    /// Summarizes the game over a deck of `total` rounds
    pub fn summary(&self, total: usize) -> Summary {
        let score = self.score();
        Summary {
            score,
            total,
            tally: self.tally,
            rating: Rating::rate(score, total),
        }
    }
}
