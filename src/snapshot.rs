//! Read-only views of the game handed to presenters
//!
//! A [`Snapshot`] is an owned copy of everything a presenter needs to draw
//! one frame. Presenters never see the engine itself, so nothing they do
//! with a snapshot can change the game.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{
    catalog::{message::Message, roster::Roster, roster::Sender},
    game_id::GameId,
    scoreboard::{Summary, Verdict},
};

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No game has been started yet
    Loading,
    /// A round is being shown
    Playing,
    /// The deck is exhausted and the final score is shown
    GameOver,
}

/// Everything observable about the game at one moment
///
/// While `locked` is false presenters should accept a guess and hide the
/// advance affordance; once `locked` is true they should disable guessing,
/// reveal `current_message.sender`, and offer to advance.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The game being shown, if one has started
    pub game: Option<GameId>,
    /// Which screen to draw
    pub phase: Phase,
    /// Number of rounds in the deck
    pub deck_length: usize,
    /// Index of the current round (0-based)
    pub position: usize,
    /// Number of correct guesses so far
    pub score: usize,
    /// Whether the current round has been answered
    pub locked: bool,
    /// The sender the player chose this round
    pub selected_sender: Option<Sender>,
    /// Whether the chosen sender was right
    pub verdict: Option<Verdict>,
    /// Whether the player has advanced past the last round
    pub game_over: bool,
    /// Whether advancing from here ends the game
    pub is_last_round: bool,
    /// The message for the current round
    pub current_message: Option<Message>,
    /// Every choice to offer, in order
    pub roster: Roster,
    /// Final statistics, once the game is over
    pub summary: Option<Summary>,
}

impl Snapshot {
    /// Converts the snapshot to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}
