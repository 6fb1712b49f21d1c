//! Core game logic and state management
//!
//! This module contains the game engine: it deals a shuffled deck from the
//! catalog, accepts at most one guess per round, keeps score, and latches
//! the game over once the player advances past the last round.
//!
//! ```text
//! Loading --start--> Playing(0, unlocked)
//! Playing(p, unlocked) --guess--> Playing(p, locked)
//! Playing(p, locked) --advance--> Playing(p + 1, unlocked)   if p + 1 < deck length
//! Playing(p, locked) --advance--> Done                        otherwise
//! Done --start--> Playing(0, unlocked)
//! ```

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog::{Catalog, roster::Sender},
    deck::Deck,
    game_id::GameId,
    scoreboard::{Scoreboard, Summary, Verdict},
    snapshot::{Phase, Snapshot},
};

/// A guess accepted for a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guess {
    /// Who the player said sent the message
    sender: Sender,
    /// Whether that was right
    verdict: Verdict,
}

impl Guess {
    /// Returns the sender the player chose
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns whether the guess was right
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// One position in the deck and what happened there
///
/// A round is locked as soon as it holds a guess; the lock is what keeps a
/// repeated guess from being scored twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    /// Index of the round's message in the deck
    index: usize,
    /// The accepted guess, if any
    guess: Option<Guess>,
}

impl Round {
    fn new(index: usize) -> Self {
        Self { index, guess: None }
    }

    /// Returns the index of this round's message in the deck
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the accepted guess, if any
    pub fn guess(&self) -> Option<&Guess> {
        self.guess.as_ref()
    }

    /// Checks whether this round has already been answered
    pub fn is_locked(&self) -> bool {
        self.guess.is_some()
    }
}

/// Represents the current phase of the game
#[derive(Debug, Clone)]
pub enum State {
    /// No deck has been dealt yet
    Loading,
    /// A round is in progress
    Playing(Round),
    /// The player advanced past the last round
    Done {
        /// The final round as it was left (`None` when the deck was empty)
        last: Option<Round>,
        /// Final statistics
        summary: Summary,
    },
}

/// Result of a successful advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A new round started at this index
    Round(usize),
    /// The deck is exhausted
    GameOver,
}

/// Player intents forwarded by a presenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Deal a fresh deck and start from the first round
    Start,
    /// Guess who sent the current message
    Guess(Sender),
    /// Move on from an answered round
    Next,
}

/// Reasons an operation was ignored
///
/// A rejection never changes the game. These arise from ordinary UI races
/// such as double clicks, so callers are expected to drop them.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The guessed sender is not on the roster
    #[error("{0} is not on the roster")]
    InvalidGuess(Sender),
    /// No game has been started
    #[error("no game has been started")]
    NotPlaying,
    /// The round was already answered, or the game is already over
    #[error("operation no longer applies to the current round")]
    Stale,
    /// Advancing requires the current round to be answered first
    #[error("the current round has not been answered")]
    Unanswered,
}

/// Global configuration options for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct Options {
    /// Seed for the deck shuffle (`None` draws a random seed)
    #[garde(skip)]
    seed: Option<u64>,
    /// Whether advancing is refused until the current round is answered
    #[garde(skip)]
    require_answer: bool,
}

impl Default for Options {
    /// Random decks, and a guess is required before advancing
    fn default() -> Self {
        Self {
            seed: None,
            require_answer: true,
        }
    }
}

impl Options {
    /// Makes every deck reproducible from `seed`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether a round must be answered before advancing
    pub fn with_require_answer(mut self, require_answer: bool) -> Self {
        self.require_answer = require_answer;
        self
    }

    /// Returns the shuffle seed, if fixed
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether a round must be answered before advancing
    pub fn require_answer(&self) -> bool {
        self.require_answer
    }
}

/// The game engine
///
/// Owns the catalog for its whole lifetime and replaces the deck, score and
/// round state on every start. All operations run to completion
/// synchronously; the engine is meant to be driven by one session.
#[derive(Debug)]
pub struct Game {
    /// Messages and roster every deck is dealt from
    catalog: Catalog,
    /// Game configuration options
    options: Options,
    /// Shuffle source, seeded from `options`
    rng: fastrand::Rng,
    /// Identifier of the current game
    id: Option<GameId>,
    /// The current game's play order
    deck: Deck,
    /// Verdicts of the current game
    scoreboard: Scoreboard,
    /// Current phase of the game
    state: State,
}

impl Game {
    /// Creates an engine in the `Loading` state
    ///
    /// No deck is dealt until [`Game::start`] is called.
    pub fn new(catalog: Catalog, options: Options) -> Self {
        Self {
            catalog,
            options,
            rng: options
                .seed
                .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed),
            id: None,
            deck: Deck::default(),
            scoreboard: Scoreboard::default(),
            state: State::Loading,
        }
    }

    /// Starts a new game, discarding any game in progress
    ///
    /// Deals a fresh permutation of the catalog and resets the score and
    /// round state. An empty catalog has no rounds to play, so the game
    /// goes straight to `Done` with a score of zero.
    ///
    /// # Returns
    ///
    /// The identifier of the new game
    pub fn start(&mut self) -> GameId {
        let id = GameId::new();
        self.id = Some(id);
        self.deck = Deck::deal(self.catalog.messages(), &mut self.rng);
        self.scoreboard = Scoreboard::default();

        info!(game = %id, rounds = self.deck.len(), "dealt a new deck");

        if self.deck.is_empty() {
            self.finish(None);
        } else {
            self.state = State::Playing(Round::new(0));
        }

        id
    }

    /// Submits a guess for the current round
    ///
    /// The first valid guess of a round locks it and scores a point if it
    /// names the true sender.
    ///
    /// # Errors
    ///
    /// * `Rejection::InvalidGuess` - `sender` is not on the roster
    /// * `Rejection::NotPlaying` - No game has been started
    /// * `Rejection::Stale` - The round is already locked or the game is over
    pub fn guess(&mut self, sender: &Sender) -> Result<Verdict, Rejection> {
        if !self.catalog.roster().contains(sender) {
            return Err(Rejection::InvalidGuess(sender.clone()));
        }

        let round = match &mut self.state {
            State::Playing(round) => round,
            State::Loading => return Err(Rejection::NotPlaying),
            State::Done { .. } => return Err(Rejection::Stale),
        };

        if round.is_locked() {
            return Err(Rejection::Stale);
        }

        let Some(message) = self.deck.get(round.index) else {
            return Err(Rejection::NotPlaying);
        };

        let verdict = Verdict::judge(message, sender);
        round.guess = Some(Guess {
            sender: sender.clone(),
            verdict,
        });
        self.scoreboard.record(verdict);

        debug!(
            round = round.index,
            guess = %sender,
            ?verdict,
            score = self.scoreboard.score(),
            "guess accepted"
        );

        Ok(verdict)
    }

    /// Moves past the current round
    ///
    /// On the last round this ends the game, leaving the position where it
    /// was. Once the game is over only [`Game::start`] can leave that state.
    ///
    /// # Errors
    ///
    /// * `Rejection::NotPlaying` - No game has been started
    /// * `Rejection::Stale` - The game is already over
    /// * `Rejection::Unanswered` - The round has no guess and
    ///   `Options::require_answer` is set
    pub fn advance(&mut self) -> Result<Progress, Rejection> {
        let round = match &self.state {
            State::Playing(round) => round,
            State::Loading => return Err(Rejection::NotPlaying),
            State::Done { .. } => return Err(Rejection::Stale),
        };

        if self.options.require_answer && !round.is_locked() {
            return Err(Rejection::Unanswered);
        }

        let next = round.index + 1;
        if next < self.deck.len() {
            self.state = State::Playing(Round::new(next));
            debug!(round = next, "advanced to next round");
            Ok(Progress::Round(next))
        } else {
            let last = round.clone();
            self.finish(Some(last));
            Ok(Progress::GameOver)
        }
    }

    /// Applies a presenter's intent
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` of the underlying operation; the game is
    /// unchanged in that case.
    pub fn receive_intent(&mut self, intent: Intent) -> Result<(), Rejection> {
        match intent {
            Intent::Start => {
                self.start();
            }
            Intent::Guess(sender) => {
                self.guess(&sender)?;
            }
            Intent::Next => {
                self.advance()?;
            }
        }
        Ok(())
    }

    /// Captures the observable state of the game
    pub fn snapshot(&self) -> Snapshot {
        let (phase, round, summary) = match &self.state {
            State::Loading => (Phase::Loading, None, None),
            State::Playing(round) => (Phase::Playing, Some(round), None),
            State::Done { last, summary } => {
                (Phase::GameOver, last.as_ref(), Some(summary.clone()))
            }
        };
        let guess = round.and_then(Round::guess);

        Snapshot {
            game: self.id,
            phase,
            deck_length: self.deck.len(),
            position: round.map_or(0, Round::index),
            score: self.scoreboard.score(),
            locked: round.is_some_and(Round::is_locked),
            selected_sender: guess.map(|guess| guess.sender.clone()),
            verdict: guess.map(Guess::verdict),
            game_over: phase == Phase::GameOver,
            is_last_round: round.is_some_and(|round| self.deck.is_last(round.index)),
            current_message: round
                .and_then(|round| self.deck.get(round.index))
                .cloned(),
            roster: self.catalog.roster().clone(),
            summary,
        }
    }

    /// Latches the game over and computes the summary
    fn finish(&mut self, last: Option<Round>) {
        let summary = self.scoreboard.summary(self.deck.len());

        info!(
            game = ?self.id,
            score = summary.score(),
            total = summary.total(),
            rating = ?summary.rating(),
            "game over"
        );

        self.state = State::Done { last, summary };
    }

    /// Returns the current phase of the game
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the identifier of the current game
    pub fn id(&self) -> Option<GameId> {
        self.id
    }

    /// Returns the catalog decks are dealt from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the game configuration options
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the current game's play order
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the current game's verdicts
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
}
