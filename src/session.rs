//! Presentation session management
//!
//! This module defines the trait a rendering layer implements to observe
//! the game, and the session that connects it to the engine. The presenter
//! only ever sees [`Snapshot`]s and only ever speaks in [`Intent`]s; the
//! engine stays the sole authority over game state.

use derive_where::derive_where;
use tracing::debug;

use crate::{
    game::{Game, Intent},
    snapshot::Snapshot,
};

/// Trait for drawing the game
///
/// Implementations might paint a terminal, a web page, or record frames in
/// a test. They must not perform game logic; anything the player does is
/// sent back through [`Session::dispatch`].
pub trait Presenter {
    /// Draws the current state of the game
    ///
    /// Called once when the session is opened and again after every intent
    /// that changed the game.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - The state to draw
    fn render(&self, snapshot: &Snapshot);
}

/// A single player's session: one engine and the presenter observing it
///
/// Intents are applied strictly one at a time, in the order they are
/// dispatched.
#[derive_where(Debug)]
pub struct Session<P> {
    /// The engine that owns all game state
    game: Game,
    /// The rendering layer
    #[derive_where(skip)]
    presenter: P,
}

impl<P: Presenter> Session<P> {
    /// Opens a session and renders the game's initial state
    pub fn new(game: Game, presenter: P) -> Self {
        let session = Self { game, presenter };
        session.render();
        session
    }

    /// Applies a player intent and re-renders if the game changed
    ///
    /// Rejected intents (stale clicks, unknown senders, advancing too early)
    /// are logged and dropped without rendering, since the game did not
    /// change.
    pub fn dispatch(&mut self, intent: Intent) {
        match self.game.receive_intent(intent.clone()) {
            Ok(()) => self.render(),
            Err(rejection) => {
                debug!(?intent, %rejection, "ignored intent");
            }
        }
    }

    /// Returns the engine being presented
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the presenter
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Closes the session, handing back the engine and presenter
    pub fn into_parts(self) -> (Game, P) {
        (self.game, self.presenter)
    }

    fn render(&self) {
        self.presenter.render(&self.game.snapshot());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        catalog::{Catalog, message::Message, roster::Roster, roster::Sender},
        game::Options,
        snapshot::Phase,
    };

    #[derive(Default)]
    struct RecordingPresenter {
        frames: RefCell<Vec<Snapshot>>,
    }

    impl Presenter for RecordingPresenter {
        fn render(&self, snapshot: &Snapshot) {
            self.frames.borrow_mut().push(snapshot.clone());
        }
    }

    impl RecordingPresenter {
        fn frame_count(&self) -> usize {
            self.frames.borrow().len()
        }

        fn last(&self) -> Snapshot {
            self.frames.borrow().last().cloned().unwrap()
        }
    }

    fn create_test_session() -> Session<RecordingPresenter> {
        let catalog = Catalog::new(
            Roster::new(["A", "B"]),
            vec![Message::new("A", "hi"), Message::new("B", "yo")],
        )
        .unwrap();
        Session::new(
            Game::new(catalog, Options::default()),
            RecordingPresenter::default(),
        )
    }

    fn current_sender(session: &Session<RecordingPresenter>) -> Sender {
        session
            .presenter()
            .last()
            .current_message
            .unwrap()
            .sender()
            .clone()
    }

    #[test]
    fn test_session_renders_on_open() {
        let session = create_test_session();

        assert_eq!(session.presenter().frame_count(), 1);
        assert_eq!(session.presenter().last().phase, Phase::Loading);
    }

    #[test]
    fn test_session_dispatch_renders_changes() {
        let mut session = create_test_session();

        session.dispatch(Intent::Start);
        assert_eq!(session.presenter().frame_count(), 2);
        assert_eq!(session.presenter().last().phase, Phase::Playing);

        let right = current_sender(&session);
        session.dispatch(Intent::Guess(right));
        assert_eq!(session.presenter().frame_count(), 3);
        assert!(session.presenter().last().locked);
        assert_eq!(session.presenter().last().score, 1);
    }

    #[test]
    fn test_session_drops_double_click() {
        let mut session = create_test_session();
        session.dispatch(Intent::Start);
        let right = current_sender(&session);

        session.dispatch(Intent::Guess(right.clone()));
        session.dispatch(Intent::Guess(right.clone()));
        session.dispatch(Intent::Guess(right));

        assert_eq!(session.presenter().frame_count(), 3);
        assert_eq!(session.game().snapshot().score, 1);
    }

    #[test]
    fn test_session_drops_invalid_intents() {
        let mut session = create_test_session();

        session.dispatch(Intent::Next);
        session.dispatch(Intent::Guess(Sender::from("A")));
        assert_eq!(session.presenter().frame_count(), 1);

        session.dispatch(Intent::Start);
        session.dispatch(Intent::Guess(Sender::from("Nobody")));
        session.dispatch(Intent::Next);
        assert_eq!(session.presenter().frame_count(), 2);
    }

    #[test]
    fn test_session_plays_to_summary() {
        let mut session = create_test_session();
        session.dispatch(Intent::Start);

        for _ in 0..2 {
            let right = current_sender(&session);
            session.dispatch(Intent::Guess(right));
            session.dispatch(Intent::Next);
        }

        let last = session.presenter().last();
        assert!(last.game_over);
        assert_eq!(last.score, 2);
        assert_eq!(last.summary.unwrap().score(), 2);

        session.dispatch(Intent::Next);
        assert!(session.game().snapshot().game_over);

        session.dispatch(Intent::Start);
        assert!(!session.presenter().last().game_over);
    }

    #[test]
    fn test_session_into_parts() {
        let mut session = create_test_session();
        session.dispatch(Intent::Start);

        let (game, presenter) = session.into_parts();
        assert_eq!(presenter.frame_count(), 2);
        assert!(game.id().is_some());
    }

    #[test]
    fn test_session_debug_skips_presenter() {
        let session = create_test_session();
        let debug = format!("{session:?}");

        assert!(debug.contains("Session"));
        assert!(!debug.contains("presenter"));
    }
}
