//! The play deck: one game's ordering of the catalog

use crate::catalog::message::Message;

/// A shuffled copy of every catalog message
///
/// The deck holds exactly one occurrence of each catalog message and is
/// never reordered after it is dealt. A new game deals a new deck.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    messages: Vec<Message>,
}

impl Deck {
    /// Deals a deck as a uniformly random permutation of `messages`
    ///
    /// Uses the Fisher–Yates shuffle provided by `fastrand`, driven by the
    /// caller's generator so seeded games are reproducible.
    pub fn deal(messages: &[Message], rng: &mut fastrand::Rng) -> Self {
        let mut messages = messages.to_vec();
        rng.shuffle(&mut messages);
        Self { messages }
    }

    /// Returns the message at `index`
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    /// Returns the messages in play order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of rounds in the deck
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Checks if the deck has no rounds
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Checks whether `index` is the final round
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.messages.len()
    }
}
