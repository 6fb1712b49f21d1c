//! Message catalog and sender roster
//!
//! This module defines the content a game is played over: a fixed roster of
//! senders and the messages attributed to them. A [`Catalog`] can only be
//! built in a valid state, whether assembled in code or deserialized, so the
//! game engine can treat it as a trusted constant.

pub mod message;
pub mod roster;

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use message::Message;
use roster::{Roster, Sender};

/// Errors that can occur while assembling a catalog
#[derive(Error, Debug)]
pub enum Error {
    /// A field is outside of its allowed bounds
    #[error("catalog is invalid: {0}")]
    Invalid(#[from] garde::Report),
    /// The roster names the same sender twice
    #[error("{0} appears on the roster more than once")]
    DuplicateSender(Sender),
    /// A message is attributed to someone who is not on the roster
    #[error("message {index} was sent by {sender}, who is not on the roster")]
    UnknownSender {
        /// Position of the offending message in the catalog
        index: usize,
        /// The sender that could not be found
        sender: Sender,
    },
    /// The catalog document could not be parsed
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization helper for Catalog struct
#[derive(Deserialize)]
struct CatalogSerde {
    roster: Roster,
    messages: Vec<Message>,
}

/// A fixed roster of senders and the messages they sent
///
/// Invariants upheld by every constructor:
///
/// * the roster is non-empty and duplicate-free
/// * every message's sender is on the roster
///
/// A catalog with no messages is allowed; games played over it end
/// immediately.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(try_from = "CatalogSerde")]
pub struct Catalog {
    /// Choices offered every round
    #[garde(dive)]
    roster: Roster,
    /// Every message that will be dealt into a deck
    #[garde(length(max = crate::constants::catalog::MAX_MESSAGES_COUNT), dive)]
    messages: Vec<Message>,
}

impl TryFrom<CatalogSerde> for Catalog {
    type Error = Error;

    /// Validates deserialized data before it becomes a catalog
    fn try_from(serde: CatalogSerde) -> Result<Self, Self::Error> {
        let CatalogSerde { roster, messages } = serde;
        Self::new(roster, messages)
    }
}

impl Catalog {
    /// Assembles a catalog, checking all of its invariants
    ///
    /// # Errors
    ///
    /// * `Error::Invalid` - A sender, text, or collection is out of bounds
    /// * `Error::DuplicateSender` - The roster names someone twice
    /// * `Error::UnknownSender` - A message is attributed outside the roster
    pub fn new(roster: Roster, messages: Vec<Message>) -> Result<Self, Error> {
        let catalog = Self { roster, messages };
        catalog.validate()?;

        if let Some(sender) = catalog.roster.duplicate() {
            return Err(Error::DuplicateSender(sender.clone()));
        }

        if let Some((index, message)) = catalog
            .messages
            .iter()
            .enumerate()
            .find(|(_, message)| !catalog.roster.contains(message.sender()))
        {
            return Err(Error::UnknownSender {
                index,
                sender: message.sender().clone(),
            });
        }

        Ok(catalog)
    }

    /// Parses and validates a catalog from a JSON document
    ///
    /// The document has the shape
    /// `{"roster": ["A", ...], "messages": [{"sender": "A", "text": "..."}, ...]}`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the document is malformed or breaks any of
    /// the catalog invariants.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the roster of senders
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the messages in catalog order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Checks if the catalog has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
