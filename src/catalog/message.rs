//! A single message shown for one round

use garde::Validate;
use serde::{Deserialize, Serialize};

use super::roster::Sender;

/// A message and the person who actually sent it
///
/// Messages are immutable once placed in a catalog; the game only reads
/// them to present the text and to judge guesses against the sender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct Message {
    /// Who sent the message
    #[garde(dive)]
    sender: Sender,
    /// The text displayed to the player
    #[garde(length(chars, min = crate::constants::catalog::MIN_TEXT_LENGTH, max = crate::constants::catalog::MAX_TEXT_LENGTH))]
    text: String,
}

impl Message {
    /// Creates a message attributed to `sender`
    pub fn new(sender: impl Into<Sender>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Returns the true sender
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the display text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Checks whether `guess` names the true sender
    pub fn is_sent_by(&self, guess: &Sender) -> bool {
        self.sender == *guess
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_message_accessors() {
        let message = Message::new("A", "hi");
        assert_eq!(message.sender(), &Sender::from("A"));
        assert_eq!(message.text(), "hi");
    }

    #[test]
    fn test_message_is_sent_by() {
        let message = Message::new("A", "hi");
        assert!(message.is_sent_by(&Sender::from("A")));
        assert!(!message.is_sent_by(&Sender::from("B")));
    }

    #[test]
    fn test_message_validation() {
        assert!(Message::new("A", "hi").validate().is_ok());
        assert!(Message::new("A", "").validate().is_err());
        assert!(Message::new("", "hi").validate().is_err());
        assert!(
            Message::new(
                "A",
                "x".repeat(crate::constants::catalog::MAX_TEXT_LENGTH + 1)
            )
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_message_text_length_counts_chars() {
        let limit = crate::constants::catalog::MAX_TEXT_LENGTH;

        let at_limit = Message::new("A", "💀".repeat(limit));
        assert!(at_limit.text().len() > limit);
        assert!(at_limit.validate().is_ok());

        assert!(Message::new("A", "💀".repeat(limit + 1)).validate().is_err());
    }
}
