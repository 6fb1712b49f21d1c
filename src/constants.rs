//! Configuration constants for the guessing game
//!
//! This module contains the limits enforced when a catalog is validated,
//! keeping the roster and the message deck within sizes a single screen
//! can present.

/// Message catalog limits
pub mod catalog {
    /// Maximum number of messages a catalog may hold
    pub const MAX_MESSAGES_COUNT: usize = 1000;
    /// Minimum length of a message text
    pub const MIN_TEXT_LENGTH: usize = 1;
    /// Maximum length of a message text
    pub const MAX_TEXT_LENGTH: usize = 500;
}

/// Roster limits
pub mod roster {
    /// Maximum number of senders offered as choices every round
    pub const MAX_SENDERS_COUNT: usize = 24;
    /// Minimum length of a sender name
    pub const MIN_SENDER_LENGTH: usize = 1;
    /// Maximum length of a sender name
    pub const MAX_SENDER_LENGTH: usize = 50;
}
