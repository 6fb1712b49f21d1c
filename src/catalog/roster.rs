//! Sender identities and the roster of choices
//!
//! The roster is the closed set of people a message can be attributed to.
//! It is offered in full every round, so its order is the order choices are
//! presented in.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The identity of a person who may have sent a message
///
/// Guesses are judged purely by equality between senders, so two senders
/// with the same name are the same person.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Validate,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[garde(transparent)]
pub struct Sender(
    #[garde(length(chars, min = crate::constants::roster::MIN_SENDER_LENGTH, max = crate::constants::roster::MAX_SENDER_LENGTH))]
    String,
);

impl Sender {
    /// Creates a sender from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the sender's name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sender {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// An ordered, duplicate-free set of senders
///
/// Every message in a catalog must be attributed to a member of its roster.
/// Uniqueness is checked by [`Catalog::new`](super::Catalog::new).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(transparent)]
#[garde(transparent)]
pub struct Roster(
    #[garde(length(min = 1, max = crate::constants::roster::MAX_SENDERS_COUNT), dive)] Vec<Sender>,
);

impl Roster {
    /// Creates a roster from senders in presentation order
    pub fn new<I, S>(senders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sender>,
    {
        Self(senders.into_iter().map(Into::into).collect_vec())
    }

    /// Checks whether a sender is one of the choices
    pub fn contains(&self, sender: &Sender) -> bool {
        self.0.contains(sender)
    }

    /// Returns the first sender that appears more than once, if any
    pub fn duplicate(&self) -> Option<&Sender> {
        self.0.iter().duplicates().next()
    }

    /// Returns the senders in presentation order
    pub fn senders(&self) -> &[Sender] {
        &self.0
    }

    /// Returns the number of senders
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the roster has no senders
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_sender_display() {
        let sender = Sender::new("Alice");
        assert_eq!(sender.to_string(), "Alice");
        assert_eq!(sender.as_str(), "Alice");
    }

    #[test]
    fn test_sender_validation() {
        assert!(Sender::new("Bob").validate().is_ok());
        assert!(Sender::new("").validate().is_err());
        assert!(
            Sender::new("b".repeat(crate::constants::roster::MAX_SENDER_LENGTH + 1))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_sender_length_counts_chars() {
        let limit = crate::constants::roster::MAX_SENDER_LENGTH;

        assert!(Sender::new("é".repeat(limit)).validate().is_ok());
        assert!(Sender::new("é".repeat(limit + 1)).validate().is_err());
    }

    #[test]
    fn test_roster_contains() {
        let roster = Roster::new(["A", "B"]);

        assert!(roster.contains(&Sender::from("A")));
        assert!(roster.contains(&Sender::from("B")));
        assert!(!roster.contains(&Sender::from("C")));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_roster_keeps_order() {
        let roster = Roster::new(["Zed", "Amy", "Mo"]);
        let names = roster.senders().iter().map(Sender::as_str).collect_vec();
        assert_eq!(names, ["Zed", "Amy", "Mo"]);
    }

    #[test]
    fn test_roster_duplicate() {
        assert_eq!(Roster::new(["A", "B"]).duplicate(), None);
        assert_eq!(
            Roster::new(["A", "B", "A"]).duplicate(),
            Some(&Sender::from("A"))
        );
    }

    #[test]
    fn test_roster_validation() {
        assert!(Roster::new(["A"]).validate().is_ok());
        assert!(Roster::new(Vec::<Sender>::new()).validate().is_err());
        assert!(Roster::new([""]).validate().is_err());

        let crowded = (0..=crate::constants::roster::MAX_SENDERS_COUNT)
            .map(|i| format!("Sender {i}"))
            .collect_vec();
        assert!(Roster::new(crowded).validate().is_err());
    }

    #[test]
    fn test_roster_serde_is_a_plain_list() {
        let roster = Roster::new(["A", "B"]);
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"["A","B"]"#);

        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roster);
    }
}
