//! # Who Sent This?
//!
//! This library provides the core game logic for a single-player guessing
//! game: a message from a group chat is shown and the player picks which
//! member of a fixed roster sent it. It handles dealing a shuffled deck,
//! round progression, answer locking, scoring, and the final summary.
//!
//! Rendering is left to a [`session::Presenter`], which observes
//! [`snapshot::Snapshot`]s and sends [`game::Intent`]s back.
//!
//! ```
//! use whosent::{
//!     catalog::{Catalog, message::Message, roster::Roster},
//!     game::{Game, Options},
//! };
//!
//! let catalog = Catalog::new(
//!     Roster::new(["A", "B"]),
//!     vec![Message::new("A", "hi"), Message::new("B", "yo")],
//! )?;
//! let mut game = Game::new(catalog, Options::default());
//! game.start();
//!
//! let message = game.snapshot().current_message.expect("deck is not empty");
//! game.guess(message.sender())?;
//! assert_eq!(game.snapshot().score, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod catalog;
pub mod constants;
pub mod deck;
pub mod game;
pub mod game_id;
pub mod scoreboard;
pub mod session;
pub mod snapshot;
