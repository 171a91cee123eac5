//! Weiqi: a deterministic rule engine for the game of Go.
//!
//! The engine covers stone placement, group and liberty analysis, capture
//! resolution, suicide rejection, turn alternation, passing, capture
//! tallies and reset. Ko and scoring are not modelled.
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits and driver defaults
//! - [`board`] - Copy-on-write board values
//! - [`group`] - Group and liberty analysis
//! - [`rules`] - Placement legality and capture resolution
//! - [`session`] - Turn, capture and last-move state for one game
//! - [`gtp`] - Text protocol host for a session
//! - [`playout`] - Seeded random self-play
//!
//! ## Example
//!
//! ```
//! use weiqi::board::Color;
//! use weiqi::session::{GameSession, MoveOutcome};
//!
//! let mut game = GameSession::new(9).unwrap();
//! game.place(0, 0).unwrap(); // Black
//! game.place(1, 0).unwrap(); // White
//! game.pass(); // Black
//!
//! // White takes the corner stone's last liberty
//! assert_eq!(game.place(0, 1), Ok(MoveOutcome::Played { captured: 1 }));
//! assert_eq!(game.captures().get(Color::White), 1);
//! assert_eq!(game.board().get(0, 0), Ok(None));
//! ```

pub mod board;
pub mod constants;
pub mod group;
pub mod gtp;
pub mod playout;
pub mod rules;
pub mod session;
