//! # chessort-engine: Group Draw and Round-Robin Core
//!
//! Splits a roster of entrants into groups and builds a round-robin schedule
//! for each group. Pure in-memory computation with an explicit, seedable RNG
//! so every draw can be reproduced.
//!
//! ## Core Modules
//!
//! - [`entrant`] - Entrants with synthetic ids, and the roster they come in
//! - [`group`] - Group size validation and the partitioner
//! - [`pairing`] - Pair enumeration and pool bookkeeping
//! - [`round`] - Conflict-free round selection with bounded retries
//! - [`schedule`] - Per-group schedules and the strategies that build them
//! - [`engine`] - The seeded [`engine::Organizer`] tying it all together
//! - [`record`] - Serializable draw snapshot for JSON output
//! - [`errors`] - Error types for draw operations
//!
//! ## Quick Start
//!
//! ```rust
//! use chessort_engine::engine::Organizer;
//! use chessort_engine::entrant::Roster;
//! use chessort_engine::schedule::StrategyKind;
//!
//! let roster = Roster::from_names((1..=10).map(|i| format!("Player {i}")));
//! let mut organizer = Organizer::new(Some(7), StrategyKind::Randomized.build(12));
//! let draw = organizer.draw(roster, 3).unwrap();
//!
//! let sizes: Vec<usize> = draw.groups.iter().map(|g| g.group.len()).collect();
//! assert_eq!(sizes, vec![4, 3, 3]);
//! ```
//!
//! ## Deterministic Draws
//!
//! The same seed, roster and strategy always produce the same draw:
//!
//! ```rust
//! use chessort_engine::engine::Organizer;
//! use chessort_engine::entrant::Roster;
//! use chessort_engine::schedule::RandomizedRetry;
//!
//! let names = ["A", "B", "C", "D", "E", "F"];
//! let a = Organizer::new(Some(99), Box::new(RandomizedRetry::default()))
//!     .draw(Roster::from_names(names), 3)
//!     .unwrap();
//! let b = Organizer::new(Some(99), Box::new(RandomizedRetry::default()))
//!     .draw(Roster::from_names(names), 3)
//!     .unwrap();
//! assert_eq!(a, b);
//! ```

pub mod engine;
pub mod entrant;
pub mod errors;
pub mod group;
pub mod pairing;
pub mod record;
pub mod round;
pub mod schedule;
