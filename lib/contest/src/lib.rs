//! # librix Contest
//!
//! Weighted random selection of a contest winner, proportional to review
//! counts. Pure computation over a per-call snapshot: randomness is
//! injected through [`RandomSource`], never drawn from a shared global
//! generator, so concurrent selections share no state and tests can script
//! the exact draws.
//!
//! ## Example
//!
//! ```rust
//! use librix_contest::{select_winner, WeightedEntry};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let entries = vec![
//!     WeightedEntry::new("alice", 4),
//!     WeightedEntry::new("bob", 1),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let winner = select_winner(&entries, &mut rng).unwrap();
//! assert!(winner.is_some());
//! ```

pub mod select;
pub mod source;

pub use select::{select_winner, WeightedEntry};
pub use source::{RandomSource, ScriptedDraws};
