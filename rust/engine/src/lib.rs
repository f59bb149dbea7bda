//! # cabo-engine: CABO Card Game Core
//!
//! A deterministic engine for CABO, a memory-and-bluff card game for two to
//! four players. Each player holds four cards, mostly face-down, and tries to
//! finish with the lowest total. Drawn cards are swapped into the hand,
//! discarded, or spent on their action (peek, spy, switch). Any player may
//! call CABO; the game ends when play comes back around to them.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, Suit, Rank and the action carried by ranks 7-12
//! - [`deck`] - Card collections (deck, discard pile, hands) and deck checks
//! - [`engine`] - Turn and action state machine
//! - [`knowledge`] - What each computer player has seen
//! - [`player`] - Human and computer players
//! - [`policy`] - Decision seam for computer turns
//! - [`rules`] - Phases, pending actions and legal controls
//! - [`scoring`] - Final scores and winner
//! - [`logger`] - Bounded activity feed
//! - [`view`] - Snapshots and render hooks for front ends
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cabo_engine::engine::Engine;
//! use cabo_engine::rules::HumanAction;
//!
//! let mut engine = Engine::new(Some(7), Engine::standard_table("Cyntra")).unwrap();
//! engine.invoke(HumanAction::Draw).unwrap();
//! engine.invoke(HumanAction::EndTurn).unwrap();
//! assert_eq!(engine.current_seat(), 1);
//! ```
//!
//! ## Scoring
//!
//! Cards score their rank (Ace 1 through King 13), except the King of
//! Diamonds which scores -1:
//!
//! ```rust
//! use cabo_engine::cards::{Card, Rank, Suit};
//!
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(kd.score(), -1);
//! assert_eq!(kd.rank().value(), 13);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod knowledge;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;
pub mod scoring;
pub mod view;
