//! Wheel of Fortune
//!
//! A three-seat Wheel of Fortune game engine with human and computer
//! contestants. Computer contestants pick letters from fixed frequency
//! orderings or from an n-gram model of the revealed board.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wheel_of_fortune::core::Wheel;
//! use wheel_of_fortune::game::{GameConfig, PlayerKind, TurnScheduler};
//! use wheel_of_fortune::puzzles::Puzzle;
//!
//! let puzzle = Puzzle::new("GOLDEN GATE BRIDGE", "LANDMARK").unwrap();
//! let players = ["trigram", "morse", "conservative"]
//!     .into_iter()
//!     .map(PlayerKind::from_name)
//!     .collect();
//!
//! let mut game = TurnScheduler::new(
//!     &puzzle,
//!     players,
//!     Wheel::standard(),
//!     StdRng::seed_from_u64(7),
//!     GameConfig::default(),
//! )
//! .unwrap();
//!
//! let summary = game.play().unwrap();
//! println!("{:?}: {:?}", summary.outcome, summary.winnings);
//! ```

// Core domain types
pub mod core;

// Computer contestants
pub mod strategy;

// Turn scheduling
pub mod game;

// Puzzle lists
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
