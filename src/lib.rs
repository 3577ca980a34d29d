//! cribbage-rs: two-player cribbage engine
//!
//! Goals:
//! - Exact scoring for pegging and for the count
//! - A single re-entrant state machine driven by one integer choice per call
//! - Read-only render scenes so front ends stay free of rule logic
//!
//! ## Quick start: count a hand
//! ```
//! use cribbage_rs::cards::{parse_cards, Card};
//! use cribbage_rs::scoring::{score_counting, total_points, CountKind, ScoreEvent};
//!
//! let hand: [Card; 4] = parse_cards("9h 6c 9d 6s").unwrap().try_into().unwrap();
//! let up: Card = "Ac".parse().unwrap();
//! let events = score_counting(&hand, up, CountKind::Hand);
//! assert_eq!(events.iter().filter(|e| **e == ScoreEvent::Fifteen).count(), 4);
//! assert_eq!(total_points(&events), 12);
//! ```
//!
//! ## Driving a game
//! ```
//! use cribbage_rs::config::GameConfig;
//! use cribbage_rs::game::{Advance, Game};
//! use cribbage_rs::scene::RenderScene;
//!
//! let mut game = Game::new(GameConfig::new().with_seed(1));
//! let mut choice = 7;
//! while game.advance(choice) == Advance::Continue {
//!     choice = 0;
//! }
//! assert!(matches!(game.render_scene(), RenderScene::AnnounceDealer(_)));
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin cribbage-rs
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod game;
pub mod hand;
pub mod scene;
pub mod scoring;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
