//! Kata - a command-line trivia dojo for security analysts
//!
//! Kata drills security fundamentals through category-tagged quiz rounds
//! with lenient answer matching, per-category XP, periodic boss fights and
//! achievement badges, persisting progress between runs.

pub mod answer;
pub mod bank;
pub mod banner;
pub mod config;
pub mod player;
pub mod session;

pub use config::Config;
pub use player::Player;
pub use session::Session;
