//! Authenticated high-score API: signup, login, score submission and
//! per-level leaderboards, all held in memory.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod scores;
pub mod state;
pub mod validation;
