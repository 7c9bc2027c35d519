//! # Match Radar
//!
//! Benchmark-relative performance comparison between a player and their
//! lane opponent in a single ten-player match.
//!
//! ## Architecture
//!
//! - **models**: Match record, benchmark and radar profile data structures
//! - **engine**: Position, team and opponent resolution; the comparison pipeline
//! - **calculate**: Per-minute rates and benchmark normalization
//! - **storage**: Filesystem match store
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod engine;
pub mod models;
pub mod storage;

pub use models::*;
