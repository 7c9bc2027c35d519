//! Core data models for match comparison.

mod analysis;
mod benchmark;
mod ids;
mod match_record;
mod radar;
mod role;
mod summary;

pub use analysis::*;
pub use benchmark::*;
pub use ids::*;
pub use match_record::*;
pub use radar::*;
pub use role::*;
pub use summary::*;
