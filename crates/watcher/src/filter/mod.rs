//! Filter module — operator-supplied display filtering.

pub mod engine;

pub use engine::{DisplayFilter, FilterError, MatchMode};
