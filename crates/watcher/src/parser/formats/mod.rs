//! Formats module — the two server.log record grammars.

pub mod bracket;
pub mod uniform;

pub use bracket::BracketLogFilter;
pub use uniform::UniformLogFilter;
