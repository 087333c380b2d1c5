//! Runtime module — watcher lifecycle: boot and the watch loop.

pub mod boot;
pub mod watch;
