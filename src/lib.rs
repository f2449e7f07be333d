//! Local development runner for the Academic Research Platform.
//!
//! Parses a small flag set, performs the requested setup steps (dependency
//! install, corpus download, environment-file scaffolding), then hands
//! control to at most one blocking terminal action. The platform itself is
//! an external program driven entirely through subprocesses.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod scaffold;
