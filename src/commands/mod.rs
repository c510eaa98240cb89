//! Command handlers.
//!
//! jwt-lens has no subcommands; a single driver runs every operation
//! requested on the command line.

pub mod run;
