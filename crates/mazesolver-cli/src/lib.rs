//! Maze solver CLI library.
//!
//! Command handlers, report writing and terminal rendering for the
//! `mazesolver` binary. Search itself lives in `mazesolver-lib`.

pub mod commands;
pub mod output;
pub mod report;
