//! Command-line front end for the data tools.
//!
//! The binary in `main.rs` parses arguments, sets up logging and hands off
//! to [`commands`]; everything is kept in the library so the commands can
//! be driven from tests.

pub mod assignments;
pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
