//! Console front end for strictly_timetravel.
//!
//! Parses typed commands, drives a [`strictly_timetravel::GameSession`] and
//! renders it as plain text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;

pub mod cli;

pub use config::{ConfigError, ConsoleConfig};
pub use console::{CommandError, Console, ConsoleCommand, Flow, Verb};
