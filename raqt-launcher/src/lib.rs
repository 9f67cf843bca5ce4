//! # raqt-launcher
//!
//! Runner for REBooT related programs. The launcher reads its connection
//! strings and the REBooT configuration section from the environment, checks
//! that the selected program is installed and runs it.

pub mod config;
pub mod program;

pub use config::LaunchConfig;
pub use program::{LaunchError, Launcher, Outcome, PROGRAMS, Program};
