//! Core functionality used by the runner in `main.rs`
//! and also for headless integration tests.
//!
//! The rules of the game live in `game`. Input and output
//! devices are kept behind the traits in `senses` and
//! `panel`, so a test can play without lamps and a runner
//! can swap stdin buttons for real hardware.

#[cfg(test)]
mod testutil;

mod err;
mod result;
mod util;

pub mod app;
pub mod check;
pub mod game;
pub mod log;
pub mod panel;
pub mod senses;

pub use app::{App, Builder as AppBuilder};
pub use result::Result;
