#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Telegram transport for the quiz engine.
//!
//! Thin wrapper over teloxide: receives text messages, runs them through
//! [`lingo_core::Engine`], and sends the reply back, rendering the
//! engine's keyboards as Telegram reply-keyboard markup.

mod bot;
mod command;
mod error;
mod handler;

pub use bot::QuizBot;
pub use command::Command;
pub use error::{Error, Result};
