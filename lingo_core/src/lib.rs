#![warn(
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

//! Core quiz logic for the language-learning bot.
//!
//! This crate is pure and transport-agnostic: it knows nothing about
//! Telegram. Given a mutable [`Session`] and the raw text of an inbound
//! message, the [`Engine`] computes the next session state and a
//! [`ReplyPlan`] (text plus an optional quick-reply keyboard) for the
//! transport layer to deliver.
//!
//! Every input is absorbed by an explicit branch; `Engine::handle` cannot
//! fail for any input in its alphabet.

mod bank;
mod engine;
mod reply;
mod session;
mod texts;

pub use bank::{Category, QuestionCard, card};
pub use engine::Engine;
pub use reply::{Keyboard, ReplyPlan};
pub use session::{Language, QuizState, Session};
