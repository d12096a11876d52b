#![forbid(unsafe_code)]

pub mod countdown;
pub mod ledger;
pub mod model;
pub mod navigator;
pub mod scoring;
pub mod time;

pub use countdown::{Countdown, SECONDS_PER_QUESTION, TickOutcome};
pub use ledger::AnswerLedger;
pub use navigator::{NavStep, SessionNavigator};
pub use scoring::{Score, score};
pub use time::Clock;
