//! tmix - text randomizer
//!
//! Varies text by swapping Cyrillic letters for Latin look-alikes, resolving
//! `[a|b|c]` template groups, and inserting emoji between words.
//!
//! The [`pipeline`] module is the pure core. Everything else serves the
//! command-line and interactive front ends: [`session`] holds UI state,
//! [`store`] persists it, [`clipboard`] copies results, and [`config`]
//! supplies defaults.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod session;
pub mod store;
pub mod theme;
pub mod tui;

pub use config::Config;
pub use pipeline::{
    expand, interleave, randomize, transform, Mode, Pipeline, TransformError, TransformRequest,
};
pub use session::{Session, SessionError};
pub use store::StateStore;
