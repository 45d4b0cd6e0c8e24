//! Pipeline stages.
//!
//! Each stage is a function over the shared `RunContext`. Stages do ONE
//! thing and have no side effects beyond their output.
//!
//! ```text
//! Announce ──→ Setup ──→ Dispatch
//! ```

pub mod announce;
pub mod dispatch;
pub mod setup;
