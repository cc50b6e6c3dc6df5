//! Commit message composition from per-branch settings and overrides.

pub mod compose;

pub use compose::{ComposedMessage, Overrides, compose};
