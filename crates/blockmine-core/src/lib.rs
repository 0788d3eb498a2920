//! Core types for blockmine.
//!
//! This crate provides the pieces shared by every other blockmine crate:
//! - Grammar identifiers (Grammar)
//! - The error taxonomy (Error, ensure)
//! - A microsecond stopwatch (Timer)

mod error;
mod grammar;
mod timer;

pub use error::{ensure, Error, Result};
pub use grammar::Grammar;
pub use timer::{Elapsed, Timer};
