//! Support code for the `enml` binary.
//!
//! Argument pre-processing lives here so it can be unit tested without spawning the
//! binary. Everything that prints or exits stays in main.rs.

pub mod extras;
pub mod input;
