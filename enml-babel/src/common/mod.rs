//! Helpers shared by the format implementations.

pub mod entities;
pub mod whitespace;
