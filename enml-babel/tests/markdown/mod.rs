//! Markdown format tests
//!
//! Export only (ENML → Markdown).

mod export;
mod structure;
