//! ENML format tests
//!
//! Reading stored notes (lenient) and writing new ones (strict output).

mod check;
mod export;
mod import;
