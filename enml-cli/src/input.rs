//! Reading input and writing output, with `-` standing for stdin.

use std::fs;
use std::io::{self, Read, Write};

pub const STDIN: &str = "-";

pub fn read_input(path: &str) -> io::Result<String> {
    if path == STDIN {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

/// Write `data` to `path`, or to stdout when no path is given.
///
/// Stdout output always ends with a newline; files get `data` unchanged.
pub fn write_output(path: Option<&str>, data: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data.as_bytes())?;
            if !data.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        }
    }
}
