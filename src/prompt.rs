use std::io::{self, BufRead, Write};

use crate::{BACKUP_SUFFIX, EXTENSION};

/// Asks the operator once whether to re-encode `count` files.
///
/// Only a `y` (any case, surrounding whitespace ignored) confirms. End of input
/// counts as a refusal.
pub fn confirm<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    count: usize,
) -> io::Result<bool> {
    writeln!(
        output,
        "This will re-encode {} .{} file(s) in place.",
        count, EXTENSION
    )?;
    writeln!(
        output,
        "Originals are kept as <name>{} unless a backup already exists.",
        BACKUP_SUFFIX
    )?;
    write!(output, "Continue? (Y/N): ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
