use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// Ask whether the corrupted fonts should really be deleted. Only `y` or `Y`
/// counts as yes; anything else, including end of input, declines.
pub fn confirm_deletion<R: BufRead, W: Write>(
    count: usize,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    write!(out, "\nDelete {} corrupted fonts? (y/N): ", count).map_err(Error::Prompt)?;
    out.flush().map_err(Error::Prompt)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::Prompt)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// [`confirm_deletion`] on the process's stdin and stdout
pub fn confirm_deletion_on_terminal(count: usize) -> Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    confirm_deletion(count, &mut input, &mut out)
}
