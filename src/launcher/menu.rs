//! Numbered text menu and selection prompt.

use super::discovery::display_name;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// A valid answer to the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user entered `0`.
    Exit,
    /// Zero-based index into the candidate list.
    Run(usize),
}

/// Why an answer was rejected. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,
    #[error("Please choose a number between 0 and {max}.")]
    OutOfRange { max: usize },
}

pub const PROMPT: &str = "Select the number of the program to run (0 to exit): ";

/// Parse one line of user input against a menu of `count` entries.
pub fn parse_selection(text: &str, count: usize) -> Result<Selection, SelectionError> {
    let text = text.trim();
    let value: i64 = match text.parse() {
        Ok(v) => v,
        Err(_) => {
            let digits = text.trim_start_matches(['+', '-']);
            // Too large for i64 but still a number
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(SelectionError::OutOfRange { max: count });
            }
            return Err(SelectionError::NotANumber);
        }
    };

    match value {
        0 => Ok(Selection::Exit),
        v if v >= 1 && (v as u64) <= count as u64 => Ok(Selection::Run(v as usize - 1)),
        _ => Err(SelectionError::OutOfRange { max: count }),
    }
}

/// Print the numbered list of candidates, starting at 1.
pub fn write_menu<W: Write>(out: &mut W, candidates: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "Available programs:")?;
    for (i, path) in candidates.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, display_name(path))?;
    }
    Ok(())
}

/// Prompt until a valid selection is entered.
///
/// Bad input is reported and asked again without limit. End of input counts
/// as `Exit` so a closed stdin cannot spin forever.
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    count: usize,
) -> io::Result<Selection> {
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(Selection::Exit);
        }

        match parse_selection(&line, count) {
            Ok(selection) => return Ok(selection),
            Err(e) => {
                log::debug!("rejected menu input {:?}: {}", line.trim(), e);
                writeln!(out, "{}", e)?;
            }
        }
    }
}
