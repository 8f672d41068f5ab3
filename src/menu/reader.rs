use std::io::{BufRead, Write};

use crate::error::Error;
use crate::item::InvalidChoice;
use crate::style::Styler;
use crate::Result;

/// Reads lines from `input` until one exactly matches a valid token.
///
/// The caller shows the initial prompt; this loop re-prints it after
/// each rejected line, behind a warning naming the valid tokens. Tokens
/// are already lowercase and matching is exact as typed. An exhausted
/// input source ends the read with [`Error::Cancelled`] instead of
/// spinning.
pub fn read_choice_from<S>(
    style: &S,
    prompt: &str,
    tokens: &[String],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<String>
where
    S: Styler<InvalidChoice>,
{
    // an empty token set can never accept anything
    if tokens.is_empty() {
        return Err(Error::EmptyOptionSet);
    }
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::Cancelled);
        }
        line.truncate(line.trim_end_matches(['\n', '\r']).len());
        if !line.is_empty() && tokens.iter().any(|t| t == &line) {
            return Ok(line);
        }
        writeln!(out, "{}", style.style(&InvalidChoice(tokens.to_vec())))?;
        write!(out, "{}", prompt)?;
        out.flush()?;
    }
}
