use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use crate::item::Mnemonic;
use crate::style::Styler;
use crate::Result;

const VIEW_TOKEN: &str = "v";

/// Offers to open `path` in the pager, naming it `name`.
///
/// Answering `v` spawns `$PAGER` (falling back to `less`) on the file
/// and reports `true`; any other answer, or a closed input source, is a
/// no-op reporting `false`.
pub fn preview_from<S>(
    style: &S,
    name: &str,
    path: &Path,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool>
where
    S: Styler<Mnemonic>,
{
    write!(
        out,
        "press [{}] to view {}: ",
        style.style(&Mnemonic('v')),
        name
    )?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    if line.trim_end_matches(['\n', '\r']) != VIEW_TOKEN {
        return Ok(false);
    }
    let pager = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    Command::new(pager).arg(path).status()?;
    Ok(true)
}

/// [`preview_from`] bound to stdin/stderr.
pub fn preview<S>(style: &S, name: &str, path: &Path) -> Result<bool>
where
    S: Styler<Mnemonic>,
{
    let stdin = io::stdin();
    preview_from(style, name, path, &mut stdin.lock(), &mut io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyle;
    use tempfile::NamedTempFile;

    #[test]
    fn declining_is_a_no_op() {
        let file = NamedTempFile::new().unwrap();
        let mut input = &b"n\n"[..];
        let mut out = Vec::new();
        let viewed =
            preview_from(&PlainStyle, "notes", file.path(), &mut input, &mut out).unwrap();
        assert!(!viewed);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "press [v] to view notes: "
        );
    }

    #[test]
    fn empty_answer_is_a_no_op() {
        let file = NamedTempFile::new().unwrap();
        let mut input = &b"\n"[..];
        let mut out = Vec::new();
        let viewed =
            preview_from(&PlainStyle, "notes", file.path(), &mut input, &mut out).unwrap();
        assert!(!viewed);
    }

    #[test]
    fn closed_input_is_a_no_op() {
        let file = NamedTempFile::new().unwrap();
        let mut input = &b""[..];
        let mut out = Vec::new();
        let viewed =
            preview_from(&PlainStyle, "notes", file.path(), &mut input, &mut out).unwrap();
        assert!(!viewed);
    }
}
