use std::io::{self, BufRead, Write};

use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::item::{CommandBanner, Header, OutputLine};
use crate::style::MenuStyle;
use crate::Result;

use super::{read_choice_from, resolve_choice, Menu};

/// Label appended to every command loop's option set.
pub const EXIT_LABEL: &str = "eXit";
/// Token that ends the loop.
pub const EXIT_TOKEN: &str = "x";

/// Where dispatched handler output goes.
pub enum OutputMode {
    /// The handler writes to the terminal itself; returned text is
    /// echoed verbatim.
    Streamed,
    /// Returned text is echoed line by line behind a marker after the
    /// handler finishes.
    Captured,
}

/// Repeats header → prompt → dispatch over a [`Menu`] until the exit
/// option is chosen.
///
/// The exit option `"eXit"` is appended to the session's option string
/// up front, so `x` always ends the loop. Handler failures are the
/// handler's own business: handlers return plain text, and anything
/// fallible must be settled inside the closure.
pub struct CommandLoop<'a, S> {
    menu: Menu<'a, S>,
    mode: OutputMode,
}

impl<'a, S> CommandLoop<'a, S>
where
    S: MenuStyle,
{
    /// Wraps a session, appending the exit option to its option string.
    ///
    /// The append happens once here, not per run, so the same loop can
    /// be run any number of times.
    pub fn new(mut menu: Menu<'a, S>) -> Self {
        let with_exit = if menu.options().is_empty() {
            EXIT_LABEL.to_string()
        } else {
            format!("{}/{}", menu.options(), EXIT_LABEL)
        };
        menu.set_options(with_exit);
        Self {
            menu,
            mode: OutputMode::Captured,
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn menu(&self) -> &Menu<'a, S> {
        &self.menu
    }

    /// Runs the loop on stdin/stderr. `initial` is dispatched as the
    /// first choice without reading input.
    pub fn run<H>(
        &mut self,
        handler: H,
        post: Option<&mut dyn FnMut(&str)>,
        initial: Option<&str>,
    ) -> Result<()>
    where
        H: FnMut(&str) -> String,
    {
        let stdin = io::stdin();
        self.run_on(handler, post, initial, &mut stdin.lock(), &mut io::stderr())
    }

    /// Runs the loop over caller-supplied streams.
    pub fn run_on<H>(
        &mut self,
        mut handler: H,
        mut post: Option<&mut dyn FnMut(&str)>,
        initial: Option<&str>,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<()>
    where
        H: FnMut(&str) -> String,
    {
        let mut pending = initial.map(str::to_string);
        loop {
            self.print_header(out)?;
            let token = match pending.take() {
                Some(token) => token,
                None => {
                    self.menu.build_prompt()?;
                    write!(out, "{}", self.menu.last_prompt())?;
                    out.flush()?;
                    let prompt = self.menu.last_prompt().to_string();
                    let tokens = self.menu.tokens().to_vec();
                    read_choice_from(self.menu.style(), &prompt, &tokens, input, out)?
                }
            };
            if token == EXIT_TOKEN {
                break;
            }
            let selection = resolve_choice(&token, self.menu.options())?;
            self.menu.record(token, selection.clone());

            self.print_header(out)?;
            let banner = CommandBanner {
                selection: selection.clone(),
                stamp: Local::now().format("%H:%M:%S").to_string(),
            };
            writeln!(out, "{}", self.menu.style().style(&banner))?;

            let output = handler(&selection);
            match self.mode {
                OutputMode::Streamed => {
                    if !output.is_empty() {
                        writeln!(out, "{}", output.trim_end_matches('\n'))?;
                    }
                }
                OutputMode::Captured => {
                    for line in output.lines() {
                        let line = self.menu.style().style(&OutputLine(line.to_string()));
                        writeln!(out, "{}", line)?;
                    }
                }
            }

            if let Some(p) = post.as_mut() {
                p(&selection);
            }
        }
        Ok(())
    }

    fn print_header(&self, out: &mut impl Write) -> Result<()> {
        if let Some(header) = self.menu.header() {
            if self.menu.clear_on_header() {
                queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            writeln!(out, "{}", self.menu.style().style(&Header(header.to_string())))?;
        }
        Ok(())
    }
}
