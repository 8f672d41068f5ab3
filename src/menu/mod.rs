use std::io::{self, BufRead, Write};

use crate::style::{DefaultStyle, MenuStyle};
use crate::Result;

mod command;
mod options;
mod preview;
mod prompt;
mod reader;
mod resolve;

pub use command::*;
pub use options::*;
pub use preview::*;
pub use prompt::*;
pub use reader::*;
pub use resolve::*;

/// One interactive menu session.
///
/// A session owns everything a prompt cycle needs: the option string,
/// the cosmetic settings, and the choice and selection left behind by
/// the last completed prompt. Sessions are independent values, so a
/// program can hold as many menus as it likes.
pub struct Menu<'a, S> {
    style: &'a S,
    label: String,
    options_raw: String,
    prefix: String,
    header: Option<String>,
    clear_on_header: bool,
    last_prompt: String,
    tokens: Vec<String>,
    choice: Option<String>,
    selection: Option<String>,
}

impl Menu<'static, DefaultStyle> {
    /// A colored session over a `/`-delimited option string.
    pub fn new(label: impl Into<String>, options: impl Into<String>) -> Self {
        Self::with_style(&DefaultStyle, label, options)
    }
}

impl<'a, S> Menu<'a, S>
where
    S: MenuStyle,
{
    /// A session rendered through `style`; pass [`crate::style::PlainStyle`]
    /// to turn color off.
    pub fn with_style(style: &'a S, label: impl Into<String>, options: impl Into<String>) -> Self {
        Self {
            style,
            label: label.into(),
            options_raw: options.into(),
            prefix: String::new(),
            header: None,
            clear_on_header: false,
            last_prompt: String::new(),
            tokens: Vec::new(),
            choice: None,
            selection: None,
        }
    }

    pub fn set_options(&mut self, options: impl Into<String>) {
        self.options_raw = options.into();
    }

    /// The label shown ahead of the options; [`NO_LABEL`] suppresses it.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Header printed before each command-loop cycle; may span lines.
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    /// Clear the screen before the header is printed.
    pub fn set_clear_on_header(&mut self, clear: bool) {
        self.clear_on_header = clear;
    }

    /// Pre-seeds the choice token, as if it had just been read.
    pub fn set_choice(&mut self, token: impl Into<String>) {
        self.choice = Some(token.into());
    }

    pub fn options(&self) -> &str {
        &self.options_raw
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn clear_on_header(&self) -> bool {
        self.clear_on_header
    }

    /// The token accepted by the last completed prompt.
    pub fn choice(&self) -> Option<&str> {
        self.choice.as_deref()
    }

    /// The label resolved by the last completed prompt, lowercased.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The prompt text built last, escape codes included.
    pub fn last_prompt(&self) -> &str {
        &self.last_prompt
    }

    /// Valid tokens derived by the last build, in declaration order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub(crate) fn style(&self) -> &'a S {
        self.style
    }

    pub(crate) fn record(&mut self, choice: String, selection: String) {
        self.choice = Some(choice);
        self.selection = Some(selection);
    }

    /// Parses the option string and assembles the prompt line, caching
    /// both the text and the derived token set on the session.
    pub fn build_prompt(&mut self) -> Result<&str> {
        let set = OptionSet::parse(&self.options_raw)?;
        self.tokens = set.tokens();
        self.last_prompt = build_prompt_line(self.style, &self.prefix, &self.label, &set);
        Ok(&self.last_prompt)
    }

    /// One-shot prompt on stdin/stderr: build, read, resolve.
    pub fn prompt(&mut self) -> Result<String> {
        let stdin = io::stdin();
        self.prompt_on(&mut stdin.lock(), &mut io::stderr())
    }

    /// One-shot prompt over caller-supplied streams.
    ///
    /// Leaves the accepted token and resolved selection queryable via
    /// [`Menu::choice`] and [`Menu::selection`].
    pub fn prompt_on(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
        self.build_prompt()?;
        write!(out, "{}", self.last_prompt)?;
        out.flush()?;
        let token = read_choice_from(self.style, &self.last_prompt, &self.tokens, input, out)?;
        let selection = resolve_choice(&token, &self.options_raw)?;
        self.choice = Some(token);
        self.selection = Some(selection.clone());
        Ok(selection)
    }
}
