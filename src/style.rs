use crossterm::style::Stylize;

use crate::item::{CommandBanner, Header, InvalidChoice, Mnemonic, OutputLine, PromptLabel};
use crate::util::rule_after;

/// Renders a display item into terminal text.
///
/// A styler is a pure function from item to string; all escape codes a
/// menu emits come from here, so swapping the styler swaps the whole
/// look of the engine.
pub trait Styler<I> {
    fn style(&self, item: &I) -> String;
}

/// Everything a menu session needs from its styler.
pub trait MenuStyle:
    Styler<PromptLabel>
    + Styler<Mnemonic>
    + Styler<InvalidChoice>
    + Styler<Header>
    + Styler<CommandBanner>
    + Styler<OutputLine>
{
}

impl<S> MenuStyle for S where
    S: Styler<PromptLabel>
        + Styler<Mnemonic>
        + Styler<InvalidChoice>
        + Styler<Header>
        + Styler<CommandBanner>
        + Styler<OutputLine>
{
}

/// Colored rendering: cyan prompt label, underlined mnemonics,
/// red warnings.
pub struct DefaultStyle;

impl Styler<PromptLabel> for DefaultStyle {
    fn style(&self, item: &PromptLabel) -> String {
        format!("{}", format!("{}- ", item.0).cyan().bold())
    }
}

impl Styler<Mnemonic> for DefaultStyle {
    fn style(&self, item: &Mnemonic) -> String {
        format!("{}", item.0.yellow().underlined())
    }
}

impl Styler<InvalidChoice> for DefaultStyle {
    fn style(&self, item: &InvalidChoice) -> String {
        let text = format!("invalid choice, pick one of: {}", item.0.join(", "));
        format!("{}", text.red())
    }
}

impl Styler<Header> for DefaultStyle {
    fn style(&self, item: &Header) -> String {
        format!("{}", item.0.as_str().bold())
    }
}

impl Styler<CommandBanner> for DefaultStyle {
    fn style(&self, item: &CommandBanner) -> String {
        let text = format!("[{}] {}", item.stamp, item.selection);
        format!("{}", rule_after(&text).dark_grey())
    }
}

impl Styler<OutputLine> for DefaultStyle {
    fn style(&self, item: &OutputLine) -> String {
        format!("{} {}", "|".dark_grey(), item.0)
    }
}

/// Escape-free rendering, for dumb terminals and captured output.
///
/// Mnemonics keep their uppercase spelling as the only visual cue.
pub struct PlainStyle;

impl Styler<PromptLabel> for PlainStyle {
    fn style(&self, item: &PromptLabel) -> String {
        format!("{}- ", item.0)
    }
}

impl Styler<Mnemonic> for PlainStyle {
    fn style(&self, item: &Mnemonic) -> String {
        item.0.to_string()
    }
}

impl Styler<InvalidChoice> for PlainStyle {
    fn style(&self, item: &InvalidChoice) -> String {
        format!("invalid choice, pick one of: {}", item.0.join(", "))
    }
}

impl Styler<Header> for PlainStyle {
    fn style(&self, item: &Header) -> String {
        item.0.clone()
    }
}

impl Styler<CommandBanner> for PlainStyle {
    fn style(&self, item: &CommandBanner) -> String {
        rule_after(&format!("[{}] {}", item.stamp, item.selection))
    }
}

impl Styler<OutputLine> for PlainStyle {
    fn style(&self, item: &OutputLine) -> String {
        format!("| {}", item.0)
    }
}
