use crate::item::PromptLabel;
use crate::style::MenuStyle;

use super::options::OptionSet;

/// Label sentinel that suppresses the label segment entirely.
pub const NO_LABEL: &str = "_";

/// Assembles the single prompt line: raw prefix, highlighted
/// `"<label>- "` segment (unless suppressed), option displays joined
/// with `/`, trailing `": "`.
pub fn build_prompt_line<S>(style: &S, prefix: &str, label: &str, set: &OptionSet) -> String
where
    S: MenuStyle,
{
    let mut line = String::from(prefix);
    if label != NO_LABEL {
        line.push_str(&style.style(&PromptLabel(label.to_string())));
    }
    let joined: Vec<_> = set.iter().map(|o| o.display(style)).collect();
    line.push_str(&joined.join("/"));
    line.push_str(": ");
    line
}
