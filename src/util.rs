use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 56;

/// Pads `text` with a horizontal rule out to the banner width.
///
/// Width is measured in display columns, so wide (CJK) selections do
/// not overshoot the rule. The rule char U+2500 is ambiguous-width, so
/// everything is measured in narrow columns.
pub(crate) fn rule_after(text: &str) -> String {
    let fill = RULE_WIDTH.saturating_sub(text.width() + 1);
    format!("{} {}", text, "─".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_fills_to_fixed_width() {
        let line = rule_after("[12:00:00] apple");
        assert_eq!(line.width(), RULE_WIDTH);
    }

    #[test]
    fn wide_text_does_not_overshoot() {
        let line = rule_after("[12:00:00] 林檎");
        assert_eq!(line.width(), RULE_WIDTH);
    }

    #[test]
    fn rule_char_counts_as_one_column() {
        let line = rule_after("x");
        assert_eq!(line.chars().filter(|c| *c == '─').count(), RULE_WIDTH - 2);
    }

    #[test]
    fn oversized_text_keeps_one_space() {
        let text = "x".repeat(RULE_WIDTH + 4);
        let line = rule_after(&text);
        assert_eq!(line, format!("{} ", text));
    }
}
