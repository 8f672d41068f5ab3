use crate::error::Error;
use crate::item::Mnemonic;
use crate::style::Styler;
use crate::Result;

/// A single menu option parsed from its label.
///
/// The mnemonic is the first ASCII uppercase letter of the label; its
/// lowercase form is what the user types to select the option. A label
/// without an uppercase letter has no mnemonic and cannot be chosen by
/// letter input.
#[derive(Debug)]
pub struct MenuOption {
    label: String,
    mnemonic_at: Option<usize>,
}

impl MenuOption {
    fn new(label: &str) -> Self {
        let mnemonic_at = label.char_indices().find_map(|(at, c)| c.is_ascii_uppercase().then_some(at));
        Self {
            label: label.to_string(),
            mnemonic_at,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The lowercase token that selects this option, if any.
    pub fn mnemonic(&self) -> Option<char> {
        self.mnemonic_at
            .map(|at| self.label.as_bytes()[at].to_ascii_lowercase() as char)
    }

    /// The label with the mnemonic letter passed through the styler and
    /// every other character untouched.
    pub fn display<S>(&self, style: &S) -> String
    where
        S: Styler<Mnemonic>,
    {
        match self.mnemonic_at {
            Some(at) => {
                let c = self.label.as_bytes()[at] as char;
                format!(
                    "{}{}{}",
                    &self.label[..at],
                    style.style(&Mnemonic(c)),
                    &self.label[at + 1..]
                )
            }
            None => self.label.clone(),
        }
    }
}

/// An ordered option set parsed from a `/`-delimited string.
#[derive(Debug)]
pub struct OptionSet {
    options: Vec<MenuOption>,
}

impl OptionSet {
    /// Splits `raw` on `/` without trimming, so labels may contain
    /// spaces. The empty string parses to an empty set.
    ///
    /// Two options deriving the same mnemonic is a configuration error:
    /// one of them could never be selected.
    pub fn parse(raw: &str) -> Result<Self> {
        let options: Vec<_> = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split('/').map(MenuOption::new).collect()
        };
        let mut seen = Vec::new();
        for option in &options {
            if let Some(m) = option.mnemonic() {
                if seen.contains(&m) {
                    return Err(Error::DuplicateMnemonic(m));
                }
                seen.push(m);
            }
        }
        Ok(Self { options })
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuOption> {
        self.options.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Valid input tokens in declaration order.
    pub fn tokens(&self) -> Vec<String> {
        self.options
            .iter()
            .filter_map(|o| o.mnemonic())
            .map(String::from)
            .collect()
    }

    /// Resolves an accepted token to its option label, lowercased.
    ///
    /// The first option in declaration order whose mnemonic equals the
    /// token wins.
    pub fn resolve(&self, token: &str) -> Result<String> {
        self.options
            .iter()
            .find(|o| matches!(o.mnemonic(), Some(m) if m.to_string() == token))
            .map(|o| o.label().to_lowercase())
            .ok_or_else(|| Error::NoMatch {
                token: token.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyle;

    #[test]
    fn mnemonic_is_first_uppercase_letter() {
        assert_eq!(MenuOption::new("Apple").mnemonic(), Some('a'));
        assert_eq!(MenuOption::new("baNana").mnemonic(), Some('n'));
        assert_eq!(MenuOption::new("NYC").mnemonic(), Some('n'));
        assert_eq!(MenuOption::new("plain").mnemonic(), None);
    }

    #[test]
    fn display_keeps_other_characters_unchanged() {
        let option = MenuOption::new("baNana");
        assert_eq!(option.display(&PlainStyle), "baNana");
    }

    #[test]
    fn token_count_matches_labels_with_uppercase() {
        let set = OptionSet::parse("Apple/pear/Orange/kiwi").unwrap();
        assert_eq!(set.tokens(), vec!["a", "o"]);
    }

    #[test]
    fn empty_string_parses_to_empty_set() {
        let set = OptionSet::parse("").unwrap();
        assert!(set.is_empty());
        assert!(set.tokens().is_empty());
    }

    #[test]
    fn labels_may_contain_spaces() {
        let set = OptionSet::parse("New file/Open file").unwrap();
        assert_eq!(set.tokens(), vec!["n", "o"]);
        assert_eq!(set.resolve("o").unwrap(), "open file");
    }

    #[test]
    fn duplicate_mnemonics_are_rejected() {
        let err = OptionSet::parse("Apple/Avocado").unwrap_err();
        assert!(matches!(err, Error::DuplicateMnemonic('a')));
    }

    #[test]
    fn resolve_prefers_declaration_order() {
        // no-mnemonic labels never shadow a later match
        let set = OptionSet::parse("plain/Apple").unwrap();
        assert_eq!(set.resolve("a").unwrap(), "apple");
    }

    #[test]
    fn resolve_rejects_unknown_token() {
        let set = OptionSet::parse("Apple/baNana/Carrot").unwrap();
        assert!(matches!(
            set.resolve("o").unwrap_err(),
            Error::NoMatch { token } if token == "o"
        ));
    }

    #[test]
    fn multi_uppercase_label_matches_single_mnemonic() {
        let set = OptionSet::parse("NYC/Paris").unwrap();
        assert_eq!(set.resolve("n").unwrap(), "nyc");
        assert!(set.resolve("nyc").is_err());
    }
}
