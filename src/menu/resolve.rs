use crate::Result;

use super::options::OptionSet;

/// Resolves an accepted token against a `/`-delimited option string.
///
/// This is a pure re-derivation from the raw string, independent of any
/// prompt previously built from it, so a token can be resolved against a
/// different option string than the one last shown.
pub fn resolve_choice(token: &str, options_raw: &str) -> Result<String> {
    OptionSet::parse(options_raw)?.resolve(token)
}
