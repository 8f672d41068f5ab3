use std::io;

use thiserror::Error;

/// Errors reported by the menu engine.
///
/// Invalid input typed at a prompt is not represented here: the read loop
/// recovers from it locally by warning and re-prompting.
#[derive(Debug, Error)]
pub enum Error {
    /// Two options in the same set derive the same mnemonic letter.
    #[error("duplicate mnemonic '{0}' in option set")]
    DuplicateMnemonic(char),
    /// A choice was requested against a set with no selectable options.
    #[error("option set has no selectable options")]
    EmptyOptionSet,
    /// An accepted token matched no option label on resolution.
    #[error("no option matches choice '{token}'")]
    NoMatch { token: String },
    /// The input source closed before a choice was made.
    #[error("input closed before a choice was made")]
    Cancelled,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
