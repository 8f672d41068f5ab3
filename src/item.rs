/// Represents the prompt label segment.
///
/// The label describes what the menu asks for and is rendered
/// as `"<label>- "` ahead of the option listing.
pub struct PromptLabel(pub String);

/// The mnemonic letter of an option, as it appears in the label.
///
/// Users type its lowercase form to select the option, so stylers
/// should make it stand out from the rest of the label.
pub struct Mnemonic(pub char);

/// Warning shown when typed input matches no valid token.
///
/// Carries the full valid token set so the user can see what
/// would have been accepted.
pub struct InvalidChoice(pub Vec<String>);

/// The header block printed before each command-loop cycle.
pub struct Header(pub String);

/// Banner printed when a command-loop selection is dispatched.
pub struct CommandBanner {
    pub selection: String,
    pub stamp: String,
}

/// One line of captured handler output, echoed after dispatch.
pub struct OutputLine(pub String);
