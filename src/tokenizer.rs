pub mod base_text;

/// Separates tokens within a block.
pub const TOKEN_SEPARATOR: char = ' ';

/// Separates blocks.
pub const BLOCK_SEPARATOR: char = '\n';

/// Carriage returns are not part of any token, so that `\r\n` texts are
/// addressed exactly like `\n` ones.
pub(crate) const IGNORED_CHARACTER: char = '\r';
