use crate::{
    tokenizer::{BLOCK_SEPARATOR, IGNORED_CHARACTER, TOKEN_SEPARATOR},
    types::{coordinate::Coordinate, location::Location},
};

/// A base text split into blocks (lines) and tokens (space separated words),
/// numbered from 1 the same way edit operations number them.
///
/// Consecutive separators produce empty tokens, so ordinals always match the
/// ones computed while adapting a diff.
///
/// ## Example
///
/// ```not_rust
/// "Hello world\nbye" -> [["Hello", "world"], ["bye"]]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BaseText {
    blocks: Vec<Vec<String>>,
}

impl BaseText {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let blocks = text
            .split(BLOCK_SEPARATOR)
            .map(|block| {
                block
                    .split(TOKEN_SEPARATOR)
                    .map(|token| token.chars().filter(|&c| c != IGNORED_CHARACTER).collect())
                    .collect()
            })
            .collect();

        Self { blocks }
    }

    #[must_use]
    pub fn block_count(&self) -> usize { self.blocks.len() }

    /// Number of tokens in the 1-based `block`, or 0 if there is no such
    /// block.
    #[must_use]
    pub fn token_count(&self, block: u32) -> usize {
        self.block(block).map_or(0, <[String]>::len)
    }

    /// The whole token `coordinate` points into, ignoring its character range.
    #[must_use]
    pub fn token(&self, coordinate: Coordinate) -> Option<&str> {
        let index = usize::try_from(coordinate.token()).ok()?.checked_sub(1)?;
        self.block(coordinate.block())?
            .get(index)
            .map(String::as_str)
    }

    /// Returns the text covered by `location`.
    ///
    /// A sub-token point yields its `char_run` characters starting at the
    /// 1-based `char_at`. In a range, a sub-token primary starts the text at
    /// its `char_at` and a sub-token secondary ends it after its run. Tokens
    /// of a block are joined with a space and blocks with a newline.
    ///
    /// Returns `None` for the empty location, for coordinates outside the
    /// text, and for ranges ending before they start.
    #[must_use]
    pub fn text_at(&self, location: &Location) -> Option<String> {
        if location.is_empty() {
            return None;
        }

        let primary = location.primary();
        let Some(secondary) = location.secondary() else {
            let token = self.token(primary)?;
            return if primary.is_sub_token() {
                let start = usize::from(primary.char_at()) - 1;
                char_slice(token, start, Some(start + usize::from(primary.char_run())))
            } else {
                Some(token.to_owned())
            };
        };

        if secondary < primary {
            return None;
        }
        // Both ends must exist.
        self.token(primary)?;
        self.token(secondary)?;

        let mut result = String::new();
        for block in primary.block()..=secondary.block() {
            let tokens = self.block(block)?;

            if block != primary.block() {
                result.push(BLOCK_SEPARATOR);
            }

            let first = if block == primary.block() {
                primary.token() as usize
            } else {
                1
            };
            let last = if block == secondary.block() {
                secondary.token() as usize
            } else {
                tokens.len()
            };

            for token_number in first..=last {
                let token = tokens.get(token_number - 1)?.as_str();
                let is_first = block == primary.block() && token_number == first;
                let is_last = block == secondary.block() && token_number == last;

                let start = if is_first && primary.is_sub_token() {
                    usize::from(primary.char_at()) - 1
                } else {
                    0
                };
                let end = if is_last && secondary.is_sub_token() {
                    Some(usize::from(secondary.char_at()) - 1 + usize::from(secondary.char_run()))
                } else {
                    None
                };

                if token_number != first {
                    result.push(TOKEN_SEPARATOR);
                }
                result.push_str(&char_slice(token, start, end)?);
            }
        }

        Some(result)
    }

    fn block(&self, block: u32) -> Option<&[String]> {
        let index = usize::try_from(block).ok()?.checked_sub(1)?;
        self.blocks.get(index).map(Vec::as_slice)
    }
}

/// Characters `start..end` of `text` (to the end when `end` is `None`), or
/// `None` when the range doesn't fit.
fn char_slice(text: &str, start: usize, end: Option<usize>) -> Option<String> {
    let length = text.chars().count();
    let end = end.unwrap_or(length);

    if start > end || end > length {
        return None;
    }

    Some(text.chars().skip(start).take(end - start).collect())
}
