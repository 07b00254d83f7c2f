use crate::{
    diffs::raw_operation::RawOperation,
    tokenizer::{BLOCK_SEPARATOR, IGNORED_CHARACTER, TOKEN_SEPARATOR},
    types::edit_operation::{EditOperation, EditOperator},
};

/// `(block, token)` position of a token in one of the two texts.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    block: u32,
    token: u32,
}

impl Cursor {
    const START: Cursor = Cursor { block: 1, token: 1 };

    fn next_token(&mut self) { self.token += 1; }

    fn next_block(&mut self) {
        self.block += 1;
        self.token = 1;
    }
}

/// Cuts the character runs into per-token operations, tracking where each
/// token sits in the old and in the new text.
///
/// A token is closed by a separator or by the end of its run. Runs ending
/// inside a token produce several pieces sharing the same locations; those
/// are merged by [`super::join_tokens::join_tokens`].
pub fn tokenize_runs(runs: &[RawOperation]) -> Vec<EditOperation> {
    let mut operations = Vec::new();
    let mut old = Cursor::START;
    let mut new = Cursor::START;
    let mut token = String::new();

    for run in runs {
        let operator = EditOperator::from(run);

        for character in run.text().chars() {
            match character {
                IGNORED_CHARACTER => {}
                TOKEN_SEPARATOR | BLOCK_SEPARATOR => {
                    flush(&mut operations, &mut token, operator, old, new);

                    if run.is_in_old() {
                        old.next_token();
                    }
                    if run.is_in_new() {
                        new.next_token();
                    }

                    if character == BLOCK_SEPARATOR {
                        if run.is_in_old() {
                            old.next_block();
                        }
                        if run.is_in_new() {
                            new.next_block();
                        }
                    }
                }
                _ => token.push(character),
            }
        }

        flush(&mut operations, &mut token, operator, old, new);
    }

    operations
}

fn flush(
    operations: &mut Vec<EditOperation>,
    token: &mut String,
    operator: EditOperator,
    old: Cursor,
    new: Cursor,
) {
    if token.is_empty() {
        return;
    }

    operations.push(EditOperation::at(
        operator,
        (old.block, old.token),
        (new.block, new.token),
        std::mem::take(token),
    ));
}
