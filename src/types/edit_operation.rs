use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{
    diff_adapter::DiffAdapter,
    diffs::raw_operation::RawOperation,
    types::{coordinate::Coordinate, location::Location},
};

/// How a token changed between two revisions of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditOperator {
    Equal,
    Delete,
    Insert,
    Replace,
    MoveOut,
    MoveIn,
}

impl EditOperator {
    /// Stable three letter name used in the textual form of operations.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            EditOperator::Equal => "equ",
            EditOperator::Delete => "del",
            EditOperator::Insert => "ins",
            EditOperator::Replace => "rep",
            EditOperator::MoveOut => "mvo",
            EditOperator::MoveIn => "mvi",
        }
    }
}

impl From<&RawOperation> for EditOperator {
    fn from(operation: &RawOperation) -> Self {
        match operation {
            RawOperation::Equal(..) => EditOperator::Equal,
            RawOperation::Insert(..) => EditOperator::Insert,
            RawOperation::Delete(..) => EditOperator::Delete,
        }
    }
}

/// A token-level edit between an old and a new revision of a text.
///
/// `old_location` addresses the token in the old text, `new_location` in the
/// new one. `old_value` is only set for replacements. `group_id` pairs a
/// `MoveOut` with its `MoveIn` and is 0 for every other operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOperation {
    pub operator: EditOperator,
    pub old_location: Location,
    pub new_location: Location,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default)]
    pub group_id: u32,
}

impl EditOperation {
    #[must_use]
    pub fn new(
        operator: EditOperator,
        old_location: Location,
        new_location: Location,
        value: impl Into<String>,
    ) -> Self {
        Self {
            operator,
            old_location,
            new_location,
            value: value.into(),
            old_value: None,
            group_id: 0,
        }
    }

    /// Creates an operation addressing single tokens through their
    /// `(block, token)` ordinals in the old and the new text.
    #[must_use]
    pub fn at(
        operator: EditOperator,
        (old_block, old_token): (u32, u32),
        (new_block, new_token): (u32, u32),
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            operator,
            Coordinate::new(old_block, old_token).into(),
            Coordinate::new(new_block, new_token).into(),
            value,
        )
    }

    /// Diffs `old` against `new` with the default character differ and
    /// returns the token-level operations turning the former into the latter.
    ///
    /// ```
    /// use layer_reconcile::{EditOperation, EditOperator};
    ///
    /// let operations = EditOperation::diff("Hello world", "Hello big world");
    /// assert_eq!(
    ///     operations
    ///         .iter()
    ///         .map(|operation| operation.operator)
    ///         .collect::<Vec<_>>(),
    ///     vec![EditOperator::Equal, EditOperator::Insert, EditOperator::Equal]
    /// );
    /// ```
    #[must_use]
    pub fn diff(old: &str, new: &str) -> Vec<EditOperation> { DiffAdapter::default().diff(old, new) }
}

impl Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}>{} '{}'",
            self.operator.short_name(),
            self.old_location,
            self.new_location,
            self.value.replace('\n', "\\n")
        )?;

        if let Some(old_value) = &self.old_value {
            write!(f, " (was '{}')", old_value.replace('\n', "\\n"))?;
        }

        if self.group_id > 0 {
            write!(f, " #{}", self.group_id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_snapshot!(
            EditOperation::at(EditOperator::Equal, (1, 2), (1, 3), "world"),
            @"equ 1.2>1.3 'world'"
        );

        let mut replace = EditOperation::at(EditOperator::Replace, (2, 1), (2, 1), "bar");
        replace.old_value = Some("foo".to_owned());
        assert_snapshot!(replace, @"rep 2.1>2.1 'bar' (was 'foo')");

        let mut move_out = EditOperation::at(EditOperator::MoveOut, (1, 1), (1, 1), "a");
        move_out.group_id = 3;
        assert_snapshot!(move_out, @"mvo 1.1>1.1 'a' #3");
    }

    #[test]
    fn test_serde() {
        let mut operation = EditOperation::at(EditOperator::MoveIn, (1, 3), (1, 3), "a");
        operation.group_id = 1;

        let json = serde_json::to_value(&operation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "operator": "moveIn",
                "oldLocation": "1.3",
                "newLocation": "1.3",
                "value": "a",
                "groupId": 1,
            })
        );
        assert_eq!(
            serde_json::from_value::<EditOperation>(json).unwrap(),
            operation
        );
    }
}
