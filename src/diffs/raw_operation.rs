/// A run of characters produced by a character-level diff.
///
/// `Equal` and `Delete` runs concatenated in order rebuild the old text,
/// `Equal` and `Insert` runs rebuild the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOperation {
    Equal(String),
    Insert(String),
    Delete(String),
}

impl RawOperation {
    pub fn text(&self) -> &str {
        match self {
            RawOperation::Equal(text) | RawOperation::Insert(text) | RawOperation::Delete(text) => {
                text
            }
        }
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            RawOperation::Equal(text) | RawOperation::Insert(text) | RawOperation::Delete(text) => {
                text
            }
        }
    }

    pub fn is_empty(&self) -> bool { self.text().is_empty() }

    /// Whether the run contributes to the old text.
    pub fn is_in_old(&self) -> bool { !matches!(self, RawOperation::Insert(..)) }

    /// Whether the run contributes to the new text.
    pub fn is_in_new(&self) -> bool { !matches!(self, RawOperation::Delete(..)) }

    /// Appends `other`'s text if both runs are of the same kind. Returns
    /// whether the runs were joined.
    pub(crate) fn try_join(&mut self, other: &RawOperation) -> bool {
        if std::mem::discriminant(self) != std::mem::discriminant(other) {
            return false;
        }

        self.text_mut().push_str(other.text());
        true
    }
}

/// Pushes `operation` onto `runs`, extending the last run when it is of the
/// same kind and dropping empty runs.
pub(crate) fn push_run(runs: &mut Vec<RawOperation>, operation: RawOperation) {
    if operation.is_empty() {
        return;
    }

    if let Some(last) = runs.last_mut() {
        if last.try_join(&operation) {
            return;
        }
    }

    runs.push(operation);
}
