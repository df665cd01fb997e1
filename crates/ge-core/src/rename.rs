//! Two-phase column rename
//!
//! Editing keeps a working buffer decoupled from the committed dataset.
//! The commit guard requires a trimmed, non-empty buffer that differs from
//! the original name; a failed guard discards the edit.

/// Transient state of the header rename editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RenameState {
    #[default]
    Idle,
    Editing { old_name: String, buffer: String },
}

impl RenameState {
    /// Begin editing a column; the buffer starts as the current name.
    pub fn start(&mut self, column: &str) {
        *self = RenameState::Editing {
            old_name: column.to_owned(),
            buffer: column.to_owned(),
        };
    }

    /// Mutate only the working buffer; the dataset stays untouched until
    /// commit. Ignored while idle.
    pub fn update_buffer(&mut self, text: &str) {
        if let RenameState::Editing { buffer, .. } = self {
            *buffer = text.to_owned();
        }
    }

    pub fn is_editing(&self, column: &str) -> bool {
        matches!(self, RenameState::Editing { old_name, .. } if old_name == column)
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            RenameState::Editing { buffer, .. } => Some(buffer),
            RenameState::Idle => None,
        }
    }

    /// Discard the edit without touching the dataset.
    pub fn cancel(&mut self) {
        *self = RenameState::Idle;
    }

    /// End editing and return the (old, new) pair when the commit guard
    /// passes. The discarded path clears the editing state all the same.
    pub fn take_commit(&mut self) -> Option<(String, String)> {
        match std::mem::take(self) {
            RenameState::Editing { old_name, buffer }
                if !buffer.trim().is_empty() && buffer != old_name =>
            {
                Some((old_name, buffer))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_rename_sequence() {
        let mut rename = RenameState::default();
        rename.start("series1");
        assert!(rename.is_editing("series1"));
        assert_eq!(rename.buffer(), Some("series1"));

        rename.update_buffer("revenue");
        assert_eq!(rename.buffer(), Some("revenue"));

        assert_eq!(
            rename.take_commit(),
            Some(("series1".to_owned(), "revenue".to_owned()))
        );
        assert_eq!(rename, RenameState::Idle);
    }

    #[test]
    fn test_commit_discards_blank_buffer() {
        let mut rename = RenameState::default();
        rename.start("series1");
        rename.update_buffer("   ");
        assert_eq!(rename.take_commit(), None);
        assert_eq!(rename, RenameState::Idle);
    }

    #[test]
    fn test_commit_discards_unchanged_name() {
        let mut rename = RenameState::default();
        rename.start("series1");
        assert_eq!(rename.take_commit(), None);
        assert_eq!(rename, RenameState::Idle);
    }

    #[test]
    fn test_cancel_clears_editing() {
        let mut rename = RenameState::default();
        rename.start("series1");
        rename.update_buffer("revenue");
        rename.cancel();
        assert_eq!(rename, RenameState::Idle);
        assert_eq!(rename.take_commit(), None);
    }

    #[test]
    fn test_update_while_idle_is_ignored() {
        let mut rename = RenameState::default();
        rename.update_buffer("revenue");
        assert_eq!(rename, RenameState::Idle);
    }
}
