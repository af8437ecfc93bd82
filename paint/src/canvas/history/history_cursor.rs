// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub type HistoryCursorNumber = isize;

/// Value of the cursor when the log is empty.
pub const MIN_INDEX: HistoryCursorNumber = -1;

/// Index of the most recently applied [`crate::HistoryEntry`], or [`MIN_INDEX`] when the
/// log is empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HistoryCursor(pub HistoryCursorNumber);

impl Default for HistoryCursor {
    fn default() -> Self { Self(MIN_INDEX) }
}

impl HistoryCursor {
    /// [None] when the cursor does not point at an entry.
    #[must_use]
    pub fn as_index(self) -> Option<usize> { usize::try_from(self.0).ok() }

    /// Point at the last entry of a log with `len` entries.
    pub fn set_to_last(&mut self, len: usize) {
        self.0 = HistoryCursorNumber::try_from(len)
            .map_or(HistoryCursorNumber::MAX, |it| it - 1);
    }

    /// Undo needs an entry below the cursor to go back to.
    #[must_use]
    pub fn can_step_back(self) -> bool { self.0 > 0 }

    pub fn dec(&mut self) {
        if self.0 > MIN_INDEX {
            self.0 -= 1;
        }
    }

    pub fn clear(&mut self) { self.0 = MIN_INDEX; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_cursor() {
        let mut cursor = HistoryCursor::default();
        assert_eq2!(cursor.as_index(), None);
        assert!(!cursor.can_step_back());

        cursor.set_to_last(3);
        assert_eq2!(cursor.as_index(), Some(2));
        assert!(cursor.can_step_back());

        cursor.dec();
        cursor.dec();
        assert_eq2!(cursor.as_index(), Some(0));
        assert!(!cursor.can_step_back());

        cursor.dec();
        cursor.dec();
        assert_eq2!(cursor, HistoryCursor(MIN_INDEX));

        cursor.set_to_last(0);
        assert_eq2!(cursor, HistoryCursor(MIN_INDEX));
    }
}
