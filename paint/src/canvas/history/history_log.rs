// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Undo algorithm
//!
//! [`HistoryLog`] is a linear log of per layer snapshots. Each entry holds the pixels of
//! one layer right after an edit to that layer finished. The cursor points at the most
//! recently applied entry.
//!
//! ## Recording (`record`)
//!
//! 1. Entries after the cursor are dropped. There is no redo, so history never
//!    branches.
//! 2. The layer's surface is encoded and appended.
//! 3. The cursor moves to the last entry.
//! 4. If the log is over capacity, the oldest entry is evicted. The cursor still points
//!    at the last entry, which is one index lower than before the eviction.
//!
//! ## Undoing (`undo`)
//!
//! 1. If the cursor is at index 0 or the log is empty, there is nothing to undo.
//! 2. The entry under the cursor is the state being undone. The cursor moves down one.
//! 3. Entries from the cursor down to 0 are scanned for the most recent one for the same
//!    layer. That snapshot replaces the layer's pixels.
//! 4. If there is no such entry, the layer keeps its current pixels. It is never
//!    cleared.
//!
//! ```text
//! entries: [ bg#1, ink#2, bg#1', ink#2' ]      cursor = 3
//! undo  →  undoing ink#2', cursor = 2, scan 2..=0 finds ink#2 at 1, restore it
//! undo  →  undoing bg#1',  cursor = 1, scan 1..=0 finds bg#1 at 0,  restore it
//! undo  →  undoing ink#2,  cursor = 0, scan 0..=0 finds nothing,   layer unchanged
//! undo  →  cursor = 0, nothing to undo
//! ```
//!
//! Other layers are never touched by an undo.

use std::{collections::VecDeque,
          fmt::{Debug, Formatter, Result as FmtResult}};

use super::{HistoryCursor, HistoryEntry};
use crate::{CanvasError, DEBUG_PAINT_HISTORY, LayerId, LayerStack, PixelSurface};

/// How many snapshots are kept when nothing else is configured.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// What a call to [`HistoryLog::undo`] did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UndoOutcome {
    /// The cursor was already at the bottom of the log. Nothing changed.
    NothingToUndo,
    /// The layer got the pixels of its previous snapshot.
    Restored { layer_id: LayerId },
    /// The undone entry was the first one for this layer still in the log, so the layer
    /// keeps its current pixels. The cursor still moved.
    NoPriorSnapshot { layer_id: LayerId },
    /// The layer was deleted after the entry was recorded. The cursor still moved.
    LayerMissing { layer_id: LayerId },
}

impl UndoOutcome {
    /// Whether any pixels changed.
    #[must_use]
    pub fn is_restored(&self) -> bool { matches!(self, UndoOutcome::Restored { .. }) }
}

#[derive(Clone, PartialEq)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    cursor: HistoryCursor,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self { Self::new(DEFAULT_MAX_HISTORY) }
}

impl HistoryLog {
    /// A `capacity` of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            cursor: HistoryCursor::default(),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn cursor(&self) -> HistoryCursor { self.cursor }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> { self.entries.iter() }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor.clear();
    }

    /// Snapshot the current pixels of `layer_id` and append them.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::LayerNotFound`] if there is no such layer. Nothing changes.
    /// - [`CanvasError::ImageEncode`] if the snapshot can't be encoded.
    pub fn record(&mut self, stack: &LayerStack, layer_id: LayerId) -> Result<(), CanvasError> {
        let snapshot = stack.try_get(layer_id)?.surface().encode()?;
        self.push(HistoryEntry::new(layer_id, snapshot));

        DEBUG_PAINT_HISTORY.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📸 Record snapshot",
                layer_id = %layer_id,
                history = ?self,
            );
        });

        Ok(())
    }

    /// Start over with one baseline entry per layer, bottom to top.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ImageEncode`] if a snapshot can't be encoded.
    pub fn reset_to_baselines(&mut self, stack: &LayerStack) -> Result<(), CanvasError> {
        self.clear();
        for &layer_id in stack.paint_order() {
            self.record(stack, layer_id)?;
        }
        Ok(())
    }

    /// Append an entry, dropping anything after the cursor and evicting the oldest entry
    /// when over capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        let keep = self.cursor.as_index().map_or(0, |it| it + 1);
        self.entries.truncate(keep);
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor.set_to_last(self.entries.len());
    }

    /// Step back one entry and restore the affected layer to its previous snapshot. See
    /// the [module docs](self) for the algorithm.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ImageDecode`] or [`CanvasError::DimensionMismatch`] if the previous
    /// snapshot can't be decoded. The log and the layer are left untouched in this case.
    pub fn undo(&mut self, stack: &mut LayerStack) -> Result<UndoOutcome, CanvasError> {
        if !self.cursor.can_step_back() {
            DEBUG_PAINT_HISTORY.then(|| {
                tracing::debug!(message = "⏪ Nothing to undo", history = ?self);
            });
            return Ok(UndoOutcome::NothingToUndo);
        }
        let Some(undone_index) = self.cursor.as_index() else {
            return Ok(UndoOutcome::NothingToUndo);
        };
        let Some(undone) = self.entries.get(undone_index) else {
            return Ok(UndoOutcome::NothingToUndo);
        };
        let layer_id = undone.layer_id();

        let outcome = if stack.contains(layer_id) {
            let prior = self
                .entries
                .range(..undone_index)
                .rev()
                .find(|it| it.layer_id() == layer_id);
            match prior {
                Some(prior) => {
                    let size = stack.canvas_size();
                    let restored = PixelSurface::decode(size, prior.snapshot())?;
                    stack.surface_mut(layer_id)?.replace_pixels(restored)?;
                    UndoOutcome::Restored { layer_id }
                }
                None => UndoOutcome::NoPriorSnapshot { layer_id },
            }
        } else {
            UndoOutcome::LayerMissing { layer_id }
        };

        self.cursor.dec();

        DEBUG_PAINT_HISTORY.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⏪ Undo",
                outcome = ?outcome,
                history = ?self,
            );
        });

        Ok(outcome)
    }
}

impl Debug for HistoryLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write! {
            f,
            "HistoryLog [cursor: {cursor} | entries: {len}/{capacity} | size: {size} bytes]",
            cursor = self.cursor.0,
            len = self.entries.len(),
            capacity = self.capacity,
            size = self.entries.iter().map(|it| it.snapshot().len()).sum::<usize>(),
        }
    }
}

#[cfg(test)]
mod tests_history_log {
    use super::*;
    use crate::{BrushShape, CanvasPos, EncodedImage, PaintMode, RgbColor, RgbaColor,
                StrokeStyle, assert_eq2, height, width};

    fn dot(stack: &mut LayerStack, layer_id: LayerId, x: u32, y: u32) {
        stack
            .surface_mut(layer_id)
            .unwrap()
            .set_pixel(x, y, RgbaColor::opaque(RgbColor::BLACK));
    }

    /// Background plus one ink layer, each with a baseline entry.
    fn create_stack_and_history() -> (LayerStack, HistoryLog, LayerId, LayerId) {
        let mut stack = LayerStack::new(width(3) + height(3));
        let background = stack.add_layer("Background").unwrap();
        let ink = stack.add_layer("Ink").unwrap();
        let mut history = HistoryLog::new(DEFAULT_MAX_HISTORY);
        history.reset_to_baselines(&stack).unwrap();
        (stack, history, background, ink)
    }

    #[test]
    fn test_empty_log() {
        let mut stack = LayerStack::new(width(1) + height(1));
        let mut history = HistoryLog::default();
        assert_eq2!(history.capacity(), DEFAULT_MAX_HISTORY);
        assert_eq2!(history.cursor().as_index(), None);
        assert_eq2!(history.undo(&mut stack), Ok(UndoOutcome::NothingToUndo));
    }

    #[test]
    fn test_record_unknown_layer() {
        let stack = LayerStack::new(width(1) + height(1));
        let mut history = HistoryLog::default();
        assert_eq2!(
            history.record(&stack, LayerId(5)),
            Err(CanvasError::LayerNotFound {
                layer_id: LayerId(5)
            })
        );
        assert!(history.is_empty());
    }

    #[test]
    fn test_paint_record_undo_restores_transparent_layer() {
        let (mut stack, mut history, _, ink) = create_stack_and_history();
        let before = stack.get(ink).unwrap().surface().clone();

        stack.surface_mut(ink).unwrap().paint_segment(
            CanvasPos::new(0.0, 0.0),
            CanvasPos::new(1.0, 0.0),
            &StrokeStyle {
                color: RgbaColor::opaque(RgbColor::BLACK),
                brush_width: 1,
                shape: BrushShape::Round,
                mode: PaintMode::Normal,
            },
        );
        history.record(&stack, ink).unwrap();
        assert_ne!(stack.get(ink).unwrap().surface(), &before);

        assert_eq2!(
            history.undo(&mut stack),
            Ok(UndoOutcome::Restored { layer_id: ink })
        );
        assert_eq2!(stack.get(ink).unwrap().surface(), &before);
    }

    #[test]
    fn test_undo_never_touches_other_layers() {
        let (mut stack, mut history, background, ink) = create_stack_and_history();

        dot(&mut stack, background, 0, 0);
        history.record(&stack, background).unwrap();
        dot(&mut stack, ink, 1, 1);
        history.record(&stack, ink).unwrap();

        let background_after_edit = stack.get(background).unwrap().surface().clone();

        // Undo the ink edit, background keeps its dot.
        assert_eq2!(
            history.undo(&mut stack),
            Ok(UndoOutcome::Restored { layer_id: ink })
        );
        assert_eq2!(stack.get(ink).unwrap().surface().count_non_transparent(), 0);
        assert_eq2!(
            stack.get(background).unwrap().surface(),
            &background_after_edit
        );

        // Undo the background edit.
        assert_eq2!(
            history.undo(&mut stack),
            Ok(UndoOutcome::Restored {
                layer_id: background
            })
        );
        assert_eq2!(
            stack.get(background).unwrap().surface().get_pixel(0, 0),
            Some(RgbaColor::OPAQUE_WHITE)
        );
    }

    #[test]
    fn test_undo_stabilizes_when_exhausted() {
        let (mut stack, mut history, _, ink) = create_stack_and_history();
        dot(&mut stack, ink, 2, 2);
        history.record(&stack, ink).unwrap();

        assert!(history.undo(&mut stack).unwrap().is_restored());
        let settled = stack.clone();

        // Undoing the ink baseline finds nothing older, so the layer stays as is.
        assert_eq2!(
            history.undo(&mut stack),
            Ok(UndoOutcome::NoPriorSnapshot { layer_id: ink })
        );
        assert_eq2!(stack, settled);

        for _ in 0..5 {
            assert_eq2!(history.undo(&mut stack), Ok(UndoOutcome::NothingToUndo));
            assert_eq2!(stack, settled);
        }
        assert_eq2!(history.cursor().as_index(), Some(0));
    }

    #[test]
    fn test_undo_of_deleted_layer() {
        let (mut stack, mut history, _, ink) = create_stack_and_history();
        dot(&mut stack, ink, 0, 0);
        history.record(&stack, ink).unwrap();
        stack.delete_layer(ink).unwrap();
        let before = stack.clone();

        assert_eq2!(
            history.undo(&mut stack),
            Ok(UndoOutcome::LayerMissing { layer_id: ink })
        );
        assert_eq2!(stack, before);
        assert_eq2!(history.cursor().as_index(), Some(1));
    }

    #[test]
    fn test_record_after_undo_truncates() {
        let (mut stack, mut history, background, ink) = create_stack_and_history();
        dot(&mut stack, ink, 0, 0);
        history.record(&stack, ink).unwrap();
        dot(&mut stack, ink, 1, 0);
        history.record(&stack, ink).unwrap();
        assert_eq2!(history.len(), 4);

        history.undo(&mut stack).unwrap();
        history.undo(&mut stack).unwrap();
        assert_eq2!(history.cursor().as_index(), Some(1));

        dot(&mut stack, background, 2, 2);
        history.record(&stack, background).unwrap();
        assert_eq2!(history.len(), 3);
        assert_eq2!(history.cursor().as_index(), Some(2));
        let ids: Vec<LayerId> = history.entries().map(HistoryEntry::layer_id).collect();
        assert_eq2!(ids, vec![background, ink, background]);
    }

    #[test]
    fn test_capacity_bound() {
        let (mut stack, _, background, ink) = create_stack_and_history();
        let mut history = HistoryLog::new(3);
        for index in 0..10 {
            let layer_id = if index % 2 == 0 { background } else { ink };
            history.record(&stack, layer_id).unwrap();
            assert!(history.len() <= 3);
            assert_eq2!(history.cursor().as_index(), Some(history.len() - 1));
        }
        assert_eq2!(history.len(), 3);

        // Left in the log: [ink, background, ink]. The evicted entries are gone, so the
        // only background entry has nothing before it.
        dot(&mut stack, ink, 0, 0);
        assert!(history.undo(&mut stack).unwrap().is_restored());
        assert_eq2!(stack.get(ink).unwrap().surface().count_non_transparent(), 0);
        assert_eq2!(
            history.undo(&mut stack),
            Ok(UndoOutcome::NoPriorSnapshot {
                layer_id: background
            })
        );
        assert_eq2!(history.undo(&mut stack), Ok(UndoOutcome::NothingToUndo));
    }

    #[test]
    fn test_corrupt_snapshot_leaves_everything_untouched() {
        let (mut stack, history, _, ink) = create_stack_and_history();
        let mut history_with_garbage = HistoryLog::new(5);
        history_with_garbage.push(HistoryEntry::new(ink, EncodedImage::from(vec![1, 2, 3])));
        history_with_garbage.record(&stack, ink).unwrap();

        let before = stack.clone();
        let result = history_with_garbage.undo(&mut stack);
        assert!(matches!(result, Err(CanvasError::ImageDecode { .. })));
        assert_eq2!(stack, before);
        assert_eq2!(history_with_garbage.cursor().as_index(), Some(1));

        // The regular log is unaffected.
        assert_eq2!(history.len(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let (stack, _, background, _) = create_stack_and_history();
        let mut history = HistoryLog::new(0);
        history.record(&stack, background).unwrap();
        history.record(&stack, background).unwrap();
        assert_eq2!(history.len(), 1);
    }
}
