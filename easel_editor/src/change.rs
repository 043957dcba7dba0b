// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Changes held inline before the queue spills to the heap.
const INLINE_CHANGES: usize = 8;

/// Something in the model or scene that affects what is on screen.
///
/// Shape indices count from the topmost shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelChange {
    /// A shape was added at `index`.
    ShapeAdded {
        /// Position of the new shape.
        index: usize,
    },
    /// The shape at `index` was removed.
    ShapeRemoved {
        /// Former position of the shape.
        index: usize,
    },
    /// The shape at `index` moved or changed appearance.
    ShapeModified {
        /// Position of the shape.
        index: usize,
    },
    /// All shapes were removed.
    Cleared,
    /// The selection changed.
    SelectionChanged {
        /// Newly selected shape, if any.
        selected: Option<usize>,
    },
    /// The 3D scene geometry changed.
    SceneChanged,
}

impl ModelChange {
    /// The category this change falls into.
    #[must_use]
    pub fn kind(&self) -> ChangeSet {
        match self {
            Self::ShapeAdded { .. }
            | Self::ShapeRemoved { .. }
            | Self::ShapeModified { .. }
            | Self::Cleared => ChangeSet::SHAPES,
            Self::SelectionChanged { .. } => ChangeSet::SELECTION,
            Self::SceneChanged => ChangeSet::SCENE,
        }
    }
}

bitflags::bitflags! {
    /// Summary of the categories present in a batch of [`ModelChange`]s.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ChangeSet: u8 {
        /// Shapes were added, removed or modified.
        const SHAPES    = 0b0000_0001;
        /// The selection changed.
        const SELECTION = 0b0000_0010;
        /// The 3D scene changed.
        const SCENE     = 0b0000_0100;
    }
}

/// FIFO of pending [`ModelChange`]s.
///
/// The queue also carries a revision counter that bumps on every push and
/// never goes back, so a consumer can tell whether anything happened since
/// it last looked even after the queue was drained.
#[derive(Clone, Debug, Default)]
pub struct ChangeQueue {
    pending: SmallVec<[ModelChange; INLINE_CHANGES]>,
    revision: u64,
}

impl ChangeQueue {
    /// Creates an empty queue at revision 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a change.
    pub fn push(&mut self, change: ModelChange) {
        self.pending.push(change);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Moves every change out of `other` onto the end of this queue.
    pub fn append(&mut self, other: &mut Self) {
        for change in other.pending.drain(..) {
            self.push(change);
        }
    }

    /// Number of pending changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Monotonic count of pushes over the queue's lifetime.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pending changes, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[ModelChange] {
        &self.pending
    }

    /// Empties the queue and returns the union of the drained categories.
    pub fn drain_summary(&mut self) -> ChangeSet {
        self.pending
            .drain(..)
            .fold(ChangeSet::empty(), |set, change| set | change.kind())
    }
}

/// A model that records its own mutations as [`ModelChange`]s.
pub trait ChangeSource {
    /// Moves the changes recorded since the last call into `sink`.
    fn drain_changes(&mut self, sink: &mut ChangeQueue);
}

#[cfg(test)]
mod tests {
    use super::{ChangeQueue, ChangeSet, ModelChange};

    #[test]
    fn revision_counts_pushes_and_survives_drain() {
        let mut queue = ChangeQueue::new();
        assert_eq!(queue.revision(), 0);
        queue.push(ModelChange::Cleared);
        queue.push(ModelChange::SceneChanged);
        assert_eq!(queue.revision(), 2);
        assert_eq!(queue.drain_summary(), ChangeSet::SHAPES | ChangeSet::SCENE);
        assert!(queue.is_empty());
        assert_eq!(queue.revision(), 2);
    }

    #[test]
    fn append_preserves_order() {
        let mut a = ChangeQueue::new();
        let mut b = ChangeQueue::new();
        a.push(ModelChange::ShapeAdded { index: 0 });
        b.push(ModelChange::SelectionChanged { selected: Some(0) });
        b.push(ModelChange::ShapeRemoved { index: 1 });

        a.append(&mut b);
        assert!(b.is_empty());
        assert_eq!(
            a.pending(),
            &[
                ModelChange::ShapeAdded { index: 0 },
                ModelChange::SelectionChanged { selected: Some(0) },
                ModelChange::ShapeRemoved { index: 1 },
            ]
        );
        assert_eq!(a.revision(), 3);
    }

    #[test]
    fn empty_drain_is_empty_set() {
        let mut queue = ChangeQueue::new();
        assert!(queue.drain_summary().is_empty());
    }

    #[test]
    fn spills_past_inline_capacity() {
        let mut queue = ChangeQueue::new();
        for index in 0..20 {
            queue.push(ModelChange::ShapeModified { index });
        }
        assert_eq!(queue.len(), 20);
        assert_eq!(queue.drain_summary(), ChangeSet::SHAPES);
    }
}
