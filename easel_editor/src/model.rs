// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use easel_render::{Shape, ShapeModel};

use crate::change::{ChangeQueue, ChangeSource, ModelChange};

/// An ordered list of shapes with at most one selected.
///
/// Positions count from the topmost shape: index `0` is painted last. New
/// shapes are added on top. Every mutation is recorded as a
/// [`ModelChange`] for [`ChangeSource::drain_changes`].
#[derive(Clone, Debug)]
pub struct ShapeList<S> {
    /// Paint order, bottom first.
    shapes: Vec<S>,
    selected: Option<usize>,
    changes: ChangeQueue,
}

impl<S> Default for ShapeList<S> {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            changes: ChangeQueue::new(),
        }
    }
}

impl<S: Shape> ShapeList<S> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if there are no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape at `index`, counting from the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        let slot = self.slot(index)?;
        self.shapes.get(slot)
    }

    /// Shapes topmost first.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.shapes.iter().rev()
    }

    /// Index of the selected shape.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected shape.
    #[must_use]
    pub fn selected(&self) -> Option<&S> {
        self.get(self.selected?)
    }

    /// Adds a shape on top and returns its index (always `0`).
    ///
    /// The shape arrives unselected; use [`ShapeList::select`] to select it.
    pub fn add(&mut self, mut shape: S) -> usize {
        shape.set_selected(false);
        self.shapes.push(shape);
        if let Some(selected) = &mut self.selected {
            *selected += 1;
        }
        self.changes.push(ModelChange::ShapeAdded { index: 0 });
        0
    }

    /// Removes and returns the shape at `index`.
    ///
    /// Removing the selected shape clears the selection.
    pub fn remove(&mut self, index: usize) -> Option<S> {
        let slot = self.slot(index)?;
        let mut shape = self.shapes.remove(slot);
        self.changes.push(ModelChange::ShapeRemoved { index });
        match self.selected {
            Some(selected) if selected == index => {
                shape.set_selected(false);
                self.selected = None;
                self.changes
                    .push(ModelChange::SelectionChanged { selected: None });
            }
            Some(selected) if selected > index => self.selected = Some(selected - 1),
            _ => {}
        }
        Some(shape)
    }

    /// Edits the shape at `index` in place.
    ///
    /// Returns `false` if there is no such shape. The selection flag is
    /// managed by the list; changes made to it by `edit` are undone.
    pub fn modify(&mut self, index: usize, edit: impl FnOnce(&mut S)) -> bool {
        let Some(slot) = self.slot(index) else {
            return false;
        };
        let shape = &mut self.shapes[slot];
        let selected = shape.is_selected();
        edit(shape);
        shape.set_selected(selected);
        self.changes.push(ModelChange::ShapeModified { index });
        true
    }

    /// Makes `index` the only selected shape, or clears the selection.
    ///
    /// Returns `false` if `index` is out of range. Selecting the current
    /// selection again records nothing.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        if index.is_some_and(|i| i >= self.shapes.len()) {
            return false;
        }
        if index == self.selected {
            return true;
        }
        if let Some(slot) = self.selected.and_then(|i| self.slot(i)) {
            self.shapes[slot].set_selected(false);
        }
        if let Some(slot) = index.and_then(|i| self.slot(i)) {
            self.shapes[slot].set_selected(true);
        }
        self.selected = index;
        self.changes
            .push(ModelChange::SelectionChanged { selected: index });
        true
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        if self.shapes.is_empty() {
            return;
        }
        self.shapes.clear();
        self.changes.push(ModelChange::Cleared);
        if self.selected.take().is_some() {
            self.changes
                .push(ModelChange::SelectionChanged { selected: None });
        }
    }

    fn slot(&self, index: usize) -> Option<usize> {
        self.shapes.len().checked_sub(index + 1)
    }
}

impl<S: Shape> ShapeModel for ShapeList<S> {
    type Shape = S;

    fn shapes_reversed(&self) -> impl Iterator<Item = &S> {
        self.shapes.iter()
    }
}

impl<S> ChangeSource for ShapeList<S> {
    fn drain_changes(&mut self, sink: &mut ChangeQueue) {
        sink.append(&mut self.changes);
    }
}

impl<S: Shape> FromIterator<S> for ShapeList<S> {
    /// Collects shapes bottom first, so the last item ends up on top.
    ///
    /// Selection flags on the incoming shapes are cleared and nothing is
    /// recorded as a change.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let shapes = iter
            .into_iter()
            .map(|mut shape| {
                shape.set_selected(false);
                shape
            })
            .collect();
        Self {
            shapes,
            ..Self::default()
        }
    }
}
