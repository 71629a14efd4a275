// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of marks currently on screen.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::{Mark, MarkId};

/// The marks currently rendered on a surface.
///
/// A scene is replaced wholesale on every render: [`Scene::replace`] drops all previous marks
/// before installing the new ones. Marks are kept in paint order (`(z_index, id)`).
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: Vec<Mark>,
    revision: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all scene content with `marks` and returns the new revision.
    ///
    /// When several marks share an id, the last one wins.
    pub fn replace(&mut self, marks: impl IntoIterator<Item = Mark>) -> u64 {
        let mut slots: HashMap<MarkId, usize> = HashMap::new();
        let mut out: Vec<Mark> = Vec::new();
        for mark in marks {
            match slots.get(&mark.id) {
                Some(&i) => out[i] = mark,
                None => {
                    slots.insert(mark.id, out.len());
                    out.push(mark);
                }
            }
        }
        out.sort_by_key(|m| (m.z_index, m.id));
        self.marks = out;
        self.revision += 1;
        self.revision
    }

    /// Removes all marks.
    pub fn clear(&mut self) -> u64 {
        self.replace(core::iter::empty())
    }

    /// Returns marks in paint order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Looks up a mark by id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.iter().find(|m| m.id == id)
    }

    /// Number of replacements performed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Union of the known bounds of all marks (text marks are skipped).
    pub fn bounds(&self) -> Option<Rect> {
        self.marks
            .iter()
            .filter_map(|m| m.payload.bounds())
            .reduce(|a, b| a.union(b))
    }
}
