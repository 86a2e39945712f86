//! Navigation state shapes: the non-empty blade stack, the dirty set and the
//! context the controller owns.
//!
//! Mutators are crate-private. Outside the reducers, the stack and dirty set are
//! read-only.

use std::collections::BTreeSet;

use serde::Serialize;
use shared::{Blade, BladeId, BladeType, LastAction, NavigationEvent, Process};

/// Ordered, never-empty sequence of blades. The last element is the active blade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BladeStack(Vec<Blade>);

impl BladeStack {
    pub fn new(root: Blade) -> Self {
        Self(vec![root])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn top(&self) -> &Blade {
        // Non-empty by construction: every mutator keeps at least one blade.
        &self.0[self.0.len() - 1]
    }

    pub fn root(&self) -> &Blade {
        &self.0[0]
    }

    pub fn get(&self, index: usize) -> Option<&Blade> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[Blade] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Blade> {
        self.0.iter()
    }

    pub fn contains_type(&self, blade_type: BladeType) -> bool {
        self.0.iter().any(|blade| blade.blade_type() == blade_type)
    }

    pub fn contains_id(&self, id: &BladeId) -> bool {
        self.0.iter().any(|blade| &blade.id == id)
    }

    /// Blades strictly above `index`.
    pub fn above(&self, index: usize) -> &[Blade] {
        index
            .checked_add(1)
            .and_then(|start| self.0.get(start..))
            .unwrap_or(&[])
    }

    pub(crate) fn push(&mut self, blade: Blade) {
        self.0.push(blade);
    }

    /// Removes the top blade unless it is the only one.
    pub(crate) fn pop(&mut self) -> Option<Blade> {
        if self.0.len() > 1 {
            self.0.pop()
        } else {
            None
        }
    }

    /// Keeps `[0..=index]`. Out-of-range indices leave the stack untouched.
    pub(crate) fn truncate_to(&mut self, index: usize) -> Vec<Blade> {
        if index >= self.0.len().saturating_sub(1) {
            return Vec::new();
        }
        self.0.split_off(index + 1)
    }

    pub(crate) fn replace_top(&mut self, blade: Blade) -> Blade {
        let last = self.0.len() - 1;
        std::mem::replace(&mut self.0[last], blade)
    }
}

impl<'a> IntoIterator for &'a BladeStack {
    type Item = &'a Blade;
    type IntoIter = std::slice::Iter<'a, Blade>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ids of blades holding unsaved form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirtySet(BTreeSet<BladeId>);

impl DirtySet {
    pub fn contains(&self, id: &BladeId) -> bool {
        self.0.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BladeId> {
        self.0.iter()
    }

    pub(crate) fn insert(&mut self, id: BladeId) -> bool {
        self.0.insert(id)
    }

    pub(crate) fn remove(&mut self, id: &BladeId) -> bool {
        self.0.remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// Drops entries whose blade is no longer stacked.
    pub(crate) fn sweep(&mut self, stack: &BladeStack) {
        self.0.retain(|id| stack.contains_id(id));
    }
}

/// Everything the controller owns besides its machine state and lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    pub(crate) active_process: Process,
    pub(crate) stack: BladeStack,
    pub(crate) dirty: DirtySet,
    pub(crate) last_action: LastAction,
    pub(crate) max_stack_depth: usize,
    pub(crate) pending_event: Option<NavigationEvent>,
}

impl NavigationContext {
    /// Initial context: the process root alone, nothing dirty, `LastAction::Init`.
    pub fn initial(process: Process, max_stack_depth: usize) -> Self {
        Self {
            active_process: process,
            stack: BladeStack::new(crate::root::root_blade_for(process)),
            dirty: DirtySet::default(),
            last_action: LastAction::Init,
            max_stack_depth,
            pending_event: None,
        }
    }

    pub fn active_process(&self) -> Process {
        self.active_process
    }

    pub fn stack(&self) -> &BladeStack {
        &self.stack
    }

    pub fn dirty(&self) -> &DirtySet {
        &self.dirty
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    pub fn max_stack_depth(&self) -> usize {
        self.max_stack_depth
    }

    pub fn pending_event(&self) -> Option<&NavigationEvent> {
        self.pending_event.as_ref()
    }

    pub fn active_blade(&self) -> &Blade {
        self.stack.top()
    }
}
