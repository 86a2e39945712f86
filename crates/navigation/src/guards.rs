//! Pure predicates evaluated before a transition is committed.

use std::collections::BTreeSet;

use shared::{BladeType, NavigationEvent};

use crate::model::NavigationContext;

/// For `Push`: false only when the pushed type is a singleton that is already stacked.
/// Vacuously true for every other event.
pub fn is_not_singleton(
    context: &NavigationContext,
    event: &NavigationEvent,
    singleton_types: &BTreeSet<BladeType>,
) -> bool {
    let NavigationEvent::Push { blade, .. } = event else {
        return true;
    };
    let blade_type = blade.blade_type();
    !singleton_types.contains(&blade_type) || !context.stack().contains_type(blade_type)
}

/// For `Replace`: false when the incoming type is a singleton already present
/// below the top blade. The top itself is about to be dropped, so it does not count.
pub fn is_not_singleton_below_top(
    context: &NavigationContext,
    event: &NavigationEvent,
    singleton_types: &BTreeSet<BladeType>,
) -> bool {
    let NavigationEvent::Replace { blade, .. } = event else {
        return true;
    };
    let blade_type = blade.blade_type();
    if !singleton_types.contains(&blade_type) {
        return true;
    }
    let stack = context.stack().as_slice();
    !stack[..stack.len() - 1]
        .iter()
        .any(|existing| existing.blade_type() == blade_type)
}

pub fn is_under_max_depth(context: &NavigationContext) -> bool {
    context.stack().len() < context.max_stack_depth()
}

pub fn has_multiple_blades(context: &NavigationContext) -> bool {
    context.stack().len() > 1
}

pub fn is_top_blade_dirty(context: &NavigationContext) -> bool {
    context.dirty().contains(&context.stack().top().id)
}

pub fn has_dirty_blades(context: &NavigationContext) -> bool {
    !context.dirty().is_empty()
}

/// For `PopToIndex`: the target lies inside the current stack.
pub fn is_valid_index(context: &NavigationContext, event: &NavigationEvent) -> bool {
    match event {
        NavigationEvent::PopToIndex { index } => *index < context.stack().len(),
        _ => false,
    }
}

/// For `PopToIndex`: some blade strictly above the target is dirty.
pub fn has_dirty_blades_above_index(context: &NavigationContext, event: &NavigationEvent) -> bool {
    let NavigationEvent::PopToIndex { index } = event else {
        return false;
    };
    context
        .stack()
        .above(*index)
        .iter()
        .any(|blade| context.dirty().contains(&blade.id))
}

#[cfg(test)]
#[path = "tests/guards_tests.rs"]
mod tests;
