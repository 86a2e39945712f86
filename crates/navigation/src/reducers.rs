//! Pure transition reducers: each takes the current context and returns the next one.
//!
//! Reducers are total. The controller only calls them once the matching guards
//! passed, but a reducer handed an impossible request (popping the root, an
//! out-of-range index) returns the context unchanged instead of panicking.

use shared::{Blade, BladeId, BladeProps, LastAction, NavigationEvent, Process};

use crate::{
    model::{BladeStack, NavigationContext},
    root::root_blade_for,
};

pub fn push_blade(context: &NavigationContext, title: &str, props: &BladeProps) -> NavigationContext {
    let mut next = context.clone();
    next.stack.push(Blade::new(title, props.clone()));
    next.last_action = LastAction::Push;
    next
}

pub fn pop_blade(context: &NavigationContext) -> NavigationContext {
    let mut next = context.clone();
    let Some(removed) = next.stack.pop() else {
        return next;
    };
    next.dirty.remove(&removed.id);
    next.last_action = LastAction::Pop;
    next
}

pub fn pop_to_index(context: &NavigationContext, index: usize) -> NavigationContext {
    let mut next = context.clone();
    // Already there (or out of range): nothing to drop.
    if index >= next.stack.len().saturating_sub(1) {
        return next;
    }
    next.stack.truncate_to(index);
    next.dirty.sweep(&next.stack);
    next.last_action = LastAction::Pop;
    next
}

pub fn replace_blade(
    context: &NavigationContext,
    title: &str,
    props: &BladeProps,
) -> NavigationContext {
    let mut next = context.clone();
    let removed = next.stack.replace_top(Blade::new(title, props.clone()));
    next.dirty.remove(&removed.id);
    next.last_action = LastAction::Replace;
    next
}

pub fn reset_stack(context: &NavigationContext) -> NavigationContext {
    let mut next = context.clone();
    next.stack = BladeStack::new(root_blade_for(next.active_process));
    next.dirty.clear();
    next.last_action = LastAction::Reset;
    next
}

pub fn switch_process(context: &NavigationContext, process: Process) -> NavigationContext {
    let mut next = context.clone();
    next.active_process = process;
    next.stack = BladeStack::new(root_blade_for(process));
    next.dirty.clear();
    next.last_action = LastAction::Reset;
    next
}

/// Flags `blade_id` as dirty. Ids that are not stacked are ignored so the dirty
/// set never holds entries for blades that no longer exist.
pub fn mark_dirty(context: &NavigationContext, blade_id: &BladeId) -> NavigationContext {
    let mut next = context.clone();
    if next.stack.contains_id(blade_id) {
        next.dirty.insert(blade_id.clone());
    }
    next
}

pub fn mark_clean(context: &NavigationContext, blade_id: &BladeId) -> NavigationContext {
    let mut next = context.clone();
    next.dirty.remove(blade_id);
    next
}

pub fn store_pending_event(context: &NavigationContext, event: &NavigationEvent) -> NavigationContext {
    let mut next = context.clone();
    next.pending_event = Some(event.clone());
    next
}

pub fn clear_pending_event(context: &NavigationContext) -> NavigationContext {
    let mut next = context.clone();
    next.pending_event = None;
    next
}

/// Applies the reducer the parked event would have applied, then discards every
/// dirty flag on screen and clears the pending slot.
pub fn replay_pending_event(context: &NavigationContext) -> NavigationContext {
    let mut next = match &context.pending_event {
        Some(NavigationEvent::Pop) => pop_blade(context),
        Some(NavigationEvent::PopToIndex { index }) => pop_to_index(context, *index),
        Some(NavigationEvent::Replace { title, blade }) => replace_blade(context, title, blade),
        Some(NavigationEvent::Reset) => reset_stack(context),
        Some(NavigationEvent::SwitchProcess { process }) => switch_process(context, *process),
        Some(_) | None => context.clone(),
    };
    next.dirty.clear();
    next.pending_event = None;
    next
}

#[cfg(test)]
#[path = "tests/reducers_tests.rs"]
mod tests;
