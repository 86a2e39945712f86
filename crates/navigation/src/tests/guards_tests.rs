use super::*;
use crate::{config::NavigationConfig, reducers};
use shared::{BladeProps, Process};

fn context_with(blades: &[BladeProps]) -> NavigationContext {
    let mut context = NavigationContext::initial(Process::Staging, 8);
    for props in blades {
        context = reducers::push_blade(&context, "blade", props);
    }
    context
}

fn singletons() -> BTreeSet<BladeType> {
    NavigationConfig::default().singleton_types
}

fn commit(oid: &str) -> BladeProps {
    BladeProps::CommitDetails {
        oid: oid.to_string(),
    }
}

#[test]
fn singleton_guard_blocks_second_instance_only() {
    let empty = context_with(&[]);
    let with_settings = context_with(&[BladeProps::Settings]);
    let push_settings = NavigationEvent::push("Settings", BladeProps::Settings);

    assert!(is_not_singleton(&empty, &push_settings, &singletons()));
    assert!(!is_not_singleton(&with_settings, &push_settings, &singletons()));
}

#[test]
fn singleton_guard_ignores_non_singleton_types_and_other_events() {
    let context = context_with(&[commit("a")]);
    let push_commit = NavigationEvent::push("Commit", commit("b"));

    assert!(is_not_singleton(&context, &push_commit, &singletons()));
    assert!(is_not_singleton(&context, &NavigationEvent::Pop, &singletons()));
}

#[test]
fn replace_singleton_guard_skips_the_blade_being_replaced() {
    let settings_on_top = context_with(&[BladeProps::Settings]);
    let settings_below = context_with(&[BladeProps::Settings, commit("a")]);
    let replace_with_settings = NavigationEvent::replace("Settings", BladeProps::Settings);

    assert!(is_not_singleton_below_top(
        &settings_on_top,
        &replace_with_settings,
        &singletons()
    ));
    assert!(!is_not_singleton_below_top(
        &settings_below,
        &replace_with_settings,
        &singletons()
    ));
}

#[test]
fn depth_guard_is_strictly_below_limit() {
    let mut context = NavigationContext::initial(Process::Staging, 3);
    assert!(is_under_max_depth(&context));
    context = reducers::push_blade(&context, "one", &commit("1"));
    assert!(is_under_max_depth(&context));
    context = reducers::push_blade(&context, "two", &commit("2"));
    assert!(!is_under_max_depth(&context));
}

#[test]
fn multiple_blades_guard_protects_root() {
    assert!(!has_multiple_blades(&context_with(&[])));
    assert!(has_multiple_blades(&context_with(&[commit("a")])));
}

#[test]
fn dirty_guards_follow_the_dirty_set() {
    let context = context_with(&[commit("a"), commit("b")]);
    assert!(!is_top_blade_dirty(&context));
    assert!(!has_dirty_blades(&context));

    let middle = context.stack().get(1).expect("middle blade").id.clone();
    let dirty_middle = reducers::mark_dirty(&context, &middle);
    assert!(!is_top_blade_dirty(&dirty_middle));
    assert!(has_dirty_blades(&dirty_middle));

    let top = context.stack().top().id.clone();
    let dirty_top = reducers::mark_dirty(&context, &top);
    assert!(is_top_blade_dirty(&dirty_top));
}

#[test]
fn valid_index_checks_upper_bound() {
    let context = context_with(&[commit("a"), commit("b")]);
    assert!(is_valid_index(&context, &NavigationEvent::PopToIndex { index: 0 }));
    assert!(is_valid_index(&context, &NavigationEvent::PopToIndex { index: 2 }));
    assert!(!is_valid_index(&context, &NavigationEvent::PopToIndex { index: 3 }));
    assert!(!is_valid_index(&context, &NavigationEvent::Pop));
}

#[test]
fn dirty_above_index_excludes_the_target_itself() {
    let context = context_with(&[commit("a"), commit("b")]);
    let middle = context.stack().get(1).expect("middle blade").id.clone();
    let context = reducers::mark_dirty(&context, &middle);

    assert!(has_dirty_blades_above_index(
        &context,
        &NavigationEvent::PopToIndex { index: 0 }
    ));
    assert!(!has_dirty_blades_above_index(
        &context,
        &NavigationEvent::PopToIndex { index: 1 }
    ));
}

#[test]
fn max_index_is_invalid_and_has_nothing_above_it() {
    let context = context_with(&[commit("a")]);
    let context = reducers::mark_dirty(&context, &context.active_blade().id.clone());
    let event = NavigationEvent::PopToIndex { index: usize::MAX };

    assert!(!is_valid_index(&context, &event));
    assert!(!has_dirty_blades_above_index(&context, &event));
}
