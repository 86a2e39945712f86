use super::*;
use crate::notify::{ChannelSink, NotificationKind};
use crossbeam_channel::{bounded, Receiver};
use shared::{BladeProps, BladeType};

fn controller_with(config: NavigationConfig) -> (NavigationController, Receiver<Notification>) {
    let (tx, rx) = bounded(64);
    let controller = NavigationController::started(config, Arc::new(ChannelSink::new(tx)));
    (controller, rx)
}

fn controller() -> (NavigationController, Receiver<Notification>) {
    controller_with(NavigationConfig::default())
}

fn commit(oid: &str) -> NavigationEvent {
    NavigationEvent::push(
        format!("Commit {oid}"),
        BladeProps::CommitDetails {
            oid: oid.to_string(),
        },
    )
}

fn send(controller: &mut NavigationController, event: NavigationEvent) {
    controller.send(event).expect("controller is running");
}

fn mark_top_dirty(controller: &mut NavigationController) -> BladeId {
    let id = controller.active_blade().id.clone();
    send(
        controller,
        NavigationEvent::MarkDirty {
            blade_id: id.clone(),
        },
    );
    id
}

#[test]
fn starts_navigating_on_staging_root() {
    let (controller, _rx) = controller();

    assert_eq!(controller.state(), MachineState::Navigating);
    assert_eq!(controller.active_process(), Process::Staging);
    assert_eq!(controller.blade_stack().len(), 1);
    assert_eq!(controller.active_blade().id, BladeId::root());
    assert_eq!(controller.active_blade().blade_type(), BladeType::StagingChanges);
    assert_eq!(controller.last_action(), LastAction::Init);
    assert!(controller.dirty_blade_ids().is_empty());
    assert!(controller.pending_event().is_none());
}

#[test]
fn unstarted_controller_refuses_events() {
    let mut controller =
        NavigationController::new(NavigationConfig::default(), Arc::new(crate::notify::NullSink));
    let id = controller.id();

    assert_eq!(
        controller.send(NavigationEvent::Pop),
        Err(NavigationError::NotStarted(id))
    );
    controller.start();
    assert!(controller.send(NavigationEvent::Pop).is_ok());
}

#[test]
fn pop_on_root_is_silent_noop() {
    let (mut controller, rx) = controller();
    let before = controller.context().clone();

    send(&mut controller, NavigationEvent::Pop);

    assert_eq!(controller.context(), &before);
    assert!(rx.is_empty());
}

#[test]
fn dirty_pop_parks_then_confirm_discards() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("abc123"));
    mark_top_dirty(&mut controller);

    send(&mut controller, NavigationEvent::Pop);
    assert!(controller.is_confirming_discard());
    assert_eq!(controller.blade_stack().len(), 2);
    assert_eq!(controller.pending_event(), Some(&NavigationEvent::Pop));
    assert_eq!(controller.titles_at_risk(), vec!["Commit abc123"]);

    send(&mut controller, NavigationEvent::ConfirmDiscard);
    assert_eq!(controller.state(), MachineState::Navigating);
    assert_eq!(controller.blade_stack().len(), 1);
    assert!(controller.dirty_blade_ids().is_empty());
    assert!(controller.pending_event().is_none());
}

#[test]
fn cancel_restores_exact_prior_context() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    send(&mut controller, commit("b"));
    mark_top_dirty(&mut controller);
    let before = controller.context().clone();

    send(&mut controller, NavigationEvent::PopToIndex { index: 0 });
    assert!(controller.is_confirming_discard());

    send(&mut controller, NavigationEvent::CancelDiscard);
    assert_eq!(controller.state(), MachineState::Navigating);
    assert_eq!(controller.context(), &before);
}

#[test]
fn events_while_parked_are_dropped() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    let top = mark_top_dirty(&mut controller);
    send(&mut controller, NavigationEvent::Reset);
    let parked = controller.context().clone();

    send(&mut controller, commit("b"));
    send(&mut controller, NavigationEvent::Pop);
    send(&mut controller, NavigationEvent::MarkClean { blade_id: top });
    send(
        &mut controller,
        NavigationEvent::SwitchProcess {
            process: Process::Topology,
        },
    );

    assert!(controller.is_confirming_discard());
    assert_eq!(controller.context(), &parked);
    assert_eq!(controller.pending_event(), Some(&NavigationEvent::Reset));
}

#[test]
fn singleton_push_twice_notifies_once() {
    let (mut controller, rx) = controller();
    let settings = NavigationEvent::push("Settings", BladeProps::Settings);

    send(&mut controller, settings.clone());
    send(&mut controller, settings);

    assert_eq!(controller.blade_stack().len(), 2);
    let notifications: Vec<_> = rx.try_iter().collect();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::SingletonExists);
    assert_eq!(notifications[0].blade_type, Some(BladeType::Settings));
}

#[test]
fn push_past_max_depth_is_rejected_with_notification() {
    let (mut controller, rx) = controller();
    for i in 0..8 {
        send(&mut controller, commit(&i.to_string()));
    }

    assert_eq!(controller.blade_stack().len(), 8);
    let notifications: Vec<_> = rx.try_iter().collect();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::MaxDepth);
    assert_eq!(notifications[0].stack_len, 8);
}

#[test]
fn max_depth_takes_precedence_over_singleton_check() {
    let config = NavigationConfig::default()
        .with_max_stack_depth(2)
        .expect("valid depth");
    let (mut controller, rx) = controller_with(config);
    send(&mut controller, NavigationEvent::push("Settings", BladeProps::Settings));
    send(&mut controller, NavigationEvent::push("Settings", BladeProps::Settings));

    let kinds: Vec<_> = rx.try_iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NotificationKind::MaxDepth]);
}

#[test]
fn pop_to_current_top_is_noop() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    send(&mut controller, commit("b"));
    let before = controller.context().clone();

    send(&mut controller, NavigationEvent::PopToIndex { index: 2 });

    assert_eq!(controller.context(), &before);
    assert_eq!(controller.last_action(), LastAction::Push);
}

#[test]
fn pop_to_out_of_range_index_is_ignored() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    let before = controller.context().clone();

    send(&mut controller, NavigationEvent::PopToIndex { index: 7 });

    assert_eq!(controller.context(), &before);
    assert!(!controller.is_confirming_discard());
}

#[test]
fn replace_into_existing_singleton_is_refused() {
    let (mut controller, rx) = controller();
    send(&mut controller, NavigationEvent::push("Settings", BladeProps::Settings));
    send(&mut controller, commit("a"));

    send(
        &mut controller,
        NavigationEvent::replace("Settings", BladeProps::Settings),
    );

    assert_eq!(controller.active_blade().blade_type(), BladeType::CommitDetails);
    assert_eq!(
        rx.try_recv().expect("notified").kind,
        NotificationKind::SingletonExists
    );
}

#[test]
fn dirty_replace_parks_and_confirm_replaces() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    mark_top_dirty(&mut controller);

    send(
        &mut controller,
        NavigationEvent::replace("Changelog", BladeProps::Changelog),
    );
    assert!(controller.is_confirming_discard());

    send(&mut controller, NavigationEvent::ConfirmDiscard);
    assert_eq!(controller.active_blade().blade_type(), BladeType::Changelog);
    assert_eq!(controller.last_action(), LastAction::Replace);
}

#[test]
fn confirm_clears_unrelated_dirty_blades_too() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    let lower = mark_top_dirty(&mut controller);
    send(&mut controller, commit("b"));
    mark_top_dirty(&mut controller);

    send(&mut controller, NavigationEvent::Pop);
    send(&mut controller, NavigationEvent::ConfirmDiscard);

    assert_eq!(controller.blade_stack().len(), 2);
    assert_eq!(controller.active_blade().id, lower);
    assert!(!controller.is_dirty(&lower));
}

#[test]
fn switch_process_with_dirty_blades_parks() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    mark_top_dirty(&mut controller);

    let switch = NavigationEvent::SwitchProcess {
        process: Process::Topology,
    };
    send(&mut controller, switch.clone());
    assert_eq!(controller.pending_event(), Some(&switch));

    send(&mut controller, NavigationEvent::ConfirmDiscard);
    assert_eq!(controller.active_process(), Process::Topology);
    assert_eq!(controller.active_blade().blade_type(), BladeType::TopologyGraph);
    assert_eq!(controller.last_action(), LastAction::Reset);
}

#[test]
fn resolving_events_while_navigating_do_nothing() {
    let (mut controller, _rx) = controller();
    let before = controller.context().clone();

    send(&mut controller, NavigationEvent::ConfirmDiscard);
    send(&mut controller, NavigationEvent::CancelDiscard);

    assert_eq!(controller.context(), &before);
}

#[test]
fn stopped_controller_rejects_and_restart_reconstructs() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    let old_id = controller.id();

    controller.stop();
    assert_eq!(
        controller.send(NavigationEvent::Pop),
        Err(NavigationError::Stopped(old_id))
    );

    controller.start();
    assert!(controller.is_running());
    assert_ne!(controller.id(), old_id);
    assert_eq!(controller.blade_stack().len(), 1);
    assert_eq!(controller.last_action(), LastAction::Init);
}

#[test]
fn snapshot_reflects_parked_state() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    let top = mark_top_dirty(&mut controller);
    send(&mut controller, NavigationEvent::Pop);

    let snapshot = controller.snapshot();

    assert!(snapshot.is_confirming_discard());
    assert_eq!(snapshot.stack_len(), 2);
    assert_eq!(snapshot.active_blade.id, top);
    assert_eq!(snapshot.dirty_blade_ids, vec![top]);
    assert_eq!(snapshot.pending_event, Some(NavigationEvent::Pop));
    assert_eq!(snapshot.titles_at_risk, vec!["Commit a".to_string()]);
    assert_eq!(snapshot.controller_id, controller.id());
}

#[test]
fn dirty_marks_sent_during_confirmation_are_lost() {
    let (mut controller, _rx) = controller();
    send(&mut controller, commit("a"));
    let lower = controller.active_blade().id.clone();
    send(&mut controller, commit("b"));
    mark_top_dirty(&mut controller);
    send(&mut controller, NavigationEvent::Pop);
    assert!(controller.is_confirming_discard());

    send(
        &mut controller,
        NavigationEvent::MarkDirty {
            blade_id: lower.clone(),
        },
    );
    assert!(!controller.is_dirty(&lower));

    send(&mut controller, NavigationEvent::CancelDiscard);
    assert!(!controller.is_dirty(&lower));
    assert_eq!(controller.dirty_blade_ids().len(), 1);
}
