//! The two-state navigation machine.
//!
//! ```text
//!              guarded POP / POP_TO_INDEX / REPLACE / RESET / SWITCH_PROCESS
//!   navigating ──────────────────────────────────────────────────► confirmingDiscard
//!        ▲                                                                │
//!        └──────────────── CONFIRM_DISCARD / CANCEL_DISCARD ──────────────┘
//! ```
//!
//! Events are handled one at a time and synchronously. While parked in
//! `confirmingDiscard` only the two resolving events are acted on; anything else
//! is dropped and logged, leaving stack and dirty set untouched.

use std::{fmt, sync::Arc};

use serde::Serialize;
use shared::{Blade, BladeId, LastAction, NavigationEvent, Process};
use uuid::Uuid;

use crate::{
    config::NavigationConfig,
    error::NavigationError,
    guards,
    model::{BladeStack, DirtySet, NavigationContext},
    notify::{Notification, NotificationSink},
    reducers,
    snapshot::NavigationSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ControllerId(Uuid);

impl ControllerId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MachineState {
    Navigating,
    ConfirmingDiscard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    NotStarted,
    Running,
    Stopped,
}

pub struct NavigationController {
    id: ControllerId,
    lifecycle: Lifecycle,
    state: MachineState,
    context: NavigationContext,
    config: NavigationConfig,
    sink: Arc<dyn NotificationSink>,
}

impl NavigationController {
    /// Builds a controller in `NotStarted`; call `start` before sending events.
    pub fn new(config: NavigationConfig, sink: Arc<dyn NotificationSink>) -> Self {
        let context = NavigationContext::initial(config.initial_process, config.max_stack_depth);
        Self {
            id: ControllerId::generate(),
            lifecycle: Lifecycle::NotStarted,
            state: MachineState::Navigating,
            context,
            config,
            sink,
        }
    }

    /// Builds and starts a controller.
    pub fn started(config: NavigationConfig, sink: Arc<dyn NotificationSink>) -> Self {
        let mut controller = Self::new(config, sink);
        controller.start();
        controller
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.lifecycle == Lifecycle::Stopped
    }

    /// Starts the machine. A stopped controller is reconstructed, not resumed:
    /// it gets a new id and the initial context, and its old state is gone.
    pub fn start(&mut self) {
        match self.lifecycle {
            Lifecycle::Running => {}
            Lifecycle::NotStarted => {
                self.lifecycle = Lifecycle::Running;
                tracing::debug!(controller = %self.id, "navigation controller started");
            }
            Lifecycle::Stopped => {
                let previous = self.id;
                *self = Self::new(self.config.clone(), Arc::clone(&self.sink));
                self.lifecycle = Lifecycle::Running;
                tracing::info!(
                    previous = %previous,
                    controller = %self.id,
                    "reconstructed stopped navigation controller"
                );
            }
        }
    }

    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Stopped {
            return;
        }
        self.lifecycle = Lifecycle::Stopped;
        if self.context.pending_event.is_some() {
            self.context = reducers::clear_pending_event(&self.context);
            self.state = MachineState::Navigating;
        }
        tracing::debug!(controller = %self.id, "navigation controller stopped");
    }

    /// Feeds one event to the machine.
    ///
    /// Refused navigation (popping the root, a duplicate singleton, a push past
    /// the depth limit, an out-of-range index) is `Ok(())` with no state change.
    /// Errors only report a controller that is not running.
    ///
    /// While a discard confirmation is pending, `MarkDirty`/`MarkClean` are dropped
    /// like every other non-resolving event; dirty marks made during the dialog are lost.
    pub fn send(&mut self, event: NavigationEvent) -> Result<(), NavigationError> {
        match self.lifecycle {
            Lifecycle::Running => {}
            Lifecycle::NotStarted => return Err(NavigationError::NotStarted(self.id)),
            Lifecycle::Stopped => {
                tracing::warn!(
                    controller = %self.id,
                    event = event.name(),
                    "event sent to stopped navigation controller"
                );
                return Err(NavigationError::Stopped(self.id));
            }
        }

        match self.state {
            MachineState::Navigating => self.on_navigating(event),
            MachineState::ConfirmingDiscard => self.on_confirming_discard(event),
        }
        Ok(())
    }

    fn on_navigating(&mut self, event: NavigationEvent) {
        let ctx = &self.context;
        match &event {
            NavigationEvent::Push { title, blade } => {
                if !guards::is_under_max_depth(ctx) {
                    self.notify(Notification::max_depth(ctx.stack().len()));
                } else if guards::is_not_singleton(ctx, &event, &self.config.singleton_types) {
                    self.apply(reducers::push_blade(ctx, title, blade), &event);
                } else {
                    self.notify(Notification::singleton_exists(
                        blade.blade_type(),
                        ctx.stack().len(),
                    ));
                }
            }
            NavigationEvent::Pop => {
                if guards::has_multiple_blades(ctx) && guards::is_top_blade_dirty(ctx) {
                    self.park(&event);
                } else if guards::has_multiple_blades(ctx) {
                    self.apply(reducers::pop_blade(ctx), &event);
                }
            }
            NavigationEvent::PopToIndex { index } => {
                if guards::is_valid_index(ctx, &event)
                    && guards::has_dirty_blades_above_index(ctx, &event)
                {
                    self.park(&event);
                } else if guards::is_valid_index(ctx, &event) {
                    self.apply(reducers::pop_to_index(ctx, *index), &event);
                } else {
                    tracing::debug!(
                        index,
                        stack_len = ctx.stack().len(),
                        "pop to index out of range; ignoring"
                    );
                }
            }
            NavigationEvent::Replace { title, blade } => {
                if !guards::is_not_singleton_below_top(ctx, &event, &self.config.singleton_types)
                {
                    self.notify(Notification::singleton_exists(
                        blade.blade_type(),
                        ctx.stack().len(),
                    ));
                } else if guards::is_top_blade_dirty(ctx) {
                    self.park(&event);
                } else {
                    self.apply(reducers::replace_blade(ctx, title, blade), &event);
                }
            }
            NavigationEvent::Reset => {
                if guards::has_dirty_blades(ctx) {
                    self.park(&event);
                } else {
                    self.apply(reducers::reset_stack(ctx), &event);
                }
            }
            NavigationEvent::SwitchProcess { process } => {
                if guards::has_dirty_blades(ctx) {
                    self.park(&event);
                } else {
                    self.apply(reducers::switch_process(ctx, *process), &event);
                }
            }
            NavigationEvent::MarkDirty { blade_id } => {
                self.context = reducers::mark_dirty(ctx, blade_id);
            }
            NavigationEvent::MarkClean { blade_id } => {
                self.context = reducers::mark_clean(ctx, blade_id);
            }
            NavigationEvent::ConfirmDiscard | NavigationEvent::CancelDiscard => {
                tracing::debug!(event = event.name(), "nothing pending; ignoring");
            }
        }
    }

    fn on_confirming_discard(&mut self, event: NavigationEvent) {
        match event {
            NavigationEvent::ConfirmDiscard => {
                let replayed = self.context.pending_event.as_ref().map(NavigationEvent::name);
                self.context = reducers::replay_pending_event(&self.context);
                self.state = MachineState::Navigating;
                tracing::info!(
                    replayed,
                    stack_len = self.context.stack().len(),
                    "discard confirmed"
                );
            }
            NavigationEvent::CancelDiscard => {
                self.context = reducers::clear_pending_event(&self.context);
                self.state = MachineState::Navigating;
                tracing::info!("discard cancelled");
            }
            other => {
                tracing::warn!(
                    event = other.name(),
                    "awaiting discard confirmation; dropping event"
                );
            }
        }
    }

    fn apply(&mut self, next: NavigationContext, event: &NavigationEvent) {
        self.context = next;
        tracing::debug!(
            event = event.name(),
            stack_len = self.context.stack().len(),
            active = self.context.active_blade().blade_type().as_str(),
            "navigation transition applied"
        );
    }

    fn park(&mut self, event: &NavigationEvent) {
        tracing::info!(
            event = event.name(),
            dirty = self.context.dirty().len(),
            "unsaved changes at risk; awaiting confirmation"
        );
        self.context = reducers::store_pending_event(&self.context, event);
        self.state = MachineState::ConfirmingDiscard;
    }

    fn notify(&self, notification: Notification) {
        self.sink.notify(&notification);
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    pub fn active_blade(&self) -> &Blade {
        self.context.active_blade()
    }

    pub fn blade_stack(&self) -> &BladeStack {
        self.context.stack()
    }

    pub fn active_process(&self) -> Process {
        self.context.active_process()
    }

    pub fn last_action(&self) -> LastAction {
        self.context.last_action()
    }

    pub fn dirty_blade_ids(&self) -> &DirtySet {
        self.context.dirty()
    }

    pub fn is_dirty(&self, blade_id: &BladeId) -> bool {
        self.context.dirty().contains(blade_id)
    }

    pub fn is_confirming_discard(&self) -> bool {
        self.state == MachineState::ConfirmingDiscard
    }

    pub fn pending_event(&self) -> Option<&NavigationEvent> {
        self.context.pending_event()
    }

    /// Titles of stacked blades with unsaved changes, bottom to top.
    pub fn titles_at_risk(&self) -> Vec<&str> {
        self.context
            .stack()
            .iter()
            .filter(|blade| self.context.dirty().contains(&blade.id))
            .map(|blade| blade.title.as_str())
            .collect()
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot::capture(self)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
