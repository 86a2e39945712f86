//! Owner of the single live navigation controller.
//!
//! The hosting shell constructs one `NavigationHost` and passes it down. There is
//! no global handle: anything that needs to navigate borrows the host. If the
//! controller was stopped (a shell tearing down and remounting its view tree),
//! the host swaps in a freshly built one the next time it is asked for.

use std::sync::Arc;

use shared::NavigationEvent;

use crate::{
    config::NavigationConfig,
    controller::{ControllerId, NavigationController},
    error::NavigationError,
    notify::NotificationSink,
    snapshot::NavigationSnapshot,
};

pub struct NavigationHost {
    config: NavigationConfig,
    sink: Arc<dyn NotificationSink>,
    controller: NavigationController,
}

impl NavigationHost {
    pub fn new(config: NavigationConfig, sink: Arc<dyn NotificationSink>) -> Self {
        let controller = NavigationController::started(config.clone(), Arc::clone(&sink));
        tracing::info!(
            controller = %controller.id(),
            process = %config.initial_process,
            max_stack_depth = config.max_stack_depth,
            "navigation host ready"
        );
        Self {
            config,
            sink,
            controller,
        }
    }

    /// The live controller, rebuilt first if the current one was stopped.
    pub fn controller_mut(&mut self) -> &mut NavigationController {
        if !self.controller.is_running() {
            let stale = self.controller.id();
            self.controller =
                NavigationController::started(self.config.clone(), Arc::clone(&self.sink));
            tracing::info!(
                stale = %stale,
                controller = %self.controller.id(),
                "replaced stale navigation controller"
            );
        }
        &mut self.controller
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn current_id(&self) -> ControllerId {
        self.controller.id()
    }

    /// True when `id` no longer names the live controller.
    pub fn is_stale(&self, id: ControllerId) -> bool {
        id != self.controller.id() || !self.controller.is_running()
    }

    pub fn send(&mut self, event: NavigationEvent) -> Result<(), NavigationError> {
        self.controller_mut().send(event)
    }

    /// Sends only if `id` still names the live controller; a stale sender gets
    /// `Stopped` instead of silently driving the replacement.
    pub fn send_from(
        &mut self,
        id: ControllerId,
        event: NavigationEvent,
    ) -> Result<(), NavigationError> {
        if self.is_stale(id) {
            return Err(NavigationError::Stopped(id));
        }
        self.controller.send(event)
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.controller.snapshot()
    }

    /// Stops the live controller. The next `controller_mut` or `send` rebuilds it.
    pub fn shutdown(&mut self) {
        self.controller.stop();
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
