use serde::Serialize;
use shared::{Blade, BladeId, LastAction, NavigationEvent, Process};

use crate::controller::{ControllerId, MachineState, NavigationController};

/// Owned, read-only copy of everything a UI layer renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub controller_id: ControllerId,
    pub state: MachineState,
    pub active_process: Process,
    pub stack: Vec<Blade>,
    pub active_blade: Blade,
    pub last_action: LastAction,
    pub dirty_blade_ids: Vec<BladeId>,
    pub pending_event: Option<NavigationEvent>,
    pub titles_at_risk: Vec<String>,
    pub max_stack_depth: usize,
}

impl NavigationSnapshot {
    pub(crate) fn capture(controller: &NavigationController) -> Self {
        let context = controller.context();
        Self {
            controller_id: controller.id(),
            state: controller.state(),
            active_process: context.active_process(),
            stack: context.stack().as_slice().to_vec(),
            active_blade: context.active_blade().clone(),
            last_action: context.last_action(),
            dirty_blade_ids: context.dirty().iter().cloned().collect(),
            pending_event: context.pending_event().cloned(),
            titles_at_risk: controller
                .titles_at_risk()
                .into_iter()
                .map(str::to_string)
                .collect(),
            max_stack_depth: context.max_stack_depth(),
        }
    }

    pub fn is_confirming_discard(&self) -> bool {
        self.state == MachineState::ConfirmingDiscard
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }
}
