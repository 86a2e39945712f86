use serde::{Deserialize, Serialize};

use crate::{
    blade::{BladeProps, BladeType},
    domain::{BladeId, Process},
};

/// Events accepted by the navigation controller, one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationEvent {
    Push {
        title: String,
        blade: BladeProps,
    },
    Pop,
    PopToIndex {
        index: usize,
    },
    Replace {
        title: String,
        blade: BladeProps,
    },
    Reset,
    SwitchProcess {
        process: Process,
    },
    MarkDirty {
        blade_id: BladeId,
    },
    MarkClean {
        blade_id: BladeId,
    },
    ConfirmDiscard,
    CancelDiscard,
}

impl NavigationEvent {
    pub fn push(title: impl Into<String>, blade: BladeProps) -> Self {
        Self::Push {
            title: title.into(),
            blade,
        }
    }

    pub fn replace(title: impl Into<String>, blade: BladeProps) -> Self {
        Self::Replace {
            title: title.into(),
            blade,
        }
    }

    /// Wire name of the event, used as a structured log field.
    pub fn name(&self) -> &'static str {
        match self {
            NavigationEvent::Push { .. } => "PUSH",
            NavigationEvent::Pop => "POP",
            NavigationEvent::PopToIndex { .. } => "POP_TO_INDEX",
            NavigationEvent::Replace { .. } => "REPLACE",
            NavigationEvent::Reset => "RESET",
            NavigationEvent::SwitchProcess { .. } => "SWITCH_PROCESS",
            NavigationEvent::MarkDirty { .. } => "MARK_DIRTY",
            NavigationEvent::MarkClean { .. } => "MARK_CLEAN",
            NavigationEvent::ConfirmDiscard => "CONFIRM_DISCARD",
            NavigationEvent::CancelDiscard => "CANCEL_DISCARD",
        }
    }

    /// Blade type carried by push/replace events.
    pub fn blade_type(&self) -> Option<BladeType> {
        match self {
            NavigationEvent::Push { blade, .. } | NavigationEvent::Replace { blade, .. } => {
                Some(blade.blade_type())
            }
            _ => None,
        }
    }
}
