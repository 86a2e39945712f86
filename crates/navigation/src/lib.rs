//! Blade navigation controller.
//!
//! Owns the blade stack, decides whether a requested navigation is allowed, and
//! mediates the unsaved-changes confirmation before dirty blades are discarded.
//! Rendering, data fetching and git semantics live elsewhere; callers submit
//! [`NavigationEvent`]s and read [`NavigationSnapshot`]s.

pub mod config;
pub mod controller;
pub mod error;
pub mod guards;
pub mod host;
pub mod model;
pub mod notify;
pub mod opener;
pub mod reducers;
pub mod root;
pub mod snapshot;

pub use config::{load_config, NavigationConfig, DEFAULT_MAX_STACK_DEPTH};
pub use controller::{ControllerId, Lifecycle, MachineState, NavigationController};
pub use error::{ConfigError, NavigationError};
pub use host::NavigationHost;
pub use model::{BladeStack, DirtySet, NavigationContext};
pub use notify::{
    ChannelSink, Notification, NotificationKind, NotificationSink, NullSink, TracingSink,
};
pub use opener::{BladeOpener, BladeRegistry, BuiltinRegistry, FileContext};
pub use root::root_blade_for;
pub use shared::{Blade, BladeId, BladeProps, BladeType, LastAction, NavigationEvent, Process};
pub use snapshot::NavigationSnapshot;
