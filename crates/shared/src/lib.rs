pub mod blade;
pub mod domain;
pub mod error;
pub mod protocol;

pub use blade::{Blade, BladeProps, BladeType, DiffSource};
pub use domain::{BladeId, LastAction, Process};
pub use protocol::NavigationEvent;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
