//! Navigation controller.
//!
//! Owns the single piece of mutable UI state and drives the pure
//! navigation state machine.

mod controller;

pub use controller::NavigationController;
