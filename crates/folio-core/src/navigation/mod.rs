//! Navigation domain module.
//!
//! This module defines the page router state machine types.

pub mod state_machine;

pub use state_machine::{NavigationEvent, NavigationState, NavigationStateMachine, View};
