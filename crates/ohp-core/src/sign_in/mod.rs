//! Sign-in domain module.
//!
//! This module defines the sign-in state machine types and the screen copy.

pub mod copy;
pub mod state_machine;

pub use state_machine::{SignInAction, SignInError, SignInEvent, SignInState, SignInStateMachine};
