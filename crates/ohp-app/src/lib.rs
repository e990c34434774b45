//! OneHousing Pro Application Orchestration Layer
//!
//! This crate contains the sign-in and home use cases and the orchestrator
//! that drives the sign-in state machine through the core ports.

pub mod app_paths;
pub mod usecases;

pub use usecases::{LoadSignedInPhone, PersistPhoneNumber, SignInOrchestrator};
