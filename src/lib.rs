//! OneHousing Pro sign-in
//!
//! Console host wiring the sign-in and home use cases to durable storage.

pub mod bootstrap;
pub mod shell;

pub use bootstrap::{build_runtime, resolve_config, run_app, AppRuntime};
