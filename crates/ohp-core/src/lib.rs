//! # ohp-core
//!
//! Core domain models and business logic for the OneHousing Pro sign-in app.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod home;
pub mod navigation;
pub mod notification;
pub mod phone;
pub mod ports;
pub mod sign_in;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use home::HomeState;
pub use navigation::Screen;
pub use notification::{Alert, AlertButton};
pub use phone::{format_phone_number, is_valid_phone_number, PhoneNumber};
pub use sign_in::{SignInAction, SignInError, SignInEvent, SignInState, SignInStateMachine};
