//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! This module contains data only: no validation, no policy. Missing keys map
//! to empty values, which are facts the caller decides how to treat.

mod app_config;

pub use app_config::AppConfig;
