//! Phone number domain module.
//!
//! Formatting of raw keystroke input into grouped display strings and the
//! shape check used before a number is accepted for sign-in.

mod format;
mod phone_number;
mod validate;

pub use format::format_phone_number;
pub use phone_number::PhoneNumber;
pub use validate::is_valid_phone_number;
