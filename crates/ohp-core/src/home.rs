//! Home screen state.

use serde::{Deserialize, Serialize};

/// What the home screen displays.
///
/// Read from storage as a copy; there is no live binding to the sign-in screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeState {
    pub phone_number: String,
}

impl HomeState {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}

/// Caption above the signed-in phone number.
pub const HOME_CAPTION: &str = "Số điện thoại đã đăng nhập:";
