use std::fmt;

use serde::{Deserialize, Serialize};

use super::{format_phone_number, is_valid_phone_number};

/// Display-formatted phone number as held by the sign-in input field.
///
/// The value is always formatter output: empty, or the typed digits
/// regrouped as `ddd ddd dddd`.
///
/// 输入框中的格式化手机号。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Build from raw keystroke input.
    pub fn from_input(raw: &str) -> Self {
        Self(format_phone_number(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the number has one of the accepted complete shapes.
    pub fn is_valid(&self) -> bool {
        is_valid_phone_number(&self.0)
    }

    /// The bare digits, without group separators.
    pub fn digits(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
