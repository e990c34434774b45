//! User-facing modal notifications.

use serde::{Deserialize, Serialize};

/// Button on a modal alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertButton {
    pub label: String,
}

impl AlertButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Modal alert. Blocks the user, not the control flow.
///
/// 模态提示。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Empty means the host shows its default dismiss button.
    pub buttons: Vec<AlertButton>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            buttons: Vec::new(),
        }
    }

    pub fn with_button(mut self, label: impl Into<String>) -> Self {
        self.buttons.push(AlertButton::new(label));
        self
    }
}
