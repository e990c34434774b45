use std::sync::Arc;

use async_trait::async_trait;
use ohp_core::notification::Alert;
use ohp_core::ports::AlertPort;

use crate::shell::Console;

/// Prints alerts as a framed block. The first button stands for the user's
/// dismissal; control flow does not wait on it.
pub struct ConsoleAlert {
    console: Arc<Console>,
}

impl ConsoleAlert {
    pub fn new(console: Arc<Console>) -> Self {
        Self { console }
    }
}

#[async_trait]
impl AlertPort for ConsoleAlert {
    async fn show_alert(&self, alert: Alert) -> Option<String> {
        self.console.line(&format!("[{}] {}", alert.title, alert.message));
        let buttons: Vec<String> = alert
            .buttons
            .iter()
            .map(|button| format!("[ {} ]", button.label))
            .collect();
        if !buttons.is_empty() {
            self.console.line(&format!("    {}", buttons.join(" ")));
        }
        alert.buttons.into_iter().next().map(|button| button.label)
    }
}
