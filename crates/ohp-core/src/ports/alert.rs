use async_trait::async_trait;

use crate::notification::Alert;

#[async_trait]
pub trait AlertPort: Send + Sync {
    /// Present a modal alert.
    ///
    /// Returns the label of the button that dismissed it, when the host can tell.
    async fn show_alert(&self, alert: Alert) -> Option<String>;
}
