use crate::navigation::Screen;

/// Navigation container.
///
/// Requests are fire-and-forget; nothing is returned to the caller.
pub trait NavigatorPort: Send + Sync {
    /// Push a screen onto the stack.
    fn navigate(&self, screen: Screen);

    /// Pop the current screen, if there is one to return to.
    fn go_back(&self);
}
