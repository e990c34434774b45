use std::sync::Mutex;

use ohp_core::navigation::Screen;
use ohp_core::ports::NavigatorPort;
use tracing::debug;

/// Native-stack style navigator. The initial route can never be popped.
pub struct StackNavigator {
    stack: Mutex<Vec<Screen>>,
}

impl StackNavigator {
    pub fn new(initial: Screen) -> Self {
        Self {
            stack: Mutex::new(vec![initial]),
        }
    }

    /// Screen on top of the stack.
    pub fn current(&self) -> Screen {
        self.with_stack(|stack| stack.last().copied().unwrap_or_default())
    }

    pub fn depth(&self) -> usize {
        self.with_stack(|stack| stack.len())
    }

    fn with_stack<T>(&self, f: impl FnOnce(&mut Vec<Screen>) -> T) -> T {
        let mut stack = match self.stack.lock() {
            Ok(stack) => stack,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut stack)
    }
}

impl Default for StackNavigator {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

impl NavigatorPort for StackNavigator {
    fn navigate(&self, screen: Screen) {
        self.with_stack(|stack| stack.push(screen));
        debug!(route = screen.route_name(), "navigated");
    }

    fn go_back(&self) {
        self.with_stack(|stack| {
            if stack.len() > 1 {
                stack.pop();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_initial_route() {
        let navigator = StackNavigator::default();
        assert_eq!(navigator.current(), Screen::SignIn);
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn navigate_pushes_and_go_back_pops() {
        let navigator = StackNavigator::default();

        navigator.navigate(Screen::Home);
        assert_eq!(navigator.current(), Screen::Home);

        navigator.go_back();
        assert_eq!(navigator.current(), Screen::SignIn);
    }

    #[test]
    fn go_back_keeps_initial_route() {
        let navigator = StackNavigator::default();

        navigator.go_back();

        assert_eq!(navigator.current(), Screen::SignIn);
        assert_eq!(navigator.depth(), 1);
    }
}
