//! Screens known to the navigation container.

use serde::{Deserialize, Serialize};

/// Application screen.
///
/// 应用页面。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Phone number sign-in. Initial route.
    #[default]
    SignIn,
    /// Shows the signed-in phone number.
    Home,
}

impl Screen {
    /// Route name registered with the navigation container.
    pub fn route_name(self) -> &'static str {
        match self {
            Screen::SignIn => "SignIn",
            Screen::Home => "Home",
        }
    }

    /// Header title shown for the screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::SignIn => "Đăng nhập",
            Screen::Home => "Home",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Screen;

    #[test]
    fn sign_in_is_the_initial_route() {
        assert_eq!(Screen::default(), Screen::SignIn);
        assert_eq!(Screen::default().route_name(), "SignIn");
    }

    #[test]
    fn home_route_name_is_stable() {
        assert_eq!(Screen::Home.route_name(), "Home");
        assert_eq!(Screen::Home.title(), "Home");
    }
}
