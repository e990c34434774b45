//! Console session: mounts screens and turns input lines into events.
//!
//! On the sign-in screen every non-empty line replaces the input field text
//! (one change event), an empty line presses "Tiếp tục". On the home screen
//! `:back` returns to sign-in. `:q` quits anywhere.

use std::sync::Arc;

use ohp_app::{LoadSignedInPhone, SignInOrchestrator};
use ohp_core::home::HOME_CAPTION;
use ohp_core::navigation::Screen;
use ohp_core::ports::NavigatorPort;
use ohp_core::sign_in::{copy, SignInState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::shell::{Console, StackNavigator};

const QUIT: &str = ":q";
const BACK: &str = ":back";

pub struct Session {
    sign_in: Arc<SignInOrchestrator>,
    load_signed_in_phone: Arc<LoadSignedInPhone>,
    navigator: Arc<StackNavigator>,
    console: Arc<Console>,
}

impl Session {
    pub fn new(
        sign_in: Arc<SignInOrchestrator>,
        load_signed_in_phone: Arc<LoadSignedInPhone>,
        navigator: Arc<StackNavigator>,
        console: Arc<Console>,
    ) -> Self {
        Self {
            sign_in,
            load_signed_in_phone,
            navigator,
            console,
        }
    }

    /// Run until input ends or the user quits.
    pub async fn run<R>(&self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut mounted: Option<(Screen, usize)> = None;

        loop {
            let top = (self.navigator.current(), self.navigator.depth());
            if mounted != Some(top) {
                self.mount(top.0).await;
                mounted = Some(top);
            }

            let Some(line) = lines.next_line().await? else {
                debug!("input closed");
                break;
            };
            let line = line.trim_end_matches('\r');
            if line == QUIT {
                break;
            }

            match top.0 {
                Screen::SignIn => self.on_sign_in_input(line).await,
                Screen::Home => self.on_home_input(line).await,
            }
        }

        info!("session ended");
        Ok(())
    }

    async fn mount(&self, screen: Screen) {
        debug!(route = screen.route_name(), "mounting screen");
        self.console.line(&format!("== {} ==", screen.title()));
        match screen {
            Screen::SignIn => {
                self.console.line(copy::LABEL);
                self.console.line(copy::BODY);
                let state = self.sign_in.get_state().await;
                self.render_field(&state);
                self.console.line(&format!("[ {} ]", copy::CONTINUE_BUTTON));
            }
            Screen::Home => {
                let home = self.load_signed_in_phone.execute().await;
                self.console.line(HOME_CAPTION);
                self.console.line(&home.phone_number);
            }
        }
    }

    async fn on_sign_in_input(&self, line: &str) {
        let state = if line.is_empty() {
            self.sign_in.submit().await
        } else {
            self.sign_in.change_phone_number(line).await
        };
        if !matches!(state, SignInState::SignedIn { .. }) {
            self.render_field(&state);
        }
    }

    async fn on_home_input(&self, line: &str) {
        if line == BACK {
            self.navigator.go_back();
            self.sign_in.resume().await;
        }
    }

    fn render_field(&self, state: &SignInState) {
        let phone_number = state.phone_number();
        if phone_number.is_empty() {
            self.console.line(&format!("> ({})", copy::PLACEHOLDER));
        } else {
            self.console.line(&format!("> {phone_number}"));
        }
        if let Some(error) = state.error() {
            self.console.line(&format!("! {}", error.message()));
        }
    }
}
