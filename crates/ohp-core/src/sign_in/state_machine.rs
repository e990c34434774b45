//! Sign-in state machine.
//!
//! Defines a pure state transition function for the phone sign-in flow.

use tracing::trace;

use crate::navigation::Screen;
use crate::notification::Alert;
use crate::phone::PhoneNumber;
use crate::sign_in::copy;

/// Sign-in flow state.
///
/// 登录流程状态。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SignInState {
    /// Waiting for input or submission.
    ///
    /// 等待输入或提交。
    Idle {
        phone_number: PhoneNumber,
        error: Option<SignInError>,
    },
    /// Number accepted, waiting for storage to acknowledge the write.
    ///
    /// 号码已通过校验，等待存储写入完成。
    Persisting { phone_number: PhoneNumber },
    /// Number stored and the home screen requested.
    ///
    /// 号码已保存并跳转首页。
    SignedIn { phone_number: PhoneNumber },
}

impl Default for SignInState {
    fn default() -> Self {
        Self::Idle {
            phone_number: PhoneNumber::default(),
            error: None,
        }
    }
}

impl SignInState {
    pub fn phone_number(&self) -> &PhoneNumber {
        match self {
            SignInState::Idle { phone_number, .. }
            | SignInState::Persisting { phone_number }
            | SignInState::SignedIn { phone_number } => phone_number,
        }
    }

    /// Inline error shown under the input field.
    pub fn error(&self) -> Option<&SignInError> {
        match self {
            SignInState::Idle { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}

/// Events that drive the sign-in flow.
///
/// 驱动登录流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SignInEvent {
    /// Input field text changed (one keystroke).
    ///
    /// 输入框内容变化。
    PhoneNumberChanged { text: String },
    /// User pressed continue.
    ///
    /// 用户点击继续。
    Submit,
    /// Storage acknowledged the write.
    ///
    /// 存储写入成功。
    PersistSucceeded,
    /// Storage write failed.
    ///
    /// 存储写入失败。
    PersistFailed,
    /// Sign-in screen regained focus after navigating back.
    ///
    /// 返回登录页。
    Resumed,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SignInAction {
    /// Write the number under the well-known storage key.
    PersistPhoneNumber { phone_number: PhoneNumber },
    /// Ask the navigation container to show a screen.
    NavigateTo { screen: Screen },
    /// Present a modal alert.
    ShowAlert { alert: Alert },
}

/// Sign-in error types.
///
/// 登录错误类型。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SignInError {
    InvalidPhoneNumber,
    SaveFailed,
}

impl SignInError {
    /// User-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            SignInError::InvalidPhoneNumber => copy::INVALID_PHONE_MESSAGE,
            SignInError::SaveFailed => copy::SAVE_FAILED_MESSAGE,
        }
    }

    fn alert(&self) -> Alert {
        match self {
            SignInError::InvalidPhoneNumber => copy::invalid_phone_alert(),
            SignInError::SaveFailed => copy::save_failed_alert(),
        }
    }
}

/// Pure sign-in state machine.
///
/// 纯状态机：不包含副作用。
pub struct SignInStateMachine;

impl SignInStateMachine {
    pub fn transition(state: SignInState, event: SignInEvent) -> (SignInState, Vec<SignInAction>) {
        match (state, event) {
            (SignInState::Idle { .. }, SignInEvent::PhoneNumberChanged { text }) => (
                SignInState::Idle {
                    phone_number: PhoneNumber::from_input(&text),
                    error: None,
                },
                Vec::new(),
            ),
            (SignInState::Idle { phone_number, .. }, SignInEvent::Submit) => {
                if !phone_number.is_valid() {
                    let error = SignInError::InvalidPhoneNumber;
                    let alert = error.alert();
                    return (
                        SignInState::Idle {
                            phone_number,
                            error: Some(error),
                        },
                        vec![SignInAction::ShowAlert { alert }],
                    );
                }
                (
                    SignInState::Persisting {
                        phone_number: phone_number.clone(),
                    },
                    vec![SignInAction::PersistPhoneNumber { phone_number }],
                )
            }
            (SignInState::Persisting { phone_number }, SignInEvent::PersistSucceeded) => (
                SignInState::SignedIn { phone_number },
                vec![SignInAction::NavigateTo {
                    screen: Screen::Home,
                }],
            ),
            (SignInState::Persisting { phone_number }, SignInEvent::PersistFailed) => (
                SignInState::Idle {
                    phone_number,
                    error: None,
                },
                vec![SignInAction::ShowAlert {
                    alert: SignInError::SaveFailed.alert(),
                }],
            ),
            (SignInState::SignedIn { phone_number }, SignInEvent::Resumed) => (
                SignInState::Idle {
                    phone_number,
                    error: None,
                },
                Vec::new(),
            ),
            (state, event) => {
                trace!(?state, ?event, "sign-in event ignored in current state");
                (state, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SignInAction, SignInError, SignInEvent, SignInState, SignInStateMachine};
    use crate::navigation::Screen;
    use crate::phone::PhoneNumber;
    use crate::sign_in::copy;

    fn idle(raw: &str) -> SignInState {
        SignInState::Idle {
            phone_number: PhoneNumber::from_input(raw),
            error: None,
        }
    }

    #[test]
    fn sign_in_state_machine_keystroke_reformats_and_clears_error() {
        let state = SignInState::Idle {
            phone_number: PhoneNumber::from_input("12"),
            error: Some(SignInError::InvalidPhoneNumber),
        };
        let (next, actions) = SignInStateMachine::transition(
            state,
            SignInEvent::PhoneNumberChanged {
                text: "12 3".into(),
            },
        );
        assert_eq!(next, idle("123"));
        assert_eq!(next.phone_number().as_str(), "123");
        assert!(actions.is_empty());
    }

    #[test]
    fn sign_in_state_machine_invalid_submit_sets_error_and_alerts() {
        let (next, actions) = SignInStateMachine::transition(idle("12"), SignInEvent::Submit);
        assert_eq!(
            next,
            SignInState::Idle {
                phone_number: PhoneNumber::from_input("12"),
                error: Some(SignInError::InvalidPhoneNumber),
            }
        );
        assert_eq!(
            actions,
            vec![SignInAction::ShowAlert {
                alert: copy::invalid_phone_alert()
            }]
        );
    }

    #[test]
    fn sign_in_state_machine_valid_submit_persists_without_error() {
        let state = SignInState::Idle {
            phone_number: PhoneNumber::from_input("0981234567"),
            error: Some(SignInError::InvalidPhoneNumber),
        };
        let (next, actions) = SignInStateMachine::transition(state, SignInEvent::Submit);
        let phone_number = PhoneNumber::from_input("0981234567");
        assert_eq!(
            next,
            SignInState::Persisting {
                phone_number: phone_number.clone()
            }
        );
        assert!(next.error().is_none());
        assert_eq!(actions, vec![SignInAction::PersistPhoneNumber { phone_number }]);
    }

    #[test]
    fn sign_in_state_machine_persist_success_navigates_home() {
        let phone_number = PhoneNumber::from_input("0981234567");
        let (next, actions) = SignInStateMachine::transition(
            SignInState::Persisting {
                phone_number: phone_number.clone(),
            },
            SignInEvent::PersistSucceeded,
        );
        assert_eq!(next, SignInState::SignedIn { phone_number });
        assert_eq!(
            actions,
            vec![SignInAction::NavigateTo {
                screen: Screen::Home
            }]
        );
    }

    #[test]
    fn sign_in_state_machine_persist_failure_returns_to_idle_with_alert() {
        let (next, actions) = SignInStateMachine::transition(
            SignInState::Persisting {
                phone_number: PhoneNumber::from_input("0981234567"),
            },
            SignInEvent::PersistFailed,
        );
        assert_eq!(next, idle("0981234567"));
        assert!(next.error().is_none());
        assert_eq!(
            actions,
            vec![SignInAction::ShowAlert {
                alert: copy::save_failed_alert()
            }]
        );
    }

    #[test]
    fn sign_in_state_machine_resume_after_sign_in_allows_resubmission() {
        let (next, _) = SignInStateMachine::transition(
            SignInState::SignedIn {
                phone_number: PhoneNumber::from_input("0981234567"),
            },
            SignInEvent::Resumed,
        );
        assert_eq!(next, idle("0981234567"));

        let (next, actions) = SignInStateMachine::transition(next, SignInEvent::Submit);
        assert!(matches!(next, SignInState::Persisting { .. }));
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn sign_in_state_machine_ignores_keystrokes_while_persisting() {
        let state = SignInState::Persisting {
            phone_number: PhoneNumber::from_input("0981234567"),
        };
        let (next, actions) = SignInStateMachine::transition(
            state.clone(),
            SignInEvent::PhoneNumberChanged { text: "1".into() },
        );
        assert_eq!(next, state);
        assert!(actions.is_empty());
    }

    #[test]
    fn sign_in_error_messages_match_copy() {
        assert_eq!(
            SignInError::InvalidPhoneNumber.message(),
            "Số điện thoại không hợp lệ. Vui lòng kiểm tra lại."
        );
        assert_eq!(
            SignInError::SaveFailed.message(),
            "Không thể lưu số điện thoại. Vui lòng thử lại."
        );
    }
}
