//! Sign-in orchestrator.
//!
//! This module coordinates the sign-in state machine and its side effects.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use ohp_core::{
    ports::{AlertPort, NavigatorPort},
    sign_in::{SignInAction, SignInEvent, SignInState, SignInStateMachine},
};

use crate::usecases::sign_in::PersistPhoneNumber;

/// Orchestrator that drives sign-in state and side effects.
///
/// Every failure is handled here: validation and storage errors end in an
/// alert and an `Idle` state, never in an error returned to the caller.
pub struct SignInOrchestrator {
    state: Mutex<SignInState>,

    persist_phone_number: Arc<PersistPhoneNumber>,
    navigator: Arc<dyn NavigatorPort>,
    alerts: Arc<dyn AlertPort>,
}

impl SignInOrchestrator {
    pub fn new(
        persist_phone_number: Arc<PersistPhoneNumber>,
        navigator: Arc<dyn NavigatorPort>,
        alerts: Arc<dyn AlertPort>,
    ) -> Self {
        Self {
            state: Mutex::new(SignInState::default()),
            persist_phone_number,
            navigator,
            alerts,
        }
    }

    pub async fn change_phone_number(&self, text: impl Into<String>) -> SignInState {
        let event = SignInEvent::PhoneNumberChanged { text: text.into() };
        self.dispatch(event).await
    }

    pub async fn submit(&self) -> SignInState {
        self.dispatch(SignInEvent::Submit).await
    }

    pub async fn resume(&self) -> SignInState {
        self.dispatch(SignInEvent::Resumed).await
    }

    pub async fn get_state(&self) -> SignInState {
        self.state.lock().await.clone()
    }

    pub async fn dispatch(&self, event: SignInEvent) -> SignInState {
        // Held for the whole dispatch, including awaited storage calls, so
        // a second event never observes a half-applied transition.
        let mut state = self.state.lock().await;

        let span = info_span!("usecase.sign_in_orchestrator.dispatch", event = ?event);
        async {
            let mut current = state.clone();
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let (next, actions) = SignInStateMachine::transition(current, event);
                info!(from = ?from, to = ?next, event = %event_name, "sign-in state transition");
                let follow_up_events = self.execute_actions(actions).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            *state = current.clone();
            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<SignInAction>) -> Vec<SignInEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "sign-in executing action");
            match action {
                SignInAction::PersistPhoneNumber { phone_number } => {
                    match self.persist_phone_number.execute(&phone_number).await {
                        Ok(()) => follow_up_events.push(SignInEvent::PersistSucceeded),
                        Err(err) => {
                            warn!(error = %err, "persisting phone number failed");
                            follow_up_events.push(SignInEvent::PersistFailed);
                        }
                    }
                }
                SignInAction::NavigateTo { screen } => {
                    self.navigator.navigate(screen);
                    debug!(screen = screen.route_name(), "navigation requested");
                }
                SignInAction::ShowAlert { alert } => {
                    if let Some(button) = self.alerts.show_alert(alert).await {
                        debug!(%button, "alert closed");
                    }
                }
            }
        }
        follow_up_events
    }
}
