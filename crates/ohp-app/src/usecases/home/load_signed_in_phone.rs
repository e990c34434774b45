use std::sync::Arc;

use ohp_core::home::HomeState;
use ohp_core::ports::{KeyValueStorePort, PHONE_NUMBER_KEY};
use tracing::{debug, info, info_span, Instrument};

/// Use case for reading the signed-in phone number when the home screen mounts.
///
/// A missing value or a failed read both yield an empty phone number. Read
/// failures are logged and never reported to the user.
pub struct LoadSignedInPhone {
    store: Arc<dyn KeyValueStorePort>,
}

impl LoadSignedInPhone {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> HomeState {
        let span = info_span!("usecase.load_signed_in_phone.execute");
        async {
            match self.store.get_item(PHONE_NUMBER_KEY).await {
                Ok(Some(phone_number)) => HomeState::new(phone_number),
                Ok(None) => {
                    debug!("no stored phone number");
                    HomeState::default()
                }
                Err(err) => {
                    info!(error = %err, "failed to read stored phone number");
                    HomeState::default()
                }
            }
        }
        .instrument(span)
        .await
    }
}
