use std::sync::Arc;

use ohp_core::phone::PhoneNumber;
use ohp_core::ports::{KeyValueStorePort, StorageError, PHONE_NUMBER_KEY};
use tracing::{debug, info_span, Instrument};

/// Use case for storing the signed-in phone number.
///
/// Writes the formatted number under [`PHONE_NUMBER_KEY`].
pub struct PersistPhoneNumber {
    store: Arc<dyn KeyValueStorePort>,
}

impl PersistPhoneNumber {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, phone_number: &PhoneNumber) -> Result<(), StorageError> {
        let span = info_span!("usecase.persist_phone_number.execute");
        async {
            self.store
                .set_item(PHONE_NUMBER_KEY, phone_number.as_str())
                .await?;
            debug!("phone number persisted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
