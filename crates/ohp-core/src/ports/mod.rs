//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. Use cases depend on these traits only;
//! storage, navigation and alert presentation are provided by the outer layers.

pub mod alert;
pub mod app_dirs;
pub mod errors;
pub mod key_value_store;
pub mod navigator;

pub use alert::AlertPort;
pub use app_dirs::AppDirsPort;
pub use errors::{AppDirsError, StorageError};
pub use key_value_store::{KeyValueStorePort, PHONE_NUMBER_KEY};
pub use navigator::NavigatorPort;
