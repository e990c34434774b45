mod orchestrator;
mod persist_phone_number;

pub use orchestrator::SignInOrchestrator;
pub use persist_phone_number::PersistPhoneNumber;
