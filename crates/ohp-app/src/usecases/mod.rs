pub mod home;
pub mod sign_in;

pub use home::LoadSignedInPhone;
pub use sign_in::{PersistPhoneNumber, SignInOrchestrator};
