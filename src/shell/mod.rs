//! Console host for the two screens.
//!
//! Plays the role of the navigation container and the modal alert presenter,
//! rendering screens as plain text and feeding input lines to the use cases.

pub mod alert;
pub mod console;
pub mod navigator;
pub mod session;

pub use alert::ConsoleAlert;
pub use console::Console;
pub use navigator::StackNavigator;
pub use session::Session;
