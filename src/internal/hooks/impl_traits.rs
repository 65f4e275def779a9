pub mod impl_notifier;
pub mod impl_validator;

pub use impl_notifier::{ConsoleNotifier, SilentNotifier};
pub use impl_validator::Sha256Validator;
