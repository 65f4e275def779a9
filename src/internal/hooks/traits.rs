pub mod notifier;
pub mod validator;

pub use notifier::ProgressNotifier;
pub use validator::HashValidator;
