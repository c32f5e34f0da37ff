pub mod notifiers;

pub use notifiers::{AccountNotifier, VendorNotifier};
