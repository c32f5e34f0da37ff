use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::EmailError;

/// Account lifecycle mail (verification).
#[async_trait]
pub trait AccountNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        to: &str,
        name: &str,
        verification_token: &str,
    ) -> Result<(), EmailError>;
}

/// Mail sent to a vendor's account address when moderation decides on the profile.
#[async_trait]
pub trait VendorNotifier: Send + Sync {
    async fn send_vendor_approved(&self, to: &str, business_name: &str) -> Result<(), EmailError>;

    async fn send_vendor_rejected(
        &self,
        to: &str,
        business_name: &str,
        reason: Option<&str>,
    ) -> Result<(), EmailError>;
}
