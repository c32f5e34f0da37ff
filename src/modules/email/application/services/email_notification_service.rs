use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::email::application::ports::incoming::{AccountNotifier, VendorNotifier};
use crate::modules::email::application::ports::outgoing::{EmailError, EmailSender};
use crate::modules::email::application::templates::{self, RenderedEmail};

#[derive(Clone)]
pub struct EmailNotificationService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    verify_url_base: String,
}

impl fmt::Debug for EmailNotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailNotificationService")
            .field("sender", &"<dyn EmailSender>")
            .field("verify_url_base", &self.verify_url_base)
            .finish()
    }
}

impl EmailNotificationService {
    /// `verify_url_base` is the absolute URL the token is appended to,
    /// e.g. `http://localhost:3001/api/v1/auth/verify-email`.
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, verify_url_base: &str) -> Self {
        Self {
            sender,
            verify_url_base: verify_url_base.trim_end_matches('/').to_string(),
        }
    }

    async fn deliver(&self, to: &str, email: RenderedEmail) -> Result<(), EmailError> {
        self.sender
            .send_email(to, &email.subject, &email.html_body)
            .await
    }
}

#[async_trait]
impl AccountNotifier for EmailNotificationService {
    async fn send_verification_email(
        &self,
        to: &str,
        name: &str,
        verification_token: &str,
    ) -> Result<(), EmailError> {
        let link = format!("{}/{}", self.verify_url_base, verification_token);
        self.deliver(to, templates::verification(name, &link)).await
    }
}

#[async_trait]
impl VendorNotifier for EmailNotificationService {
    async fn send_vendor_approved(&self, to: &str, business_name: &str) -> Result<(), EmailError> {
        self.deliver(to, templates::vendor_approved(business_name))
            .await
    }

    async fn send_vendor_rejected(
        &self,
        to: &str,
        business_name: &str,
        reason: Option<&str>,
    ) -> Result<(), EmailError> {
        self.deliver(to, templates::vendor_rejected(business_name, reason))
            .await
    }
}
