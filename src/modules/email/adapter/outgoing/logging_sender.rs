use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::{EmailError, EmailSender};

/// Sender used when no SMTP transport is configured: the message is logged and dropped.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        tracing::info!(
            to = %to,
            subject = %subject,
            body_len = html_body.len(),
            "SMTP not configured, email logged instead of sent"
        );
        Ok(())
    }
}
