use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::smtp_config::{SmtpConfig, SmtpMode};
use crate::modules::email::application::ports::outgoing::{EmailError, EmailSender};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailError> {
        match &config.mode {
            SmtpMode::Relay {
                server,
                username,
                password,
            } => Self::new(server, username, password, &config.from_email),
            SmtpMode::Local { host, port } => {
                Ok(Self::new_local(host, *port, &config.from_email))
            }
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Mailpit, MailHog and friends
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("from: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("to: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.mailer.send(email).await.map_err(EmailError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            panic!("mailer must not be reached for invalid input");
        }
    }

    #[tokio::test]
    async fn test_send_email_success() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sender = SmtpEmailSender::new_with_mailer(
            Box::new(RecordingMailer { sent: sent.clone() }),
            "noreply@example.com",
        );

        let result = sender
            .send_email("couple@example.com", "Welcome", "<p>Hi</p>")
            .await;

        assert!(result.is_ok(), "Expected Ok, got {:?}", result);
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_from_address() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "not-an-address");

        let result = sender
            .send_email("couple@example.com", "Subject", "<p>Test</p>")
            .await;

        assert!(matches!(result, Err(EmailError::InvalidAddress(msg)) if msg.starts_with("from")));
    }

    #[tokio::test]
    async fn test_invalid_to_address() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "noreply@example.com");

        let result = sender.send_email("nope", "Subject", "<p>Test</p>").await;

        assert!(matches!(result, Err(EmailError::InvalidAddress(msg)) if msg.starts_with("to")));
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(FailingMailer), "noreply@example.com");

        let result = sender
            .send_email("couple@example.com", "Subject", "<p>Test</p>")
            .await;

        assert_eq!(
            result,
            Err(EmailError::Transport("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_local_config_builds_sender() {
        let config = SmtpConfig {
            from_email: "noreply@example.com".into(),
            mode: SmtpMode::Local {
                host: "localhost".into(),
                port: 1025,
            },
        };
        assert!(SmtpEmailSender::from_config(&config).is_ok());
    }
}
