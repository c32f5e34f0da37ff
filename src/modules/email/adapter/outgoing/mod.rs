pub mod logging_sender;
pub mod smtp_config;
pub mod smtp_sender;

pub use logging_sender::LoggingEmailSender;
pub use smtp_config::{SmtpConfig, SmtpMode};
pub use smtp_sender::SmtpEmailSender;
