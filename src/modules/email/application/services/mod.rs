pub mod email_notification_service;

pub use email_notification_service::EmailNotificationService;
