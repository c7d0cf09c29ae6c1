use crate::domain::ports::{EmailService, Provider};
use crate::domain::user::User;
use crate::error::ProviderError;
use tracing::info;

/// Logs the welcome email instead of sending it.
pub struct LoggingEmailService {
    sender: String,
}

impl LoggingEmailService {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

impl Provider for LoggingEmailService {
    fn name(&self) -> &str {
        "LoggingEmailService"
    }
}

impl EmailService for LoggingEmailService {
    fn send_welcome_email(&self, user: &User) -> Result<(), ProviderError> {
        if user.email.is_empty() {
            return Err(ProviderError::Declined {
                provider: self.name().to_string(),
                reason: format!("{} has no email address", user.name),
            });
        }
        info!(from = %self.sender, "Sending welcome email to {}", user.email);
        Ok(())
    }
}
