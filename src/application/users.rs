//! User registration split into one type per responsibility: the entity,
//! its repository, the mailer and the report.

use crate::domain::ports::{DatabaseBox, EmailServiceBox};
use crate::domain::user::User;
use crate::error::ProviderError;
use std::fmt::Write;
use tracing::warn;

/// Persists users through a `Database` and keeps the saved list.
pub struct UserRepository {
    database: DatabaseBox,
    users: Vec<User>,
}

impl UserRepository {
    pub fn new(database: DatabaseBox) -> Self {
        Self {
            database,
            users: Vec::new(),
        }
    }

    pub fn save(&mut self, user: User) -> Result<(), ProviderError> {
        self.database.save(&format!("{} <{}>", user.name, user.email))?;
        self.users.push(user);
        Ok(())
    }

    pub fn find_all(&self) -> &[User] {
        &self.users
    }
}

pub struct UserService {
    repository: UserRepository,
    email_service: EmailServiceBox,
}

impl UserService {
    pub fn new(repository: UserRepository, email_service: EmailServiceBox) -> Self {
        Self {
            repository,
            email_service,
        }
    }

    /// Saves the user, then sends the welcome email. A failed email does not
    /// undo the registration.
    pub fn register_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<User, ProviderError> {
        let user = User::new(name, email);
        self.repository.save(user.clone())?;
        if let Err(e) = self.email_service.send_welcome_email(&user) {
            warn!(user = %user.name, error = %e, "welcome email not sent");
        }
        Ok(user)
    }

    pub fn repository(&self) -> &UserRepository {
        &self.repository
    }
}

pub struct UserReportGenerator;

impl UserReportGenerator {
    pub fn generate_report(repository: &UserRepository) -> String {
        let mut report = String::from("User Report:\n");
        for user in repository.find_all() {
            let _ = writeln!(report, "- {} ({})", user.name, user.email);
        }
        report
    }
}
