//! Staff sign-in against the configured account list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::StaffAccount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Сессия сотрудника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSession {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl StaffSession {
    /// Part of the email before `@`, for the header
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter email and password")]
    MissingFields,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Единственный владелец состояния сессии
///
/// Сессия создаётся при входе и удаляется при выходе; хранение в браузере
/// делает фронтенд, передавая сюда восстановленное значение.
#[derive(Debug, Clone)]
pub struct SessionCoordinator {
    accounts: Vec<StaffAccount>,
    session: Option<StaffSession>,
}

impl SessionCoordinator {
    pub fn new(accounts: Vec<StaffAccount>) -> Self {
        Self {
            accounts,
            session: None,
        }
    }

    pub fn sign_in(&mut self, request: &LoginRequest, now: DateTime<Utc>) -> Result<&StaffSession, AuthError> {
        let email = request.email.trim();
        if email.is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        let account = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == request.password)
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(self.session.insert(StaffSession {
            email: account.email.clone(),
            signed_in_at: now,
        }))
    }

    pub fn sign_out(&mut self) -> Option<StaffSession> {
        self.session.take()
    }

    /// Accept a session read back from storage if its account still exists.
    pub fn restore(&mut self, stored: Option<StaffSession>) -> Option<&StaffSession> {
        self.session = stored.filter(|s| self.accounts.iter().any(|a| a.email == s.email));
        self.session.as_ref()
    }

    pub fn session(&self) -> Option<&StaffSession> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coordinator() -> SessionCoordinator {
        SessionCoordinator::new(vec![StaffAccount {
            email: "admin@example.com".into(),
            password: "change-me".into(),
        }])
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        let mut auth = coordinator();

        assert_eq!(
            auth.sign_in(&login("admin@example.com", "wrong"), now).unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
        assert_eq!(auth.sign_in(&login(" ", ""), now).unwrap_err(), AuthError::MissingFields);
        assert!(!auth.is_signed_in());

        let session = auth.sign_in(&login(" Admin@Example.com ", "change-me"), now).unwrap();
        assert_eq!(session.email, "admin@example.com");
        assert_eq!(session.display_name(), "admin");
        assert!(auth.is_signed_in());

        assert!(auth.sign_out().is_some());
        assert!(auth.session().is_none());
    }

    #[test]
    fn test_restore_checks_account() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        let mut auth = coordinator();
        let stale = StaffSession {
            email: "former@example.com".into(),
            signed_in_at: now,
        };
        assert!(auth.restore(Some(stale)).is_none());

        let valid = StaffSession {
            email: "admin@example.com".into(),
            signed_in_at: now,
        };
        assert!(auth.restore(Some(valid.clone())).is_some());

        let json = serde_json::to_string(&valid).unwrap();
        let back: StaffSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, valid);
    }
}
