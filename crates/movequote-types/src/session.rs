//! Authenticated user session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::QuoteError;

/// Role of a marketplace user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Customer posting moving requests and managing inventory.
    Customer,
    /// Moving company bidding on requests.
    Mover,
    /// Platform administrator.
    Admin,
}

impl UserType {
    /// Returns the user type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Mover => "mover",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The logged-in user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Backend user id.
    pub id: u64,
    /// Login name.
    pub username: String,
    /// Role of the user.
    pub user_type: UserType,
}

/// A session created at login and ended by logout or expiry.
#[derive(Debug, Clone)]
pub struct Session {
    user: SessionUser,
    token: String,
    expires_at: DateTime<Utc>,
    logged_out: bool,
}

impl Session {
    /// Creates a session for a user after a successful login.
    #[must_use]
    pub fn new(user: SessionUser, token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user,
            token: token.into(),
            expires_at,
            logged_out: false,
        }
    }

    /// Returns the session user.
    #[must_use]
    pub const fn user(&self) -> &SessionUser {
        &self.user
    }

    /// Returns the bearer token, or `None` once the session has ended.
    #[must_use]
    pub fn token(&self, now: DateTime<Utc>) -> Option<&str> {
        self.is_active(now).then_some(self.token.as_str())
    }

    /// Returns the expiry time.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true if the session has not been logged out or expired.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.logged_out && now < self.expires_at
    }

    /// Ends the session.
    pub fn logout(&mut self) {
        self.logged_out = true;
        self.token.clear();
    }

    /// Returns the user if the session is active and belongs to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::SessionExpired`] for an ended session and
    /// [`QuoteError::AccessDenied`] for non-customer users.
    pub fn require_customer(&self, now: DateTime<Utc>) -> Result<&SessionUser, QuoteError> {
        if !self.is_active(now) {
            return Err(QuoteError::SessionExpired);
        }
        match self.user.user_type {
            UserType::Customer => Ok(&self.user),
            user_type => Err(QuoteError::AccessDenied { user_type }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(user_type: UserType) -> Session {
        let user = SessionUser {
            id: 7,
            username: "wanjiku".to_string(),
            user_type,
        };
        let expires = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();
        Session::new(user, "jwt-token", expires)
    }

    #[test]
    fn test_active_until_expiry() {
        let session = session(UserType::Customer);
        let before = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 1).unwrap();

        assert!(session.is_active(before));
        assert_eq!(session.token(before), Some("jwt-token"));
        assert!(!session.is_active(after));
        assert_eq!(session.token(after), None);
    }

    #[test]
    fn test_logout_ends_session() {
        let mut session = session(UserType::Customer);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        session.logout();

        assert!(!session.is_active(now));
        assert!(matches!(
            session.require_customer(now),
            Err(QuoteError::SessionExpired)
        ));
    }

    #[test]
    fn test_require_customer() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let customer = session(UserType::Customer);
        assert_eq!(customer.require_customer(now).unwrap().id, 7);

        let mover = session(UserType::Mover);
        assert!(matches!(
            mover.require_customer(now),
            Err(QuoteError::AccessDenied {
                user_type: UserType::Mover
            })
        ));
    }

    #[test]
    fn test_user_deserialize() {
        let json = r#"{"id": 3, "username": "otieno", "user_type": "admin"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_type, UserType::Admin);
    }
}
