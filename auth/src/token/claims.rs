use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims embedded in an access token.
///
/// `sub` carries the user identifier; `exp` and `iat` are Unix timestamps.
/// Tokens are stateless: once issued they stay valid until `exp` elapses or
/// the signing secret changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for a subject, expiring `lifetime_hours` from now.
    pub fn for_subject(subject: Uuid, lifetime_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(lifetime_hours);

        Self {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Parse the subject claim back into a user identifier.
    ///
    /// # Errors
    /// Fails when the `sub` claim is not a valid UUID.
    pub fn subject(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let subject = Uuid::new_v4();
        let claims = Claims::for_subject(subject, 8);

        assert_eq!(claims.sub, subject.to_string());
        assert_eq!(claims.exp - claims.iat, 8 * 60 * 60);
    }

    #[test]
    fn test_subject_round_trip() {
        let subject = Uuid::new_v4();
        let claims = Claims::for_subject(subject, 1);

        assert_eq!(claims.subject().unwrap(), subject);
    }

    #[test]
    fn test_subject_invalid() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            exp: 0,
            iat: 0,
        };

        assert!(claims.subject().is_err());
    }
}
