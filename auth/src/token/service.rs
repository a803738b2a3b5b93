use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). The signing secret is process-wide state,
/// loaded once at startup and never rotated during the process lifetime.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime_hours: i64,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Signing key (should be at least 32 bytes for HS256 and
    ///   stored in environment variables or a vault, never in code)
    /// * `lifetime_hours` - Hours until an issued token expires
    pub fn new(secret: &[u8], lifetime_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime_hours,
        }
    }

    /// Issue a token for a subject, expiring after the configured lifetime.
    ///
    /// # Returns
    /// Signed token string embedding the subject and expiry
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_subject(subject, self.lifetime_hours);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return the embedded subject identifier.
    ///
    /// # Errors
    /// * `Expired` - Current time exceeds the embedded expiry
    /// * `Invalid` - Signature mismatch, malformed token, or unparseable
    ///   subject claim
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        token_data
            .claims
            .subject()
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}
