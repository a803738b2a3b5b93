//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the task backend:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (JWT, HS256)
//! - An authentication coordinator tying both together
//!
//! The service defines its own ports and adapts these implementations, so this
//! crate stays free of HTTP and persistence concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use uuid::Uuid;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", 8);
//! let subject = Uuid::new_v4();
//! let token = tokens.issue(subject).unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), subject);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 8);
//! let subject = Uuid::new_v4();
//!
//! // Register: hash the password for storage.
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a token.
//! let result = auth.authenticate("password123", &hash, subject).unwrap();
//!
//! // Gate: validate the token on each request.
//! assert_eq!(auth.validate_token(&result.access_token).unwrap(), subject);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
