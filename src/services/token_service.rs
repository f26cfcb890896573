use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::types::db::user;
use crate::types::internal::auth::Claims;

/// Issues and validates the HS256 session tokens returned by login
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_minutes: i64,
}

impl TokenService {
    pub fn new(jwt_secret: String, jwt_expiration_minutes: i64) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_minutes,
        }
    }

    /// Session lifetime in seconds, saturating at `i64::MAX`
    pub fn expires_in(&self) -> i64 {
        self.jwt_expiration_minutes.saturating_mul(60)
    }

    /// Generate a JWT for the given user
    ///
    /// The role is embedded so handlers can reject non-admins early, but admin
    /// endpoints still re-read the account before acting.
    pub fn generate_jwt(&self, user: &user::Model) -> Result<String, InternalError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role,
            exp: now.saturating_add(self.expires_in()),
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_encode", e.to_string()))
    }

    /// Validate a JWT and return its claims
    ///
    /// # Returns
    /// * `Ok(Claims)` - Signature and expiry are valid
    /// * `Err(InternalError)` - ExpiredToken or InvalidToken
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CredentialError::ExpiredToken.into(),
            _ => CredentialError::InvalidToken(e.to_string()).into(),
        })
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}

impl fmt::Display for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenService {{ jwt_expiration: {}min }}", self.jwt_expiration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::internal::auth::{AccountStatus, UserRole};

    const SECRET: &str = "test-secret-key-minimum-32-characters-long";

    fn sample_user(role: UserRole) -> user::Model {
        user::Model {
            id: 42,
            username: "petrov".to_string(),
            password_hash: String::new(),
            full_name: "P. Petrov".to_string(),
            rank: String::new(),
            unit: "IT".to_string(),
            notes: String::new(),
            role,
            status: AccountStatus::Active,
            attempts_left: 3,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_generated_token_validates_with_claims() {
        let service = TokenService::new(SECRET.to_string(), 60);

        let token = service.generate_jwt(&sample_user(UserRole::Admin)).expect("encode failed");
        let claims = service.validate_jwt(&token).expect("validate failed");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.username, "petrov");
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_each_token_gets_its_own_jti() {
        let service = TokenService::new(SECRET.to_string(), 60);
        let user = sample_user(UserRole::User);

        let a = service.validate_jwt(&service.generate_jwt(&user).expect("encode")).expect("validate");
        let b = service.validate_jwt(&service.generate_jwt(&user).expect("encode")).expect("validate");

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = TokenService::new(SECRET.to_string(), 60);
        let verifier = TokenService::new("another-secret-key-minimum-32-characters".to_string(), 60);

        let token = issuer.generate_jwt(&sample_user(UserRole::User)).expect("encode failed");

        assert!(matches!(
            verifier.validate_jwt(&token),
            Err(InternalError::Credential(CredentialError::InvalidToken(_)))
        ));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let service = TokenService::new(SECRET.to_string(), 60);

        assert!(matches!(
            service.validate_jwt("not.a.jwt"),
            Err(InternalError::Credential(CredentialError::InvalidToken(_)))
        ));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let service = TokenService::new(SECRET.to_string(), 60);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "42".to_string(),
            username: "petrov".to_string(),
            role: UserRole::User,
            exp: now - 3600,
            iat: now - 7200,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encode failed");

        assert!(matches!(
            service.validate_jwt(&token),
            Err(InternalError::Credential(CredentialError::ExpiredToken))
        ));
    }

    #[test]
    fn test_huge_lifetime_saturates_instead_of_overflowing() {
        let service = TokenService::new(SECRET.to_string(), i64::MAX / 2);

        let token = service.generate_jwt(&sample_user(UserRole::User)).expect("encode failed");
        let claims = service.validate_jwt(&token).expect("validate failed");

        assert_eq!(service.expires_in(), i64::MAX);
        assert_eq!(claims.exp, i64::MAX);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let service = TokenService::new(SECRET.to_string(), 60);

        let debug = format!("{:?}", service);

        assert!(!debug.contains(SECRET));
        assert!(debug.contains("<redacted>"));
    }
}
