use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::Rng;

use crate::errors::InternalError;

fn argon2_with_pepper(pepper: &str) -> Result<Argon2<'_>, InternalError> {
    Argon2::new_with_secret(
        pepper.as_bytes(),
        Algorithm::Argon2id,
        Version::V0x13,
        Params::default(),
    )
    .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
}

/// Hash a password with Argon2id, using the pepper as the secret parameter
pub fn hash_password(pepper: &str, password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let hash = argon2_with_pepper(pepper)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::crypto("password_hash", e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash string
///
/// # Returns
/// * `Ok(true)` / `Ok(false)` - Whether the password matches
/// * `Err(InternalError)` - The stored hash could not be parsed
pub fn verify_password(pepper: &str, password: &str, stored_hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| InternalError::parse("password_hash", e.to_string()))?;
    Ok(argon2_with_pepper(pepper)?
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Generate a cryptographically secure random password
///
/// 20 characters drawn from upper and lower case letters, digits and symbols.
pub fn generate_secure_password() -> String {
    const PASSWORD_LENGTH: usize = 20;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789\
                             !@#$%^&*()_+-=[]{}|;:,.<>?";

    let mut rng = rand::rng();
    (0..PASSWORD_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
