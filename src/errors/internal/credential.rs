use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User id not found: {0}")]
    UserIdNotFound(i32),

    #[error("Role mismatch for user {0}")]
    RoleMismatch(String),

    #[error("Account {0} is blocked")]
    AccountBlocked(String),

    /// Wrong password; carries the attempts remaining after this failure
    #[error("Invalid credentials, {attempts_left} attempts left")]
    InvalidCredentials { attempts_left: i32 },

    #[error("User already exists: {0}")]
    DuplicateUsername(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Expired token")]
    ExpiredToken,

    #[error("Admin role required")]
    AdminRequired,

    #[error("Admins cannot change the status of or delete their own account")]
    SelfModification,
}
