use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::services::crypto;
use crate::types::internal::auth::UserRole;
use crate::types::internal::users::NewUser;

/// Create an admin account with a generated password
///
/// The password is printed once and never stored in plaintext. This is the
/// only way to create the first admin; later admins can be created through
/// the API.
pub async fn create_admin(app_data: &AppData, username: &str, full_name: &str) -> Result<(), InternalError> {
    let password = crypto::generate_secure_password();

    let created = app_data
        .user_store
        .create(NewUser {
            username: username.to_string(),
            password: password.clone(),
            full_name: full_name.to_string(),
            rank: String::new(),
            unit: String::new(),
            notes: String::new(),
            role: UserRole::Admin,
        })
        .await?;

    app_data
        .audit_logger
        .log_user_created("cli", &created.username, created.role)
        .await;

    println!("✅ Admin account created");
    println!("   Username: {}", created.username);
    println!("   Password: {}", password);
    println!();
    println!("⚠️  Store this password now, it will not be shown again.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::internal::CredentialError;
    use crate::test::utils::setup_test_app_data;
    use crate::types::internal::auth::AccountStatus;

    #[tokio::test]
    async fn test_create_admin_creates_active_admin_and_audits() {
        let (app_data, _dir) = setup_test_app_data().await;

        create_admin(&app_data, "root", "System Administrator").await.expect("create failed");

        let admin = app_data
            .user_store
            .find_by_username("root")
            .await
            .expect("lookup failed")
            .expect("admin missing");
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(admin.status, AccountStatus::Active);
        let log = std::fs::read_to_string(app_data.audit_logger.path()).expect("read log");
        assert!(log.contains("user_created actor=cli created user 'root' with role admin"));
    }

    #[tokio::test]
    async fn test_create_admin_twice_is_duplicate() {
        let (app_data, _dir) = setup_test_app_data().await;
        create_admin(&app_data, "root", "").await.expect("create failed");

        let result = create_admin(&app_data, "root", "").await;

        assert!(matches!(result, Err(InternalError::Credential(CredentialError::DuplicateUsername(_)))));
    }
}
