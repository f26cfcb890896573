mod common;

use common::{TestApp, bearer, body};
use poem::http::StatusCode;
use serde_json::json;
use workplace_inventory::types::internal::auth::UserRole;

#[tokio::test]
async fn test_login_lockout_over_http() {
    let app = TestApp::new().await;
    app.create_user("operator", "s3cret-pass", UserRole::User).await;

    let first = app.login("operator", "wrong", "user").await;
    first.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(body(first).await["message"], "Invalid password, 2 attempts left");

    app.login("operator", "wrong", "user").await.assert_status(StatusCode::UNAUTHORIZED);
    let third = app.login("operator", "wrong", "user").await;
    assert_eq!(body(third).await["message"], "Invalid password, account is now blocked");

    let blocked = app.login("operator", "s3cret-pass", "user").await;
    blocked.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(body(blocked).await["error"], "account_blocked");
}

#[tokio::test]
async fn test_unknown_user_and_role_mismatch() {
    let app = TestApp::new().await;
    app.create_user("operator", "s3cret-pass", UserRole::User).await;

    let unknown = app.login("ghost", "whatever", "user").await;
    unknown.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(body(unknown).await["message"], "User not found");

    app.login("operator", "s3cret-pass", "admin")
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_endpoints_require_token() {
    let app = TestApp::new().await;

    app.client
        .get("/api/admin/users")
        .send()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    app.client
        .get("/api/admin/users")
        .header("Authorization", bearer("not-a-token"))
        .send()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_regular_user_cannot_moderate() {
    let app = TestApp::new().await;
    app.create_user("operator", "s3cret-pass", UserRole::User).await;
    let token = app.token("operator", "s3cret-pass", "user").await;

    app.client
        .get("/api/admin/users")
        .header("Authorization", bearer(&token))
        .send()
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_creates_blocks_unblocks_and_deletes_user() {
    let app = TestApp::new().await;
    app.create_user("root", "root-password", UserRole::Admin).await;
    let token = app.token("root", "root-password", "admin").await;

    let created = app
        .client
        .post("/api/admin/users")
        .header("Authorization", bearer(&token))
        .body_json(&json!({ "username": "operator", "password": "s3cret-pass", "unit": "IT" }))
        .send()
        .await;
    created.assert_status_is_ok();
    let created = body(created).await;
    assert_eq!(created["role"], "user");
    assert_eq!(created["status"], "active");
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());
    let id = created["id"].as_i64().expect("id missing");

    app.token("operator", "s3cret-pass", "user").await;

    let blocked = body(
        app.client
            .post(format!("/api/admin/users/{}/status", id))
            .header("Authorization", bearer(&token))
            .send()
            .await,
    )
    .await;
    assert_eq!(blocked["status"], "blocked");
    app.login("operator", "s3cret-pass", "user")
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let unblocked = body(
        app.client
            .post(format!("/api/admin/users/{}/status", id))
            .header("Authorization", bearer(&token))
            .send()
            .await,
    )
    .await;
    assert_eq!(unblocked["status"], "active");
    assert_eq!(unblocked["attempts_left"], 3);

    let deleted = body(
        app.client
            .delete(format!("/api/admin/users/{}", id))
            .header("Authorization", bearer(&token))
            .send()
            .await,
    )
    .await;
    assert_eq!(deleted["deleted"], true);

    let log = app.audit_log();
    assert!(log.contains("user_created actor=root created user 'operator' with role user"));
    assert!(log.contains("user_status_changed actor=root set status of 'operator' to blocked"));
    assert!(log.contains("user_status_changed actor=root set status of 'operator' to active"));
    assert!(log.contains("user_deleted actor=root deleted user 'operator'"));
    assert!(log.contains("login_success actor=root"));
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let app = TestApp::new().await;
    app.create_user("root", "root-password", UserRole::Admin).await;
    let token = app.token("root", "root-password", "admin").await;

    let resp = app
        .client
        .post("/api/admin/users")
        .header("Authorization", bearer(&token))
        .body_json(&json!({ "username": "root", "password": "another" }))
        .send()
        .await;

    resp.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_user_status_is_404_and_missing_delete_is_false() {
    let app = TestApp::new().await;
    app.create_user("root", "root-password", UserRole::Admin).await;
    let token = app.token("root", "root-password", "admin").await;

    app.client
        .post("/api/admin/users/999/status")
        .header("Authorization", bearer(&token))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let resp = app
        .client
        .delete("/api/admin/users/999")
        .header("Authorization", bearer(&token))
        .send()
        .await;
    resp.assert_status_is_ok();
    assert_eq!(body(resp).await["deleted"], false);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let resp = app.client.get("/api/health").send().await;

    resp.assert_status_is_ok();
    assert_eq!(body(resp).await["status"], "healthy");
}
