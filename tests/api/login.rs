use backoffice_auth::domain::{ErrorResponse, LoginResponse};
use test_context::test_context;

use crate::helpers::{
    TestContext, ADMIN_PASSWORD, ADMIN_USERNAME, CASHIER_PASSWORD, CASHIER_USERNAME,
};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_with_token_and_profile(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.login(CASHIER_USERNAME, CASHIER_PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: LoginResponse = response.json().await.expect("login response body");
    assert!(!body.token.is_empty());
    assert_eq!(body.user.username, CASHIER_USERNAME);
    assert_eq!(body.user.display_name, "Caisse 01");
    assert!(!body.user.is_super_admin);
    assert!(body.user.can("billing.write"));
    assert!(!body.user.can("fraud.control"));

    let claims = app
        .app_state
        .token_codec
        .verify(&body.token)
        .expect("issued token verifies");
    assert_eq!(claims.sub, body.user.id.to_string());
    assert_eq!(
        claims.extra.get("username").and_then(|v| v.as_str()),
        Some(CASHIER_USERNAME)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_accept_username_with_surrounding_whitespace(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.login("  admin ", ADMIN_PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: LoginResponse = response.json().await.unwrap();
    assert!(body.user.is_super_admin);
    assert!(body.user.can("anything.at.all"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_wrong_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.login(ADMIN_USERNAME, "not-the-password").await;
    assert_eq!(response.status().as_u16(), 401);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Invalid username or password.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_not_reveal_unknown_usernames(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let unknown = app.login("nobody", "whatever-password").await;
    let wrong_password = app.login(ADMIN_USERNAME, "whatever-password").await;

    assert_eq!(unknown.status().as_u16(), 401);
    assert_eq!(wrong_password.status().as_u16(), 401);

    let unknown: ErrorResponse = unknown.json().await.unwrap();
    let wrong_password: ErrorResponse = wrong_password.json().await.unwrap();
    assert_eq!(unknown, wrong_password);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_400_if_fields_are_empty(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let cases = [("", ADMIN_PASSWORD), (ADMIN_USERNAME, ""), ("   ", "")];
    for (username, password) in cases {
        let response = app.login(username, password).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "username {:?} password {:?}",
            username,
            password
        );
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_if_malformed_input(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .post(&format!("{}/api/auth/login", &app.address))
        .json(&serde_json::json!({ "user": "admin" }))
        .send()
        .await
        .expect("Failed to execute login request.");

    assert_eq!(response.status().as_u16(), 422);
}

#[test_context(TestContext)]
#[tokio::test]
async fn unknown_username_costs_as_much_as_wrong_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    // First failure of each kind pays one-off setup.
    app.login("nobody", "whatever-password").await;
    app.login(ADMIN_USERNAME, "whatever-password").await;

    let mut unknown = std::time::Duration::ZERO;
    let mut wrong_password = std::time::Duration::ZERO;
    for _ in 0..3 {
        let started = std::time::Instant::now();
        let response = app.login("nobody", "whatever-password").await;
        unknown += started.elapsed();
        assert_eq!(response.status().as_u16(), 401);

        let started = std::time::Instant::now();
        let response = app.login(ADMIN_USERNAME, "whatever-password").await;
        wrong_password += started.elapsed();
        assert_eq!(response.status().as_u16(), 401);
    }

    assert!(
        unknown * 4 >= wrong_password,
        "unknown user took {:?}, wrong password took {:?}",
        unknown,
        wrong_password
    );
}
