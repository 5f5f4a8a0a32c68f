use backoffice_auth::domain::ChangePasswordResponse;
use backoffice_auth::utils::consts::error_codes::INVALID_TOKEN;
use test_context::test_context;

use crate::helpers::{TestContext, CASHIER_PASSWORD, CASHIER_USERNAME};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .change_password(None, CASHIER_PASSWORD, "brand-new-password")
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let body: ChangePasswordResponse = response.json().await.unwrap();
    assert!(!body.success);
    assert_eq!(body.code.as_deref(), Some(INVALID_TOKEN));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_with_invalid_token(ctx: &mut TestContext) {
    let response = ctx
        .test_app
        .change_password(Some("not-a-jwt"), CASHIER_PASSWORD, "brand-new-password")
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let body: ChangePasswordResponse = response.json().await.unwrap();
    assert_eq!(body.code.as_deref(), Some(INVALID_TOKEN));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_400_if_new_password_too_short(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token_for(CASHIER_USERNAME, CASHIER_PASSWORD).await;

    let response = app
        .change_password(Some(&token), CASHIER_PASSWORD, "short7!")
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: ChangePasswordResponse = response.json().await.unwrap();
    assert!(!body.success);
    assert!(body.message.is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_current_password_wrong(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token_for(CASHIER_USERNAME, CASHIER_PASSWORD).await;

    let response = app
        .change_password(Some(&token), "wrong-current-password", "brand-new-password")
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let body: ChangePasswordResponse = response.json().await.unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("Current password is incorrect")
    );
    assert_eq!(body.code, None);

    // Old password still works.
    let login = app.login(CASHIER_USERNAME, CASHIER_PASSWORD).await;
    assert_eq!(login.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_and_replace_the_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token_for(CASHIER_USERNAME, CASHIER_PASSWORD).await;

    let response = app
        .change_password(Some(&token), CASHIER_PASSWORD, "brand-new-password")
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: ChangePasswordResponse = response.json().await.unwrap();
    assert!(body.success);

    let old = app.login(CASHIER_USERNAME, CASHIER_PASSWORD).await;
    assert_eq!(old.status().as_u16(), 401);

    let new = app.login(CASHIER_USERNAME, "brand-new-password").await;
    assert_eq!(new.status().as_u16(), 200);
}
