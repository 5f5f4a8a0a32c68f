use backoffice_auth::domain::{ErrorResponse, TokenPayload, VerifyTokenResponse};
use backoffice_auth::utils::consts::error_codes::INVALID_TOKEN;
use backoffice_auth::services::token_codec;
use chrono::{Duration, Utc};
use test_context::test_context;

use crate::helpers::{TestContext, ADMIN_PASSWORD, ADMIN_USERNAME, TEST_SECRET};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_valid_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = app.token_for(ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let response = app.verify_token(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: VerifyTokenResponse = response.json().await.unwrap();
    assert!(body.valid);
    assert_eq!(body.subject, "1");
    assert!(body.expires_at > Utc::now().timestamp());
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_missing_token(ctx: &mut TestContext) {
    let response = ctx.test_app.verify_token(None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_invalid_token(ctx: &mut TestContext) {
    let response = ctx.test_app.verify_token(Some("invalid.token.here")).await;
    assert_eq!(response.status().as_u16(), 401);

    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.code.as_deref(), Some(INVALID_TOKEN));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_token_expired(ctx: &mut TestContext) {
    let payload = TokenPayload::new("1");
    let token = token_codec::issue_at(
        &payload,
        TEST_SECRET,
        Duration::hours(1),
        Utc::now() - Duration::hours(2),
    )
    .unwrap();

    let response = ctx.test_app.verify_token(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_if_signed_with_another_secret(ctx: &mut TestContext) {
    let payload = TokenPayload::new("1");
    let token = token_codec::issue(&payload, b"some-other-secret", Duration::hours(1)).unwrap();

    let response = ctx.test_app.verify_token(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 401);
}
