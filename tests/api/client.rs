use std::sync::Arc;
use std::time::Duration;

use backoffice_auth::client::{
    ActivityMonitor, AuthClient, ClientError, ManualClock, MemoryStorage, SessionStore,
};
use backoffice_auth::domain::{TokenPayload, UserProfile};
use backoffice_auth::services::token_codec;
use backoffice_auth::utils::ClientConfig;
use chrono::Utc;
use test_context::test_context;

use crate::helpers::{
    TestContext, ADMIN_PASSWORD, ADMIN_USERNAME, CASHIER_PASSWORD, CASHIER_USERNAME, TEST_SECRET,
};

const START: i64 = 1_700_000_000_000;

fn client_for(base_url: &str) -> (AuthClient, ManualClock) {
    let clock = ManualClock::new(START);
    let store = SessionStore::with_clock(Arc::new(MemoryStorage::new()), Arc::new(clock.clone()));
    let config = ClientConfig {
        api_base_url: base_url.to_owned(),
    };
    (AuthClient::new(&config, ActivityMonitor::new(store)), clock)
}

#[test_context(TestContext)]
#[tokio::test]
async fn login_saves_the_session(ctx: &mut TestContext) {
    let (client, _) = client_for(&ctx.test_app.address);

    let user = client
        .login(CASHIER_USERNAME, CASHIER_PASSWORD)
        .await
        .expect("login succeeds");

    let store = client.monitor().store();
    assert_eq!(store.current_user(), Some(user));
    assert!(store.current_token().is_some());
    assert_eq!(store.last_activity(), Some(START));
    assert!(store.can("billing.read"));
    assert!(client.monitor().is_authenticated());

    let claims = store.inspect_token().expect("stored token decodes");
    assert_eq!(
        claims.extra.get("username").and_then(|v| v.as_str()),
        Some(CASHIER_USERNAME)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn failed_login_reports_the_gateway_message(ctx: &mut TestContext) {
    let (client, _) = client_for(&ctx.test_app.address);

    let result = client.login(ADMIN_USERNAME, "wrong-password").await;
    match result {
        Err(ClientError::Auth(message)) => assert_eq!(message, "Invalid username or password."),
        other => panic!("expected auth error, got {:?}", other),
    }
    assert_eq!(client.monitor().store().current_token(), None);
}

#[tokio::test]
async fn short_new_password_is_rejected_before_any_request() {
    // Nothing listens here; a request would surface as a transport error.
    let (client, _) = client_for("http://127.0.0.1:9");

    let result = client
        .change_password("whatever-current", "short6", "short6")
        .await;
    assert!(matches!(result, Err(ClientError::Validation(_))));

    let result = client
        .change_password("whatever-current", "long-enough-1", "long-enough-2")
        .await;
    assert!(matches!(result, Err(ClientError::Validation(_))));
}

#[tokio::test]
async fn change_password_without_session_is_expired() {
    let (client, _) = client_for("http://127.0.0.1:9");

    let result = client
        .change_password("whatever-current", "long-enough-1", "long-enough-1")
        .await;
    assert!(matches!(result, Err(ClientError::SessionExpired)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn change_password_after_idle_timeout_logs_out(ctx: &mut TestContext) {
    let (client, clock) = client_for(&ctx.test_app.address);
    client.login(ADMIN_USERNAME, ADMIN_PASSWORD).await.unwrap();

    clock.advance(Duration::from_secs(61 * 60));

    let result = client
        .change_password(ADMIN_PASSWORD, "another-password", "another-password")
        .await;
    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert_eq!(client.monitor().store().current_user(), None);

    // The password on the server is untouched.
    let login = ctx.test_app.login(ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert_eq!(login.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn change_password_end_to_end(ctx: &mut TestContext) {
    let (client, clock) = client_for(&ctx.test_app.address);
    client.login(CASHIER_USERNAME, CASHIER_PASSWORD).await.unwrap();

    clock.advance(Duration::from_secs(30 * 60));

    let wrong = client
        .change_password("not-my-password", "another-password", "another-password")
        .await;
    match wrong {
        Err(ClientError::Auth(message)) => assert_eq!(message, "Current password is incorrect"),
        other => panic!("expected auth error, got {:?}", other),
    }

    let message = client
        .change_password(CASHIER_PASSWORD, "another-password", "another-password")
        .await
        .expect("password change succeeds");
    assert!(message.is_some());

    client.logout().unwrap();
    assert!(!client.monitor().is_authenticated());

    client
        .login(CASHIER_USERNAME, "another-password")
        .await
        .expect("login with the new password");
}

#[test_context(TestContext)]
#[tokio::test]
async fn logout_clears_the_session(ctx: &mut TestContext) {
    let (client, _) = client_for(&ctx.test_app.address);
    client.login(ADMIN_USERNAME, ADMIN_PASSWORD).await.unwrap();

    client.logout().unwrap();
    client.logout().unwrap();

    let store = client.monitor().store();
    assert_eq!(store.current_user(), None);
    assert_eq!(store.current_token(), None);
    assert_eq!(store.last_activity(), None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn rejected_credential_logs_the_client_out(ctx: &mut TestContext) {
    let (client, _) = client_for(&ctx.test_app.address);

    // Fresh activity, but the server-side token lifetime is long over.
    let stale = token_codec::issue_at(
        &TokenPayload::new("2"),
        TEST_SECRET,
        chrono::Duration::hours(1),
        Utc::now() - chrono::Duration::hours(2),
    )
    .unwrap();
    let profile = UserProfile {
        id: 2,
        username: CASHIER_USERNAME.to_string(),
        display_name: "Caisse 01".to_string(),
        permissions: Default::default(),
        is_super_admin: false,
    };
    client.monitor().store().save(&profile, &stale).unwrap();
    assert!(client.monitor().is_authenticated());

    let result = client
        .change_password(CASHIER_PASSWORD, "another-password", "another-password")
        .await;

    assert!(
        matches!(result, Err(ClientError::InvalidToken(_))),
        "expected invalid token, got {:?}",
        result
    );
    assert_eq!(client.monitor().store().current_token(), None);
    assert_eq!(client.monitor().store().current_user(), None);
    assert!(!client.monitor().is_authenticated());
}
