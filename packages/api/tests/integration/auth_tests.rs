use api::config::AppMode;
use api::test_utils::TestContext;

#[tokio::test]
async fn test_local_session_token_resolves_to_demo_user() {
    let ctx = TestContext::new();
    ctx.set_global();

    let token = api::local_session()
        .await
        .expect("Local session should be issued in local mode");

    let user_id = api::require_user_id(token)
        .await
        .expect("Issued token should verify");
    assert_eq!(user_id, api::catalog::seed::DEMO_USER_ID);
}

#[tokio::test]
async fn test_local_session_refused_in_production() {
    let ctx = TestContext::with_mode(AppMode::Production);
    ctx.set_global();

    let result = api::local_session().await;
    assert!(result.is_err(), "Production mode must not hand out sessions");
}

#[tokio::test]
async fn test_require_user_id_rejects_empty_token() {
    let ctx = TestContext::new();
    ctx.set_global();

    let err = api::require_user_id(String::new()).await.unwrap_err();
    assert!(err.to_string().contains("not signed in"));
}

#[tokio::test]
async fn test_require_user_id_rejects_garbage() {
    let ctx = TestContext::new();
    ctx.set_global();

    let result = api::require_user_id("not-a-jwt".to_string()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_require_user_id_rejects_expired_session() {
    let ctx = TestContext::new();
    ctx.set_global();

    let err = api::require_user_id(ctx.expired_token_for(uuid::Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains(api::AUTH_ERROR_PREFIX));
}
