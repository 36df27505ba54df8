use api::test_utils::TestContext;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

#[tokio::test]
async fn test_list_my_recordings_returns_only_mine_newest_first() {
    let ctx = TestContext::new();
    ctx.set_global();

    let me = Uuid::new_v4();
    let someone_else = Uuid::new_v4();
    let now = OffsetDateTime::now_utc();

    ctx.add_recording(me, "First take", now - Duration::days(3)).await;
    ctx.add_recording(me, "Second take", now - Duration::minutes(5)).await;
    ctx.add_recording(someone_else, "Not mine", now).await;

    let recordings = api::list_my_recordings(ctx.token_for(me))
        .await
        .expect("Listing should succeed");

    let titles: Vec<&str> = recordings.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Second take", "First take"]);
    assert!(recordings.iter().all(|r| r.owner_user_id == me));
}

#[tokio::test]
async fn test_list_my_recordings_empty_for_new_user() {
    let ctx = TestContext::new();
    ctx.set_global();

    let recordings = api::list_my_recordings(ctx.token_for(Uuid::new_v4()))
        .await
        .expect("Listing should succeed");
    assert!(recordings.is_empty());
}

#[tokio::test]
async fn test_list_my_recordings_requires_valid_token() {
    let ctx = TestContext::new();
    ctx.set_global();

    let result = api::list_my_recordings("invalid.jwt.token".to_string()).await;
    assert!(result.is_err(), "Invalid token should be rejected");
}

#[tokio::test]
async fn test_get_recording_by_id() {
    let ctx = TestContext::new();
    ctx.set_global();

    let created = ctx
        .add_recording(Uuid::new_v4(), "Demo", OffsetDateTime::now_utc())
        .await;

    let fetched = api::get_recording(created.id.to_string())
        .await
        .expect("Recording should be found");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_recording_unknown_or_malformed_id() {
    let ctx = TestContext::new();
    ctx.set_global();

    let missing = api::get_recording(Uuid::new_v4().to_string()).await;
    assert!(missing.unwrap_err().to_string().contains("not found"));

    let malformed = api::get_recording("nope".to_string()).await;
    assert!(malformed.unwrap_err().to_string().contains("invalid id"));
}

#[tokio::test]
async fn test_list_my_recordings_expired_session_is_an_auth_error() {
    let ctx = TestContext::new();
    ctx.set_global();

    let me = Uuid::new_v4();
    ctx.add_recording(me, "Old take", OffsetDateTime::now_utc()).await;

    let err = api::list_my_recordings(ctx.expired_token_for(me))
        .await
        .unwrap_err();
    assert!(err.to_string().contains(api::AUTH_ERROR_PREFIX));
}
