use e2e::test_server::TestServer;

#[tokio::test]
#[ignore = "builds and boots the web server"]
async fn test_recordings_page_is_served() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(format!("{}/videos", server.url()))
        .await
        .expect("Failed to fetch recordings page");

    assert_eq!(response.status(), 200, "Recordings page should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("Screenity") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
#[ignore = "builds and boots the web server"]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(format!("{}/api/health", server.url()))
        .await
        .expect("Failed to call health endpoint")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("OK"));
}
