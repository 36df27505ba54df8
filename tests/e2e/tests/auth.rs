use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
#[ignore = "needs Chrome and boots the web server"]
async fn test_signed_out_visitor_is_sent_to_sign_in() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/videos", server.url()))
        .expect("Failed to navigate");

    page.wait_for_path("/sign-in")
        .expect("Recordings page should redirect to sign-in");
}

#[tokio::test]
#[ignore = "needs Chrome and boots the web server"]
async fn test_demo_session_lists_seeded_recordings() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/sign-in", server.url()))
        .expect("Failed to navigate");
    page.click(".auth_signin button.primary")
        .expect("Demo sign-in button should exist");

    page.wait_for_path("/videos")
        .expect("Signing in should land on recordings");

    let cards = page
        .count("a.recording_card")
        .expect("Recording cards should render");
    assert!(cards > 0, "Seeded recordings should be listed");

    let first_age = page
        .find_element(".recording_age")
        .expect("Cards should carry a relative time");
    assert!(!first_age.trim().is_empty());
}
