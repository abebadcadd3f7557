use crate::helpers::{TestApp, TEST_ADMIN_USERNAME};

#[tokio::test]
async fn login_with_valid_credentials_returns_the_admin_claims() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .post_login(TEST_ADMIN_USERNAME, crate::helpers::TEST_ADMIN_PASSWORD)
        .await;

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(body["username"], TEST_ADMIN_USERNAME);
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .post_login(TEST_ADMIN_USERNAME, "not-the-password")
        .await;

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn login_with_unknown_username_returns_401() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .post_login("intruder", crate::helpers::TEST_ADMIN_PASSWORD)
        .await;

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn every_admin_route_redirects_to_auth_without_a_session() {
    let test_app = TestApp::spawn_app().await;

    let admin_routes = vec![
        "/admin",
        "/admin/inbox",
        "/admin/subscribers",
        "/admin/subscribers/export",
        "/admin/projects",
        "/admin/clients",
    ];

    for route in admin_routes {
        let response = test_app.get(route).await;

        assert_eq!(
            303,
            response.status().as_u16(),
            "Route {} did not redirect an anonymous visitor",
            route
        );
        assert_eq!(
            "/auth",
            response
                .headers()
                .get("Location")
                .and_then(|location| location.to_str().ok())
                .unwrap_or_default(),
            "Route {} did not point the visitor at the login page",
            route
        );
    }
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let before_logout = test_app.get("/admin/inbox").await;
    assert_eq!(200, before_logout.status().as_u16());

    let logout_response = test_app.post_empty("/auth/logout").await;
    assert_eq!(200, logout_response.status().as_u16());

    let after_logout = test_app.get("/admin/inbox").await;
    assert_eq!(303, after_logout.status().as_u16());
}
