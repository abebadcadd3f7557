use sqlx::{postgres::PgRow, Row};

use crate::helpers::TestApp;

#[tokio::test]
async fn subscribe_returns_201_when_body_is_valid() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({ "email": "a@b.com" });

    let response = test_app.post_subscription(body).await;

    assert_eq!(201, response.status().as_u16());

    let response_body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(response_body["outcome"], "subscribed");
}

#[tokio::test]
async fn subscribe_persists_the_lowercased_email() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({ "email": " A@B.com " });

    test_app.post_subscription(body).await;

    let email: String = sqlx::query("SELECT email FROM subscribers;")
        .map(|row: PgRow| row.get("email"))
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Query to fetch subscribers failed.");

    assert_eq!(email, "a@b.com");
}

#[tokio::test]
async fn subscribing_twice_is_a_benign_outcome() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({ "email": "a@b.com" });

    let first_response = test_app.post_subscription(body.clone()).await;
    let second_response = test_app.post_subscription(body).await;

    assert_eq!(201, first_response.status().as_u16());
    // The second attempt is informational, never a failure
    assert_eq!(200, second_response.status().as_u16());

    let second_body: serde_json::Value = second_response.json().await.unwrap();

    assert_eq!(second_body["outcome"], "already_subscribed");

    let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM subscribers;")
        .map(|row: PgRow| row.get("count"))
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Query to count subscribers failed.");

    assert_eq!(count, 1);
}

#[tokio::test]
async fn subscribe_returns_400_when_email_is_invalid() {
    let test_app = TestApp::spawn_app().await;

    let test_cases: Vec<(serde_json::Value, &str)> = vec![
        (serde_json::json!({}), "missing email parameter"),
        (serde_json::json!({ "email": "" }), "empty email"),
        (
            serde_json::json!({ "email": "test.com" }),
            "email missing at symbol",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_subscription(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}
