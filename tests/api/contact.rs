use sqlx::{postgres::PgRow, Row};

use crate::helpers::TestApp;

#[tokio::test]
async fn contact_returns_201_when_body_is_valid() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "mobile": "+1-555-0000",
        "city": "Metro City"
    });

    let response = test_app.post_contact(body).await;

    assert_eq!(201, response.status().as_u16());
}

#[tokio::test]
async fn contact_persists_a_normalized_unread_submission() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({
        "name": "  Jane Doe  ",
        "email": " Jane@X.com ",
        "mobile": " +1-555-0000 ",
        "city": " Metro City "
    });

    test_app.post_contact(body).await;

    let (name, email, mobile, city, is_read): (String, String, String, String, bool) =
        sqlx::query("SELECT name, email, mobile, city, is_read FROM contact_submissions;")
            .map(|row: PgRow| {
                (
                    row.get("name"),
                    row.get("email"),
                    row.get("mobile"),
                    row.get("city"),
                    row.get("is_read"),
                )
            })
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Query to fetch contact submissions failed.");

    assert_eq!(name, "Jane Doe");
    assert_eq!(email, "jane@x.com");
    assert_eq!(mobile, "+1-555-0000");
    assert_eq!(city, "Metro City");
    assert!(!is_read);
}

#[tokio::test]
async fn contact_returns_400_when_body_require_field_is_missing() {
    let test_app = TestApp::spawn_app().await;

    // This is a common practice and it is called table-driven tests. In this case, it simulates different kind of possible request bodies
    // where API should return 400.
    let test_cases: Vec<(serde_json::Value, &str)> = vec![
        (serde_json::json!({}), "missing body parameters"),
        (
            serde_json::json!({ "name": "Jane Doe" }),
            "missing email, mobile and city parameters",
        ),
        (
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "mobile": "+1-555-0000"
            }),
            "missing city parameter",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_contact(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn contact_reports_every_violated_field_at_once() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({
        "name": "j",
        "email": "not-an-email",
        "mobile": "123",
        "city": "x"
    });

    let response = test_app.post_contact(body).await;

    assert_eq!(400, response.status().as_u16());

    let response_body: serde_json::Value = response.json().await.unwrap();
    let errors = response_body
        .get("errors")
        .and_then(|errors| errors.as_object())
        .expect("Response body is missing the errors map.");

    assert_eq!(errors.len(), 4);
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("mobile"));
    assert!(errors.contains_key("city"));
}

#[tokio::test]
async fn rejected_contact_is_never_persisted() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({
        "name": "j",
        "email": "jane@x.com",
        "mobile": "+1-555-0000",
        "city": "Metro City"
    });

    test_app.post_contact(body).await;

    let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM contact_submissions;")
        .map(|row: PgRow| row.get("count"))
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Query to count contact submissions failed.");

    assert_eq!(count, 0);
}
