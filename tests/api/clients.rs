use uuid::Uuid;

use crate::helpers::TestApp;

fn sample_client() -> serde_json::Value {
    serde_json::json!({
        "name": "Amara Okafor",
        "designation": "Homeowner, Skyline Residences",
        "description": "The team found us our dream apartment in two weeks.",
        "avatar_url": "https://cdn.test/avatars/amara.jpg"
    })
}

#[tokio::test]
async fn creating_a_client_returns_the_stored_row() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let response = test_app.post("/admin/clients", sample_client()).await;

    assert_eq!(201, response.status().as_u16());

    let client: serde_json::Value = response.json().await.unwrap();

    assert_eq!(client["name"], "Amara Okafor");
    assert_eq!(client["designation"], "Homeowner, Skyline Residences");
}

#[tokio::test]
async fn updating_a_client_returns_the_authoritative_row() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let created: serde_json::Value = test_app
        .post("/admin/clients", sample_client())
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let mut updated_body = sample_client();
    updated_body["designation"] = serde_json::json!("Investor");

    let response = test_app
        .put(&format!("/admin/clients/{}", id), updated_body)
        .await;

    assert_eq!(200, response.status().as_u16());

    let updated: serde_json::Value = response.json().await.unwrap();

    assert_eq!(updated["designation"], "Investor");
}

#[tokio::test]
async fn deleting_an_unknown_client_returns_404() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let response = test_app
        .delete(&format!("/admin/clients/{}", Uuid::new_v4()))
        .await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn deleting_a_client_removes_it_from_the_list() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let created: serde_json::Value = test_app
        .post("/admin/clients", sample_client())
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let response = test_app.delete(&format!("/admin/clients/{}", id)).await;

    assert_eq!(204, response.status().as_u16());

    let list: serde_json::Value = test_app.get("/admin/clients").await.json().await.unwrap();

    assert!(list.as_array().unwrap().is_empty());
}
