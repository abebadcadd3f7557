use uuid::Uuid;

use crate::helpers::TestApp;

fn sample_project() -> serde_json::Value {
    serde_json::json!({
        "name": "Skyline Residences",
        "description": "32 floors above the riverfront",
        "location": "North District",
        "price": "From $480,000",
        "image_url": "https://cdn.test/projects/skyline.jpg"
    })
}

#[tokio::test]
async fn creating_a_project_returns_the_stored_row() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let response = test_app.post("/admin/projects", sample_project()).await;

    assert_eq!(201, response.status().as_u16());

    let project: serde_json::Value = response.json().await.unwrap();

    assert_eq!(project["name"], "Skyline Residences");
    assert_eq!(project["location"], "North District");
    assert!(project["id"].as_str().is_some());

    let list: serde_json::Value = test_app.get("/admin/projects").await.json().await.unwrap();

    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn creating_a_project_with_a_blank_name_returns_400() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let response = test_app
        .post(
            "/admin/projects",
            serde_json::json!({ "name": "   ", "description": "no name" }),
        )
        .await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn updating_a_project_returns_the_authoritative_row() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let created: serde_json::Value = test_app
        .post("/admin/projects", sample_project())
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let mut updated_body = sample_project();
    updated_body["price"] = serde_json::json!("From $520,000");

    let response = test_app
        .put(&format!("/admin/projects/{}", id), updated_body)
        .await;

    assert_eq!(200, response.status().as_u16());

    let updated: serde_json::Value = response.json().await.unwrap();

    assert_eq!(updated["id"].as_str().unwrap(), id);
    assert_eq!(updated["price"], "From $520,000");
}

#[tokio::test]
async fn updating_an_unknown_project_returns_404() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let response = test_app
        .put(&format!("/admin/projects/{}", Uuid::new_v4()), sample_project())
        .await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn deleting_a_project_removes_it_from_the_list() {
    let test_app = TestApp::spawn_app().await;
    test_app.login_as_admin().await;

    let created: serde_json::Value = test_app
        .post("/admin/projects", sample_project())
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let response = test_app.delete(&format!("/admin/projects/{}", id)).await;

    assert_eq!(204, response.status().as_u16());

    let list: serde_json::Value = test_app.get("/admin/projects").await.json().await.unwrap();

    assert!(list.as_array().unwrap().is_empty());
}
