use reqwest::multipart::Form;
use serde_json::json;

use crate::helpers::{body_json, fake_png, image_part, spawn_app};

#[tokio::test]
async fn settings_fall_back_to_defaults() {
    let app = spawn_app().await;

    let response = app.get("/settings").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = body_json(response).await;
    assert_eq!(body["data"]["site_name"], "Xalima");
    assert_eq!(body["data"]["logo_url"], "");
    assert_eq!(body["data"]["logo_size"], 48);
    assert_eq!(body["data"]["header_height"], 80);
    assert_eq!(body["data"]["logo_position"], "left");
}

#[tokio::test]
async fn header_uses_the_built_in_logo_when_none_is_set() {
    let app = spawn_app().await;

    let response = app.get("/settings/logo").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], "image/svg+xml");
    let body = response.text().await.unwrap();
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn saving_settings_requires_an_admin_session() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .put(app.url("/admin/settings"))
        .json(&json!({ "site_name": "Hijacked" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let body = body_json(app.get("/settings").await).await;
    assert_eq!(body["data"]["site_name"], "Xalima");
}

#[tokio::test]
async fn uploaded_logo_replaces_the_default_after_saving() {
    let app = spawn_app().await;
    let token = app.login_as_admin().await;
    let png = fake_png(50 * 1024);

    let form = Form::new().part("file", image_part(png.clone(), "logo.png", "image/png"));
    let response = app.admin_upload("/admin/uploads/image", &token, form).await;
    assert_eq!(response.status().as_u16(), 200);
    let data_uri = body_json(response).await["data"]["data_uri"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(data_uri.starts_with("data:image/png;base64,"));

    // Uploading alone stores nothing.
    let body = body_json(app.get("/settings").await).await;
    assert_eq!(body["data"]["logo_url"], "");

    let mut settings = body["data"].clone();
    settings["logo_url"] = json!(data_uri);
    settings["logo_size"] = json!(64);
    let response = app.admin_put_json("/admin/settings", &token, &settings).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = body_json(app.get("/settings").await).await;
    assert_eq!(body["data"]["logo_url"], data_uri.as_str());
    assert_eq!(body["data"]["logo_size"], 64);

    let response = app.get("/settings/logo").await;
    assert_eq!(response.headers()["content-type"], "image/png");
    assert_eq!(response.bytes().await.unwrap().to_vec(), png);
}

#[tokio::test]
async fn external_logos_are_redirected_to() {
    let app = spawn_app().await;
    let token = app.login_as_admin().await;

    let mut settings = body_json(app.get("/settings").await).await["data"].clone();
    settings["logo_url"] = json!("https://cdn.example.org/xalima.png");
    app.admin_put_json("/admin/settings", &token, &settings).await;

    let response = app.get("/settings/logo").await;
    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(response.headers()["location"], "https://cdn.example.org/xalima.png");
}

#[tokio::test]
async fn non_image_uploads_are_rejected() {
    let app = spawn_app().await;
    let token = app.login_as_admin().await;

    let form = Form::new().part(
        "file",
        image_part(b"%PDF-1.4".to_vec(), "statuts.pdf", "application/pdf"),
    );
    let response = app.admin_upload("/admin/uploads/image", &token, form).await;

    assert_eq!(response.status().as_u16(), 400);
}
