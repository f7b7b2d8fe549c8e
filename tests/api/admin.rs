use serde_json::json;

use crate::helpers::{body_json, spawn_app, spawn_app_with_seed, ADMIN_PASSWORD, OWNER_TOKEN};

#[tokio::test]
async fn only_the_owner_may_sign_in() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(app.url("/admin/login"))
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .api_client
        .post(app.url("/admin/login"))
        .header("X-Owner-Token", "someone-else")
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn the_first_password_becomes_the_admin_password() {
    let app = spawn_app().await;

    let response = app.login(ADMIN_PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(body_json(response).await["data"]["outcome"], "password_created");

    let response = app.login("wrong").await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.login(ADMIN_PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(body_json(response).await["data"]["outcome"], "logged_in");
}

#[tokio::test]
async fn a_failed_login_does_not_end_the_session() {
    let app = spawn_app().await;
    let token = app.login_as_admin().await;

    assert_eq!(app.login("wrong").await.status().as_u16(), 401);

    let response = app.admin_get("/admin/overview", &token).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn session_status_reports_owner_and_login_state() {
    let app = spawn_app().await;

    let body = body_json(app.get("/admin/session").await).await;
    assert_eq!(body["data"]["is_owner"], false);
    assert_eq!(body["data"]["logged_in"], false);

    app.login_as_admin().await;
    let response = app
        .api_client
        .get(app.url("/admin/session"))
        .header("X-Owner-Token", OWNER_TOKEN)
        .send()
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["is_owner"], true);
    assert_eq!(body["data"]["logged_in"], true);
}

#[tokio::test]
async fn the_overview_counts_every_collection() {
    let app = spawn_app_with_seed(true).await;
    app.post_json(
        "/volunteers",
        &json!({
            "first_name": "Awa",
            "last_name": "Diop",
            "email": "awa@example.com",
            "phone": "+221 77 000 00 00"
        }),
    )
    .await;
    let token = app.login_as_admin().await;

    let body = body_json(app.admin_get("/admin/overview", &token).await).await;

    assert_eq!(body["data"]["volunteers"], 1);
    assert_eq!(body["data"]["messages"], 0);
    assert_eq!(body["data"]["ongoing_projects"], 3);
    assert_eq!(body["data"]["completed_projects"], 3);
    assert_eq!(body["data"]["total_projects"], 6);
}

#[tokio::test]
async fn logging_out_invalidates_the_session() {
    let app = spawn_app().await;
    let token = app.login_as_admin().await;

    let response = app.admin_post_json("/admin/logout", &token, &json!({})).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.admin_get("/admin/overview", &token).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn a_session_token_is_useless_without_the_owner_header() {
    let app = spawn_app().await;
    let token = app.login_as_admin().await;

    let response = app
        .api_client
        .get(app.url("/admin/overview"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn forged_tokens_are_rejected() {
    let app = spawn_app().await;
    app.login_as_admin().await;

    let response = app.admin_get("/admin/overview", "not.a.token").await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn an_empty_password_is_refused_and_never_becomes_the_password() {
    let app = spawn_app().await;

    let response = app.login("").await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app.login(ADMIN_PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(body_json(response).await["data"]["outcome"], "password_created");
}
