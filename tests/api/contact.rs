use chrono::Utc;
use serde_json::{json, Value};
use xalima::db::messages::fetch_messages;

use crate::helpers::{body_json, spawn_app};

fn contact_message(subject: &str) -> Value {
    json!({
        "first_name": "Fatou",
        "last_name": "Ndiaye",
        "email": "fatou@example.com",
        "subject": subject,
        "message": "Bonjour, je souhaite soutenir vos projets."
    })
}

#[tokio::test]
async fn a_valid_message_is_stored() {
    let app = spawn_app().await;
    let started = Utc::now();

    let response = app.post_json("/contact", &contact_message("Partenariat")).await;

    assert_eq!(response.status().as_u16(), 201);
    let stored = fetch_messages(&app.store).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].subject, "Partenariat");
    assert!(!stored[0].id.is_empty());
    assert!(stored[0].submitted_at >= started);
}

#[tokio::test]
async fn the_subject_is_optional() {
    let app = spawn_app().await;
    let mut body = contact_message("");
    body.as_object_mut().unwrap().remove("subject");

    let response = app.post_json("/contact", &body).await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn incomplete_messages_are_rejected() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("first_name", "missing first name"),
        ("last_name", "missing last name"),
        ("email", "missing email"),
        ("message", "missing message"),
    ];

    for (field, description) in test_cases {
        let mut body = contact_message("Partenariat");
        body[field] = json!("");

        let response = app.post_json("/contact", &body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }

    assert!(fetch_messages(&app.store).await.unwrap().is_empty());
}

#[tokio::test]
async fn admins_see_the_newest_messages_first() {
    let app = spawn_app().await;
    app.post_json("/contact", &contact_message("Premier")).await;
    app.post_json("/contact", &contact_message("Second")).await;
    let token = app.login_as_admin().await;

    let body = body_json(app.admin_get("/admin/messages", &token).await).await;
    let messages = body["data"].as_array().unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["subject"], "Second");
    assert_eq!(messages[1]["subject"], "Premier");
}

#[tokio::test]
async fn admins_can_delete_a_message() {
    let app = spawn_app().await;
    app.post_json("/contact", &contact_message("Premier")).await;
    let token = app.login_as_admin().await;
    let id = fetch_messages(&app.store).await.unwrap()[0].id.clone();

    let response = app.admin_delete(&format!("/admin/messages/{}", id), &token).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(fetch_messages(&app.store).await.unwrap().is_empty());
}
