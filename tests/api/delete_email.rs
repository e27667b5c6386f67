use crate::helpers::spawn_app;

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let app = spawn_app().await;
    let keep = app.send_email_to("a@x.com", "Keep").await;
    let remove = app.send_email_to("a@x.com", "Remove").await;

    let response = app.delete_email(&remove.to_string()).await;

    assert_eq!(response.status().as_u16(), 200);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["message"], "Email deleted successfully!");

    let records = app.get_email_status().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], keep.to_string());
}

#[tokio::test]
async fn delete_of_unknown_id_returns_404() {
    let app = spawn_app().await;
    app.send_email_to("a@x.com", "Hi").await;

    let response = app.delete_email(&uuid::Uuid::new_v4().to_string()).await;

    assert_eq!(response.status().as_u16(), 404);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Email not found");
    assert_eq!(app.email_count().await, 1);
}

#[tokio::test]
async fn delete_with_malformed_id_returns_404() {
    let app = spawn_app().await;

    let response = app.delete_email("not-an-id").await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn deleting_twice_fails_the_second_time() {
    let app = spawn_app().await;
    let id = app.send_email_to("a@x.com", "Hi").await;

    assert_eq!(app.delete_email(&id.to_string()).await.status().as_u16(), 200);
    assert_eq!(app.delete_email(&id.to_string()).await.status().as_u16(), 404);
}
