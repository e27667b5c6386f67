use crate::helpers::spawn_app;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn send_email_returns_200_and_stores_a_sent_record() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_send_email(&serde_json::json!({
            "to": " a@x.com ",
            "subject": "Hi",
            "body": "Test"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["message"], "Email Sent!");

    let records = app.get_email_status().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["recipient"], "a@x.com");
    assert_eq!(records[0]["subject"], "Hi");
    assert_eq!(records[0]["body"], "Test");
    assert_eq!(records[0]["status"], "Sent");
    assert_eq!(records[0]["id"], json["id"]);
    assert!(records[0].get("tracking_token").is_none());
}

#[tokio::test]
async fn sent_email_embeds_the_body_a_click_link_and_a_pixel() {
    let app = spawn_app().await;
    app.send_email_to("a@x.com", "Hi").await;

    let requests = app.email_server.received_requests().await.unwrap();
    let email_request = &requests[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["To"], "a@x.com");
    assert_eq!(body["Subject"], "Hi");
    assert!(body["HtmlContent"].as_str().unwrap().contains("<p><p>Test</p></p>"));

    let links = app.get_tracking_links(email_request);
    let pixel_query: Vec<_> = links.pixel.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(pixel_query, vec!["email", "token", "t"]);
    assert!(links
        .click
        .query_pairs()
        .any(|(k, v)| k == "email" && v == "a@x.com"));
}

#[tokio::test]
async fn send_email_returns_400_when_fields_are_missing_or_blank() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (serde_json::json!({"subject": "Hi", "body": "Test"}), "missing to"),
        (serde_json::json!({"to": "a@x.com", "body": "Test"}), "missing subject"),
        (serde_json::json!({"to": "a@x.com", "subject": "Hi"}), "missing body"),
        (serde_json::json!({"to": "  ", "subject": "Hi", "body": "Test"}), "blank to"),
        (serde_json::json!({"to": "a@x.com", "subject": "", "body": "Test"}), "empty subject"),
        (serde_json::json!({}), "empty object"),
    ];

    for (body, description) in test_cases {
        let response = app.post_send_email(&body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json["error"], "Missing required fields");
    }
    assert_eq!(app.email_count().await, 0);
}

#[tokio::test]
async fn send_email_rejects_malformed_json() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/send-email", &app.address))
        .header("Content-Type", "application/json")
        .body("{\"to\": ")
        .send()
        .await
        .expect("Ooops request");

    assert_eq!(response.status().as_u16(), 400);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Invalid JSON payload");
}

#[tokio::test]
async fn failed_dispatch_returns_500_and_stores_nothing() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_send_email(&serde_json::json!({
            "to": "a@x.com",
            "subject": "Hi",
            "body": "Test"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Email sending failed");
    assert_eq!(app.email_count().await, 0);
}

#[tokio::test]
async fn store_failure_after_dispatch_returns_500() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    sqlx::query("ALTER TABLE emails DROP COLUMN tracking_token")
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .post_send_email(&serde_json::json!({
            "to": "a@x.com",
            "subject": "Hi",
            "body": "Test"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
}
