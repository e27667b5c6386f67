use crate::helpers::spawn_app;

#[tokio::test]
async fn email_status_lists_records_newest_first() {
    let app = spawn_app().await;
    let oldest = app.send_email_to("a@x.com", "First").await;
    let middle = app.send_email_to("b@x.com", "Second").await;
    let newest = app.send_email_to("c@x.com", "Third").await;

    let records = app.get_email_status().await;

    let ids: Vec<_> = records.iter().map(|r| r["id"].as_str().unwrap().to_owned()).collect();
    assert_eq!(
        ids,
        vec![newest.to_string(), middle.to_string(), oldest.to_string()]
    );
}

#[tokio::test]
async fn emails_is_an_alias_of_email_status() {
    let app = spawn_app().await;
    app.send_email_to("a@x.com", "Hi").await;

    let records: Vec<serde_json::Value> = app
        .api_client
        .get(&format!("{}/emails", &app.address))
        .send()
        .await
        .expect("Ooops request")
        .json()
        .await
        .unwrap();

    assert_eq!(records, app.get_email_status().await);
}

#[tokio::test]
async fn email_status_is_empty_without_sends() {
    let app = spawn_app().await;

    assert!(app.get_email_status().await.is_empty());
}

#[tokio::test]
async fn email_status_returns_500_when_the_store_fails() {
    let app = spawn_app().await;
    sqlx::query("DROP TABLE emails")
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .api_client
        .get(&format!("{}/email-status", &app.address))
        .send()
        .await
        .expect("Ooops request");

    assert_eq!(response.status().as_u16(), 500);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Failed to fetch email statuses");
}
