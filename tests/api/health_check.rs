use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Ooops request");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn home_serves_the_send_form() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&app.address)
        .send()
        .await
        .expect("Ooops request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("emailForm"));
}
