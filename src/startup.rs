use crate::configuration::{DatabaseSettings, Settings};
use crate::email_client::EmailClient;
use crate::routes::json_error;
use actix_web::dev::Server;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
    db_pool: PgPool,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let db_pool = get_connection_pool(&configuration.database);

        let sender_email = configuration
            .email_client
            .sender()
            .map_err(anyhow::Error::msg)?;
        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            configuration.email_client.base_url.clone(),
            sender_email,
            configuration.email_client.authorization_token.clone(),
            timeout,
        )?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            db_pool.clone(),
            email_client,
            configuration.application.base_url,
            configuration.application.click_redirect_url,
        )?;
        Ok(Self {
            port,
            server,
            db_pool,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serves until the server is shut down, then closes the pool.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await?;
        self.db_pool.close().await;
        tracing::info!("Email store connections closed");
        Ok(())
    }
}

pub struct ApplicationBaseUrl(pub String);

pub struct ClickRedirectUrl(pub String);

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    email_client: EmailClient,
    base_url: String,
    click_redirect_url: String,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let email_client = web::Data::new(email_client);
    let base_url = web::Data::new(ApplicationBaseUrl(base_url));
    let click_redirect_url = web::Data::new(ClickRedirectUrl(click_redirect_url));
    let server = HttpServer::new(move || {
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            tracing::warn!(error = %err, "Invalid JSON payload");
            let response = json_error(StatusCode::BAD_REQUEST, "Invalid JSON payload");
            InternalError::from_response(err, response).into()
        });
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config)
            .route("/", web::get().to(crate::routes::home))
            .route("/health_check", web::get().to(crate::routes::health_check))
            .route("/send-email", web::post().to(crate::routes::send_email))
            .route("/track", web::get().to(crate::routes::track_open))
            .route("/click", web::get().to(crate::routes::track_click))
            .route("/email-status", web::get().to(crate::routes::email_status))
            .route("/emails", web::get().to(crate::routes::email_status))
            .route(
                "/delete-email/{id}",
                web::delete().to(crate::routes::delete_email),
            )
            .app_data(db_pool.clone())
            .app_data(email_client.clone())
            .app_data(base_url.clone())
            .app_data(click_redirect_url.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
