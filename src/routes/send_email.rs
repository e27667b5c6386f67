use crate::dispatcher::dispatch_tracked_email;
use crate::domain::{EmailAddress, EmailBody, EmailSubject, NewEmail, TrackingToken};
use crate::email_client::EmailClient;
use crate::email_store::insert_email;
use crate::routes::{error_chain_fmt, json_error};
use crate::startup::ApplicationBaseUrl;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use sqlx::PgPool;

#[derive(serde::Deserialize)]
pub struct SendEmailData {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

impl TryFrom<SendEmailData> for NewEmail {
    type Error = String;
    fn try_from(data: SendEmailData) -> Result<Self, Self::Error> {
        let recipient = EmailAddress::parse(data.to)?;
        let subject = EmailSubject::parse(data.subject)?;
        let body = EmailBody::parse(data.body)?;
        Ok(NewEmail { recipient, subject, body })
    }
}

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Email sending failed")]
    DispatchError(#[source] reqwest::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SendEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            SendEmailError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SendEmailError::DispatchError(_) | SendEmailError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SendEmailError::ValidationError(message) => json_error(self.status_code(), message),
            _ => json_error(self.status_code(), "Email sending failed"),
        }
    }
}

/// Sends first, persists second: a send the mail API rejected leaves no record.
#[tracing::instrument(
    name = "Sending tracked email",
    skip(body, pool, email_client, base_url),
    fields(recipient = %body.to)
)]
pub async fn send_email(
    body: web::Json<SendEmailData>,
    pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
    base_url: web::Data<ApplicationBaseUrl>,
) -> Result<HttpResponse, SendEmailError> {
    let new_email: NewEmail = body.0.try_into().map_err(SendEmailError::ValidationError)?;
    let token = TrackingToken::generate();

    dispatch_tracked_email(&email_client, &base_url.0, &new_email, &token)
        .await
        .map_err(SendEmailError::DispatchError)?;

    let record = insert_email(&pool, &new_email, &token)
        .await
        .context("Failed to store the sent email")?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Email Sent!",
        "id": record.id,
    })))
}
