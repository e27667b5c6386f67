use crate::email_store::list_emails;
use crate::routes::{error_chain_fmt, json_error};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use sqlx::PgPool;

#[derive(thiserror::Error)]
pub enum EmailStatusError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for EmailStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for EmailStatusError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), "Failed to fetch email statuses")
    }
}

pub async fn email_status(pool: web::Data<PgPool>) -> Result<HttpResponse, EmailStatusError> {
    let records = list_emails(&pool)
        .await
        .context("Failed to fetch email statuses")?;
    Ok(HttpResponse::Ok().json(records))
}
