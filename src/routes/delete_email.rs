use crate::email_store::{self, StoreError};
use crate::routes::{error_chain_fmt, json_error};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(thiserror::Error)]
pub enum DeleteEmailError {
    #[error("Email not found")]
    NotFound,
    #[error("Failed to delete email")]
    UnexpectedError(#[source] anyhow::Error),
}

impl std::fmt::Debug for DeleteEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for DeleteEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            DeleteEmailError::NotFound => StatusCode::NOT_FOUND,
            DeleteEmailError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), self)
    }
}

#[tracing::instrument(name = "Deleting an email record", skip(pool))]
pub async fn delete_email(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, DeleteEmailError> {
    let id = Uuid::parse_str(&path.into_inner()).map_err(|e| {
        tracing::warn!(error = %e, "Malformed email id");
        DeleteEmailError::NotFound
    })?;

    match email_store::delete_email(&pool, id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Email deleted successfully!"
        }))),
        Err(StoreError::NotFound(_)) => Err(DeleteEmailError::NotFound),
        Err(e) => Err(DeleteEmailError::UnexpectedError(e.into())),
    }
}
