use crate::domain::{EmailAddress, TrackingEvent, TrackingToken};
use crate::routes::{error_chain_fmt, json_error};
use crate::startup::ClickRedirectUrl;
use crate::status_updater::record_event;
use actix_web::http::header::{CacheControl, CacheDirective, LOCATION};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use sqlx::PgPool;

const TRACKING_PIXEL: &[u8] = include_bytes!("../../static/tracking-pixel.png");

#[derive(serde::Deserialize, Debug)]
pub struct TrackingParams {
    email: Option<String>,
    token: Option<String>,
}

#[derive(thiserror::Error)]
pub enum TrackingError {
    #[error("No email provided")]
    ValidationError,
}

impl std::fmt::Debug for TrackingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for TrackingError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), self)
    }
}

/// Records the event and never reports the outcome: the tracked party sees
/// the same response whether or not anything matched or the store failed.
async fn track(pool: &PgPool, event: TrackingEvent, params: TrackingParams) -> Result<(), TrackingError> {
    let recipient = params
        .email
        .ok_or(TrackingError::ValidationError)
        .and_then(|email| EmailAddress::parse(email).map_err(|_| TrackingError::ValidationError))?;

    let token = match params.token.map(TrackingToken::parse) {
        Some(Ok(token)) => Some(token),
        Some(Err(e)) => {
            tracing::warn!(%recipient, error = %e, "Ignoring tracking event with malformed token");
            return Ok(());
        }
        None => None,
    };

    if let Err(e) = record_event(pool, event, &recipient, token.as_ref()).await {
        tracing::error!(error.cause_chain = ?e, error.message = %e, "Failed to update email status");
    }
    Ok(())
}

#[tracing::instrument(name = "Tracking email open", skip(pool))]
pub async fn track_open(
    query: web::Query<TrackingParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, TrackingError> {
    track(&pool, TrackingEvent::Open, query.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type("image/png")
        .insert_header(CacheControl(vec![
            CacheDirective::NoStore,
            CacheDirective::NoCache,
            CacheDirective::MustRevalidate,
        ]))
        .body(TRACKING_PIXEL))
}

#[tracing::instrument(name = "Tracking email click", skip(pool, redirect_url))]
pub async fn track_click(
    query: web::Query<TrackingParams>,
    pool: web::Data<PgPool>,
    redirect_url: web::Data<ClickRedirectUrl>,
) -> Result<HttpResponse, TrackingError> {
    track(&pool, TrackingEvent::Click, query.into_inner()).await?;
    Ok(HttpResponse::Found()
        .insert_header((LOCATION, redirect_url.0.as_str()))
        .finish())
}
