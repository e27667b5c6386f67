use crate::domain::{EmailAddress, TrackingEvent, TrackingToken};
use crate::email_store::{self, StoreError};
use sqlx::PgPool;

/// Applies a tracking event. With a token only the matching send is updated;
/// without one every record for `recipient` is.
#[tracing::instrument(name = "Recording tracking event", skip(pool))]
pub async fn record_event(
    pool: &PgPool,
    event: TrackingEvent,
    recipient: &EmailAddress,
    token: Option<&TrackingToken>,
) -> Result<u64, StoreError> {
    let status = event.target_status();
    let updated = match token {
        Some(token) => email_store::update_status_by_token(pool, recipient, token, status).await?,
        None => email_store::update_status_by_recipient(pool, recipient, status).await?,
    };

    if updated > 0 {
        tracing::info!(%recipient, %status, updated, "Email status updated");
    } else {
        tracing::warn!(%recipient, %status, "No matching emails found");
    }
    Ok(updated)
}
