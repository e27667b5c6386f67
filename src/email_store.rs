use crate::domain::{DeliveryStatus, EmailAddress, EmailRecord, NewEmail, TrackingToken};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("The email store is unavailable")]
    Unavailable(#[from] sqlx::Error),
    #[error("No email record with id {0}")]
    NotFound(Uuid),
    #[error("Stored email record {id} is corrupt: {reason}")]
    CorruptRecord { id: Uuid, reason: String },
}

#[derive(sqlx::FromRow)]
struct EmailRecordRow {
    id: Uuid,
    recipient: String,
    subject: String,
    body: String,
    status: String,
    tracking_token: String,
    created_at: DateTime<Utc>,
}

impl EmailRecordRow {
    fn into_record(self) -> Result<EmailRecord, StoreError> {
        let status = DeliveryStatus::try_from(self.status)
            .map_err(|reason| StoreError::CorruptRecord { id: self.id, reason })?;
        Ok(EmailRecord {
            id: self.id,
            recipient: self.recipient,
            subject: self.subject,
            body: self.body,
            status,
            tracking_token: self.tracking_token,
            created_at: self.created_at,
        })
    }
}

#[tracing::instrument(
    name = "Saving sent email",
    skip(pool, new_email, tracking_token),
    fields(recipient = %new_email.recipient)
)]
pub async fn insert_email(
    pool: &PgPool,
    new_email: &NewEmail,
    tracking_token: &TrackingToken,
) -> Result<EmailRecord, StoreError> {
    let record = EmailRecord {
        id: Uuid::new_v4(),
        recipient: new_email.recipient.as_ref().to_owned(),
        subject: new_email.subject.as_ref().to_owned(),
        body: new_email.body.as_ref().to_owned(),
        status: DeliveryStatus::default(),
        tracking_token: tracking_token.as_ref().to_owned(),
        created_at: Utc::now(),
    };
    sqlx::query(
        "INSERT INTO emails (id, recipient, subject, body, status, tracking_token, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(record.id)
    .bind(&record.recipient)
    .bind(&record.subject)
    .bind(&record.body)
    .bind(record.status.as_str())
    .bind(&record.tracking_token)
    .bind(record.created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;
    Ok(record)
}

/// Overwrites the status of every record sent to `recipient`, whatever their
/// current status. Returns how many rows were touched.
#[tracing::instrument(name = "Updating status by recipient", skip(pool))]
pub async fn update_status_by_recipient(
    pool: &PgPool,
    recipient: &EmailAddress,
    status: DeliveryStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query("UPDATE emails SET status = $1 WHERE recipient = $2")
        .bind(status.as_str())
        .bind(recipient.as_ref())
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Same as [`update_status_by_recipient`] but scoped to the single send that
/// minted `token`. The recipient must match too, so a token pasted under a
/// different address updates nothing.
#[tracing::instrument(name = "Updating status by tracking token", skip(pool))]
pub async fn update_status_by_token(
    pool: &PgPool,
    recipient: &EmailAddress,
    token: &TrackingToken,
    status: DeliveryStatus,
) -> Result<u64, StoreError> {
    let result =
        sqlx::query("UPDATE emails SET status = $1 WHERE tracking_token = $2 AND recipient = $3")
            .bind(status.as_str())
            .bind(token.as_ref())
            .bind(recipient.as_ref())
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

#[tracing::instrument(name = "Listing emails", skip(pool))]
pub async fn list_emails(pool: &PgPool) -> Result<Vec<EmailRecord>, StoreError> {
    let rows = sqlx::query_as::<_, EmailRecordRow>(
        "SELECT id, recipient, subject, body, status, tracking_token, created_at \
         FROM emails ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(EmailRecordRow::into_record).collect()
}

#[tracing::instrument(name = "Deleting email", skip(pool))]
pub async fn delete_email(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM emails WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }
    Ok(())
}
