use crate::domain::DeliveryStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One persisted send attempt and where it currently stands.
#[derive(Debug, Clone, Serialize)]
pub struct EmailRecord {
    pub id: Uuid,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub status: DeliveryStatus,
    #[serde(skip_serializing)]
    pub tracking_token: String,
    pub created_at: DateTime<Utc>,
}
