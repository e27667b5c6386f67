use serde::Serialize;

/// Lifecycle of a sent email. Stored as its display name.
///
/// Updates are plain overwrites: nothing stops a late open event from moving a
/// `Clicked` record back to `Opened`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    Sent,
    Opened,
    Clicked,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Opened => "Opened",
            DeliveryStatus::Clicked => "Clicked",
        }
    }
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        DeliveryStatus::Sent
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DeliveryStatus {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "Sent" => Ok(DeliveryStatus::Sent),
            "Opened" => Ok(DeliveryStatus::Opened),
            "Clicked" => Ok(DeliveryStatus::Clicked),
            other => Err(format!("{} is not a known delivery status", other)),
        }
    }
}

/// What the recipient did with the email, as seen by the tracking routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingEvent {
    Open,
    Click,
}

impl TrackingEvent {
    pub fn target_status(&self) -> DeliveryStatus {
        match self {
            TrackingEvent::Open => DeliveryStatus::Opened,
            TrackingEvent::Click => DeliveryStatus::Clicked,
        }
    }
}
