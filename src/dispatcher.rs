use crate::domain::{EmailAddress, NewEmail, TrackingToken};
use crate::email_client::EmailClient;
use chrono::Utc;

/// Pixel and click URLs for one send.
#[derive(Debug)]
pub struct TrackingLinks {
    pub pixel_url: String,
    pub click_url: String,
}

impl TrackingLinks {
    /// `cache_buster` ends up as the pixel's `t` parameter so that mail clients
    /// cannot serve the image from cache on a second open.
    pub fn new(
        base_url: &str,
        recipient: &EmailAddress,
        token: &TrackingToken,
        cache_buster: i64,
    ) -> Self {
        let recipient = urlencoding::encode(recipient.as_ref());
        Self {
            pixel_url: format!(
                "{}/track?email={}&token={}&t={}",
                base_url, recipient, token, cache_buster
            ),
            click_url: format!("{}/click?email={}&token={}", base_url, recipient, token),
        }
    }
}

#[derive(Debug)]
pub struct TrackedContent {
    pub html: String,
    pub text: String,
}

pub fn compose_tracked_content(body: &str, links: &TrackingLinks) -> TrackedContent {
    let html = format!(
        "<p>{}</p>\n<p><a href=\"{}\" target=\"_blank\">Click here to view</a></p>\n\
         <img src=\"{}\" width=\"1\" height=\"1\" alt=\"\" />",
        body, links.click_url, links.pixel_url
    );
    let text = format!("{}\n\nView it here: {}", body, links.click_url);
    TrackedContent { html, text }
}

#[tracing::instrument(
    name = "Dispatching tracked email",
    skip(email_client, base_url, new_email, token),
    fields(recipient = %new_email.recipient)
)]
pub async fn dispatch_tracked_email(
    email_client: &EmailClient,
    base_url: &str,
    new_email: &NewEmail,
    token: &TrackingToken,
) -> Result<(), reqwest::Error> {
    let links = TrackingLinks::new(
        base_url,
        &new_email.recipient,
        token,
        Utc::now().timestamp_millis(),
    );
    let content = compose_tracked_content(new_email.body.as_ref(), &links);
    email_client
        .send_email(
            &new_email.recipient,
            new_email.subject.as_ref(),
            &content.html,
            &content.text,
        )
        .await
}
