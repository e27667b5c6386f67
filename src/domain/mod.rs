mod delivery_status;
mod email_address;
mod email_record;
mod new_email;
mod tracking_token;

pub use delivery_status::{DeliveryStatus, TrackingEvent};
pub use email_address::EmailAddress;
pub use email_record::EmailRecord;
pub use new_email::{EmailBody, EmailSubject, NewEmail};
pub use tracking_token::TrackingToken;
