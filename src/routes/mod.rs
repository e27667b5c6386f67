mod delete_email;
mod email_status;
mod health_check;
mod home;
mod send_email;
mod tracking;

pub use delete_email::*;
pub use email_status::*;
pub use health_check::*;
pub use home::*;
pub use send_email::*;
pub use tracking::*;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// `{"error": "..."}` body shared by every failing route.
pub fn json_error(status: StatusCode, message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": message.to_string() }))
}
