mod delete_email;
mod email_status;
mod health_check;
mod send_email;
