pub mod configuration;
pub mod dispatcher;
pub mod domain;
pub mod email_client;
pub mod email_store;
pub mod routes;
pub mod startup;
pub mod status_updater;
pub mod telemetry;
