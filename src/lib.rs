pub mod configuration;
pub mod domain;
pub mod lead_store_client;
pub mod registration_form;
pub mod routes;
pub mod startup;
pub mod telemetry;
mod utils;
