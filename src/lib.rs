pub mod auth;
pub mod config;
pub mod domain;
pub mod routes;
pub mod session;
pub mod startup;
pub mod telemetry;
