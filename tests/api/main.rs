mod auth;
mod clients;
mod contact;
mod health_check;
mod projects;
mod subscriptions;
