pub mod admin_session;
pub mod credentials;
