pub mod admin;
mod auth;
mod contact;
mod health_check;
mod subscriptions;

pub use admin::*;
pub use auth::*;
pub use contact::*;
pub use health_check::*;
pub use subscriptions::*;
