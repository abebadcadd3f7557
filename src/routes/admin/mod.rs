mod clients;
mod dashboard;
mod inbox;
mod projects;
mod subscribers;

pub use clients::*;
pub use dashboard::*;
pub use inbox::*;
pub use projects::*;
pub use subscribers::*;
