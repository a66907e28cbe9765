pub mod auth;
pub mod posts;

pub use auth::*;
pub use posts::*;
