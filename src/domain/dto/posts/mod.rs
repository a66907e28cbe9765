pub mod post_request;
pub mod comment_request;

pub use post_request::*;
pub use comment_request::*;
