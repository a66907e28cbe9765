//! 비즈니스 로직 서비스 모듈

pub mod users;
pub mod auth;
pub mod posts;
