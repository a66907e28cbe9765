//! 도메인 모듈
//!
//! 엔티티, 토큰/인증 모델, 요청 DTO를 제공합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
