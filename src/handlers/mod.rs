//! HTTP 핸들러 모듈
//!
//! 각 도메인별 HTTP 엔드포인트 핸들러 함수들을 제공합니다.
//! 핸들러는 요청 파싱과 유효성 검사만 수행하고, 비즈니스 로직은
//! 서비스 계층에 위임합니다.

pub mod auth;
pub mod posts;
