//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};

/// 로그인 요청
///
/// 사용자 이름만으로 로그인합니다. 존재하지 않는 이름(빈 문자열 포함)은
/// 사용자 조회 단계에서 인증 실패로 처리되므로 별도 검증은 하지 않습니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// 로그인할 사용자 이름 (대소문자 구분)
    pub username: String,
}
