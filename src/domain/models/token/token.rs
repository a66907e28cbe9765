//! JWT 인증 토큰 클레임 및 발급 응답 구조체

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 JWT 표준의 클레임과 애플리케이션 특화 클레임을 포함합니다.
/// 이 타입에는 비밀 필드가 존재하지 않으므로 비밀번호가 서명 대상에
/// 포함될 수 없습니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: i64,
    /// 사용자 이름
    pub username: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 토큰 발급 응답
///
/// 로그인 성공 시 클라이언트에게 전달되는 액세스 토큰입니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// 액세스 토큰 (API 접근용)
    pub access_token: String,
}
