//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 및 만료 관련 설정을 관리하는 모듈입니다.
//! 모든 토큰은 하나의 공유 비밀키로 HMAC-SHA256 서명됩니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_SECONDS="3600"
//! ```

use std::env;

/// JWT 토큰 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 프로덕션에서는 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 초 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 3600초 (1시간)
    ///
    /// # Environment Variables
    ///
    /// - `JWT_EXPIRATION_SECONDS`: 커스텀 만료 시간 설정
    pub fn expiration_seconds() -> i64 {
        env::var("JWT_EXPIRATION_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_SECONDS").is_err() {
            assert_eq!(JwtConfig::expiration_seconds(), 3600);
        }
    }

    #[test]
    fn test_jwt_secret_has_value() {
        // 환경 변수 유무와 관계없이 항상 서명 가능한 키가 반환되어야 한다
        assert!(!JwtConfig::secret().is_empty());
    }
}
