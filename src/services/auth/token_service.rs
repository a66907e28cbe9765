//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰의 생성과 검증, Authorization 헤더 파싱을 담당합니다.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::auth_config::JwtConfig;
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::token::TokenClaims;
use crate::errors::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 액세스 토큰을 생성하고 검증합니다.
/// 클레임은 [`TokenClaims`] 타입으로만 구성되므로 비밀번호 등
/// 민감한 필드가 토큰에 실리는 일이 없습니다.
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.issue_token_with_lifetime(user, Duration::seconds(JwtConfig::expiration_seconds()))
    }

    /// 지정한 수명으로 액세스 토큰을 생성합니다.
    ///
    /// 만료 동작을 검증하는 테스트에서 음수 수명을 전달할 수 있도록
    /// 분리되어 있습니다.
    pub fn issue_token_with_lifetime(
        &self,
        user: &User,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + lifetime;

        let claims = TokenClaims {
            sub: user.user_id,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 만료, 서명 불일치, 형식 오류를 구분하지 않고 모두
    /// `AuthenticationError`로 반환합니다. 호출자는 실패 시 항상
    /// 401 응답을 내보내며, 실패 사유를 클라이언트에 노출하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Service for TokenService {
    fn name(&self) -> &str {
        "token_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn token_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(TokenService {}))
}

inventory::submit! {
    ServiceRegistration {
        name: "token_service",
        constructor: token_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(1, "john", "changeme")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = TokenService {};
        let token = service.issue_token(&sample_user()).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "john");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService {};
        // Validation::default()는 60초의 leeway를 허용하므로 그보다 과거로 만료시킨다
        let token = service
            .issue_token_with_lifetime(&sample_user(), Duration::seconds(-120))
            .unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = TokenService {};
        let token = service.issue_token(&sample_user()).unwrap();

        // 서명 부분을 훼손
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(matches!(
            service.verify_token(&tampered),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.verify_token("not-a-jwt"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService {};

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
