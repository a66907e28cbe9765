//! 로그인 서비스 구현
//!
//! 사용자 이름 기반 로그인 흐름을 담당합니다. 사용자 조회에 성공하면
//! JWT 액세스 토큰을 발급하고, 실패하면 인증 오류를 반환합니다.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::models::token::token::TokenResponse;
use crate::errors::errors::AppError;
use crate::services::auth::token_service::TokenService;
use crate::services::users::user_service::{UserDirectory, UserService};

/// 로그인 처리 서비스
///
/// 사용자 조회는 [`UserDirectory`]에, 토큰 발급은 [`TokenService`]에
/// 위임합니다.
pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 사용자 이름으로 로그인하고 액세스 토큰을 발급합니다.
    ///
    /// 사용자 이름은 대소문자를 구분하여 정확히 일치해야 합니다.
    /// 존재하지 않는 사용자는 `AuthenticationError`(401)로 처리됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 알 수 없는 사용자 이름
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub async fn sign_in(&self, username: &str) -> Result<TokenResponse, AppError> {
        sign_in_with(self.users.as_ref(), &self.tokens, username).await
    }
}

/// 로그인 흐름의 실제 구현
///
/// 사용자 디렉터리를 제네릭으로 받아 테스트에서 스텁 구현으로
/// 치환할 수 있도록 합니다.
async fn sign_in_with<D: UserDirectory + ?Sized>(
    directory: &D,
    tokens: &TokenService,
    username: &str,
) -> Result<TokenResponse, AppError> {
    let user = directory.find_by_username(username).await.ok_or_else(|| {
        AppError::AuthenticationError("사용자 이름이 일치하지 않습니다".to_string())
    })?;

    // 디렉터리 구현이 부분 일치를 반환하더라도 정확히 일치해야만 통과
    if user.username != username {
        return Err(AppError::AuthenticationError(
            "사용자 이름이 일치하지 않습니다".to_string(),
        ));
    }

    let access_token = tokens.issue_token(&user)?;
    Ok(TokenResponse { access_token })
}

#[async_trait]
impl Service for AuthService {
    fn name(&self) -> &str {
        "auth_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn auth_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(AuthService {
        users: ServiceLocator::get::<UserService>(),
        tokens: ServiceLocator::get::<TokenService>(),
    }))
}

inventory::submit! {
    ServiceRegistration {
        name: "auth_service",
        constructor: auth_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;

    /// 대소문자를 무시하는 느슨한 디렉터리 스텁
    struct CaseInsensitiveDirectory;

    #[async_trait]
    impl UserDirectory for CaseInsensitiveDirectory {
        async fn find_by_username(&self, username: &str) -> Option<User> {
            if username.eq_ignore_ascii_case("john") {
                Some(User::new(1, "john", "changeme"))
            } else {
                None
            }
        }
    }

    #[actix_web::test]
    async fn test_sign_in_known_user_issues_token() {
        let tokens = TokenService {};
        let directory = CaseInsensitiveDirectory;

        let response = sign_in_with(&directory, &tokens, "john").await.unwrap();
        let claims = tokens.verify_token(&response.access_token).unwrap();

        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "john");
    }

    #[actix_web::test]
    async fn test_sign_in_rejects_case_mismatch() {
        // 디렉터리가 느슨하게 매칭해도 서비스 계층에서 정확 일치를 강제한다
        let tokens = TokenService {};
        let result = sign_in_with(&CaseInsensitiveDirectory, &tokens, "JOHN").await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_sign_in_rejects_unknown_user() {
        let tokens = TokenService {};
        let result = sign_in_with(&CaseInsensitiveDirectory, &tokens, "nonexistent").await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_token_payload_has_no_password() {
        let tokens = TokenService {};
        let response = sign_in_with(&CaseInsensitiveDirectory, &tokens, "john")
            .await
            .unwrap();
        let claims = tokens.verify_token(&response.access_token).unwrap();

        let payload = serde_json::to_value(&claims).unwrap();
        assert!(payload.get("password").is_none());
    }
}
