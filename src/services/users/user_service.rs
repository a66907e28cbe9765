//! # 사용자 조회 서비스 구현
//!
//! 프로세스 시작 시 고정으로 정의되는 사용자 목록을 제공합니다.
//! 사용자 레코드는 데이터베이스에 저장되지 않으며 절대 변경되지 않습니다.
//!
//! 조회 기능은 [`UserDirectory`] trait 뒤에 두어, 로그인 로직을 바꾸지
//! 않고 실제 저장소 구현으로 교체할 수 있도록 합니다.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::entities::users::user::User;

/// 사용자 이름으로 자격 증명 레코드를 조회하는 능력
///
/// 운영 구현은 [`UserService`]이며, 테스트에서는 스텁으로 대체할 수
/// 있습니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// 사용자 이름으로 레코드를 조회합니다 (대소문자 구분).
    async fn find_by_username(&self, username: &str) -> Option<User>;
}

/// 고정 사용자 목록 기반 조회 서비스
pub struct UserService {
    users: Vec<User>,
}

impl UserService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn with_fixed_users() -> Self {
        Self {
            users: vec![
                User::new(1, "john", "changeme"),
                User::new(2, "maria", "guess"),
            ],
        }
    }
}

#[async_trait]
impl UserDirectory for UserService {
    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.iter().find(|u| u.username == username).cloned()
    }
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn user_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(UserService::with_fixed_users()))
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_find_by_username_returns_known_users() {
        let service = UserService::with_fixed_users();

        let john = service.find_by_username("john").await.unwrap();
        assert_eq!(john.user_id, 1);
        assert_eq!(john.password, "changeme");

        let maria = service.find_by_username("maria").await.unwrap();
        assert_eq!(maria.user_id, 2);
        assert_eq!(maria.password, "guess");
    }

    #[actix_web::test]
    async fn test_find_by_username_is_case_sensitive() {
        let service = UserService::with_fixed_users();

        assert!(service.find_by_username("JOHN").await.is_none());
        assert!(service.find_by_username("John").await.is_none());
    }

    #[actix_web::test]
    async fn test_find_by_username_unknown_or_empty() {
        let service = UserService::with_fixed_users();

        assert!(service.find_by_username("nonexistent").await.is_none());
        assert!(service.find_by_username("").await.is_none());
    }
}
