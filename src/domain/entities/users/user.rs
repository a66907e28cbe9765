//! User Entity Implementation
//!
//! 로그인 가능한 사용자 레코드입니다. 사용자 목록은 프로세스 시작 시
//! 고정으로 정의되며 데이터베이스에 저장되지 않습니다.

use serde::{Deserialize, Serialize};

/// 사용자 자격 증명 레코드
///
/// `password` 필드는 로그인 검증에만 사용되며, 토큰 페이로드 등
/// 외부로 나가는 어떤 데이터에도 포함되지 않아야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID
    pub user_id: i64,
    /// 사용자 이름 (로그인 키, 대소문자 구분)
    pub username: String,
    /// 비밀 필드
    pub password: String,
}

impl User {
    pub fn new(user_id: i64, username: &str, password: &str) -> Self {
        Self {
            user_id,
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
