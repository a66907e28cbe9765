//! 게시글 요청 DTO
//!
//! 생성 요청은 모든 필드가 필수이고, 수정 요청은 변경 가능한 필드만
//! 선택적으로 담는 명시적 패치 구조체입니다.

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 게시글 생성 요청
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// 글 제목
    #[validate(length(min = 1, message = "제목은 비어 있을 수 없습니다"))]
    pub topic: String,

    /// 글 본문
    #[validate(length(min = 1, message = "본문은 비어 있을 수 없습니다"))]
    pub content: String,

    /// 소속 커뮤니티 이름
    #[validate(length(min = 1, message = "커뮤니티는 비어 있을 수 없습니다"))]
    pub community: String,

    /// 작성자 이름
    #[validate(length(min = 1, message = "작성자는 비어 있을 수 없습니다"))]
    pub username: String,
}

/// 게시글 부분 수정 요청
///
/// 변경 가능한 필드만 나열한 타입 패치입니다. `Some`인 필드만
/// `$set` 도큐먼트로 변환됩니다.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub community: Option<String>,
    pub username: Option<String>,
}

impl UpdatePostRequest {
    /// 존재하는 필드만 담은 MongoDB `$set` 용 도큐먼트를 생성합니다.
    pub fn into_update_document(&self) -> Document {
        let mut update = doc! {};

        if let Some(ref topic) = self.topic {
            update.insert("topic", topic);
        }
        if let Some(ref content) = self.content {
            update.insert("content", content);
        }
        if let Some(ref community) = self.community {
            update.insert("community", community);
        }
        if let Some(ref username) = self.username {
            update.insert("username", username);
        }

        update
    }
}

/// 게시글 검색 쿼리 파라미터 (`GET /posts/search?q=...`)
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// 검색어 (생략 시 전체 일치)
    #[serde(default)]
    pub q: String,
}
