//! 댓글 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 댓글 생성 요청
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// 댓글 본문
    #[validate(length(min = 1, message = "댓글 내용은 비어 있을 수 없습니다"))]
    pub comment: String,

    /// 작성자 이름
    #[validate(length(min = 1, message = "작성자는 비어 있을 수 없습니다"))]
    pub username: String,
}

/// 댓글 부분 수정 요청
///
/// `Some`인 필드만 기존 댓글에 병합됩니다.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub comment: Option<String>,
    pub username: Option<String>,
}
