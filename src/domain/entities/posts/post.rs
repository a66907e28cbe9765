//! Post Entity Implementation
//!
//! 게시판의 핵심 도메인 엔티티입니다. 게시글(Post)과 그 안에 내장되는
//! 댓글(Comment)을 정의하며, 댓글 목록은 게시글이 소유하는 순서 있는
//! 컬렉션으로 관리됩니다. 댓글은 부모 게시글의 저장을 통해서만
//! 생성/수정/삭제됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::dto::posts::UpdateCommentRequest;

/// 게시글에 내장되는 댓글 서브도큐먼트
///
/// 댓글 ID는 부모 게시글의 댓글 목록 안에서만 유일성이 보장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// 댓글 식별자 (부모 게시글 범위에서 유일)
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 댓글 본문
    pub comment: String,
    /// 작성자 이름
    pub username: String,
    /// 작성 시간
    pub created_at: DateTime,
}

impl Comment {
    /// 새 댓글 생성 (ID와 작성 시간은 서버에서 할당)
    pub fn new(comment: String, username: String) -> Self {
        Self {
            id: ObjectId::new(),
            comment,
            username,
            created_at: DateTime::now(),
        }
    }

    /// 부분 수정 요청을 필드 단위로 병합합니다.
    ///
    /// 요청에 포함된 필드만 교체되며, ID와 작성 시간은 변경되지 않습니다.
    pub fn apply(&mut self, patch: &UpdateCommentRequest) {
        if let Some(ref comment) = patch.comment {
            self.comment = comment.clone();
        }
        if let Some(ref username) = patch.username {
            self.username = username.clone();
        }
    }
}

/// 게시글 엔티티
///
/// 댓글 목록을 내장한 단일 MongoDB 도큐먼트로 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 글 제목
    pub topic: String,
    /// 글 본문
    pub content: String,
    /// 소속 커뮤니티 이름
    pub community: String,
    /// 작성자 이름
    pub username: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간 (저장 시마다 갱신, 목록 정렬 기준)
    pub updated_at: DateTime,
    /// 내장 댓글 목록 (삽입 순서 유지)
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// 새 게시글 생성 (댓글 없음, 타임스탬프는 현재 시각)
    pub fn new(topic: String, content: String, community: String, username: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            topic,
            content,
            community,
            username,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 댓글을 목록 끝에 추가합니다.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// 댓글 ID(16진수 문자열)로 댓글을 선형 탐색합니다.
    ///
    /// ObjectId 파싱은 하지 않습니다. 파싱 불가능한 문자열은 어떤 댓글과도
    /// 일치하지 않으므로 자연스럽게 "없음"으로 처리됩니다.
    pub fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments
            .iter_mut()
            .find(|c| c.id.to_hex() == comment_id)
    }

    /// 일치하는 댓글을 목록에서 제거합니다.
    ///
    /// 일치하는 댓글이 없으면 목록은 그대로 유지됩니다 (에러 아님).
    pub fn remove_comment(&mut self, comment_id: &str) {
        self.comments.retain(|c| c.id.to_hex() != comment_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(
            "첫 글".to_string(),
            "본문입니다".to_string(),
            "자유게시판".to_string(),
            "john".to_string(),
        )
    }

    #[test]
    fn test_new_post_has_empty_comments_and_timestamps() {
        let post = sample_post();

        assert!(post.id.is_none());
        assert!(post.comments.is_empty());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_push_comment_preserves_order() {
        let mut post = sample_post();
        post.push_comment(Comment::new("first".to_string(), "john".to_string()));
        post.push_comment(Comment::new("second".to_string(), "maria".to_string()));

        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[0].comment, "first");
        assert_eq!(post.comments[1].comment, "second");
    }

    #[test]
    fn test_comment_mut_finds_by_hex_id() {
        let mut post = sample_post();
        post.push_comment(Comment::new("hello".to_string(), "john".to_string()));
        let id = post.comments[0].id.to_hex();

        assert!(post.comment_mut(&id).is_some());
        assert!(post.comment_mut("ffffffffffffffffffffffff").is_none());
        // 파싱 불가능한 ID도 단순히 "없음"으로 처리
        assert!(post.comment_mut("not-an-object-id").is_none());
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut comment = Comment::new("old".to_string(), "john".to_string());
        let id = comment.id;

        comment.apply(&UpdateCommentRequest {
            comment: Some("new".to_string()),
            username: None,
        });

        assert_eq!(comment.comment, "new");
        assert_eq!(comment.username, "john");
        assert_eq!(comment.id, id);
    }

    #[test]
    fn test_remove_comment_is_noop_for_unknown_id() {
        let mut post = sample_post();
        post.push_comment(Comment::new("keep".to_string(), "john".to_string()));

        post.remove_comment("ffffffffffffffffffffffff");
        assert_eq!(post.comments.len(), 1);

        let id = post.comments[0].id.to_hex();
        post.remove_comment(&id);
        assert!(post.comments.is_empty());
    }
}
