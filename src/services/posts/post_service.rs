//! 게시글 비즈니스 로직 서비스 구현
//!
//! 게시글과 내장 댓글에 대한 CRUD 흐름을 담당합니다.
//! 저장소 계층의 `Option` 결과를 HTTP 오류로 번역하는 것이
//! 이 계층의 주된 역할입니다.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::posts::comment_request::{CreateCommentRequest, UpdateCommentRequest};
use crate::domain::dto::posts::post_request::{CreatePostRequest, UpdatePostRequest};
use crate::domain::entities::posts::post::{Comment, Post};
use crate::errors::errors::AppError;
use crate::repositories::posts::post_repo::PostRepository;

/// 게시글 관리 서비스
pub struct PostService {
    post_repo: Arc<PostRepository>,
}

impl PostService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 새 게시글을 생성합니다.
    pub async fn create(&self, request: CreatePostRequest) -> Result<Post, AppError> {
        let post = Post::new(
            request.topic,
            request.content,
            request.community,
            request.username,
        );
        self.post_repo.create(post).await
    }

    /// 모든 게시글을 최근 수정순으로 조회합니다.
    pub async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        self.post_repo.find_all().await
    }

    /// ID로 게시글을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 형식의 게시글 ID
    /// * `AppError::NotFound` - 존재하지 않는 게시글
    pub async fn find_one(&self, id: &str) -> Result<Post, AppError> {
        self.load(id).await
    }

    /// 게시글을 부분 수정하고 수정된 문서를 반환합니다.
    ///
    /// 요청에 포함된 필드만 변경되며, 댓글 목록은 건드리지 않습니다.
    pub async fn update(&self, id: &str, patch: UpdatePostRequest) -> Result<Post, AppError> {
        let update_doc = patch.into_update_document();

        self.post_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))
    }

    /// 게시글을 삭제하고 삭제된 문서를 반환합니다.
    pub async fn remove(&self, id: &str) -> Result<Post, AppError> {
        self.post_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))
    }

    /// 검색어로 게시글을 검색합니다.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, AppError> {
        self.post_repo.search(query).await
    }

    /// 게시글에 댓글을 추가하고 수정된 게시글 전체를 반환합니다.
    pub async fn create_comment(
        &self,
        post_id: &str,
        request: CreateCommentRequest,
    ) -> Result<Post, AppError> {
        let mut post = self.load(post_id).await?;
        post.push_comment(Comment::new(request.comment, request.username));

        self.post_repo.save(post).await
    }

    /// 게시글의 댓글을 부분 수정하고 수정된 게시글 전체를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시글 또는 댓글이 존재하지 않음
    pub async fn update_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        patch: UpdateCommentRequest,
    ) -> Result<Post, AppError> {
        let mut post = self.load(post_id).await?;

        let comment = post
            .comment_mut(comment_id)
            .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))?;
        comment.apply(&patch);

        self.post_repo.save(post).await
    }

    /// 게시글에서 댓글을 제거하고 수정된 게시글 전체를 반환합니다.
    ///
    /// 존재하지 않는 댓글 ID는 무시되며, 게시글이 그대로 저장됩니다.
    pub async fn remove_comment(&self, post_id: &str, comment_id: &str) -> Result<Post, AppError> {
        let mut post = self.load(post_id).await?;
        post.remove_comment(comment_id);

        self.post_repo.save(post).await
    }

    async fn load(&self, id: &str) -> Result<Post, AppError> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))
    }
}

#[async_trait]
impl Service for PostService {
    fn name(&self) -> &str {
        "post_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn post_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(PostService {
        post_repo: ServiceLocator::get::<PostRepository>(),
    }))
}

inventory::submit! {
    ServiceRegistration {
        name: "post_service",
        constructor: post_service_constructor,
    }
}
