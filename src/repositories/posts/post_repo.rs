//! # 게시글 리포지토리 구현
//!
//! 게시글 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `posts` 컬렉션 하나에 게시글과 내장 댓글을 함께 저장합니다.
//!
//! ## 저장 모델
//!
//! - **컬렉션명**: `posts`
//! - **인덱스**: updated_at(desc) - 목록/검색 정렬 최적화
//! - **댓글 변경**: 도큐먼트 전체를 읽어 메모리에서 수정한 뒤 전체 저장
//!   (단일 도큐먼트 저장의 원자성만 보장, 동시 수정 시 나중 저장이 이김)
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다.
//!
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
//! - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::posts::post::Post;
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "posts";

/// 게시글 데이터 액세스 리포지토리
///
/// `posts` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
pub struct PostRepository {
    /// MongoDB 데이터베이스 연결 (ServiceLocator에서 주입)
    db: Arc<Database>,
}

impl PostRepository {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn collection(&self) -> Collection<Post> {
        self.db.get_database().collection::<Post>(COLLECTION_NAME)
    }

    /// 새 게시글 저장
    ///
    /// MongoDB가 할당한 ObjectId를 채워 반환합니다.
    pub async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self
            .collection()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 도큐먼트의 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(post)
    }

    /// 모든 게시글 조회 (updated_at 내림차순)
    pub async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "updated_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 게시글 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Post))` - 게시글을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 게시글이 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시글 부분 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 변경하며, `updated_at`을 함께 갱신합니다.
    /// `ReturnDocument::After` 옵션으로 업데이트 이후의 도큐먼트를 반환합니다.
    pub async fn update(
        &self,
        id: &str,
        mut update_doc: Document,
    ) -> Result<Option<Post>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시글 삭제
    ///
    /// 삭제된 도큐먼트를 반환하며, 일치하는 도큐먼트가 없으면 `None`입니다.
    pub async fn delete(&self, id: &str) -> Result<Option<Post>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 메모리에서 수정된 게시글을 도큐먼트 전체 교체로 저장합니다.
    ///
    /// 저장 시점에 `updated_at`을 갱신하므로 댓글 변경도 게시글을
    /// 목록 맨 앞으로 올립니다.
    pub async fn save(&self, mut post: Post) -> Result<Post, AppError> {
        let object_id = post.id.ok_or_else(|| {
            AppError::InternalError("저장할 게시글에 ID가 없습니다".to_string())
        })?;

        post.updated_at = DateTime::now();

        self.collection()
            .replace_one(doc! { "_id": object_id }, &post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    /// 자유 텍스트 검색 (updated_at 내림차순)
    ///
    /// username/topic/content/community 네 필드에 대한
    /// 대소문자 무시 부분 일치(OR)입니다.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection()
            .find(Self::search_filter(query))
            .sort(doc! { "updated_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 검색 필터 도큐먼트를 생성합니다.
    ///
    /// 웹 클라이언트는 커뮤니티 탭이 선택되지 않은 상태에서 탭 라벨
    /// "Community"를 검색어로 그대로 보내므로, 이 literal은 빈 패턴
    /// (전체 일치)으로 치환합니다.
    pub fn search_filter(query: &str) -> Document {
        let pattern = if query == "Community" { "" } else { query };

        doc! {
            "$or": [
                { "username":  { "$regex": pattern, "$options": "i" } },
                { "topic":     { "$regex": pattern, "$options": "i" } },
                { "content":   { "$regex": pattern, "$options": "i" } },
                { "community": { "$regex": pattern, "$options": "i" } },
            ]
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 목록/검색 정렬을
    /// 최적화합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let updated_at_index = IndexModel::builder()
            .keys(doc! { "updated_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("updated_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([updated_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }
}

#[async_trait]
impl Repository for PostRepository {
    fn name(&self) -> &str {
        "post_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

fn post_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(PostRepository {
        db: ServiceLocator::get::<Database>(),
    }))
}

inventory::submit! {
    RepositoryRegistration {
        name: "post_repository",
        constructor: post_repository_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter_builds_case_insensitive_or() {
        let filter = PostRepository::search_filter("rust");
        let branches = filter.get_array("$or").unwrap();

        assert_eq!(branches.len(), 4);

        let first = branches[0].as_document().unwrap();
        let regex = first.get_document("username").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), "rust");
        assert_eq!(regex.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_search_filter_community_literal_matches_everything() {
        let filter = PostRepository::search_filter("Community");
        let branches = filter.get_array("$or").unwrap();

        for branch in branches {
            let field_doc = branch.as_document().unwrap();
            let (_, condition) = field_doc.iter().next().unwrap();
            let regex = condition.as_document().unwrap();
            // 빈 패턴은 모든 도큐먼트와 일치
            assert_eq!(regex.get_str("$regex").unwrap(), "");
        }
    }

    #[test]
    fn test_search_filter_is_case_sensitive_about_the_literal() {
        let filter = PostRepository::search_filter("community");
        let branches = filter.get_array("$or").unwrap();
        let first = branches[0].as_document().unwrap();
        let regex = first.get_document("username").unwrap();

        assert_eq!(regex.get_str("$regex").unwrap(), "community");
    }

    #[test]
    fn test_parse_object_id_rejects_invalid_input() {
        assert!(PostRepository::parse_object_id("not-an-id").is_err());
        assert!(PostRepository::parse_object_id("507f1f77bcf86cd799439011").is_ok());
    }
}
