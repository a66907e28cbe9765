//! Posts HTTP Handlers
//!
//! 게시글과 내장 댓글에 대한 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - **공개 조회**: `GET /posts`, `GET /posts/search`, `GET /posts/{id}`
//! - **보호된 변경**: `POST /posts`, `PATCH /posts/{id}`, `DELETE /posts/{id}`
//!   및 댓글 하위 경로 (인증 미들웨어 필요)
use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::posts::comment_request::{CreateCommentRequest, UpdateCommentRequest};
use crate::domain::dto::posts::post_request::{CreatePostRequest, SearchQuery, UpdatePostRequest};
use crate::errors::errors::AppError;
use crate::services::posts::post_service::PostService;

/// 게시글 전체 목록 조회 핸들러
///
/// 최근 수정된 게시글이 먼저 오도록 정렬하여 반환합니다.
///
/// # Endpoint
/// `GET /posts`
#[get("")]
pub async fn find_all_posts() -> Result<HttpResponse, AppError> {
    let post_service = PostService::instance();
    let posts = post_service.find_all().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// 게시글 검색 핸들러
///
/// 주제, 내용, 커뮤니티, 작성자 필드를 대상으로 대소문자 무시
/// 부분 일치 검색을 수행합니다.
///
/// # Endpoint
/// `GET /posts/search?q={query}`
#[get("/search")]
pub async fn search_posts(query: web::Query<SearchQuery>) -> Result<HttpResponse, AppError> {
    let post_service = PostService::instance();
    let posts = post_service.search(&query.q).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// 게시글 단건 조회 핸들러
///
/// # Endpoint
/// `GET /posts/{id}`
#[get("/{id}")]
pub async fn find_one_post(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let post_service = PostService::instance();
    let post = post_service.find_one(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 게시글 생성 핸들러
///
/// # Endpoint
/// `POST /posts` (인증 필요)
#[post("")]
pub async fn create_post(payload: web::Json<CreatePostRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post_service = PostService::instance();
    let post = post_service.create(payload.into_inner()).await?;

    log::info!("게시글 생성 - 작성자: {}", post.username);
    Ok(HttpResponse::Created().json(post))
}

/// 게시글 수정 핸들러
///
/// 요청에 포함된 필드만 변경하고 수정된 문서를 반환합니다.
///
/// # Endpoint
/// `PATCH /posts/{id}` (인증 필요)
#[patch("/{id}")]
pub async fn update_post(
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post_service = PostService::instance();
    let post = post_service
        .update(&path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 게시글 삭제 핸들러
///
/// 삭제된 문서를 응답으로 반환합니다.
///
/// # Endpoint
/// `DELETE /posts/{id}` (인증 필요)
#[delete("/{id}")]
pub async fn remove_post(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let post_service = PostService::instance();
    let post = post_service.remove(&path.into_inner()).await?;

    log::info!("게시글 삭제 - ID: {}", post.id_string().unwrap_or_default());
    Ok(HttpResponse::Ok().json(post))
}

/// 댓글 생성 핸들러
///
/// # Endpoint
/// `POST /posts/{post_id}/comments` (인증 필요)
#[post("/{post_id}/comments")]
pub async fn create_comment(
    path: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post_service = PostService::instance();
    let post = post_service
        .create_comment(&path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// 댓글 수정 핸들러
///
/// # Endpoint
/// `PATCH /posts/{post_id}/comments/{comment_id}` (인증 필요)
#[patch("/{post_id}/comments/{comment_id}")]
pub async fn update_comment(
    path: web::Path<(String, String)>,
    payload: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();

    let post_service = PostService::instance();
    let post = post_service
        .update_comment(&post_id, &comment_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 댓글 삭제 핸들러
///
/// 존재하지 않는 댓글 ID는 무시되며, 게시글 전체가 그대로 반환됩니다.
///
/// # Endpoint
/// `DELETE /posts/{post_id}/comments/{comment_id}` (인증 필요)
#[delete("/{post_id}/comments/{comment_id}")]
pub async fn remove_comment(path: web::Path<(String, String)>) -> Result<HttpResponse, AppError> {
    let (post_id, comment_id) = path.into_inner();

    let post_service = PostService::instance();
    let post = post_service.remove_comment(&post_id, &comment_id).await?;

    Ok(HttpResponse::Ok().json(post))
}
