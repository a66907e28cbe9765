//! 웹보드 백엔드
//!
//! Rust 기반의 게시판 백엔드 서비스입니다.
//! JWT 토큰 기반 인증, 게시글/내장 댓글 CRUD,
//! 그리고 레지스트리 기반 싱글톤 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **JWT 인증**: 액세스 토큰 기반 상태 없는 인증
//! - **게시글 관리**: 작성, 조회, 수정, 삭제, 검색
//! - **내장 댓글**: 게시글 문서에 내장된 댓글 CRUD
//! - **싱글톤 DI**: inventory 레지스트리 기반 자동 의존성 주입
//! - **MongoDB**: 게시글 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use webboard_backend::services::auth::AuthService;
//! use webboard_backend::services::posts::PostService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let auth_service = AuthService::instance();
//! let post_service = PostService::instance();
//!
//! // 로그인 및 게시글 조회
//! let token = auth_service.sign_in("john").await?;
//! let posts = post_service.find_all().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
