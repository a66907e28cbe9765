//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 게시글, 인증 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Route Groups
//!
//! ## 인증 불필요 (Public 라우트)
//! - `POST /auth/login` - 사용자 이름 로그인
//! - `GET /posts` - 게시글 전체 목록
//! - `GET /posts/search` - 게시글 검색
//! - `GET /posts/{id}` - 게시글 단건 조회
//! - `GET /health` - 헬스체크
//!
//! ## 인증 필요 (Protected 라우트)
//! - `GET /auth/profile` - 토큰 클레임 조회
//! - `POST /posts`, `PATCH /posts/{id}`, `DELETE /posts/{id}`
//! - `POST /posts/{post_id}/comments` 및 댓글 수정/삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_post_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 로그인은 Public 접근이 가능하며, 프로필 조회는 유효한 토큰을
/// 요구합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username":"john"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::login)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::profile),
            ),
    );
}

/// 게시글 관련 라우트를 설정합니다
///
/// 조회 계열(GET)은 Public이고, 생성/수정/삭제는 인증 미들웨어가
/// 적용된 하위 스코프에 등록됩니다. 경로 접두사가 동일하므로
/// Public 핸들러를 먼저 등록해야 GET 요청이 보호 스코프로
/// 넘어가지 않습니다.
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            // Public routes
            .service(handlers::posts::find_all_posts)
            .service(handlers::posts::search_posts)
            .service(handlers::posts::find_one_post)
            // Protected routes
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::posts::create_post)
                    .service(handlers::posts::update_post)
                    .service(handlers::posts::remove_post)
                    .service(handlers::posts::create_comment)
                    .service(handlers::posts::update_comment)
                    .service(handlers::posts::remove_comment),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "webboard_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT (HS256)"
        }
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;
    use crate::domain::entities::users::user::User;
    use crate::services::auth::token_service::TokenService;

    #[actix_web::test]
    async fn test_health_check_is_public() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
    }

    #[actix_web::test]
    async fn test_post_mutations_require_token() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(serde_json::json!({
                "topic": "t", "content": "c", "community": "History", "username": "john"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    async fn test_profile_returns_token_claims() {
        let token = TokenService {}
            .issue_token(&User::new(2, "maria", "guess"))
            .unwrap();

        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/auth/profile")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["user_id"], 2);
        assert_eq!(body["username"], "maria");
    }
}
