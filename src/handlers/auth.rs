//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 사용자 이름 기반 로그인과 JWT 토큰 기반의 상태 없는 인증을 구현합니다.
use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::domain::dto::auth::login_request::LoginRequest;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::auth::auth_service::AuthService;

/// 로그인 핸들러
///
/// 사용자 이름으로 로그인하고 JWT 액세스 토큰을 발급합니다.
/// 알 수 없는 사용자 이름은 401로 거부됩니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    let auth_service = AuthService::instance();

    log::info!("로그인 시도 - 사용자: {}", payload.username);
    let token_response = auth_service.sign_in(&payload.username).await?;

    Ok(HttpResponse::Ok().json(token_response))
}

/// 인증된 사용자 정보 조회 핸들러
///
/// 미들웨어가 검증한 토큰의 클레임을 그대로 반환합니다.
///
/// # Endpoint
/// `GET /auth/profile`
#[get("/profile")]
pub async fn profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "user_id": user.user_id,
        "username": user.username,
    })))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::*;
    use crate::services::auth::token_service::TokenService;

    #[actix_web::test]
    async fn test_login_known_user_returns_token() {
        let app =
            test::init_service(App::new().service(web::scope("/auth").service(login))).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "username": "john" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        let token = body["access_token"].as_str().unwrap();

        let claims = TokenService {}.verify_token(token).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "john");
    }

    #[actix_web::test]
    async fn test_login_is_case_sensitive() {
        let app =
            test::init_service(App::new().service(web::scope("/auth").service(login))).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "username": "JOHN" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    async fn test_login_unknown_user_rejected() {
        let app =
            test::init_service(App::new().service(web::scope("/auth").service(login))).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "username": "" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 401);
    }
}
