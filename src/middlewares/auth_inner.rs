//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::auth::token_service::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();

            match extract_token_from_request(&req, &token_service) {
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    // 사용자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(user);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
fn extract_token_from_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string())
        })?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use crate::domain::entities::users::user::User;
    use crate::middlewares::auth_middleware::AuthMiddleware;
    use crate::services::auth::token_service::TokenService;

    async fn protected() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
    }

    #[actix_web::test]
    async fn test_missing_token_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    async fn test_malformed_token_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer not-a-valid-token"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_passes_through() {
        let token = TokenService {}
            .issue_token(&User::new(1, "john", "changeme"))
            .unwrap();

        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
    }
}
