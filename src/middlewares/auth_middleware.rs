//! 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 인증 헤더의 토큰을 검증하고, 성공하면
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 확장에 넣어 핸들러가 추출자로 받을 수 있게 합니다.
//!
//! 세션 저장소는 조회하지 않습니다. 세션을 차단해도 이미 발급된 액세스 토큰은
//! 만료될 때까지 이 미들웨어를 통과합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::AuthHeaderConfig;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenCodec;

/// 토큰 인증 미들웨어
pub struct AuthMiddleware {
    codec: Arc<dyn TokenCodec>,
    config: Rc<AuthHeaderConfig>,
}

impl AuthMiddleware {
    /// # Examples
    ///
    /// ```rust,ignore
    /// web::scope("/api/v1/token")
    ///     .wrap(AuthMiddleware::new(codec.clone(), AuthHeaderConfig::default()))
    ///     .service(token_data)
    /// ```
    pub fn new(codec: Arc<dyn TokenCodec>, config: AuthHeaderConfig) -> Self {
        Self {
            codec,
            config: Rc::new(config),
        }
    }

    /// 기본 헤더 설정 (`Authorization: Bearer <token>`)
    pub fn bearer(codec: Arc<dyn TokenCodec>) -> Self {
        Self::new(codec, AuthHeaderConfig::default())
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            codec: self.codec.clone(),
            config: self.config.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, web, App, HttpResponse};
    use chrono::{Duration, Utc};
    use crate::core::clock::{ManualClock, SystemClock};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::middlewares::auth_inner::authorize;
    use crate::services::auth::{AuthError, SealedTokenCodec, TokenError};

    const KEY: &[u8; 32] = b"fedcba9876543210fedcba9876543210";

    fn codec() -> Arc<SealedTokenCodec> {
        Arc::new(SealedTokenCodec::new(KEY, Arc::new(SystemClock)).unwrap())
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    #[test]
    fn test_authorize_state_machine() {
        let codec = codec();
        let (token, _) = codec.create("user-1", Duration::minutes(5)).unwrap();

        assert_eq!(authorize(None, "bearer", codec.as_ref()), Err(AuthError::MissingHeader));
        assert_eq!(authorize(Some(""), "bearer", codec.as_ref()), Err(AuthError::MissingHeader));
        assert_eq!(authorize(Some("   "), "bearer", codec.as_ref()), Err(AuthError::MissingHeader));
        assert_eq!(authorize(Some("Bearer"), "bearer", codec.as_ref()), Err(AuthError::MalformedHeader));
        assert_eq!(
            authorize(Some(token.as_str()), "bearer", codec.as_ref()),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(
            authorize(Some(&format!("Basic {}", token)), "bearer", codec.as_ref()),
            Err(AuthError::UnsupportedScheme("basic".to_string()))
        );
        assert_eq!(
            authorize(Some("Bearer v1.local.forged"), "bearer", codec.as_ref()),
            Err(AuthError::Token(TokenError::InvalidToken))
        );

        let payload = authorize(Some(&format!("BEARER   {}", token)), "bearer", codec.as_ref()).unwrap();
        assert_eq!(payload.user_id, "user-1");
    }

    #[test]
    fn test_authorize_reports_expired_token() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let codec = SealedTokenCodec::new(KEY, clock.clone()).unwrap();
        let (token, _) = codec.create("user-1", Duration::minutes(15)).unwrap();

        clock.advance(Duration::minutes(16));

        assert_eq!(
            authorize(Some(&format!("Bearer {}", token)), "bearer", &codec),
            Err(AuthError::Token(TokenError::ExpiredToken))
        );
    }

    #[actix_web::test]
    async fn test_bearer_token_reaches_handler() {
        let codec = codec();
        let (token, _) = codec.create("user-1", Duration::minutes(5)).unwrap();

        let app = actix_test::init_service(
            App::new()
                .wrap(AuthMiddleware::bearer(codec.clone()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = actix_test::read_body(resp).await;
        assert_eq!(body, "user-1");
    }

    #[actix_web::test]
    async fn test_rejections_are_unauthorized() {
        let codec = codec();
        let (token, _) = codec.create("user-1", Duration::minutes(5)).unwrap();

        let app = actix_test::init_service(
            App::new()
                .wrap(AuthMiddleware::bearer(codec.clone()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let cases = [
            (None, "missing_authorization_header"),
            (Some(String::new()), "missing_authorization_header"),
            (Some(format!("Basic {}", token)), "unsupported_authorization_scheme"),
            (Some("Bearer".to_string()), "invalid_authorization_format"),
            (Some("Bearer not-a-token".to_string()), "invalid_token"),
        ];

        for (header, code) in cases {
            let mut req = actix_test::TestRequest::get().uri("/whoami");
            if let Some(value) = header {
                req = req.insert_header(("Authorization", value));
            }

            let resp = actix_test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

            let body: serde_json::Value = actix_test::read_body_json(resp).await;
            assert_eq!(body["error"], code);
        }
    }

    #[actix_web::test]
    async fn test_custom_header_config() {
        let codec = codec();
        let (token, _) = codec.create("user-2", Duration::minutes(5)).unwrap();
        let config = AuthHeaderConfig {
            header_name: "x-tinygram-auth".to_string(),
            scheme: "token".to_string(),
        };

        let app = actix_test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(codec.clone(), config))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("X-Tinygram-Auth", format!("Token {}", token)))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = actix_test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
