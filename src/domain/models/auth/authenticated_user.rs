use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;
use crate::domain::models::token::Payload;

/// 인증된 요청의 주체
///
/// `AuthMiddleware`가 토큰 검증에 성공하면 요청 확장에 저장하며,
/// 핸들러는 추출자(extractor)로 받아 사용합니다.
///
/// ```rust,ignore
/// #[get("/data")]
/// async fn token_data(user: AuthenticatedUser) -> HttpResponse {
///     HttpResponse::Ok().json(user.payload)
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// 토큰 주체 (사용자 ID)
    pub user_id: String,

    /// 검증된 액세스 토큰 페이로드 전체
    pub payload: Payload,
}

impl AuthenticatedUser {
    pub fn from_payload(payload: Payload) -> Self {
        Self {
            user_id: payload.user_id.clone(),
            payload,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
