use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::tokens::RefreshTokenRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::AuthService;

/// 토큰 갱신 API 핸들러
///
/// 리프레시 토큰과 그 세션을 확인하고 새 액세스 토큰만 발급합니다.
/// 리프레시 토큰은 회전하지 않으므로 클라이언트는 기존 값을 계속 사용합니다.
///
/// # Endpoint
/// `POST /api/v1/token/refresh`
#[post("/refresh")]
pub async fn refresh_token(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 검증된 액세스 토큰 페이로드 조회 (보호된 라우트)
///
/// # Endpoint
/// `GET /api/v1/token/data`
pub async fn token_data(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user.payload)
}
