//! Session HTTP Handlers
//!
//! 로그인한 사용자가 자신의 세션(다른 기기의 로그인 등)을 차단합니다.
//! 차단된 세션의 리프레시 토큰은 더 이상 액세스 토큰을 재발급받을 수 없습니다.
use actix_web::{post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::auth::SessionResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenId;
use crate::services::auth::AuthService;

/// 세션 차단 핸들러 (보호된 라우트)
///
/// # Endpoint
/// `POST /api/v1/sessions/{session_id}/block`
///
/// # Errors
///
/// * 400 - 세션 ID가 UUID 형식이 아닌 경우
/// * 401 `session_not_found` - 세션이 없는 경우
/// * 401 `session_user_mismatch` - 다른 사용자의 세션
#[post("/{session_id}/block")]
pub async fn block_session(
    user: AuthenticatedUser,
    auth_service: web::Data<AuthService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session_id: TokenId = path
        .parse()
        .map_err(|_| AppError::ValidationError(format!("잘못된 세션 ID: {}", path)))?;

    let session = auth_service.block_owned(&session_id, &user.user_id).await?;

    Ok(HttpResponse::Ok().json(SessionResponse::from(session)))
}
