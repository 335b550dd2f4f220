//! # Application Error Handling System
//!
//! 인증 서비스 전역에서 사용하는 에러 타입입니다.
//! 각 변형은 HTTP 상태 코드와 직접 매핑되며, Actix-Web의 `ResponseError`를
//! 구현하여 핸들러에서 `?` 연산자만으로 일관된 JSON 에러 응답을 돌려줍니다.
//!
//! 토큰/세션 관련 실패는 [`AuthError`]가 별도로 분류하며,
//! `AppError::Auth`로 감싸져도 원래의 401/500 응답 형식을 그대로 유지합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 검증 실패 |
//! | `Auth` | 401 / 500 | 토큰 및 세션 검증 실패 ([`AuthError`] 참조) |
//! | `ConfigError` | 500 Internal Server Error | 환경 설정 누락/오류 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn login(body: web::Json<LoginRequest>) -> AppResult<HttpResponse> {
//!     body.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let outcome = auth_service.login_with_password(..).await?; // AuthError -> AppError::Auth
//!     Ok(HttpResponse::Ok().json(outcome))
//! }
//! ```

use thiserror::Error;
use crate::services::auth::AuthError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 토큰/세션 검증 실패
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 환경 설정 누락 또는 형식 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(inner) => inner.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        // 인증 에러는 자체 응답 형식(error 코드 + message)을 사용
        if let AppError::Auth(inner) = self {
            return inner.error_response();
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 애플리케이션 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 설명을 덧붙여 `AppError::InternalError`로 변환하는 헬퍼
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
