//! 인증 에러 분류
//!
//! 모든 거절 경로는 서로 구분되는 변형을 가지며, 클라이언트에는 대부분
//! 401로 합쳐져 보이지만 `error` 코드와 로그로 원인을 구분할 수 있습니다.
//!
//! | AuthError | HTTP Status | error 코드 |
//! |-----------|-------------|------------|
//! | `Token(InvalidToken)` | 401 | `invalid_token` |
//! | `Token(ExpiredToken)` | 401 | `expired_token` |
//! | `SessionNotFound` | 401 | `session_not_found` |
//! | `SessionBlocked` | 401 | `session_blocked` |
//! | `SessionUserMismatch` | 401 | `session_user_mismatch` |
//! | `SessionTokenMismatch` | 401 | `session_token_mismatch` |
//! | `SessionExpired` | 401 | `session_expired` |
//! | `InvalidCredentials` | 401 | `invalid_credentials` |
//! | `MissingHeader` | 401 | `missing_authorization_header` |
//! | `MalformedHeader` | 401 | `invalid_authorization_format` |
//! | `UnsupportedScheme` | 401 | `unsupported_authorization_scheme` |
//! | `Token(InvalidKeySize / SealFailed)` | 500 | `token_misconfigured` |
//! | `Store` | 500 | `session_store_error` |

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use crate::repositories::sessions::StoreError;
use crate::services::auth::token_codec::TokenError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("session not found")]
    SessionNotFound,

    #[error("blocked session")]
    SessionBlocked,

    #[error("incorrect session user")]
    SessionUserMismatch,

    #[error("mismatched session token")]
    SessionTokenMismatch,

    #[error("session has expired")]
    SessionExpired,

    #[error("invalid username/email or password")]
    InvalidCredentials,

    #[error("authorization header not provided")]
    MissingHeader,

    #[error("invalid authorization header format")]
    MalformedHeader,

    #[error("unsupported authorization type {0}")]
    UnsupportedScheme(String),

    #[error("session store failure: {0}")]
    Store(String),
}

impl AuthError {
    /// 응답 본문의 `error` 코드
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Token(TokenError::InvalidToken) => "invalid_token",
            AuthError::Token(TokenError::ExpiredToken) => "expired_token",
            AuthError::Token(_) => "token_misconfigured",
            AuthError::SessionNotFound => "session_not_found",
            AuthError::SessionBlocked => "session_blocked",
            AuthError::SessionUserMismatch => "session_user_mismatch",
            AuthError::SessionTokenMismatch => "session_token_mismatch",
            AuthError::SessionExpired => "session_expired",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MissingHeader => "missing_authorization_header",
            AuthError::MalformedHeader => "invalid_authorization_format",
            AuthError::UnsupportedScheme(_) => "unsupported_authorization_scheme",
            AuthError::Store(_) => "session_store_error",
        }
    }
}

/// 조회/차단/삭제 대상 세션이 없으면 `SessionNotFound`, 나머지는 저장소 장애
impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => AuthError::SessionNotFound,
            StoreError::Backend(message) => AuthError::Store(message),
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Token(TokenError::InvalidKeySize { .. })
            | AuthError::Token(TokenError::SealFailed(_))
            | AuthError::Token(TokenError::LifetimeOutOfRange(_))
            | AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 내부 장애의 상세 내용은 응답에 노출하지 않음
        let message = if self.status_code().is_server_error() {
            "internal authentication failure".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.code(),
            "message": message,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_unauthorized() {
        let errors = [
            AuthError::Token(TokenError::InvalidToken),
            AuthError::Token(TokenError::ExpiredToken),
            AuthError::SessionNotFound,
            AuthError::SessionBlocked,
            AuthError::SessionUserMismatch,
            AuthError::SessionTokenMismatch,
            AuthError::SessionExpired,
            AuthError::InvalidCredentials,
            AuthError::MissingHeader,
            AuthError::MalformedHeader,
            AuthError::UnsupportedScheme("basic".to_string()),
        ];

        for error in errors {
            assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED, "{:?}", error);
        }
    }

    #[test]
    fn test_internal_errors() {
        let key = AuthError::Token(TokenError::InvalidKeySize { expected: 32, actual: 12 });
        let store = AuthError::Store("mongo down".to_string());
        let lifetime = AuthError::Token(TokenError::LifetimeOutOfRange(chrono::Duration::MAX));

        assert_eq!(key.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(lifetime.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(lifetime.code(), "token_misconfigured");
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_codes_distinguish_expired_and_invalid() {
        assert_eq!(AuthError::from(TokenError::ExpiredToken).code(), "expired_token");
        assert_eq!(AuthError::from(TokenError::InvalidToken).code(), "invalid_token");
    }

    #[test]
    fn test_store_error_conversion() {
        assert_eq!(AuthError::from(StoreError::NotFound), AuthError::SessionNotFound);
        assert_eq!(
            AuthError::from(StoreError::Backend("timeout".to_string())),
            AuthError::Store("timeout".to_string())
        );
    }
}
