//! 인증 및 세션 서비스 모듈
//!
//! 봉인 토큰 발급/검증과 리프레시 세션의 수명 주기를 담당합니다.
//!
//! # 구성
//!
//! - [`token_codec`] - 페이로드를 봉인/개봉하는 `TokenCodec`과 그 구현
//! - [`auth_service`] - 로그인, 재발급, 차단, 로그아웃
//! - [`credential_service`] - 사용자명/이메일 + 비밀번호 확인
//! - [`errors`] - `AuthError`와 HTTP 응답 매핑
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, SealedTokenCodec};
//!
//! let codec = Arc::new(SealedTokenCodec::new(key, Arc::new(SystemClock))?);
//! let login = auth_service.login_with_password("robot", "password", client).await?;
//! let refreshed = auth_service.refresh(&login.refresh_token).await?;
//! ```

pub mod auth_service;
pub mod credential_service;
pub mod errors;
pub mod token_codec;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_service::AuthService;
pub use credential_service::{CredentialService, CredentialVerifier};
pub use errors::AuthError;
pub use token_codec::{SealedTokenCodec, TokenCodec, TokenError};
