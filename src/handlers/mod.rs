//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문 검증과 응답 변환만 담당하고, 인증 로직은
//! `web::Data<AuthService>`로 주입받은 서비스에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware (보호된 라우트만)
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AuthService / TokenCodec                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   SessionStore / UserRepository                ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로그인 (`POST /auth/login`), 로그아웃 (`POST /auth/logout`)
//! - **`token_handlers`**: 토큰 갱신 (`POST /token/refresh`), 토큰 정보 (`GET /token/data`)
//! - **`sessions`**: 세션 차단 (`POST /sessions/{id}/block`)
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다. 서비스의
//! `AuthError`는 `?`로 `AppError::Auth`에 담겨 그대로 401/500 응답이 됩니다.
//!
//! ```rust,ignore
//! #[post("/refresh")]
//! pub async fn refresh_token(
//!     auth_service: web::Data<AuthService>,
//!     payload: web::Json<RefreshTokenRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let response = auth_service.refresh(&payload.refresh_token).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```

pub mod auth;
pub mod sessions;
pub mod token_handlers;
