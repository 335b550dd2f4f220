//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - 설정된 헤더/스킴에서 토큰 추출 (기본 `Authorization: Bearer`)
//! - `TokenCodec`으로 토큰 검증
//! - 검증된 주체를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/token")
//!             .wrap(AuthMiddleware::bearer(codec.clone())) // 보호된 라우트에만 적용
//!             .service(token_data)
//!     )
//!     .service(health_check)
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use auth_inner::authorize;
