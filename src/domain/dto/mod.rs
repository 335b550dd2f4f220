//! # Data Transfer Objects
//!
//! HTTP 요청 본문과 응답 본문을 정의합니다.
//! 요청 DTO는 `validator`로 검증하며, 검증 실패는 400으로 응답합니다.
//!
//! - [`auth`] - 로그인/로그아웃, 세션 요약
//! - [`tokens`] - 토큰 갱신, 공통 응답 래퍼

pub mod auth;
pub mod tokens;

pub use auth::*;
pub use tokens::*;
