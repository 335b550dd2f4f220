//! # Domain Layer
//!
//! - [`entities`] - MongoDB 문서
//! - [`models`] - 토큰 페이로드, 세션, 인증 컨텍스트 등 값 객체
//! - [`dto`] - HTTP 요청/응답

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
