//! 인증 컨텍스트 모델
//!
//! 미들웨어가 요청 확장(extensions)에 넣는 인증 정보와
//! 로그인 시 세션에 기록되는 클라이언트 메타데이터를 정의합니다.

pub mod authenticated_user;
pub mod client_metadata;

pub use authenticated_user::*;
pub use client_metadata::*;
