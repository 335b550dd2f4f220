//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 토큰과 세션을 다루는 인증 서비스를 제공합니다. 저장소 의존성은
//! 트레이트 객체로 주입받아 테스트에서 메모리 구현으로 대체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, CredentialService};
//!
//! let credentials = CredentialService::instance();
//! ```

pub mod auth;
