//! # Domain Models Module
//!
//! 영속성과 무관한 도메인 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - MongoDB 문서와 1:1로 대응하는 저장용 구조체
//! - 예시: `SessionDocument`, `User`
//!
//! ### Models (`./`)
//! - 서비스 계층에서 다루는 불변 값 객체
//! - 예시: `Payload`, `Session`, `AuthenticatedUser`
//!
//! ```text
//! Domain Layer
//! ├── entities/   ← MongoDB 문서
//! ├── models/     ← 값 객체 (이 모듈)
//! └── dto/        ← HTTP 요청/응답
//! ```

pub mod auth;
pub mod session;
pub mod token;

pub use auth::*;
pub use session::*;
pub use token::*;
