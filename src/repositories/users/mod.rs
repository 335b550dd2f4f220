//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)는 로그인 자격 증명 확인을 위한
//! 읽기 전용 조회를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("robot@tinygram.dev").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
