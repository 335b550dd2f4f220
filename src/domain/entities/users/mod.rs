//! Users Entity Module
//!
//! 로그인 자격 증명 확인에 필요한 `users` 컬렉션 문서를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user: Option<User> = user_repo.find_by_username("robot").await?;
//! let subject = user.and_then(|u| u.id_string());
//! ```

pub mod user;

pub use user::*;
