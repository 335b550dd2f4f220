//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 `#[repository]` 매크로로 선언되는 싱글톤이며,
//! `ServiceLocator::initialize_all` 시점에 생성됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::sessions::{SessionRepository, SessionStore};
//!
//! let sessions = SessionRepository::instance();
//! let session = sessions.get(&session_id).await?;
//! ```

pub mod sessions;
pub mod users;
