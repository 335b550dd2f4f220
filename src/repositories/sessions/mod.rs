//! 세션 저장소
//!
//! - [`session_store`] - `SessionStore` 인터페이스와 `StoreError`
//! - [`session_repo`] - MongoDB + Redis 구현 (운영)
//! - [`memory`] - 프로세스 메모리 구현 (테스트/로컬 개발)

pub mod memory;
pub mod session_repo;
pub mod session_store;

pub use memory::InMemorySessionStore;
pub use session_repo::SessionRepository;
pub use session_store::{SessionStore, StoreError};
