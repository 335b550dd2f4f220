//! 세션 저장소 인터페이스
//!
//! 리프레시 토큰 하나당 세션 레코드 하나를 보관합니다. 단일 키에 대한
//! read-after-write 일관성만 요구하며, 모든 쓰기는 단일 문서 연산입니다.

use async_trait::async_trait;
use thiserror::Error;
use crate::domain::models::session::Session;
use crate::domain::models::token::TokenId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("session not found")]
    NotFound,

    /// 저장소 백엔드 장애 (MongoDB, Redis 등)
    #[error("session store failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 새 세션을 저장하고 ID를 반환합니다.
    async fn create(&self, session: &Session) -> Result<TokenId, StoreError>;

    /// # Errors
    ///
    /// * `StoreError::NotFound` - 로그아웃 또는 GC로 삭제된 경우
    async fn get(&self, id: &TokenId) -> Result<Session, StoreError>;

    /// `is_blocked`를 true로 설정하고 갱신된 세션을 반환합니다. 이미 차단된 세션도 성공합니다.
    async fn set_blocked(&self, id: &TokenId) -> Result<Session, StoreError>;

    async fn delete(&self, id: &TokenId) -> Result<(), StoreError>;
}
