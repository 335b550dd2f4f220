//! # 세션 리포지토리 구현
//!
//! MongoDB `sessions` 컬렉션을 주 저장소로, Redis를 읽기 캐시로 사용하는
//! [`SessionStore`] 구현체입니다.
//!
//! ## 캐시 규칙
//!
//! - 키: `session_repository:{id}`, TTL은 설정값과 세션 잔여 수명 중 작은 값
//! - 조회 시 캐시 미스이면 MongoDB에서 읽은 뒤 `SET NX`로만 채움
//! - 차단은 차단된 세션으로 캐시를 덮어쓰고, 삭제는 삭제 표식을 덮어씀
//! - 덮어쓰기에 실패하면 키를 삭제하여 다음 조회가 MongoDB를 읽게 함
//!
//! 조회와 차단/삭제가 경합해도 오래된 "차단 안 됨" 값이 캐시에 다시
//! 들어가지 않도록 채우기는 NX, 무효화는 덮어쓰기로 구분합니다.
//! 덮어쓰기와 삭제가 모두 실패하면 차단/삭제도 실패로 반환합니다.
//!
//! ## 인덱스
//!
//! - `expires_at` TTL 인덱스 (만료 즉시 MongoDB가 문서 제거)
//! - `user_id` 인덱스

use std::future::Future;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    IndexModel,
};
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::SessionCacheConfig,
    core::errors::{AppError, ErrorContext},
    core::registry::Repository,
    db::Database,
    domain::entities::sessions::SessionDocument,
    domain::models::session::Session,
    domain::models::token::TokenId,
};
use super::session_store::{SessionStore, StoreError};

/// Redis에 저장되는 세션 캐시 항목
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "state", content = "session", rename_all = "snake_case")]
enum CachedSession {
    Live(Session),
    Deleted,
}

/// MongoDB + Redis 세션 저장소
///
/// `Database`와 `RedisClient`가 `ServiceLocator`에 먼저 등록되어 있어야 합니다.
///
/// ```rust,ignore
/// let sessions = SessionRepository::instance();
/// sessions.create_indexes().await?;
///
/// let session = sessions.get(&token_id).await?;
/// ```
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl SessionRepository {
    /// 캐시 TTL (초). 잔여 수명이 없으면 `None`
    fn cache_ttl(session: &Session) -> Option<u64> {
        let remaining = (session.expires_at - Utc::now()).num_seconds();
        if remaining <= 0 {
            return None;
        }

        Some((remaining as u64).min(SessionCacheConfig::ttl_seconds()))
    }

    async fn fill_cache(&self, session: &Session) {
        let Some(ttl) = Self::cache_ttl(session) else {
            return;
        };

        let key = self.cache_key(&session.id.to_string());
        if let Err(e) = self.redis.set_nx_with_expiry(&key, &CachedSession::Live(session.clone()), ttl).await {
            log::warn!("세션 캐시 저장 실패 - key: {}, 에러: {}", key, e);
        }
    }

    async fn overwrite_cache(&self, id: &TokenId, entry: &CachedSession) -> Result<(), StoreError> {
        let id = id.to_string();
        let key = self.cache_key(&id);

        let overwrite = async {
            self.redis
                .set_with_expiry(&key, entry, SessionCacheConfig::ttl_seconds())
                .await
                .map_err(|e| e.to_string())
        };
        let evict = async {
            self.invalidate_cache(&id).await.map_err(|e| e.to_string())
        };

        overwrite_or_evict(&key, overwrite, evict).await
    }

    /// 세션 컬렉션 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let expires_index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(IndexOptions::builder()
                .expire_after(std::time::Duration::from_secs(0))
                .name("expires_at_ttl".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection::<SessionDocument>()
            .create_indexes([expires_index, user_index])
            .await
            .context("sessions 인덱스 생성 실패")?;

        log::info!("✅ {} 인덱스 생성 완료", self.collection_name());
        Ok(())
    }
}

/// 캐시 항목을 덮어쓰고, 실패하면 키 삭제로 대체합니다.
///
/// `evict`는 덮어쓰기가 실패한 경우에만 실행됩니다.
///
/// # Errors
///
/// * `StoreError::Backend` - 덮어쓰기와 삭제가 모두 실패한 경우
async fn overwrite_or_evict<W, E>(key: &str, overwrite: W, evict: E) -> Result<(), StoreError>
where
    W: Future<Output = Result<(), String>>,
    E: Future<Output = Result<(), String>>,
{
    let Err(overwrite_error) = overwrite.await else {
        return Ok(());
    };
    log::warn!("세션 캐시 덮어쓰기 실패, 키 삭제 시도 - key: {}, 에러: {}", key, overwrite_error);

    evict.await.map_err(|e| {
        log::error!("세션 캐시 무효화 실패 - key: {}, 에러: {}", key, e);
        StoreError::Backend(format!("cache invalidation failed: {}", e))
    })
}

fn backend(e: mongodb::error::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn create(&self, session: &Session) -> Result<TokenId, StoreError> {
        self.collection::<SessionDocument>()
            .insert_one(SessionDocument::from(session))
            .await
            .map_err(backend)?;

        Ok(session.id)
    }

    async fn get(&self, id: &TokenId) -> Result<Session, StoreError> {
        let key = self.cache_key(&id.to_string());

        match self.redis.get::<CachedSession>(&key).await {
            Ok(Some(CachedSession::Live(session))) => return Ok(session),
            Ok(Some(CachedSession::Deleted)) => return Err(StoreError::NotFound),
            Ok(None) => {}
            Err(e) => log::warn!("세션 캐시 조회 실패, MongoDB로 대체 - key: {}, 에러: {}", key, e),
        }

        let document = self.collection::<SessionDocument>()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(backend)?
            .ok_or(StoreError::NotFound)?;

        let session = Session::try_from(document).map_err(StoreError::Backend)?;
        self.fill_cache(&session).await;

        Ok(session)
    }

    async fn set_blocked(&self, id: &TokenId) -> Result<Session, StoreError> {
        let document = self.collection::<SessionDocument>()
            .find_one_and_update(
                doc! { "_id": id.to_string() },
                doc! { "$set": { "is_blocked": true } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(backend)?
            .ok_or(StoreError::NotFound)?;

        let session = Session::try_from(document).map_err(StoreError::Backend)?;
        self.overwrite_cache(id, &CachedSession::Live(session.clone())).await?;

        Ok(session)
    }

    async fn delete(&self, id: &TokenId) -> Result<(), StoreError> {
        let result = self.collection::<SessionDocument>()
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(backend)?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }

        self.overwrite_cache(id, &CachedSession::Deleted).await
    }
}
