//! 프로세스 메모리 기반 세션 저장소
//!
//! 테스트와 로컬 개발용입니다. 여러 인스턴스 간에 세션이 공유되지 않습니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domain::models::session::Session;
use crate::domain::models::token::TokenId;
use crate::repositories::sessions::session_store::{SessionStore, StoreError};

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<TokenId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 만료된 세션을 제거하고 제거한 개수를 반환합니다.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut sessions = self.write()?;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));

        Ok(before - sessions.len())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// 저장소 손상을 흉내내기 위해 세션을 그대로 덮어씁니다.
    #[cfg(test)]
    pub fn overwrite(&self, session: Session) {
        self.sessions.write().unwrap().insert(session.id, session);
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<TokenId, Session>>, StoreError> {
        self.sessions
            .read()
            .map_err(|_| StoreError::Backend("session map lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<TokenId, Session>>, StoreError> {
        self.sessions
            .write()
            .map_err(|_| StoreError::Backend("session map lock poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: &Session) -> Result<TokenId, StoreError> {
        let mut sessions = self.write()?;

        if sessions.contains_key(&session.id) {
            return Err(StoreError::Backend(format!("duplicate session id {}", session.id)));
        }

        sessions.insert(session.id, session.clone());
        Ok(session.id)
    }

    async fn get(&self, id: &TokenId) -> Result<Session, StoreError> {
        self.read()?.get(id).cloned().ok_or(StoreError::NotFound)
    }

    async fn set_blocked(&self, id: &TokenId) -> Result<Session, StoreError> {
        let mut sessions = self.write()?;
        let session = sessions.get_mut(id).ok_or(StoreError::NotFound)?;
        session.is_blocked = true;

        Ok(session.clone())
    }

    async fn delete(&self, id: &TokenId) -> Result<(), StoreError> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::domain::models::auth::ClientMetadata;
    use crate::domain::models::token::Payload;

    fn session(user_id: &str, ttl: Duration, now: DateTime<Utc>) -> Session {
        let payload = Payload::new(user_id, ttl, now).unwrap();
        Session::for_refresh_token(format!("token-{}", payload.id), &payload, ClientMetadata::default())
    }

    #[actix_web::test]
    async fn test_create_get_block_delete() {
        let store = InMemorySessionStore::new();
        let s = session("user-1", Duration::days(1), Utc::now());

        let id = store.create(&s).await.unwrap();
        assert_eq!(id, s.id);
        assert_eq!(store.get(&id).await.unwrap(), s);

        let blocked = store.set_blocked(&id).await.unwrap();
        assert!(blocked.is_blocked);
        assert!(store.get(&id).await.unwrap().is_blocked);

        // 재차단도 성공
        assert!(store.set_blocked(&id).await.unwrap().is_blocked);

        store.delete(&id).await.unwrap();
        assert_eq!(store.get(&id).await, Err(StoreError::NotFound));
        assert_eq!(store.delete(&id).await, Err(StoreError::NotFound));
        assert_eq!(store.set_blocked(&id).await, Err(StoreError::NotFound));
    }

    #[actix_web::test]
    async fn test_duplicate_id_is_rejected() {
        let store = InMemorySessionStore::new();
        let s = session("user-1", Duration::days(1), Utc::now());

        store.create(&s).await.unwrap();

        assert!(matches!(store.create(&s).await, Err(StoreError::Backend(_))));
    }

    #[actix_web::test]
    async fn test_purge_expired() {
        let store = InMemorySessionStore::new();
        let now = Utc::now();
        store.create(&session("user-1", Duration::hours(1), now)).await.unwrap();
        store.create(&session("user-2", Duration::days(2), now)).await.unwrap();

        let removed = store.purge_expired(now + Duration::hours(2)).unwrap();

        assert_eq!(removed, 1);
        assert_eq!(store.len().unwrap(), 1);
    }
}
