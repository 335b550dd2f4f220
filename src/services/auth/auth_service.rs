//! # 인증 세션 서비스
//!
//! 토큰 발급과 세션 수명 주기를 조율합니다.
//!
//! ## 토큰 흐름
//!
//! ```text
//! login ──► access token (짧은 수명, 세션 없음)
//!       └─► refresh token (긴 수명) ──► Session { id = refresh.id }
//!
//! refresh(refresh token)
//!   verify ─► SessionStore::get ─► blocked? ─► user? ─► token? ─► expired?
//!                                                                   │
//!                                                 새 access token ◄─┘
//! ```
//!
//! 재발급은 세션을 변경하지 않으므로 같은 리프레시 토큰으로 여러 번 호출해도
//! 매번 새 액세스 토큰을 받습니다. 세션을 차단해도 이미 발급된 액세스 토큰은
//! 만료될 때까지 유효하며, 차단은 재발급 능력만 회수합니다.

use std::sync::Arc;
use chrono::Duration;
use crate::{
    config::TokenConfig,
    core::clock::Clock,
    domain::dto::auth::LoginResponse,
    domain::dto::tokens::RefreshTokenResponse,
    domain::models::auth::ClientMetadata,
    domain::models::session::Session,
    domain::models::token::{Payload, TokenId},
    repositories::sessions::SessionStore,
    services::auth::credential_service::CredentialVerifier,
    services::auth::errors::AuthError,
    services::auth::token_codec::TokenCodec,
};

/// 로그인/재발급/차단/로그아웃을 담당하는 서비스
///
/// 요청 간에 변경되는 상태가 없으므로 `web::Data`로 공유합니다.
pub struct AuthService {
    codec: Arc<dyn TokenCodec>,
    sessions: Arc<dyn SessionStore>,
    credentials: Arc<dyn CredentialVerifier>,
    clock: Arc<dyn Clock>,
    access_token_duration: Duration,
    refresh_token_duration: Duration,
}

impl AuthService {
    /// # Examples
    ///
    /// ```rust,ignore
    /// let service = AuthService::new(
    ///     codec.clone(),
    ///     SessionRepository::instance(),
    ///     CredentialService::instance(),
    ///     Arc::new(SystemClock),
    ///     &token_config,
    /// );
    /// ```
    pub fn new(
        codec: Arc<dyn TokenCodec>,
        sessions: Arc<dyn SessionStore>,
        credentials: Arc<dyn CredentialVerifier>,
        clock: Arc<dyn Clock>,
        config: &TokenConfig,
    ) -> Self {
        Self {
            codec,
            sessions,
            credentials,
            clock,
            access_token_duration: config.access_token_duration,
            refresh_token_duration: config.refresh_token_duration,
        }
    }

    /// 확인된 사용자에게 토큰 쌍을 발급하고 세션을 저장합니다.
    ///
    /// 액세스 토큰과 리프레시 토큰은 서로 독립적으로 생성되어 ID와 만료 시각이 다릅니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Token(SealFailed)` - 토큰 봉인 실패
    /// * `AuthError::Store` - 세션 저장 실패
    pub async fn login(&self, user_id: &str, client: ClientMetadata) -> Result<LoginResponse, AuthError> {
        let (access_token, access_payload) = self.codec.create(user_id, self.access_token_duration)?;
        let (refresh_token, refresh_payload) = self.codec.create(user_id, self.refresh_token_duration)?;

        let session = Session::for_refresh_token(refresh_token.clone(), &refresh_payload, client);
        let session_id = self.sessions.create(&session).await.map_err(|e| {
            log::error!("세션 저장 실패 - user_id: {}, 에러: {}", user_id, e);
            AuthError::from(e)
        })?;

        log::info!("로그인 성공 - user_id: {}, session_id: {}", user_id, session_id);

        Ok(LoginResponse {
            session_id,
            access_token,
            access_token_expires_at: access_payload.expires_at,
            refresh_token,
            refresh_token_expires_at: refresh_payload.expires_at,
        })
    }

    /// 사용자명/이메일과 비밀번호를 확인한 뒤 로그인합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - 자격 증명 불일치
    /// * 그 외 [`AuthService::login`]과 동일
    pub async fn login_with_password(
        &self,
        identifier: &str,
        password: &str,
        client: ClientMetadata,
    ) -> Result<LoginResponse, AuthError> {
        let user_id = self.credentials.verify(identifier, password).await?;
        self.login(&user_id, client).await
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 세션과 리프레시 토큰은 그대로 유지됩니다. 거절 시 어떤 쓰기도 하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Token(InvalidToken | ExpiredToken)` - 토큰 검증 실패
    /// * `AuthError::SessionNotFound` - 로그아웃되었거나 GC된 세션
    /// * `AuthError::SessionBlocked` - 차단된 세션
    /// * `AuthError::SessionUserMismatch` - 세션 소유자와 토큰 주체 불일치
    /// * `AuthError::SessionTokenMismatch` - 저장된 토큰 문자열과 불일치
    /// * `AuthError::SessionExpired` - 세션 만료 시각 경과
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshTokenResponse, AuthError> {
        let (payload, session) = self.load_session(refresh_token).await?;

        if session.is_blocked {
            log::warn!("재발급 거절 - 차단된 세션: {}", session.id);
            return Err(AuthError::SessionBlocked);
        }

        Self::ensure_issued_to(&session, &payload, refresh_token)?;

        if session.is_expired(self.clock.now()) {
            log::warn!("재발급 거절 - 만료된 세션: {}", session.id);
            return Err(AuthError::SessionExpired);
        }

        let (access_token, access_payload) = self.codec.create(&payload.user_id, self.access_token_duration)?;

        log::info!("액세스 토큰 재발급 - user_id: {}, session_id: {}", payload.user_id, session.id);

        Ok(RefreshTokenResponse {
            access_token,
            access_token_expires_at: access_payload.expires_at,
        })
    }

    /// 세션을 차단합니다. 이미 차단된 세션도 성공합니다.
    ///
    /// 발급된 액세스 토큰에는 영향을 주지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::SessionNotFound` - 세션이 없는 경우
    pub async fn block(&self, session_id: &TokenId) -> Result<Session, AuthError> {
        let session = self.sessions.set_blocked(session_id).await.map_err(|e| {
            log::warn!("세션 차단 실패 - session_id: {}, 에러: {}", session_id, e);
            AuthError::from(e)
        })?;

        log::info!("세션 차단 - user_id: {}, session_id: {}", session.user_id, session.id);

        Ok(session)
    }

    /// 요청한 사용자 소유의 세션만 차단합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::SessionUserMismatch` - 다른 사용자의 세션
    /// * 그 외 [`AuthService::block`]과 동일
    pub async fn block_owned(&self, session_id: &TokenId, user_id: &str) -> Result<Session, AuthError> {
        let session = self.sessions.get(session_id).await?;

        if session.user_id != user_id {
            log::warn!("세션 차단 거절 - 소유자 불일치: session_id: {}, 요청자: {}", session_id, user_id);
            return Err(AuthError::SessionUserMismatch);
        }

        self.block(session_id).await
    }

    /// 리프레시 토큰의 세션을 삭제합니다.
    ///
    /// 이후 같은 리프레시 토큰으로의 재발급은 `SessionNotFound`로 실패합니다.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        let (payload, session) = self.load_session(refresh_token).await?;
        Self::ensure_issued_to(&session, &payload, refresh_token)?;

        self.sessions.delete(&session.id).await?;

        log::info!("로그아웃 - user_id: {}, session_id: {}", payload.user_id, session.id);

        Ok(())
    }

    /// 리프레시 토큰을 검증하고 그 세션을 조회합니다.
    async fn load_session(&self, refresh_token: &str) -> Result<(Payload, Session), AuthError> {
        let payload = self.codec.verify(refresh_token).map_err(|e| {
            log::warn!("리프레시 토큰 검증 실패: {}", e);
            AuthError::from(e)
        })?;

        let session = self.sessions.get(&payload.id).await.map_err(|e| {
            log::warn!("세션 조회 실패 - session_id: {}, 에러: {}", payload.id, e);
            AuthError::from(e)
        })?;

        Ok((payload, session))
    }

    /// 세션이 토큰 주체에게 이 토큰 문자열로 발급된 것인지 확인합니다.
    fn ensure_issued_to(session: &Session, payload: &Payload, refresh_token: &str) -> Result<(), AuthError> {
        if session.user_id != payload.user_id {
            log::warn!("세션 사용자 불일치 - session_id: {}", session.id);
            return Err(AuthError::SessionUserMismatch);
        }

        if session.refresh_token != refresh_token {
            log::warn!("세션 토큰 불일치 - session_id: {}", session.id);
            return Err(AuthError::SessionTokenMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use crate::services::auth::testing::{client, fixture, StubVerifier, TEST_KEY};
    use crate::services::auth::token_codec::TokenError;

    #[actix_web::test]
    async fn test_login_persists_session_for_refresh_token() {
        let f = fixture();

        let login = f.service.login("user-1", client()).await.unwrap();

        let access = f.codec.verify(&login.access_token).unwrap();
        let refresh = f.codec.verify(&login.refresh_token).unwrap();
        assert_eq!(access.user_id, "user-1");
        assert_eq!(refresh.user_id, "user-1");
        assert_ne!(access.id, refresh.id);
        assert_eq!(login.session_id, refresh.id);
        assert_eq!(login.access_token_expires_at, access.expires_at);
        assert_eq!(login.refresh_token_expires_at, refresh.expires_at);

        let session = f.store.get(&login.session_id).await.unwrap();
        assert_eq!(session.refresh_token, login.refresh_token);
        assert_eq!(session.user_agent, "tinygram-web");
        assert_eq!(session.client_ip, "198.51.100.7");
        assert_eq!(session.expires_at, refresh.expires_at);
        assert!(!session.is_blocked);

        // 액세스 토큰에는 세션이 없음
        assert_eq!(f.store.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_login_with_password() {
        let f = fixture();

        let login = f.service
            .login_with_password("robot@tinygram.dev", "secret-password", client())
            .await
            .unwrap();
        assert_eq!(f.codec.verify(&login.access_token).unwrap().user_id, "user-1");

        let err = f.service
            .login_with_password("robot", "wrong-password", client())
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(f.store.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_login_with_unrepresentable_lifetime_fails_cleanly() {
        let f = fixture();
        let config = crate::config::TokenConfig {
            symmetric_key: String::from_utf8(TEST_KEY.to_vec()).unwrap(),
            access_token_duration: chrono::Duration::minutes(15),
            refresh_token_duration: chrono::Duration::days(100_000_000),
        };
        let service = AuthService::new(
            f.codec.clone(),
            f.store.clone(),
            std::sync::Arc::new(StubVerifier),
            f.clock.clone(),
            &config,
        );

        let err = service.login("user-1", client()).await.unwrap_err();

        assert!(matches!(err, AuthError::Token(TokenError::LifetimeOutOfRange(_))));
        assert_eq!(err.status_code(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(f.store.len().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_refresh_is_repeatable_and_leaves_session_untouched() {
        let f = fixture();
        let login = f.service.login("user-1", client()).await.unwrap();
        let before = f.store.get(&login.session_id).await.unwrap();

        let first = f.service.refresh(&login.refresh_token).await.unwrap();
        let second = f.service.refresh(&login.refresh_token).await.unwrap();

        assert_ne!(first.access_token, second.access_token);
        assert_eq!(f.codec.verify(&first.access_token).unwrap().user_id, "user-1");
        assert_eq!(f.codec.verify(&second.access_token).unwrap().user_id, "user-1");
        assert_eq!(f.store.get(&login.session_id).await.unwrap(), before);
    }

    #[actix_web::test]
    async fn test_block_keeps_access_token_but_stops_refresh() {
        let f = fixture();
        let login = f.service.login("user-1", client()).await.unwrap();

        let blocked = f.service.block(&login.session_id).await.unwrap();
        assert!(blocked.is_blocked);

        assert!(f.codec.verify(&login.access_token).is_ok());
        assert_eq!(
            f.service.refresh(&login.refresh_token).await.unwrap_err(),
            AuthError::SessionBlocked
        );

        // 재차 차단해도 성공
        assert!(f.service.block(&login.session_id).await.unwrap().is_blocked);
    }

    #[actix_web::test]
    async fn test_access_expiry_refresh_then_block_scenario() {
        let f = fixture();
        let login = f.service.login("user-1", client()).await.unwrap();

        f.clock.advance(Duration::minutes(16));
        assert_eq!(f.codec.verify(&login.access_token), Err(TokenError::ExpiredToken));

        let refreshed = f.service.refresh(&login.refresh_token).await.unwrap();
        assert_eq!(f.codec.verify(&refreshed.access_token).unwrap().user_id, "user-1");

        f.service.block(&login.session_id).await.unwrap();
        assert_eq!(
            f.service.refresh(&login.refresh_token).await.unwrap_err(),
            AuthError::SessionBlocked
        );
    }

    #[actix_web::test]
    async fn test_sessions_are_isolated_per_user() {
        let f = fixture();
        let alice = f.service.login("alice", client()).await.unwrap();
        let bob = f.service.login("bob", client()).await.unwrap();

        let refreshed = f.service.refresh(&alice.refresh_token).await.unwrap();
        assert_eq!(f.codec.verify(&refreshed.access_token).unwrap().user_id, "alice");

        let mut tampered = f.store.get(&alice.session_id).await.unwrap();
        tampered.user_id = "bob".to_string();
        f.store.overwrite(tampered);

        assert_eq!(
            f.service.refresh(&alice.refresh_token).await.unwrap_err(),
            AuthError::SessionUserMismatch
        );
        assert!(f.service.refresh(&bob.refresh_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_refresh_rejects_token_mismatch() {
        let f = fixture();
        let login = f.service.login("user-1", client()).await.unwrap();

        let mut session = f.store.get(&login.session_id).await.unwrap();
        session.refresh_token = "v1.local.someone-else".to_string();
        f.store.overwrite(session);

        assert_eq!(
            f.service.refresh(&login.refresh_token).await.unwrap_err(),
            AuthError::SessionTokenMismatch
        );
    }

    #[actix_web::test]
    async fn test_refresh_rejects_expired_session() {
        let f = fixture();
        let login = f.service.login("user-1", client()).await.unwrap();

        let mut session = f.store.get(&login.session_id).await.unwrap();
        session.expires_at = f.clock.now() - Duration::seconds(1);
        f.store.overwrite(session);

        assert_eq!(
            f.service.refresh(&login.refresh_token).await.unwrap_err(),
            AuthError::SessionExpired
        );
    }

    #[actix_web::test]
    async fn test_refresh_rejects_bad_tokens() {
        let f = fixture();
        let login = f.service.login("user-1", client()).await.unwrap();

        assert_eq!(
            f.service.refresh("v1.local.garbage").await.unwrap_err(),
            AuthError::Token(TokenError::InvalidToken)
        );

        f.clock.advance(Duration::days(8));
        assert_eq!(
            f.service.refresh(&login.refresh_token).await.unwrap_err(),
            AuthError::Token(TokenError::ExpiredToken)
        );
    }

    #[actix_web::test]
    async fn test_refresh_with_unknown_session() {
        let f = fixture();
        let (orphan, _) = f.codec.create("user-1", Duration::days(1)).unwrap();

        assert_eq!(
            f.service.refresh(&orphan).await.unwrap_err(),
            AuthError::SessionNotFound
        );
    }

    #[actix_web::test]
    async fn test_logout_deletes_session() {
        let f = fixture();
        let login = f.service.login("user-1", client()).await.unwrap();

        f.service.logout(&login.refresh_token).await.unwrap();

        assert_eq!(
            f.service.refresh(&login.refresh_token).await.unwrap_err(),
            AuthError::SessionNotFound
        );
        assert_eq!(
            f.service.logout(&login.refresh_token).await.unwrap_err(),
            AuthError::SessionNotFound
        );
        assert_eq!(f.store.len().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_block_unknown_session() {
        let f = fixture();

        assert_eq!(
            f.service.block(&TokenId::new()).await.unwrap_err(),
            AuthError::SessionNotFound
        );
    }

    #[actix_web::test]
    async fn test_block_owned_rejects_foreign_session() {
        let f = fixture();
        let login = f.service.login("alice", client()).await.unwrap();

        assert_eq!(
            f.service.block_owned(&login.session_id, "mallory").await.unwrap_err(),
            AuthError::SessionUserMismatch
        );
        assert!(!f.store.get(&login.session_id).await.unwrap().is_blocked);

        let blocked = f.service.block_owned(&login.session_id, "alice").await.unwrap();
        assert!(blocked.is_blocked);
    }
}
