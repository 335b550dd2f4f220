//! 테스트용 인증 서비스 구성
//!
//! 메모리 세션 저장소, 수동 시계, 고정 자격 증명으로 `AuthService`를 만듭니다.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use crate::config::TokenConfig;
use crate::core::clock::ManualClock;
use crate::domain::models::auth::ClientMetadata;
use crate::repositories::sessions::InMemorySessionStore;
use crate::services::auth::{AuthError, AuthService, CredentialVerifier, SealedTokenCodec};

pub const TEST_KEY: &[u8; 32] = b"0123456789abcdef0123456789abcdef";

/// `robot` / `robot@tinygram.dev` + `secret-password`만 `user-1`로 통과
pub struct StubVerifier;

#[async_trait]
impl CredentialVerifier for StubVerifier {
    async fn verify(&self, identifier: &str, password: &str) -> Result<String, AuthError> {
        match (identifier, password) {
            ("robot", "secret-password") | ("robot@tinygram.dev", "secret-password") => {
                Ok("user-1".to_string())
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

pub struct Fixture {
    pub service: AuthService,
    pub codec: Arc<SealedTokenCodec>,
    pub store: Arc<InMemorySessionStore>,
    pub clock: Arc<ManualClock>,
}

pub fn fixture() -> Fixture {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let codec = Arc::new(SealedTokenCodec::new(TEST_KEY, clock.clone()).unwrap());
    let store = Arc::new(InMemorySessionStore::new());
    let config = TokenConfig {
        symmetric_key: String::from_utf8(TEST_KEY.to_vec()).unwrap(),
        access_token_duration: Duration::minutes(15),
        refresh_token_duration: Duration::days(7),
    };

    let service = AuthService::new(
        codec.clone(),
        store.clone(),
        Arc::new(StubVerifier),
        clock.clone(),
        &config,
    );

    Fixture { service, codec, store, clock }
}

pub fn client() -> ClientMetadata {
    ClientMetadata {
        user_agent: "tinygram-web".to_string(),
        client_ip: "198.51.100.7".to_string(),
    }
}
