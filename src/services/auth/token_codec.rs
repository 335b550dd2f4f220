//! 봉인 토큰 코덱
//!
//! 페이로드를 대칭키 인증 암호화(XChaCha20-Poly1305)로 봉인하여
//! 불투명한 토큰 문자열을 만들고, 다시 열어 검증합니다.
//!
//! # 토큰 형식
//!
//! ```text
//! v1.local.<base64url(nonce[24] || ciphertext || tag[16])>
//! ```
//!
//! `v1.local.` 헤더는 연관 데이터(AAD)로 묶여 있어 헤더만 바꿔도 태그 검증이 실패합니다.
//! 토큰 본문은 암호화되어 있으므로 호출자는 반드시 [`TokenCodec::verify`]를 거쳐
//! 클레임을 얻어야 합니다.

use std::sync::Arc;
use base64::{engine::general_purpose, Engine as _};
use chacha20poly1305::aead::{Aead, KeyInit, Payload as AeadPayload};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};
use chrono::Duration;
use rand::RngCore;
use thiserror::Error;
use crate::core::clock::Clock;
use crate::domain::models::token::Payload;

/// 토큰 버전/용도 헤더
pub const TOKEN_HEADER: &str = "v1.local.";

/// 대칭키 길이 (바이트)
pub const KEY_SIZE: usize = 32;

const NONCE_SIZE: usize = 24;
const TAG_SIZE: usize = 16;

/// 토큰 생성/검증 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 형식 오류, 위조, 변조, 다른 키로 봉인된 토큰
    #[error("token is invalid")]
    InvalidToken,

    /// 구조적으로 유효하지만 만료 시각이 지난 토큰
    #[error("token has expired")]
    ExpiredToken,

    /// 코덱 생성 시 키 길이 불일치 (시작 시점에만 발생)
    #[error("invalid key size: must be exactly {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("failed to seal token: {0}")]
    SealFailed(String),

    /// 발급 시각에 수명을 더한 만료 시각이 표현 범위를 벗어남
    #[error("token lifetime out of range: {0}")]
    LifetimeOutOfRange(Duration),
}

/// 토큰 발급/검증 능력
///
/// 구현체는 상태가 없고 `Send + Sync`여야 하며, 동시 호출에 제한이 없습니다.
pub trait TokenCodec: Send + Sync {
    /// `user_id`를 주체로 `duration` 동안 유효한 토큰을 발급합니다.
    ///
    /// # Returns
    ///
    /// * `(token, payload)` - 봉인된 토큰 문자열과 그 안의 페이로드
    fn create(&self, user_id: &str, duration: Duration) -> Result<(String, Payload), TokenError>;

    /// 토큰을 열고 만료 여부를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidToken` - 형식 오류 또는 인증 태그 검증 실패
    /// * `TokenError::ExpiredToken` - 열기에는 성공했으나 `now > expires_at`
    fn verify(&self, token: &str) -> Result<Payload, TokenError>;
}

/// XChaCha20-Poly1305 기반 토큰 코덱
pub struct SealedTokenCodec {
    cipher: XChaCha20Poly1305,
    clock: Arc<dyn Clock>,
}

impl SealedTokenCodec {
    /// 대칭키로 코덱을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidKeySize` - 키가 정확히 32바이트가 아닌 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let codec = SealedTokenCodec::new(config.symmetric_key.as_bytes(), Arc::new(SystemClock))?;
    /// let (token, payload) = codec.create("user-1", Duration::minutes(15))?;
    /// assert_eq!(codec.verify(&token)?.user_id, "user-1");
    /// ```
    pub fn new(key: &[u8], clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if key.len() != KEY_SIZE {
            return Err(TokenError::InvalidKeySize {
                expected: KEY_SIZE,
                actual: key.len(),
            });
        }

        Ok(Self {
            cipher: XChaCha20Poly1305::new(Key::from_slice(key)),
            clock,
        })
    }

    fn seal(&self, payload: &Payload) -> Result<String, TokenError> {
        let plaintext = serde_json::to_vec(payload)
            .map_err(|e| TokenError::SealFailed(e.to_string()))?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(
                XNonce::from_slice(&nonce_bytes),
                AeadPayload { msg: &plaintext, aad: TOKEN_HEADER.as_bytes() },
            )
            .map_err(|_| TokenError::SealFailed("encryption failed".to_string()))?;

        let mut body = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        body.extend_from_slice(&nonce_bytes);
        body.extend_from_slice(&ciphertext);

        Ok(format!("{}{}", TOKEN_HEADER, general_purpose::URL_SAFE_NO_PAD.encode(body)))
    }

    fn open(&self, token: &str) -> Result<Payload, TokenError> {
        let encoded = token
            .strip_prefix(TOKEN_HEADER)
            .ok_or(TokenError::InvalidToken)?;

        let body = general_purpose::URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| TokenError::InvalidToken)?;

        if body.len() < NONCE_SIZE + TAG_SIZE {
            return Err(TokenError::InvalidToken);
        }

        let (nonce_bytes, ciphertext) = body.split_at(NONCE_SIZE);
        let plaintext = self
            .cipher
            .decrypt(
                XNonce::from_slice(nonce_bytes),
                AeadPayload { msg: ciphertext, aad: TOKEN_HEADER.as_bytes() },
            )
            .map_err(|_| TokenError::InvalidToken)?;

        serde_json::from_slice(&plaintext).map_err(|_| TokenError::InvalidToken)
    }
}

impl TokenCodec for SealedTokenCodec {
    fn create(&self, user_id: &str, duration: Duration) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(user_id, duration, self.clock.now())?;
        let token = self.seal(&payload)?;

        Ok((token, payload))
    }

    fn verify(&self, token: &str) -> Result<Payload, TokenError> {
        let payload = self.open(token)?;
        payload.validate(self.clock.now())?;

        Ok(payload)
    }
}
