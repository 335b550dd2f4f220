//! 토큰 페이로드
//!
//! 모든 토큰(액세스/리프레시)에 봉인되는 클레임 집합입니다.
//! 한 번 만들어진 페이로드는 변경되지 않으며, 리프레시 토큰의 `id`는
//! 해당 세션 레코드의 키로 사용됩니다.

use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::services::auth::token_codec::TokenError;

/// 토큰 고유 식별자
///
/// 토큰마다 새로 생성되는 무작위 UUID v4이며 재사용되지 않습니다.
/// 직렬화 시에는 하이픈 포함 문자열로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TokenId(Uuid);

impl TokenId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TokenId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<TokenId> for String {
    fn from(id: TokenId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TokenId {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 토큰에 봉인되는 클레임
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// 토큰 고유 ID (리프레시 토큰의 경우 세션 ID)
    pub id: TokenId,
    /// 토큰 주체 (사용자 ID)
    pub user_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Payload {
    /// 새 페이로드를 생성합니다.
    ///
    /// `duration`이 음수이면 이미 만료된 페이로드가 만들어집니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::LifetimeOutOfRange` - `now + duration`이 `DateTime` 범위를 넘는 경우
    pub fn new(user_id: impl Into<String>, duration: Duration, now: DateTime<Utc>) -> Result<Self, TokenError> {
        let expires_at = now
            .checked_add_signed(duration)
            .ok_or(TokenError::LifetimeOutOfRange(duration))?;

        Ok(Self {
            id: TokenId::new(),
            user_id: user_id.into(),
            issued_at: now,
            expires_at,
        })
    }

    /// `now`가 만료 시각을 지났는지 확인합니다 (경계값은 유효)
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// # Errors
    ///
    /// * `TokenError::ExpiredToken` - `now > expires_at`
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        if self.is_expired(now) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(())
    }
}
