//! 세션 도메인 모델
//!
//! 리프레시 토큰 하나당 하나씩 생성되는 서버 측 레코드입니다.
//! 리프레시 토큰이 암호학적으로 유효하더라도 세션을 차단하거나
//! 삭제하여 재발급 능력을 즉시 회수할 수 있습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::models::auth::ClientMetadata;
use crate::domain::models::token::{Payload, TokenId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// 리프레시 토큰 페이로드의 ID
    pub id: TokenId,
    pub user_id: String,
    /// 발급 당시의 리프레시 토큰 문자열 그대로
    pub refresh_token: String,
    pub user_agent: String,
    pub client_ip: String,
    pub is_blocked: bool,
    /// 리프레시 토큰 만료 시각과 동일
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// 방금 발급한 리프레시 토큰으로 새 세션을 만듭니다.
    pub fn for_refresh_token(refresh_token: String, payload: &Payload, client: ClientMetadata) -> Self {
        Self {
            id: payload.id,
            user_id: payload.user_id.clone(),
            refresh_token,
            user_agent: client.user_agent,
            client_ip: client.client_ip,
            is_blocked: false,
            expires_at: payload.expires_at,
            created_at: payload.issued_at,
        }
    }

    /// 저장소 GC 여부와 상관없이 만료 시각이 지나면 무효
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
