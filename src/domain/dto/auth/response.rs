//! 인증 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::models::session::Session;
use crate::domain::models::token::TokenId;

/// 로그인 결과
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 ID와 만료 시각을 가집니다.
/// `session_id`는 리프레시 토큰의 ID와 같습니다.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub session_id: TokenId,
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_token_expires_at: DateTime<Utc>,
}

/// 세션 요약 (리프레시 토큰 문자열은 포함하지 않음)
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: TokenId,
    pub user_id: String,
    pub user_agent: String,
    pub client_ip: String,
    pub is_blocked: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            user_agent: session.user_agent,
            client_ip: session.client_ip,
            is_blocked: session.is_blocked,
            expires_at: session.expires_at,
            created_at: session.created_at,
        }
    }
}
