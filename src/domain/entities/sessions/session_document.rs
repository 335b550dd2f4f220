//! Session Entity Implementation
//!
//! `sessions` 컬렉션 문서입니다. `expires_at`은 TTL 인덱스가 걸리도록
//! BSON DateTime으로 저장합니다.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::models::session::Session;
use crate::domain::models::token::TokenId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDocument {
    /// 리프레시 토큰 ID (UUID 문자열)
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub client_ip: String,
    pub is_blocked: bool,
    pub expires_at: DateTime,
    pub created_at: DateTime,
}

impl From<&Session> for SessionDocument {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.to_string(),
            user_id: session.user_id.clone(),
            refresh_token: session.refresh_token.clone(),
            user_agent: session.user_agent.clone(),
            client_ip: session.client_ip.clone(),
            is_blocked: session.is_blocked,
            expires_at: to_bson(session.expires_at),
            created_at: to_bson(session.created_at),
        }
    }
}

impl TryFrom<SessionDocument> for Session {
    type Error = String;

    fn try_from(document: SessionDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .parse::<TokenId>()
            .map_err(|e| format!("invalid session id {}: {}", document.id, e))?;

        Ok(Session {
            id,
            user_id: document.user_id,
            refresh_token: document.refresh_token,
            user_agent: document.user_agent,
            client_ip: document.client_ip,
            is_blocked: document.is_blocked,
            expires_at: from_bson(document.expires_at)?,
            created_at: from_bson(document.created_at)?,
        })
    }
}

// BSON DateTime은 밀리초 정밀도
fn to_bson(value: ChronoDateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

fn from_bson(value: DateTime) -> Result<ChronoDateTime<Utc>, String> {
    ChronoDateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| format!("timestamp out of range: {}", value.timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use crate::domain::models::auth::ClientMetadata;
    use crate::domain::models::token::Payload;

    #[test]
    fn test_document_conversion_keeps_fields() {
        let issued = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let payload = Payload::new("64f0c0ffee", Duration::days(7), issued).unwrap();
        let session = Session::for_refresh_token(
            "v1.local.token".to_string(),
            &payload,
            ClientMetadata { user_agent: "ua".to_string(), client_ip: "10.1.1.1".to_string() },
        );

        let document = SessionDocument::from(&session);
        assert_eq!(document.id, payload.id.to_string());
        assert_eq!(document.expires_at.timestamp_millis(), payload.expires_at.timestamp_millis());

        let restored = Session::try_from(document).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let document = SessionDocument {
            id: "not-a-token-id".to_string(),
            user_id: "u".to_string(),
            refresh_token: "t".to_string(),
            user_agent: String::new(),
            client_ip: String::new(),
            is_blocked: false,
            expires_at: DateTime::now(),
            created_at: DateTime::now(),
        };

        assert!(Session::try_from(document).is_err());
    }
}
