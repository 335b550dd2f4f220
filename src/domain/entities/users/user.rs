//! User Entity Implementation
//!
//! 계정 CRUD는 별도 서비스가 담당하므로 이 엔티티는 로그인 자격 증명
//! 확인에 필요한 필드만 읽어옵니다. 나머지 필드는 역직렬화 시 무시됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// `users` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 영숫자 사용자명 (유니크)
    pub username: String,

    /// 이메일 주소 (유니크)
    pub email: String,

    #[serde(default)]
    pub full_name: String,

    /// bcrypt 해시
    pub hashed_password: String,

    pub created_at: DateTime,
}

impl User {
    /// 토큰 주체로 사용되는 16진수 ObjectId 문자열
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_string_is_hex() {
        let id = ObjectId::new();
        let user = User {
            id: Some(id),
            username: "robot".to_string(),
            email: "robot@tinygram.dev".to_string(),
            full_name: "Robot".to_string(),
            hashed_password: "$2b$04$hash".to_string(),
            created_at: DateTime::now(),
        };

        assert_eq!(user.id_string(), Some(id.to_hex()));
    }
}
