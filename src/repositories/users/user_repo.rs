//! # 사용자 리포지토리 구현
//!
//! 로그인 자격 증명 확인을 위해 `users` 컬렉션을 읽기 전용으로 조회합니다.
//! 계정 생성과 인덱스 관리는 계정 서비스 소관이므로 여기서는 하지 않습니다.
//! 비밀번호 해시가 포함된 문서이므로 Redis에 캐싱하지 않습니다.

use std::sync::Arc;
use mongodb::bson::doc;
use singleton_macro::repository;
use crate::{
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::users::User,
};

/// 읽기 전용 사용자 리포지토리
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    /// 이메일로 사용자 조회
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자명으로 사용자 조회
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| {
                log::error!("{} 조회 실패 - username: {}, 에러: {}", Repository::name(self), username, e);
                AppError::DatabaseError(e.to_string())
            })
    }
}
