//! # 자격 증명 확인 서비스
//!
//! 로그인 식별자(사용자명 또는 이메일)와 비밀번호를 확인하여
//! 토큰 주체가 될 사용자 ID를 돌려줍니다.
//!
//! ## 조회 규칙
//!
//! - 식별자에 `@`가 포함되면 이메일로, 아니면 사용자명으로 조회
//! - 비밀번호는 저장된 bcrypt 해시와 비교
//!
//! 사용자가 없는 경우와 비밀번호가 틀린 경우는 같은 에러로 합쳐
//! 계정 존재 여부가 응답으로 드러나지 않게 합니다.

use std::sync::Arc;
use async_trait::async_trait;
use singleton_macro::service;
use crate::{
    domain::entities::users::User,
    repositories::users::UserRepository,
    services::auth::errors::AuthError,
};

/// 로그인 자격 증명 확인 능력
///
/// 테스트에서는 저장소 없이 동작하는 구현으로 대체합니다.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// 자격 증명을 확인하고 사용자 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - 사용자가 없거나 비밀번호 불일치
    /// * `AuthError::Store` - 사용자 저장소 장애
    async fn verify(&self, identifier: &str, password: &str) -> Result<String, AuthError>;
}

/// 로그인 식별자가 가리키는 조회 대상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LookupKey<'a> {
    Email(&'a str),
    Username(&'a str),
}

/// `@`가 포함된 식별자는 이메일, 나머지는 사용자명
pub(crate) fn lookup_key(identifier: &str) -> LookupKey<'_> {
    if identifier.contains('@') {
        LookupKey::Email(identifier)
    } else {
        LookupKey::Username(identifier)
    }
}

/// `users` 컬렉션 기반 자격 증명 확인 서비스
#[service(name = "credential")]
pub struct CredentialService {
    user_repo: Arc<UserRepository>,
}

impl CredentialService {
    async fn find_user(&self, identifier: &str) -> Result<Option<User>, AuthError> {
        let lookup = match lookup_key(identifier) {
            LookupKey::Email(email) => self.user_repo.find_by_email(email).await,
            LookupKey::Username(username) => self.user_repo.find_by_username(username).await,
        };

        lookup.map_err(|e| {
            log::error!("사용자 조회 실패: {}", e);
            AuthError::Store(e.to_string())
        })
    }
}

/// 해시 형식이 깨진 경우도 불일치로 취급
pub(crate) fn password_matches(password: &str, hashed_password: &str) -> bool {
    match bcrypt::verify(password, hashed_password) {
        Ok(valid) => valid,
        Err(e) => {
            log::error!("비밀번호 해시 검증 실패: {}", e);
            false
        }
    }
}

#[async_trait]
impl CredentialVerifier for CredentialService {
    async fn verify(&self, identifier: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.find_user(identifier).await? else {
            log::warn!("로그인 실패 - 존재하지 않는 사용자: {}", identifier);
            return Err(AuthError::InvalidCredentials);
        };

        if !password_matches(password, &user.hashed_password) {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", identifier);
            return Err(AuthError::InvalidCredentials);
        }

        user.id_string().ok_or_else(|| {
            log::error!("사용자 문서에 _id가 없습니다: {}", identifier);
            AuthError::Store("user document without id".to_string())
        })
    }
}
