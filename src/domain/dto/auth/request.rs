//! 인증 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 비밀번호 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자명 또는 이메일
    #[validate(length(min = 1, message = "사용자명 또는 이메일을 입력해주세요"))]
    pub username_or_email: String,

    #[validate(length(min = 8, message = "비밀번호는 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그아웃 요청 (해당 리프레시 토큰의 세션을 삭제)
#[derive(Debug, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}
