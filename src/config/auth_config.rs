//! # Authentication Configuration Module
//!
//! 토큰 봉인 키와 토큰 수명, 그리고 인증 헤더 형식을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! # 정확히 32바이트여야 합니다 (XChaCha20-Poly1305 키 길이)
//! export TOKEN_SYMMETRIC_KEY="12345678901234567890123456789012"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export ACCESS_TOKEN_EXPIRATION_MINUTES="15"
//! export REFRESH_TOKEN_EXPIRATION_DAYS="7"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use tinygram_auth::config::{AuthHeaderConfig, TokenConfig};
//!
//! let token_config = TokenConfig::from_env()?;
//! let codec = SealedTokenCodec::new(token_config.symmetric_key.as_bytes(), clock)?;
//!
//! // 미들웨어는 설정 구조체를 생성자로 전달받음
//! let middleware = AuthMiddleware::new(codec, AuthHeaderConfig::default());
//! ```

use std::env;
use chrono::Duration;
use crate::core::errors::AppError;

/// 기본 액세스 토큰 수명 (분)
pub const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 15;

/// 기본 리프레시 토큰 수명 (일)
pub const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 7;

/// 액세스 토큰 수명 상한 (1일)
pub const MAX_ACCESS_TOKEN_MINUTES: i64 = 24 * 60;

/// 리프레시 토큰 수명 상한 (1년)
pub const MAX_REFRESH_TOKEN_DAYS: i64 = 365;

/// 토큰 발급 설정
#[derive(Clone)]
pub struct TokenConfig {
    /// 토큰 봉인에 쓰이는 대칭키 원문
    pub symmetric_key: String,
    pub access_token_duration: Duration,
    pub refresh_token_duration: Duration,
}

impl TokenConfig {
    /// 환경 변수에서 토큰 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `TOKEN_SYMMETRIC_KEY` 누락, 또는 수명 값이 숫자가 아니거나 1 ~ 상한 범위를 벗어난 경우
    ///
    /// 키 길이 검증은 코덱 생성 시점에 수행됩니다.
    pub fn from_env() -> Result<Self, AppError> {
        let symmetric_key = env::var("TOKEN_SYMMETRIC_KEY")
            .map_err(|_| AppError::ConfigError("TOKEN_SYMMETRIC_KEY must be set".to_string()))?;

        let access_minutes = read_bounded(
            "ACCESS_TOKEN_EXPIRATION_MINUTES",
            DEFAULT_ACCESS_TOKEN_MINUTES,
            MAX_ACCESS_TOKEN_MINUTES,
        )?;
        let refresh_days = read_bounded(
            "REFRESH_TOKEN_EXPIRATION_DAYS",
            DEFAULT_REFRESH_TOKEN_DAYS,
            MAX_REFRESH_TOKEN_DAYS,
        )?;

        Ok(Self {
            symmetric_key,
            access_token_duration: lifetime("ACCESS_TOKEN_EXPIRATION_MINUTES", Duration::try_minutes(access_minutes))?,
            refresh_token_duration: lifetime("REFRESH_TOKEN_EXPIRATION_DAYS", Duration::try_days(refresh_days))?,
        })
    }
}

// 키 원문이 로그에 남지 않도록 직접 구현
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("symmetric_key", &format_args!("<{} bytes>", self.symmetric_key.len()))
            .field("access_token_duration", &self.access_token_duration)
            .field("refresh_token_duration", &self.refresh_token_duration)
            .finish()
    }
}

fn read_bounded(name: &str, default: i64, max: i64) -> Result<i64, AppError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => parse_bounded(name, &raw, max),
    }
}

fn parse_bounded(name: &str, raw: &str, max: i64) -> Result<i64, AppError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| AppError::ConfigError(format!("{} 파싱 실패: {}", name, e)))?;

    if value <= 0 {
        return Err(AppError::ConfigError(format!("{} must be positive, got {}", name, value)));
    }

    if value > max {
        return Err(AppError::ConfigError(format!("{} must be at most {}, got {}", name, max, value)));
    }

    Ok(value)
}

fn lifetime(name: &str, duration: Option<Duration>) -> Result<Duration, AppError> {
    duration.ok_or_else(|| AppError::ConfigError(format!("{} is out of range", name)))
}

/// 인증 헤더 형식 설정
///
/// 헤더 이름과 스킴은 프로세스 전역 상수가 아니라 미들웨어 생성 시 전달되는 값입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaderConfig {
    /// 토큰을 담는 요청 헤더 이름 (대소문자 무관)
    pub header_name: String,
    /// 허용하는 인증 스킴 (대소문자 무관 비교)
    pub scheme: String,
}

impl Default for AuthHeaderConfig {
    fn default() -> Self {
        Self {
            header_name: "authorization".to_string(),
            scheme: "bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded_accepts_numbers() {
        assert_eq!(parse_bounded("ACCESS_TOKEN_EXPIRATION_MINUTES", "30", MAX_ACCESS_TOKEN_MINUTES).unwrap(), 30);
        assert_eq!(parse_bounded("ACCESS_TOKEN_EXPIRATION_MINUTES", " 5 ", MAX_ACCESS_TOKEN_MINUTES).unwrap(), 5);
        assert_eq!(parse_bounded("REFRESH_TOKEN_EXPIRATION_DAYS", "365", MAX_REFRESH_TOKEN_DAYS).unwrap(), 365);
    }

    #[test]
    fn test_parse_bounded_rejects_invalid_values() {
        for raw in ["seven", "0", "-3", "366", "100000000", "99999999999999999999"] {
            assert!(
                matches!(
                    parse_bounded("REFRESH_TOKEN_EXPIRATION_DAYS", raw, MAX_REFRESH_TOKEN_DAYS),
                    Err(AppError::ConfigError(_))
                ),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_lifetime_limits_are_representable() {
        assert_eq!(
            lifetime("ACCESS_TOKEN_EXPIRATION_MINUTES", Duration::try_minutes(MAX_ACCESS_TOKEN_MINUTES)).unwrap(),
            Duration::days(1)
        );
        assert!(lifetime("REFRESH_TOKEN_EXPIRATION_DAYS", Duration::try_days(MAX_REFRESH_TOKEN_DAYS)).is_ok());
        assert!(matches!(
            lifetime("REFRESH_TOKEN_EXPIRATION_DAYS", Duration::try_days(i64::MAX)),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_auth_header_config_defaults() {
        let config = AuthHeaderConfig::default();

        assert_eq!(config.header_name, "authorization");
        assert_eq!(config.scheme, "bearer");
    }

    #[test]
    fn test_token_config_debug_hides_key() {
        let config = TokenConfig {
            symmetric_key: "super-secret-symmetric-key-value".to_string(),
            access_token_duration: Duration::minutes(15),
            refresh_token_duration: Duration::days(7),
        };

        let printed = format!("{:?}", config);

        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<32 bytes>"));
    }
}
