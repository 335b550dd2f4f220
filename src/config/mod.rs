//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 한 곳에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 세션 캐시 설정
//! - [`auth_config`] - 토큰 키/수명, 인증 헤더 형식
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export TOKEN_SYMMETRIC_KEY="12345678901234567890123456789012"
//!
//! # 선택
//! export ENVIRONMENT="development"          # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export ACCESS_TOKEN_EXPIRATION_MINUTES="15"
//! export REFRESH_TOKEN_EXPIRATION_DAYS="7"
//! export SESSION_CACHE_TTL_SECONDS="300"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="tinygram_dev"
//! export REDIS_URL="redis://localhost:6379"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 값에 따라 `main`에서 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
