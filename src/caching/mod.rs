//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 JSON 캐시를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("session_repository:abc", &session, 300).await?;
//! let cached: Option<Session> = cache.get("session_repository:abc").await?;
//! let filled: bool = cache.set_nx_with_expiry("session_repository:abc", &session, 300).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
