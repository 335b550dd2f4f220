//! Tinygram 인증 서비스
//!
//! 봉인 토큰(XChaCha20-Poly1305) 기반 인증과 리프레시 세션 관리를 제공합니다.
//! 짧은 수명의 액세스 토큰은 상태 없이 검증되고, 긴 수명의 리프레시 토큰은
//! 서버 측 세션 레코드와 짝을 이루어 언제든 차단하거나 삭제할 수 있습니다.
//!
//! # Features
//!
//! - **토큰 코덱**: 인증 암호화로 봉인된 불투명 토큰 발급/검증
//! - **세션**: 로그인마다 하나씩 생성, 차단/로그아웃으로 재발급 능력 회수
//! - **로그인**: 사용자명 또는 이메일 + bcrypt 비밀번호 확인
//! - **미들웨어**: Bearer 토큰 검증 후 요청 확장에 인증 주체 저장
//! - **MongoDB**: 세션 영구 저장 (만료 TTL 인덱스)
//! - **Redis**: 세션 읽기 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, TokenCodec, CredentialService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← SessionStore, UserRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use tinygram_auth::services::auth::{AuthService, SealedTokenCodec};
//!
//! let login = auth_service.login_with_password("robot", "password123", client).await?;
//! let refreshed = auth_service.refresh(&login.refresh_token).await?;
//! auth_service.block(&login.session_id).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
