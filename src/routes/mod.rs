//! API 라우트 설정 모듈
//!
//! 인증, 토큰, 세션 엔드포인트와 헬스체크를 등록합니다.
//!
//! # Route Table
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | `POST` | `/api/v1/auth/login` | - |
//! | `POST` | `/api/v1/auth/logout` | - (리프레시 토큰 본문) |
//! | `POST` | `/api/v1/token/refresh` | - (리프레시 토큰 본문) |
//! | `GET` | `/api/v1/token/data` | Bearer |
//! | `POST` | `/api/v1/sessions/{id}/block` | Bearer |
//! | `GET` | `/health` | - |
//!
//! 보호된 라우트에는 `AuthMiddleware`가 스코프/리소스 단위로 적용됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(auth_service.clone())
//!     .configure(|cfg| configure_all_routes(cfg, codec.clone(), AuthHeaderConfig::default()))
//! ```

use std::sync::Arc;
use actix_web::web;
use serde_json::json;
use crate::config::AuthHeaderConfig;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::TokenCodec;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `codec` - 보호된 라우트의 액세스 토큰 검증에 쓰이는 코덱
/// * `header` - 인증 헤더 이름과 스킴
pub fn configure_all_routes(
    cfg: &mut web::ServiceConfig,
    codec: Arc<dyn TokenCodec>,
    header: AuthHeaderConfig,
) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_token_routes(cfg, codec.clone(), header.clone());
    configure_session_routes(cfg, codec, header);
}

/// 로그인/로그아웃 라우트 (Public)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username_or_email":"robot","password":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
    );
}

/// 토큰 라우트
///
/// 갱신은 리프레시 토큰 본문으로 인증하므로 미들웨어 밖에 두고,
/// `/data`만 액세스 토큰을 요구합니다.
///
/// ```bash
/// curl http://localhost:8080/api/v1/token/data \
///   -H "Authorization: Bearer v1.local.<token>"
/// ```
fn configure_token_routes(cfg: &mut web::ServiceConfig, codec: Arc<dyn TokenCodec>, header: AuthHeaderConfig) {
    cfg.service(
        web::scope("/api/v1/token")
            .service(handlers::token_handlers::refresh_token)
            .service(
                web::resource("/data")
                    .wrap(AuthMiddleware::new(codec, header))
                    .route(web::get().to(handlers::token_handlers::token_data))
            )
    );
}

/// 세션 라우트 (Protected)
fn configure_session_routes(cfg: &mut web::ServiceConfig, codec: Arc<dyn TokenCodec>, header: AuthHeaderConfig) {
    cfg.service(
        web::scope("/api/v1/sessions")
            .wrap(AuthMiddleware::new(codec, header))
            .service(handlers::sessions::block_session)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "tinygram_auth",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "token": "XChaCha20-Poly1305"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "tinygram_auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "token": "XChaCha20-Poly1305"
        }
    }))
}
