//! Tinygram 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB, Redis 연결을 설정하고 봉인 토큰 기반의 인증 API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::{dotenv};
use env_logger::Env;
use log::{error, info};
use tinygram_auth::caching::redis::RedisClient;
use tinygram_auth::config::{AuthHeaderConfig, Environment, ServerConfig, TokenConfig};
use tinygram_auth::core::clock::{Clock, SystemClock};
use tinygram_auth::core::registry::ServiceLocator;
use tinygram_auth::db::Database;
use tinygram_auth::repositories::sessions::SessionRepository;
use tinygram_auth::routes::configure_all_routes;
use tinygram_auth::services::auth::{AuthService, CredentialService, SealedTokenCodec, TokenCodec};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Tinygram 인증 서비스 시작중...");

    // 토큰 설정은 데이터 스토어 연결 전에 검증 (키 오류는 즉시 종료)
    let token_config = TokenConfig::from_env().map_err(|e| fatal("토큰 설정 로드 실패", e))?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let codec: Arc<dyn TokenCodec> = Arc::new(
        SealedTokenCodec::new(token_config.symmetric_key.as_bytes(), clock.clone())
            .map_err(|e| fatal("토큰 코덱 생성 실패", e))?
    );

    info!("🔐 토큰 설정 로드됨: {:?}", token_config);

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await?;

    // ServiceLocator에 핵심 서비스 등록
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    // 모든 서비스 초기화
    ServiceLocator::initialize_all()
        .await
        .map_err(|e| fatal("서비스 초기화 실패", e))?;

    let session_repository = SessionRepository::instance();
    session_repository
        .create_indexes()
        .await
        .map_err(|e| fatal("세션 인덱스 생성 실패", e))?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let auth_service = web::Data::new(AuthService::new(
        codec.clone(),
        session_repository,
        CredentialService::instance(),
        clock,
        &token_config,
    ));

    // HTTP 서버 시작
    start_http_server(auth_service, codec).await
}

/// 시작 단계의 치명적 오류를 기록하고 `io::Error`로 변환합니다
fn fatal(context: &str, e: impl std::fmt::Display) -> io::Error {
    error!("❌ {}: {}", context, e);
    io::Error::other(format!("{}: {}", context, e))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Actix-web 기반 HTTP 서버를 설정하고 실행합니다.
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Arguments
///
/// * `auth_service` - 모든 워커가 공유하는 인증 서비스
/// * `codec` - 보호된 라우트의 액세스 토큰 검증용 코덱
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 서버는 HOST:PORT (기본 127.0.0.1:8080)에서 실행됩니다
/// // Health check: http://127.0.0.1:8080/health
/// // API 엔드포인트: http://127.0.0.1:8080/api/v1/*
/// ```
async fn start_http_server(auth_service: web::Data<AuthService>, codec: Arc<dyn TokenCodec>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| fatal("Rate Limiting 설정 실패", "per_second와 burst_size는 0보다 커야 합니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", 
        rate_limit_config.per_second, 
        rate_limit_config.burst_size
    );

    let environment = Environment::current();
    info!("🌍 실행 환경: {:?}", environment);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&environment);
        let codec = codec.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            
            // 기존 미들웨어들
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(auth_service.clone())

            // 라우트 설정
            .configure(|cfg| configure_all_routes(cfg, codec, AuthHeaderConfig::default()))
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경  
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=tinygram_auth::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// 데이터베이스 연결을 설정하고 Arc로 래핑된 핸들을 반환합니다.
///
/// # Returns
///
/// * `(Arc<Database>, Arc<RedisClient>)` - 초기화된 데이터베이스 및 Redis 클라이언트
///
/// # Errors
///
/// * MongoDB 연결 실패 시
/// * Redis 연결 실패 시
///
/// # Examples
///
/// ```rust,ignore
/// let (db, redis) = initialize_data_stores().await?;
/// ServiceLocator::set(db);
/// ServiceLocator::set(redis);
/// ```
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    // 데이터베이스 초기화
    let database = Arc::new(
        Database::new()
            .await
            .map_err(|e| fatal("데이터베이스 연결 실패", e))?
    );

    // Redis 클라이언트 초기화
    let redis_client = Arc::new(
        RedisClient::new()
            .await
            .map_err(|e| fatal("Redis 연결 실패", e))?
    );

    info!("✅ Redis 연결 성공");

    Ok((database, redis_client))
}

/// CORS 설정을 구성합니다
///
/// 운영 환경에서는 `CORS_ALLOWED_ORIGINS`(쉼표 구분)에 나열된 Origin만 허용하고,
/// 그 외 환경에서는 로컬 프론트엔드 개발 서버를 허용합니다.
///
/// # Arguments
///
/// * `environment` - `ENVIRONMENT`에서 결정된 실행 환경
///
/// # Examples
///
/// ```bash
/// ENVIRONMENT=production CORS_ALLOWED_ORIGINS="https://tinygram.app,https://m.tinygram.app"
/// ```
fn configure_cors(environment: &Environment) -> Cors {
    let origins: Vec<String> = if environment.is_production() {
        std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    } else {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "http://localhost:8080".to_string(),
            "http://127.0.0.1:8080".to_string(),
        ]
    };

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 인증 API는 GET/POST만 사용
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// 환경변수에서 다음 설정을 읽어옵니다:
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// `x-ratelimit-*` 응답 헤더는 항상 포함됩니다.
///
/// # Returns
///
/// * `RateLimitConfig` - 로드된 Rate Limiting 설정
///
/// # Examples
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
///
/// # .env.prod (운영 환경)  
/// RATE_LIMIT_PER_SECOND=500
/// RATE_LIMIT_BURST_SIZE=1000
/// ```
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
