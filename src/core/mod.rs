//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입 기반 싱글톤 조회
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 컴포넌트 등록
//! - **순환 참조 감지**: 생성 중인 타입을 다시 요청하면 즉시 중단
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ### [`clock`] - 시간 소스
//! - **Clock**: 토큰/세션 만료 판단에 쓰이는 주입 가능한 현재 시각
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use tinygram_auth::core::registry::ServiceLocator;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     // 1. 인프라 컴포넌트 등록
//!     ServiceLocator::set(Arc::new(Database::new().await?));
//!     ServiceLocator::set(Arc::new(RedisClient::new().await?));
//!
//!     // 2. 리포지토리/서비스 초기화 (세션 인덱스 생성 포함)
//!     ServiceLocator::initialize_all().await?;
//!
//!     // 3. 웹 서버 시작
//!     HttpServer::new(|| App::new().configure(configure_all_routes))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await
//! }
//! ```

pub mod clock;
pub mod errors;
pub mod registry;

pub use clock::*;
pub use errors::*;
pub use registry::*;
