//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 리포지토리와 서비스를 전역 싱글톤으로 관리하는 경량 DI 컨테이너입니다.
//! Spring의 `ApplicationContext`처럼 타입으로 인스턴스를 조회하지만,
//! 등록은 `inventory`를 통해 컴파일 타임에 수집됩니다.
//!
//! ## 주요 구성 요소
//!
//! | 구성 요소 | 역할 |
//! |-----------|------|
//! | [`ServiceLocator`] | 타입 기반 전역 인스턴스 컨테이너 |
//! | [`RepositoryRegistration`] | 리포지토리 생성자 |
//! | [`ServiceRegistration`] | 서비스 생성자 |
//! | [`Repository`] | 컬렉션 이름과 초기화 로직을 노출하는 리포지토리 트레이트 |
//! | [`Service`] | 비즈니스 로직 컴포넌트 트레이트 |
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ #[repository] / #[service] → inventory::submit! 으로 등록 정보 수집
//!
//! 2. 런타임 초기화 (main)
//!    ├─ Database, RedisClient → ServiceLocator::set()
//!    └─ ServiceLocator::initialize_all()
//!         ├─ 리포지토리 생성
//!         └─ 서비스 생성 (Arc 필드는 ServiceLocator::get 으로 주입)
//!
//! 3. 의존성 해결
//!    └─ ServiceLocator::get::<UserRepository>()
//!         ├─ 캐시 확인
//!         ├─ "UserRepository" → "user" 로 등록 정보 검색
//!         └─ 생성자 호출 후 캐싱
//! ```
//!
//! ## 컴포넌트 등록 예제
//!
//! ```rust,ignore
//! #[repository(name = "user", collection = "users")]
//! pub struct UserRepository {
//!     db: Arc<Database>,
//! }
//!
//! #[service(name = "credential")]
//! pub struct CredentialService {
//!     user_repo: Arc<UserRepository>, // ServiceLocator::get::<UserRepository>()
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_final_summary, print_registry_indexed, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 컴포넌트 트레이트
///
/// `#[service]` 매크로가 자동으로 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스 이름 (`{name}_service`)
    fn name(&self) -> &str;

    /// 서비스 초기화
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 컴포넌트 트레이트
///
/// `#[repository]` 매크로가 자동으로 구현합니다. 생성되는 캐시 키
/// (`{name}:{id}`)도 이 트레이트의 `name`을 사용합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리 이름 (`{name}_repository`)
    fn name(&self) -> &str;

    /// 대상 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    /// `Arc<T>`를 `Box<dyn Any>`로 감싸 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    /// `Arc<T>`를 `Box<dyn Any>`로 감싸 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 정리된 서비스 이름 → 등록 정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<ServiceRegistration>() {
        cache.insert(extract_clean_name_static(registration.name), registration);
    }

    print_registry_indexed("Service", cache.len());
    cache
});

/// 정리된 리포지토리 이름 → 등록 정보
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<RepositoryRegistration>() {
        cache.insert(extract_clean_name_static(registration.name), registration);
    }

    print_registry_indexed("Repository", cache.len());
    cache
});

/// `session_repository` → `session`, `credential_service` → `credential`
fn extract_clean_name_static(name: &str) -> String {
    if let Some(stripped) = name.strip_suffix("_service") {
        stripped.to_string()
    } else if let Some(stripped) = name.strip_suffix("_repository") {
        stripped.to_string()
    } else {
        name.to_string()
    }
}

/// 타입 기반 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    /// 생성 완료된 인스턴스
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 생성 중인 타입 (순환 참조 감지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// `set`으로 등록된 인스턴스를 먼저 찾고, 없으면 타입 이름으로
    /// 등록 정보를 검색하여 생성합니다.
    ///
    /// # Panics
    ///
    /// * 순환 참조가 감지된 경우
    /// * 등록되지 않은 타입을 요청한 경우
    /// * 등록된 생성자가 다른 타입을 반환한 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let database = ServiceLocator::get::<Database>();
    /// let sessions = ServiceLocator::get::<SessionRepository>();
    /// ```
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>() {
            return instance;
        }

        let first_visit = LOCATOR.initializing.write().unwrap().insert(type_id);
        if !first_visit {
            log::error!("❌ Circular dependency detected for type: {}", type_name);
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        // 생성자가 다시 get()을 호출할 수 있으므로 락을 잡지 않은 상태에서 생성
        let constructed = Self::construct(type_name);

        LOCATOR.initializing.write().unwrap().remove(&type_id);

        let instance = match constructed.map(|boxed| boxed.downcast::<Arc<T>>()) {
            Some(Ok(arc_instance)) => *arc_instance,
            Some(Err(_)) => panic!("Type mismatch for component: {}", type_name),
            None => panic!(
                "Service not found: {}. Register it with inventory::submit! or ServiceLocator::set()",
                type_name
            ),
        };

        let mut instances = LOCATOR.instances.write().unwrap();
        instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>);
        instance
    }

    fn cached<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn construct(type_name: &str) -> Option<Box<dyn Any + Send + Sync>> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        if let Some(entity) = clean_type_name.strip_suffix("Repository") {
            return REPOSITORY_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| (registration.constructor)());
        }

        if let Some(entity) = clean_type_name.strip_suffix("Service") {
            return SERVICE_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| (registration.constructor)());
        }

        None
    }

    /// `crate::a::b::SessionRepository` → `SessionRepository`
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 외부에서 생성한 인스턴스를 직접 등록합니다.
    ///
    /// Database, RedisClient 처럼 비동기 연결이 필요한 인프라 컴포넌트에 사용합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 생성합니다.
    ///
    /// 리포지토리를 먼저 생성한 뒤 서비스를 생성합니다. 인프라 컴포넌트
    /// (`Database`, `RedisClient`)는 이 호출 전에 `set`으로 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// * 주입할 의존성을 찾을 수 없는 경우 ([`ServiceLocator::get`] 참고)
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 ServiceLocator 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
