//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 서비스와 리포지토리 인스턴스를 전역 싱글톤으로 관리하는 DI 컨테이너입니다.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ 각 컴포넌트 파일의 inventory::submit! → 등록 정보 생성
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화
//!    ├─ Database 등 인프라 컴포넌트를 ServiceLocator::set() 으로 직접 등록
//!    └─ ServiceLocator::initialize_all() → 모든 컴포넌트 인스턴스 생성
//!
//! 3. 의존성 해결
//!    ├─ ServiceLocator::get::<T>() → 타입 분석 및 레지스트리 검색
//!    ├─ 생성자 함수 호출 (의존 컴포넌트는 재귀적으로 해결)
//!    └─ 캐싱 후 반환 - 이후 동일 타입 요청 시 캐시된 인스턴스 반환
//! ```
//!
//! ## 등록 예제
//!
//! ```rust,ignore
//! pub struct PostService {
//!     post_repo: Arc<PostRepository>,
//! }
//!
//! impl PostService {
//!     pub fn instance() -> Arc<Self> {
//!         ServiceLocator::get::<Self>()
//!     }
//! }
//!
//! inventory::submit! {
//!     ServiceRegistration {
//!         name: "post_service",
//!         constructor: || Box::new(Arc::new(PostService {
//!             post_repo: ServiceLocator::get::<PostRepository>(),
//!         })),
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 레지스트리에 등록되는 모든 서비스가 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 데이터 액세스 초기화 작업을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// 각 서비스 파일의 `inventory::submit!` 블록에서 생성되어
/// 컴파일 타임에 전역 레지스트리로 수집됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// ServiceRegistration과 동일한 구조를 가지지만 별도 타입으로 관리됩니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시
/// 첫 접근 시 한 번만 구성되며, 이후 O(1) 조회 제공
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> =
    Lazy::new(|| {
        let mut cache = HashMap::new();

        for registration in inventory::iter::<ServiceRegistration>() {
            let clean_name = extract_clean_name_static(registration.name);
            cache.insert(clean_name, registration);
        }

        print_cache_initialized("Service", cache.len());
        cache
    });

/// 리포지토리 이름 → 등록정보 매핑 캐시
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> =
    Lazy::new(|| {
        let mut cache = HashMap::new();

        for registration in inventory::iter::<RepositoryRegistration>() {
            let clean_name = extract_clean_name_static(registration.name);
            cache.insert(clean_name, registration);
        }

        print_cache_initialized("Repository", cache.len());
        cache
    });

/// 등록된 이름에서 접미사를 제거하여 정규화합니다
///
/// 등록 이름은 `post_service`, `post_repository` 형태이므로,
/// 이를 `post`로 정규화하여 타입 이름과 매칭합니다.
fn extract_clean_name_static(name: &str) -> String {
    if name.ends_with("_service") {
        name[..name.len() - 8].to_string()
    } else if name.ends_with("_repository") {
        name[..name.len() - 11].to_string()
    } else {
        name.to_string()
    }
}

/// 싱글톤 의존성 주입 컨테이너
///
/// # 주요 기능
///
/// - **싱글톤 보장**: 각 타입당 정확히 하나의 인스턴스만 생성
/// - **지연 초기화**: 첫 요청 시점에 인스턴스 생성
/// - **순환 참조 방지**: 초기화 중인 타입을 추적하여 데드락 방지
/// - **Thread-safe**: `RwLock`을 사용한 동시성 안전성
pub struct ServiceLocator {
    /// 생성된 인스턴스들의 캐시 (`TypeId` → 인스턴스)
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

thread_local! {
    /// 현재 스레드에서 초기화 중인 타입들 (순환 참조 방지용)
    ///
    /// 순환 참조는 한 스레드의 재귀적인 생성자 호출로만 발생하므로
    /// 스레드 로컬로 추적합니다. 서로 다른 스레드가 같은 타입을 동시에
    /// 생성하는 경우는 순환이 아니며, 캐시 삽입 시 더블 체크로 한
    /// 인스턴스만 살아남습니다.
    static INITIALIZING: std::cell::RefCell<HashSet<TypeId>> =
        std::cell::RefCell::new(HashSet::new());
}

impl ServiceLocator {
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 1. 인스턴스 캐시 확인 (O(1))
    /// 2. 순환 참조 검사
    /// 3. 타입 이름 분석 (`PostRepository` → 리포지토리 `post`)
    /// 4. 레지스트리 검색 및 생성자 호출
    /// 5. 캐싱 후 반환
    ///
    /// # 패닉 상황
    ///
    /// - **순환 참조**: A → B → A 형태의 의존성 순환
    /// - **미등록 타입**: 레지스트리에 등록되지 않은 타입 요청
    /// - **타입 불일치**: 등록된 타입과 요청 타입이 다른 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        // 이미 생성된 인스턴스 확인
        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance
                    .clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        // 현재 스레드에서 초기화 중인지 확인 (순환 참조 방지)
        let already_initializing = INITIALIZING.with(|set| !set.borrow_mut().insert(type_id));
        if already_initializing {
            eprintln!("❌ Circular dependency detected for type: {}", type_name);
            panic!(
                "Circular dependency detected: {} is already being initialized",
                type_name
            );
        }

        let result = std::panic::catch_unwind(|| {
            let clean_type_name = Self::extract_clean_type_name(type_name);

            // 등록 정보 검색
            // 생성자는 의존 컴포넌트를 재귀적으로 요청할 수 있으므로
            // 어떤 락도 잡지 않은 상태에서 호출해야 합니다.
            let boxed_instance = if clean_type_name.contains("Repository") {
                let entity_name = clean_type_name
                    .strip_suffix("Repository")
                    .unwrap_or(&clean_type_name)
                    .to_lowercase();

                let registration = REPOSITORY_NAME_CACHE
                    .get(&entity_name)
                    .unwrap_or_else(|| panic!("No repository found for entity: {}", entity_name));
                (registration.constructor)()
            } else if clean_type_name.contains("Service") {
                let entity_name = clean_type_name
                    .strip_suffix("Service")
                    .unwrap_or(&clean_type_name)
                    .to_lowercase();

                let registration = SERVICE_NAME_CACHE
                    .get(&entity_name)
                    .unwrap_or_else(|| panic!("No service found for entity: {}", entity_name));
                (registration.constructor)()
            } else {
                panic!(
                    "Service not found: {}. Make sure it's registered with an inventory::submit! block, or manually registered with ServiceLocator::set()",
                    type_name
                );
            };

            let arc_instance = boxed_instance
                .downcast::<Arc<T>>()
                .unwrap_or_else(|_| panic!("Type mismatch for component: {}", type_name));

            let mut instances = LOCATOR.instances.write().unwrap();

            // 더블 체크 - 먼저 캐싱된 인스턴스가 있으면 그것을 사용
            if let Some(instance) = instances.get(&type_id) {
                return instance
                    .clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }

            let instance = (*arc_instance).clone();
            instances.insert(type_id, instance.clone() as Arc<dyn Any + Send + Sync>);
            instance
        });

        // 초기화 완료 표시
        INITIALIZING.with(|set| {
            set.borrow_mut().remove(&type_id);
        });

        match result {
            Ok(instance) => instance,
            Err(e) => {
                eprintln!("ERROR: Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    /// 타입 이름에서 실제 타입 이름을 추출합니다.
    ///
    /// `std::any::type_name::<T>()`는 전체 모듈 경로를 포함하므로
    /// (예: `webboard_backend::services::posts::PostService`),
    /// 실제 타입 이름만 추출하여 매칭에 사용합니다.
    fn extract_clean_type_name(type_name: &str) -> String {
        if let Some(pos) = type_name.rfind("::") {
            type_name[pos + 2..].to_string()
        } else {
            type_name.to_string()
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 레지스트리로 관리되지 않는 인프라 컴포넌트(Database 등)를
    /// 수동으로 등록할 때 사용됩니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        let clean_name = Self::extract_clean_type_name(type_name);

        println!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 서비스와 리포지토리를 초기화합니다.
    ///
    /// 애플리케이션 시작 시 호출되어 등록된 모든 컴포넌트의 인스턴스를
    /// 미리 생성합니다. 데이터 계층이 비즈니스 계층보다 먼저 초기화됩니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        // 1단계: 리포지토리 인스턴스 생성
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

        // 2단계: 서비스 인스턴스 생성
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

/// 전역 서비스 로케이터 인스턴스
///
/// 첫 접근 시에만 초기화되며, 이후에는 동일한 인스턴스가 재사용됩니다.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_clean_name_strips_suffixes() {
        assert_eq!(extract_clean_name_static("post_service"), "post");
        assert_eq!(extract_clean_name_static("post_repository"), "post");
        assert_eq!(extract_clean_name_static("token_service"), "token");
        assert_eq!(extract_clean_name_static("database"), "database");
    }

    #[test]
    fn test_extract_clean_type_name_strips_module_path() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name(
                "webboard_backend::services::posts::PostService"
            ),
            "PostService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("PostService"), "PostService");
    }
}
