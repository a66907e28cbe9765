//! # Core Framework Module
//!
//! 싱글톤 기반 의존성 주입 시스템의 핵심을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 전역 싱글톤 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 컴포넌트 수집
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! // 인프라 컴포넌트 수동 등록
//! let database = Arc::new(Database::new().await?);
//! ServiceLocator::set(database);
//!
//! // 모든 서비스/리포지토리 초기화
//! ServiceLocator::initialize_all().await?;
//!
//! // 싱글톤 인스턴스 사용
//! let post_service = PostService::instance();
//! ```

pub mod registry;

pub use registry::*;
