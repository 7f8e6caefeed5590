//! # Core Framework Module
//!
//! 게임 객체 프레임워크를 위한 인스턴스 레지스트리의 핵심 기능을 제공하는 모듈입니다.
//! 계약 타입 기반 바인딩, 생성자 선택, 2단계 의존성 주입, 식별자 기반 생명주기 관리를
//! 단일 스레드 환경에서 `Rc`/`RefCell`로 구현합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 인스턴스 레지스트리
//! - **Registry**: 바인딩 테이블, 인스턴스 저장소, 지연 주입 큐를 소유하는 핸들
//! - **싱글톤 관리**: 계약마다 하나의 인스턴스를 항상 반환
//! - **의존성 해결**: 생성 직후 동기 주입, 실패 시 `resolve()`까지 지연
//!
//! ### [`entity`] - 관리 인스턴스 계약
//! - **Entity / EntityCore**: 식별자, 파괴 옵저버, 레지스트리 역참조
//! - **Implements / implements!**: 구체 타입을 트레이트 객체 계약으로 업캐스트
//!
//! ### [`args`] / [`injection`] - 정적 기술자 테이블
//! - **Construct**: 위치 기반 매개변수 목록을 가진 생성자 테이블
//! - **Inject**: 생성 직후 채울 멤버 목록
//!
//! ### [`errors`] - 진단
//! - **RegistryError**: thiserror 기반 에러 목록
//! - **DiagnosticLog**: 경고/에러 기록 보관
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use entity_registry::core::*;
//! use entity_registry::{args, implements};
//!
//! pub trait Board: Entity {
//!     fn size(&self) -> (u32, u32);
//! }
//!
//! #[derive(Default)]
//! pub struct BoardModel {
//!     core: EntityCore,
//! }
//!
//! impl Entity for BoardModel {
//!     fn core(&self) -> &EntityCore { &self.core }
//!     fn core_mut(&mut self) -> &mut EntityCore { &mut self.core }
//! }
//!
//! impl Board for BoardModel {
//!     fn size(&self) -> (u32, u32) { (8, 8) }
//! }
//!
//! impl Construct for BoardModel {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![Constructor::from_default()]
//!     }
//! }
//!
//! impl Inject for BoardModel {}
//! implements!(BoardModel => dyn Board);
//!
//! let registry = Registry::new();
//! registry.bind::<dyn Board, BoardModel>();
//! let board = registry.get::<dyn Board>(&args![]);
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 주입되지 않은 멤버
//! ```text
//! [Registry] Failed to resolve PlayerModel.board <- Board: Registry has no binding for Board
//! ```
//! **해결**: `resolve()` 호출 전에 해당 계약을 `bind` 또는 `bind_singleton`으로 등록
//!
//! ### 순환 참조
//! ```text
//! [Registry] Circular dependency detected: Board is already being constructed
//! ```
//! **해결**: 한쪽 의존성을 싱글톤으로 바꾸거나 생성 이후 `inject`로 연결

pub mod args;
mod binding;
pub mod entity;
pub mod errors;
pub mod injection;
mod pending;
pub mod registry;
pub mod snapshot;
mod store;

#[cfg(test)]
mod tests;

pub use args::{Arg, Construct, Constructor, ConstructorArgs, Param};
pub use entity::{
    AsAny, DestroyEvent, DestroyObserver, Entity, EntityCore, EntityId, Implements,
    LifecycleState, ObserverId, Shared, shared,
};
pub use errors::{Diagnostic, RegistryError, RegistryResult, Severity};
pub use injection::{Inject, Injection, InjectionDescriptor};
pub use pending::PendingInjection;
pub use registry::{Registry, WeakRegistry};
pub use snapshot::{BindingInfo, InstanceInfo, RegistrySnapshot, SingletonInfo};
