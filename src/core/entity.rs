//! # 관리 인스턴스 계약 (Managed Entity Contract)
//!
//! 레지스트리에 들어갈 수 있는 모든 객체가 구현해야 하는 최소 계약입니다.
//!
//! - **고유 식별자**: 첫 `prepare` 시점에 단 한 번 할당되는 [`EntityId`]
//! - **파괴 옵저버 목록**: 파괴 시 정확히 한 번 호출되는 콜백 목록
//! - **레지스트리 역참조**: 소유 레지스트리에 대한 약한(non-owning) 참조
//!
//! 협력 객체는 [`EntityCore`]를 필드로 품고 [`Entity`]의 두 메서드만
//! 구현하면 됩니다. 나머지 동작은 기본 구현이 담당합니다.
//!
//! ```rust,ignore
//! struct BoardModel {
//!     core: EntityCore,
//!     width: u32,
//! }
//!
//! impl Entity for BoardModel {
//!     fn core(&self) -> &EntityCore { &self.core }
//!     fn core_mut(&mut self) -> &mut EntityCore { &mut self.core }
//! }
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::registry::{Registry, WeakRegistry};
use crate::utils::type_names::short_type_name;

/// 레지스트리가 관리하는 모든 인스턴스의 공유 핸들
pub type Shared<T> = Rc<RefCell<T>>;

/// 값을 [`Shared`] 핸들로 감쌉니다.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// 불투명한 인스턴스 식별자
///
/// v4 UUID 기반이므로 재사용되지 않습니다. nil UUID가 "미할당" 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    pub const UNSET: EntityId = EntityId(Uuid::nil());

    /// 새로운 고유 식별자를 생성합니다.
    pub fn generate() -> Self {
        EntityId(Uuid::new_v4())
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            write!(f, "<unset>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// 인스턴스 생명주기 상태
///
/// `Constructed → Prepared → Active → Destroyed` 순서로만 진행하며
/// `Destroyed`는 종료 상태입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleState {
    /// 생성자가 만든 직후, 식별자 없음
    Constructed,
    /// 식별자와 레지스트리가 연결됨
    Prepared,
    /// `add_subscriptions`까지 완료됨
    Active,
    Destroyed,
}

/// 파괴 옵저버 구독 핸들
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// 파괴 시 옵저버에게 전달되는 정보
#[derive(Debug, Clone, Copy)]
pub struct DestroyEvent {
    pub id: EntityId,
    pub type_name: &'static str,
}

pub type DestroyObserver = Box<dyn FnMut(&DestroyEvent)>;

/// 관리 인스턴스가 품는 공통 상태
///
/// 식별자, 파괴 옵저버, 레지스트리 역참조, 생명주기 상태를 보관합니다.
pub struct EntityCore {
    id: EntityId,
    state: LifecycleState,
    registry: Option<WeakRegistry>,
    observers: Vec<(ObserverId, DestroyObserver)>,
    next_observer: u64,
    /// (레지스트리 id, 그 레지스트리의 제거 옵저버)
    registry_subscriptions: Vec<(EntityId, ObserverId)>,
}

impl EntityCore {
    pub fn new() -> Self {
        Self {
            id: EntityId::UNSET,
            state: LifecycleState::Constructed,
            registry: None,
            observers: Vec::new(),
            next_observer: 0,
            registry_subscriptions: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == LifecycleState::Destroyed
    }

    /// 소유 레지스트리가 아직 살아 있으면 그 핸들을 반환합니다.
    pub fn registry(&self) -> Option<Registry> {
        self.registry.as_ref().and_then(WeakRegistry::upgrade)
    }

    /// 식별자와 레지스트리가 설정되어 있고 파괴되지 않았는지 확인합니다.
    pub fn is_valid(&self) -> bool {
        !self.id.is_unset() && !self.is_destroyed() && self.registry().is_some()
    }

    /// 파괴 시 한 번 호출될 콜백을 등록합니다.
    ///
    /// 이미 파괴된 인스턴스에 등록된 콜백은 절대 호출되지 않습니다.
    pub fn on_destroyed(&mut self, observer: impl FnMut(&DestroyEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        if !self.is_destroyed() {
            self.observers.push((id, Box::new(observer)));
        }
        id
    }

    pub fn unsubscribe(&mut self, observer: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != observer);
        self.registry_subscriptions.retain(|(_, id)| *id != observer);
        before != self.observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// 아직 식별자가 없는 경우에만 할당합니다.
    ///
    /// 파괴된 인스턴스는 식별자를 다시 받지 않습니다.
    pub(crate) fn assign_id(&mut self, id: EntityId) -> bool {
        if !self.id.is_unset() || self.state != LifecycleState::Constructed {
            return false;
        }
        self.id = id;
        self.state = LifecycleState::Prepared;
        true
    }

    pub(crate) fn is_subscribed_to(&self, registry_id: EntityId) -> bool {
        self.registry_subscriptions
            .iter()
            .any(|(owner, _)| *owner == registry_id)
    }

    pub(crate) fn subscribe_registry(
        &mut self,
        registry_id: EntityId,
        observer: impl FnMut(&DestroyEvent) + 'static,
    ) {
        if self.is_destroyed() || self.is_subscribed_to(registry_id) {
            return;
        }
        let observer = self.on_destroyed(observer);
        self.registry_subscriptions.push((registry_id, observer));
    }

    pub(crate) fn set_registry(&mut self, registry: WeakRegistry) {
        self.registry = Some(registry);
    }

    /// 구독 추가 단계를 표시합니다. 두 번째 호출은 `false`입니다.
    pub fn mark_subscriptions_added(&mut self) -> bool {
        match self.state {
            LifecycleState::Prepared => {
                self.state = LifecycleState::Active;
                true
            }
            LifecycleState::Constructed => {
                log::debug!("{} has no id yet; add_subscriptions ignored", self.id);
                false
            }
            LifecycleState::Active | LifecycleState::Destroyed => false,
        }
    }

    /// 옵저버 목록을 비우면서 각 옵저버를 정확히 한 번 호출합니다.
    ///
    /// 두 번째 호출부터는 아무 일도 하지 않고 `false`를 반환합니다.
    pub fn destroy(&mut self, type_name: &'static str) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.state = LifecycleState::Destroyed;

        let event = DestroyEvent {
            id: self.id,
            type_name,
        };
        let observers = std::mem::take(&mut self.observers);
        self.registry_subscriptions.clear();
        for (_, mut observer) in observers {
            observer(&event);
        }

        self.id = EntityId::UNSET;
        true
    }
}

impl Default for EntityCore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntityCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityCore")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .field("registered", &self.registry.is_some())
            .finish()
    }
}

/// `dyn Entity`에서 구체 타입으로 내려가기 위한 보조 trait
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// 레지스트리가 관리할 수 있는 객체의 공통 인터페이스
pub trait Entity: AsAny + 'static {
    fn core(&self) -> &EntityCore;

    fn core_mut(&mut self) -> &mut EntityCore;

    /// 진단 출력용 짧은 타입 이름
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    fn id(&self) -> EntityId {
        self.core().id()
    }

    fn state(&self) -> LifecycleState {
        self.core().state()
    }

    fn is_valid(&self) -> bool {
        self.core().is_valid()
    }

    fn registry(&self) -> Option<Registry> {
        self.core().registry()
    }

    /// 주입이 끝난 뒤 이벤트 구독을 연결하는 단계입니다.
    fn add_subscriptions(&mut self) -> bool {
        self.core_mut().mark_subscriptions_added()
    }

    /// 파괴 옵저버를 한 번 발화시킵니다. 반복 호출은 무시됩니다.
    fn destroy(&mut self) {
        let type_name = self.type_name();
        self.core_mut().destroy(type_name);
    }
}

impl dyn Entity {
    pub fn downcast_ref<T: Entity>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Entity>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// 구체 타입 `Self`가 계약 타입 `C`로 업캐스트될 수 있음을 나타냅니다.
///
/// 트레이트 객체 계약은 [`implements!`](crate::implements) 매크로로 구현하고,
/// 모든 엔티티는 자기 자신의 구체 타입을 계약으로도 사용할 수 있습니다.
pub trait Implements<C: ?Sized + 'static>: Entity + Sized {
    fn upcast(this: Shared<Self>) -> Shared<C>;
}

impl<T: Entity> Implements<T> for T {
    fn upcast(this: Shared<Self>) -> Shared<T> {
        this
    }
}

/// 구체 타입을 하나 이상의 트레이트 객체 계약에 연결합니다.
///
/// ```rust,ignore
/// implements!(BoardModel => dyn Board, dyn Model);
/// ```
#[macro_export]
macro_rules! implements {
    ($implementation:ty => $($contract:ty),+ $(,)?) => {
        $(
            impl $crate::core::Implements<$contract> for $implementation {
                fn upcast(
                    this: $crate::core::Shared<Self>,
                ) -> $crate::core::Shared<$contract> {
                    this
                }
            }
        )+
    };
}
