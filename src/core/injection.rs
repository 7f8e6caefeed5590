//! # 주입 기술자 (Injection Descriptor)
//!
//! 구체 타입마다 생성 직후 채워야 할 멤버 목록을 정적으로 선언합니다.
//! 실행 시간 리플렉션 없이, 각 항목은 세터 함수와 필요한 계약 타입,
//! 그리고 의존성을 새로 만들어야 할 때 쓸 생성 인자를 가집니다.
//!
//! ```rust,ignore
//! impl Inject for PlayerModel {
//!     fn injections() -> Vec<Injection<Self>> {
//!         vec![
//!             Injection::new::<dyn Board>("board", |player, board| player.board = Some(board)),
//!             Injection::new::<dyn Clock>("clock", |player, clock| player.clock = Some(clock))
//!                 .with_args(args![60u32]),
//!         ]
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::rc::Rc;

use super::args::Arg;
use super::entity::{AsAny, Entity, Shared};
use super::pending::PendingInjection;
use super::registry::Registry;
use crate::utils::type_names::short_type_name;

pub(crate) type Setter<T> = Rc<dyn Fn(&mut T, &Rc<dyn Any>) -> bool>;

/// 주입 대상 멤버 하나
pub struct Injection<T> {
    member: &'static str,
    contract: TypeId,
    contract_name: &'static str,
    args: Vec<Arg>,
    setter: Setter<T>,
}

impl<T> Clone for Injection<T> {
    fn clone(&self) -> Self {
        Self {
            member: self.member,
            contract: self.contract,
            contract_name: self.contract_name,
            args: self.args.clone(),
            setter: self.setter.clone(),
        }
    }
}

impl<T: 'static> Injection<T> {
    /// 계약 타입 `C`의 값을 `member`에 대입하는 항목을 만듭니다.
    pub fn new<C: ?Sized + 'static>(
        member: &'static str,
        assign: impl Fn(&mut T, Shared<C>) + 'static,
    ) -> Self {
        let setter: Setter<T> = Rc::new(move |target: &mut T, value: &Rc<dyn Any>| {
            match value.downcast_ref::<Shared<C>>() {
                Some(value) => {
                    assign(target, value.clone());
                    true
                }
                None => false,
            }
        });
        Self {
            member,
            contract: TypeId::of::<C>(),
            contract_name: short_type_name(std::any::type_name::<C>()),
            args: Vec::new(),
            setter,
        }
    }

    /// 의존성을 새로 생성해야 할 때 사용할 생성 인자
    pub fn with_args(mut self, args: Vec<Arg>) -> Self {
        self.args = args;
        self
    }

    pub fn member(&self) -> &'static str {
        self.member
    }

    pub fn contract(&self) -> TypeId {
        self.contract
    }

    pub fn contract_name(&self) -> &'static str {
        self.contract_name
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub(crate) fn setter(&self) -> Setter<T> {
        self.setter.clone()
    }
}

/// 의존성 주입 대상을 선언하는 trait
///
/// 주입할 멤버가 없는 타입은 빈 구현(`impl Inject for X {}`)이면 됩니다.
pub trait Inject: Entity + Sized {
    fn injections() -> Vec<Injection<Self>> {
        Vec::new()
    }
}

/// 구체 타입 하나에 대해 컴파일된 주입 목록
pub struct InjectionDescriptor<T> {
    type_name: &'static str,
    targets: Vec<Injection<T>>,
}

impl<T: Inject> InjectionDescriptor<T> {
    pub fn compile() -> Self {
        Self {
            type_name: short_type_name(std::any::type_name::<T>()),
            targets: T::injections(),
        }
    }
}

impl<T: Entity> InjectionDescriptor<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn targets(&self) -> &[Injection<T>] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// 모든 대상을 동기적으로 해결하고, 실패한 대상은 지연 큐로 보냅니다.
    ///
    /// 지연된 항목 수를 반환합니다.
    pub(crate) fn apply(&self, registry: &Registry, target: &Shared<T>) -> usize {
        let mut deferred = 0;
        for injection in &self.targets {
            let outcome = registry
                .resolve_dependency(injection.contract, injection.contract_name, &injection.args)
                .and_then(|value| PendingInjection::assign(target, injection, &value));

            match outcome {
                Ok(()) => registry.verbose(30, || {
                    format!(
                        "Injected {} into {}.{}",
                        injection.contract_name, self.type_name, injection.member
                    )
                }),
                Err(reason) => {
                    registry.defer(PendingInjection::new(target, injection, reason));
                    deferred += 1;
                }
            }
        }
        deferred
    }
}

/// 계약 타입별로 저장되는 타입 소거된 주입 기술자
pub(crate) trait Injector: AsAny {
    fn target_name(&self) -> &'static str;
}

impl<T: Entity> Injector for InjectionDescriptor<T> {
    fn target_name(&self) -> &'static str {
        self.type_name
    }
}
