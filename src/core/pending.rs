//! 지연 주입 큐 (Pending Injection Queue)
//!
//! 바인딩 시점에 해결되지 않은 주입은 여기에 쌓였다가
//! `Registry::resolve`의 단일 패스에서 한 번 재시도됩니다.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::args::Arg;
use super::entity::{Entity, Shared};
use super::errors::{RegistryError, RegistryResult};
use super::injection::{Injection, Setter};
use crate::utils::type_names::short_type_name;

type Apply = Box<dyn Fn(&Rc<dyn Any>) -> RegistryResult<()>>;

/// 아직 만족되지 않은 주입 하나
///
/// 대상은 약한 참조로만 보관하므로, 큐가 대상의 수명을 늘리지 않습니다.
pub struct PendingInjection {
    target_name: &'static str,
    member: &'static str,
    contract: TypeId,
    contract_name: &'static str,
    args: Vec<Arg>,
    reason: RegistryError,
    alive: Box<dyn Fn() -> bool>,
    apply: Apply,
}

impl PendingInjection {
    pub(crate) fn new<T: Entity>(
        target: &Shared<T>,
        injection: &Injection<T>,
            reason: RegistryError,
    ) -> Self {
        let target_name = short_type_name(std::any::type_name::<T>());
        let member = injection.member();
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        let probe = weak.clone();
        let setter = injection.setter();

        Self {
            target_name,
            member,
            contract: injection.contract(),
            contract_name: injection.contract_name(),
            args: injection.args().to_vec(),
            reason,
            alive: Box::new(move || probe.strong_count() > 0),
            apply: Box::new(move |value| {
                let target = weak
                    .upgrade()
                    .ok_or(RegistryError::TargetUnavailable { target: target_name, member })?;
                set(&target, &setter, value, target_name, member)
            }),
        }
    }

    /// 해결된 값을 대상 멤버에 즉시 대입합니다.
    pub(crate) fn assign<T: Entity>(
        target: &Shared<T>,
        injection: &Injection<T>,
        value: &Rc<dyn Any>,
    ) -> RegistryResult<()> {
        let target_name = short_type_name(std::any::type_name::<T>());
        set(target, &injection.setter(), value, target_name, injection.member())
    }

    pub fn target_name(&self) -> &'static str {
        self.target_name
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

    /// 마지막으로 실패한 원인
    pub fn reason(&self) -> &RegistryError {
        &self.reason
    }

    pub fn is_target_alive(&self) -> bool {
        (self.alive)()
    }

    pub(crate) fn apply(&self, value: &Rc<dyn Any>) -> RegistryResult<()> {
        (self.apply)(value)
    }

    pub(crate) fn with_reason(mut self, reason: RegistryError) -> Self {
        self.reason = reason;
        self
    }

    pub(crate) fn unresolved_error(&self) -> RegistryError {
        RegistryError::UnresolvedInjection {
            target: self.target_name,
            member: self.member,
            contract: self.contract_name,
            reason: self.reason.to_string(),
        }
    }
}

fn set<T: Entity>(
    target: &Shared<T>,
    setter: &Setter<T>,
    value: &Rc<dyn Any>,
    target_name: &'static str,
    member: &'static str,
) -> RegistryResult<()> {
    let mut target = target
        .try_borrow_mut()
        .map_err(|_| RegistryError::TargetUnavailable { target: target_name, member })?;
    if setter(&mut target, value) {
        Ok(())
    } else {
        Err(RegistryError::ValueTypeMismatch { target: target_name, member })
    }
}

impl fmt::Display for PendingInjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} <- {}", self.target_name, self.member, self.contract_name)
    }
}

impl fmt::Debug for PendingInjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingInjection")
            .field("target", &self.target_name)
            .field("member", &self.member)
            .field("contract", &self.contract_name)
            .field("args", &self.args)
            .field("reason", &self.reason)
            .finish()
    }
}

/// 삽입 순서를 유지하는 지연 주입 큐
#[derive(Debug, Default)]
pub(crate) struct PendingQueue {
    entries: Vec<PendingInjection>,
}

impl PendingQueue {
    pub fn push(&mut self, entry: PendingInjection) {
        self.entries.push(entry);
    }

    /// 현재 항목들을 스냅샷으로 꺼냅니다. 이후 추가되는 항목은 큐에 남습니다.
    pub fn take_all(&mut self) -> Vec<PendingInjection> {
        std::mem::take(&mut self.entries)
    }

    /// 재시도에 실패한 항목을 큐 앞쪽에 되돌려 놓습니다.
    pub fn restore(&mut self, mut unresolved: Vec<PendingInjection>) {
        unresolved.append(&mut self.entries);
        self.entries = unresolved;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingInjection> {
        self.entries.iter()
    }
}
