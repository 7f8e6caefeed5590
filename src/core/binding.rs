//! 계약 타입별 바인딩 테이블
//!
//! 계약 하나에는 타입 바인딩 또는 싱글톤 중 하나만 존재할 수 있습니다.
//! 한 번 등록된 바인딩은 바뀌지 않습니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

use super::args::Arg;
use super::entity::{Entity, EntityId, Shared};
use super::errors::{RegistryError, RegistryResult};
use super::injection::Injector;
use super::registry::Registry;

/// 팩토리가 만들어 낸 인스턴스
pub(crate) struct Produced {
    pub id: EntityId,
    pub implementation: &'static str,
    /// `Shared<C>`를 담은 타입 소거 핸들
    pub typed: Rc<dyn Any>,
}

pub(crate) type Factory = Rc<dyn Fn(&Registry, &[Arg]) -> RegistryResult<Produced>>;

/// 계약 → 구체 타입 매핑
#[derive(Clone)]
pub(crate) struct TypeBinding {
    pub contract_name: &'static str,
    pub implementation: &'static str,
    pub factory: Factory,
}

/// 계약 → 인스턴스 매핑
#[derive(Clone)]
pub(crate) struct SingletonEntry {
    pub contract_name: &'static str,
    pub implementation: &'static str,
    pub entity: Shared<dyn Entity>,
    pub typed: Rc<dyn Any>,
}

impl SingletonEntry {
    /// 인스턴스가 빌려진 상태면 `UNSET`을 돌려줍니다.
    pub fn id(&self) -> EntityId {
        self.entity
            .try_borrow()
            .map(|entity| entity.id())
            .unwrap_or(EntityId::UNSET)
    }
}

#[derive(Default)]
pub(crate) struct BindingTable {
    types: HashMap<TypeId, TypeBinding>,
    singletons: HashMap<TypeId, SingletonEntry>,
    injectors: HashMap<TypeId, Rc<dyn Injector>>,
}

impl BindingTable {
    /// 계약에 아직 아무 바인딩도 없는지 확인합니다.
    pub fn check_free(
        &self,
        contract: TypeId,
        contract_name: &'static str,
        implementation: &'static str,
    ) -> RegistryResult<()> {
        if self.singletons.contains_key(&contract) {
            return Err(RegistryError::DuplicateSingleton { contract: contract_name });
        }
        if self.types.contains_key(&contract) {
            return Err(RegistryError::DuplicateBinding {
                contract: contract_name,
                implementation,
            });
        }
        Ok(())
    }

    pub fn insert_type(&mut self, contract: TypeId, binding: TypeBinding) {
        self.types.insert(contract, binding);
    }

    pub fn insert_singleton(&mut self, contract: TypeId, entry: SingletonEntry) {
        self.singletons.insert(contract, entry);
    }

    pub fn insert_injector(&mut self, contract: TypeId, injector: Rc<dyn Injector>) {
        self.injectors.insert(contract, injector);
    }

    pub fn singleton(&self, contract: TypeId) -> Option<SingletonEntry> {
        self.singletons.get(&contract).cloned()
    }

    pub fn binding(&self, contract: TypeId) -> Option<TypeBinding> {
        self.types.get(&contract).cloned()
    }

    pub fn injector(&self, contract: TypeId) -> Option<Rc<dyn Injector>> {
        self.injectors.get(&contract).cloned()
    }

    pub fn is_bound(&self, contract: TypeId) -> bool {
        self.types.contains_key(&contract) || self.singletons.contains_key(&contract)
    }

    pub fn has_injector(&self, contract: TypeId) -> bool {
        self.injectors.contains_key(&contract)
    }

    pub fn num_singletons(&self) -> usize {
        self.singletons.len()
    }

    /// 계약 이름순으로 정렬된 싱글톤 목록
    pub fn singleton_list(&self) -> Vec<SingletonEntry> {
        let mut entries: Vec<SingletonEntry> = self.singletons.values().cloned().collect();
        entries.sort_by(|a, b| a.contract_name.cmp(b.contract_name));
        entries
    }

    /// 계약 이름순으로 정렬된 (계약, 구체 타입) 목록
    pub fn binding_list(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .types
            .values()
            .map(|binding| (binding.contract_name, binding.implementation))
            .collect();
        entries.sort();
        entries
    }
}
