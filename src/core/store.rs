//! 식별자 기반 인스턴스 저장소
//!
//! 살아 있는 관리 인스턴스를 `EntityId`로 보관하고, 계약 타입별로
//! 처음 만들어진 인스턴스를 색인합니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

use super::entity::{Entity, EntityId, Shared};

struct Slot {
    entity: Shared<dyn Entity>,
    type_name: &'static str,
    seq: u64,
}

/// 저장소 내용의 읽기 전용 사본 항목
#[derive(Clone)]
pub(crate) struct StoredInstance {
    pub id: EntityId,
    pub type_name: &'static str,
    pub entity: Shared<dyn Entity>,
}

#[derive(Default)]
pub(crate) struct InstanceStore {
    slots: HashMap<EntityId, Slot>,
    next_seq: u64,
    /// 계약 → (소유 인스턴스 id, `Shared<C>`)
    index: HashMap<TypeId, (EntityId, Rc<dyn Any>)>,
}

impl InstanceStore {
    /// 이미 같은 id가 있으면 `false`를 반환하고 아무것도 바꾸지 않습니다.
    pub fn insert(&mut self, id: EntityId, entity: Shared<dyn Entity>, type_name: &'static str) -> bool {
        if id.is_unset() || self.slots.contains_key(&id) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.insert(id, Slot { entity, type_name, seq });
        true
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Shared<dyn Entity>> {
        let slot = self.slots.remove(&id)?;
        self.index.retain(|_, (owner, _)| *owner != id);
        Some(slot.entity)
    }

    pub fn get(&self, id: EntityId) -> Option<Shared<dyn Entity>> {
        self.slots.get(&id).map(|slot| slot.entity.clone())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    /// 같은 할당을 가리키는 핸들이 저장되어 있는지 확인합니다.
    pub fn contains_ptr(&self, ptr: *const ()) -> bool {
        self.slots
            .values()
            .any(|slot| Rc::as_ptr(&slot.entity).cast::<()>() == ptr)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 삽입 순서대로 정렬된 사본
    pub fn snapshot(&self) -> Vec<StoredInstance> {
        let mut slots: Vec<(&EntityId, &Slot)> = self.slots.iter().collect();
        slots.sort_by_key(|(_, slot)| slot.seq);
        slots
            .into_iter()
            .map(|(id, slot)| StoredInstance {
                id: *id,
                type_name: slot.type_name,
                entity: slot.entity.clone(),
            })
            .collect()
    }

    /// 계약의 첫 인스턴스만 색인합니다. 저장소에 없는 id는 무시됩니다.
    pub fn index(&mut self, contract: TypeId, id: EntityId, typed: Rc<dyn Any>) -> bool {
        if !self.slots.contains_key(&id) || self.index.contains_key(&contract) {
            return false;
        }
        self.index.insert(contract, (id, typed));
        true
    }

    pub fn first_of<C: ?Sized + 'static>(&self) -> Option<Shared<C>> {
        let (_, typed) = self.index.get(&TypeId::of::<C>())?;
        typed.downcast_ref::<Shared<C>>().cloned()
    }
}
