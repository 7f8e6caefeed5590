//! 레지스트리 상태의 직렬화 가능한 사본

use serde::Serialize;

use super::entity::{EntityId, LifecycleState};

#[derive(Debug, Clone, Serialize)]
pub struct BindingInfo {
    pub contract: &'static str,
    pub implementation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingletonInfo {
    pub contract: &'static str,
    pub implementation: &'static str,
    pub id: EntityId,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceInfo {
    pub id: EntityId,
    pub type_name: &'static str,
    /// 스냅샷 시점에 인스턴스가 빌려져 있었다면 `None`
    pub state: Option<LifecycleState>,
}

/// `Registry::snapshot`의 결과
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub id: EntityId,
    pub resolved: bool,
    pub bindings: Vec<BindingInfo>,
    pub singletons: Vec<SingletonInfo>,
    pub instances: Vec<InstanceInfo>,
    pub pending: Vec<String>,
    pub diagnostics: usize,
}

impl RegistrySnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
