//! 레지스트리 진단(diagnostics) 시스템
//!
//! 레지스트리의 모든 실패는 예외가 아니라 진단으로 보고됩니다.
//! 공개 API는 `Option`/`bool`을 반환하고, 실패 원인은 [`RegistryError`]로
//! 기록되어 `log` 파사드로도 출력됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use entity_registry::core::{Registry, RegistryError};
//!
//! let registry = Registry::new();
//! assert!(registry.get::<dyn Board>(&[]).is_none());
//!
//! let missing = registry
//!     .diagnostics()
//!     .iter()
//!     .filter(|d| matches!(d.error, RegistryError::MissingBinding { .. }))
//!     .count();
//! assert_eq!(missing, 1);
//! ```

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::entity::EntityId;

/// 레지스트리 전역 에러 타입
///
/// 바인딩, 생성, 주입, 생명주기 단계에서 발생할 수 있는 모든 실패를 포괄합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// 같은 계약 타입에 대한 중복 바인딩
    #[error("Registry has already bound {contract} (rejected {implementation})")]
    DuplicateBinding {
        contract: &'static str,
        implementation: &'static str,
    },

    /// 같은 계약 타입에 대한 중복 싱글톤
    #[error("Already have singleton value for {contract}")]
    DuplicateSingleton { contract: &'static str },

    /// 요청한 계약 타입에 바인딩이 없음
    #[error("Registry has no binding for {contract}")]
    MissingBinding { contract: &'static str },

    /// 주어진 인자와 일치하는 생성자가 없음
    #[error("No matching constructor for {implementation} with args '{args}'")]
    ConstructorMismatch {
        implementation: &'static str,
        args: String,
    },

    /// 싱글톤에 생성 인자를 전달함
    #[error("Attempt to get singleton {contract}, when passing arguments {args}")]
    SingletonArguments { contract: &'static str, args: String },

    /// 생성 중인 계약 타입을 다시 생성하려 함
    #[error("Circular dependency detected: {contract} is already being constructed")]
    CircularDependency { contract: &'static str },

    /// 주입 대상이 이미 해제되었거나 빌려진 상태
    #[error("Injection target {target} is unavailable for member '{member}'")]
    TargetUnavailable {
        target: &'static str,
        member: &'static str,
    },

    /// resolve 이후에도 해결되지 않은 지연 주입
    #[error("Failed to resolve {target}.{member} <- {contract}: {reason}")]
    UnresolvedInjection {
        target: &'static str,
        member: &'static str,
        contract: &'static str,
        reason: String,
    },

    /// 타입 소거된 값이 기대하는 계약 타입이 아님 (주입 멤버 또는 저장된 핸들)
    #[error("Resolved value does not fit {target}.{member}")]
    ValueTypeMismatch {
        target: &'static str,
        member: &'static str,
    },

    #[error("Registry already resolved")]
    AlreadyResolved,

    /// 저장소에 없는 인스턴스의 파괴
    #[error("Attempt to destroy unknown {type_name} Id={id}")]
    UnknownInstance { type_name: &'static str, id: EntityId },

    #[error("Failed to find instance with id {id}")]
    InstanceNotFound { id: EntityId },

    /// 등록된 주입 기술자가 다른 구체 타입용임
    #[error("Injector for {contract} targets {expected}, not {actual}")]
    InjectorMismatch {
        contract: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl RegistryError {
    /// 기본 심각도
    ///
    /// 상태를 바꾸지 않고 무시된 요청은 경고, 요청한 작업 자체가 실패한 경우는 에러입니다.
    pub fn severity(&self) -> Severity {
        match self {
            RegistryError::DuplicateBinding { .. }
            | RegistryError::DuplicateSingleton { .. }
            | RegistryError::TargetUnavailable { .. }
            | RegistryError::UnresolvedInjection { .. }
            | RegistryError::UnknownInstance { .. }
            | RegistryError::InstanceNotFound { .. }
            | RegistryError::InjectorMismatch { .. } => Severity::Warning,
            RegistryError::MissingBinding { .. }
            | RegistryError::ConstructorMismatch { .. }
            | RegistryError::SingletonArguments { .. }
            | RegistryError::CircularDependency { .. }
            | RegistryError::ValueTypeMismatch { .. }
            | RegistryError::AlreadyResolved => Severity::Error,
        }
    }
}

/// 레지스트리 내부 결과 타입
pub type RegistryResult<T> = Result<T, RegistryError>;

/// 진단 심각도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// 기록된 단일 진단
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub error: RegistryError,
    pub at: DateTime<Utc>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.at.format("%H:%M:%S%.3f"), self.severity, self.error)
    }
}

/// 최근 진단을 보관하는 제한된 크기의 로그
///
/// 용량을 넘으면 가장 오래된 항목부터 버립니다.
#[derive(Debug)]
pub struct DiagnosticLog {
    entries: VecDeque<Diagnostic>,
    capacity: usize,
}

impl DiagnosticLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, severity: Severity, error: RegistryError) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Diagnostic {
            severity,
            error,
            at: Utc::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Diagnostic> {
        self.entries.iter().cloned().collect()
    }

    pub fn drain(&mut self) -> Vec<Diagnostic> {
        self.entries.drain(..).collect()
    }
}
