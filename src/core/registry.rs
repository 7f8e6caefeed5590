//! # Entity Registry - 타입 색인 기반 인스턴스 레지스트리
//!
//! 계약 타입(보통 `dyn Trait`)을 구체 타입이나 싱글톤 인스턴스에 연결하고,
//! 요청 시 인스턴스를 생성하여 의존성을 주입한 뒤 식별자와 함께 보관합니다.
//!
//! ## 주요 구성 요소
//!
//! ### 바인딩 (Binding)
//! - **타입 바인딩**: `bind::<dyn Board, BoardModel>()` 이후 `get`마다 새 인스턴스 생성
//! - **싱글톤 바인딩**: `bind_singleton::<dyn Arbiter, _>(arbiter)`로 등록된 인스턴스를 항상 반환
//! - 계약 하나에는 둘 중 하나만 존재하며, 중복 바인딩은 경고 후 무시됩니다.
//!
//! ### 2단계 주입 (Bind / Resolve)
//! - 생성 직후 주입 기술자의 모든 대상을 즉시 해결합니다.
//! - 아직 바인딩이 없는 의존성은 지연 큐로 보내고 생성을 계속합니다.
//! - 모든 바인딩을 마친 뒤 `resolve()`를 한 번 호출하면 남은 항목을 다시 시도합니다.
//!
//! ### 생명주기
//! - `prepare`가 식별자, 파괴 옵저버, 레지스트리 역참조를 연결합니다.
//! - 인스턴스의 `destroy()`가 옵저버를 한 번 발화시키고, 레지스트리는 그 시점에 저장소에서 제거합니다.
//!
//! ## 순환 참조 방지
//!
//! 현재 생성 중인 계약 타입을 스택으로 추적합니다.
//! 같은 계약을 다시 생성하려 하면 `CircularDependency`로 보고하고 해당 주입은 지연됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use entity_registry::args;
//! use entity_registry::core::Registry;
//!
//! let registry = Registry::new();
//! registry.bind::<dyn Player, PlayerModel>();
//! registry.bind_singleton::<dyn Arbiter, _>(ArbiterModel::default());
//!
//! // 아직 Board 바인딩이 없으므로 player.board 주입은 지연됩니다.
//! let player = registry.get::<dyn Player>(&args![String::from("white")]);
//!
//! registry.bind::<dyn Board, BoardModel>();
//! assert!(registry.resolve());
//! ```

use std::any::{Any, TypeId};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::args::{Arg, Construct, Constructor, ConstructorArgs, select_constructor};
use super::binding::{BindingTable, Factory, Produced, SingletonEntry, TypeBinding};
use super::entity::{DestroyEvent, Entity, EntityId, Implements, Shared, shared};
use super::errors::{Diagnostic, DiagnosticLog, RegistryError, RegistryResult, Severity};
use super::injection::{Inject, InjectionDescriptor};
use super::pending::{PendingInjection, PendingQueue};
use super::snapshot::{BindingInfo, InstanceInfo, RegistrySnapshot, SingletonInfo};
use super::store::InstanceStore;
use crate::config::RegistryConfig;
use crate::utils::type_names::{arg_type_list, short_type_name};

struct RegistryInner {
    id: EntityId,
    config: RegistryConfig,
    bindings: RefCell<BindingTable>,
    store: RefCell<InstanceStore>,
    pending: RefCell<PendingQueue>,
    /// 현재 생성 중인 계약 타입들 (순환 참조 방지용)
    constructing: RefCell<Vec<TypeId>>,
    diagnostics: RefCell<DiagnosticLog>,
    resolve_attempted: Cell<bool>,
    /// resolve 패스 실행 중
    resolving: Cell<bool>,
    resolved: Cell<bool>,
}

/// 인스턴스 레지스트리 핸들
///
/// 복제는 같은 레지스트리를 가리키는 핸들을 하나 더 만듭니다.
/// 단일 스레드 전용이며, 모든 내부 대여는 생성자/세터/옵저버 호출 전에 해제됩니다.
#[derive(Clone)]
pub struct Registry {
    inner: Rc<RegistryInner>,
}

/// 인스턴스가 보관하는 비소유 역참조
#[derive(Clone, Debug)]
pub struct WeakRegistry(Weak<RegistryInner>);

impl WeakRegistry {
    pub fn upgrade(&self) -> Option<Registry> {
        self.0.upgrade().map(|inner| Registry { inner })
    }
}

fn contract_name<C: ?Sized + 'static>() -> &'static str {
    short_type_name(std::any::type_name::<C>())
}

fn downcast_typed<C: ?Sized + 'static>(
    typed: &Rc<dyn Any>,
    implementation: &'static str,
) -> RegistryResult<Shared<C>> {
    typed
        .downcast_ref::<Shared<C>>()
        .cloned()
        .ok_or(RegistryError::ValueTypeMismatch {
            target: contract_name::<C>(),
            member: implementation,
        })
}

/// 타입 바인딩의 팩토리 본체: 생성자 선택 → 생성 → 주입 → prepare
fn build<C, I>(
    registry: &Registry,
    constructors: &[Constructor<I>],
    descriptor: &InjectionDescriptor<I>,
    args: &[Arg],
) -> RegistryResult<Produced>
where
    C: ?Sized + 'static,
    I: Inject + Implements<C>,
{
    let implementation = descriptor.type_name();
    let constructor = select_constructor(constructors, args, |candidate, reason| {
        registry.verbose(40, || {
            format!("Skipped {}{}: {}", implementation, candidate.signature(), reason)
        })
    })
    .ok_or_else(|| RegistryError::ConstructorMismatch {
        implementation,
        args: arg_type_list(args),
    })?;

    let instance = shared(constructor.invoke(&ConstructorArgs::new(args, registry)));
    descriptor.apply(registry, &instance);
    let instance = registry.prepare(instance);

    let id = instance
        .try_borrow()
        .map(|entity| entity.id())
        .unwrap_or(EntityId::UNSET);
    let typed: Rc<dyn Any> = Rc::new(I::upcast(instance));
    Ok(Produced {
        id,
        implementation,
        typed,
    })
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let diagnostics = DiagnosticLog::new(config.max_diagnostics);
        Self {
            inner: Rc::new(RegistryInner {
                id: EntityId::generate(),
                config,
                bindings: RefCell::new(BindingTable::default()),
                store: RefCell::new(InstanceStore::default()),
                pending: RefCell::new(PendingQueue::default()),
                constructing: RefCell::new(Vec::new()),
                diagnostics: RefCell::new(diagnostics),
                resolve_attempted: Cell::new(false),
                resolving: Cell::new(false),
                resolved: Cell::new(false),
            }),
        }
    }

    /// 레지스트리 자신의 식별자
    pub fn id(&self) -> EntityId {
        self.inner.id
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.inner.config
    }

    pub fn downgrade(&self) -> WeakRegistry {
        WeakRegistry(Rc::downgrade(&self.inner))
    }

    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ------------------------------------------------------------------
    // 바인딩
    // ------------------------------------------------------------------

    /// 계약 `C`를 구체 타입 `I`에 연결합니다.
    ///
    /// 이미 바인딩(타입 또는 싱글톤)이 있으면 경고를 남기고 `false`를 반환합니다.
    pub fn bind<C, I>(&self) -> bool
    where
        C: ?Sized + 'static,
        I: Construct + Inject + Implements<C>,
    {
        let contract = TypeId::of::<C>();
        let name = contract_name::<C>();
        let implementation = short_type_name(std::any::type_name::<I>());

        let free = self.inner.bindings.borrow().check_free(contract, name, implementation);
        if let Err(error) = free {
            self.report(error);
            return false;
        }

        let constructors = Rc::new(I::constructors());
        let descriptor = Rc::new(InjectionDescriptor::<I>::compile());
        let recipe = descriptor.clone();
        let factory: Factory =
            Rc::new(move |registry, args| build::<C, I>(registry, &constructors, &recipe, args));

        {
            let mut bindings = self.inner.bindings.borrow_mut();
            bindings.insert_type(
                contract,
                TypeBinding {
                    contract_name: name,
                    implementation,
                    factory,
                },
            );
            bindings.insert_injector(contract, descriptor);
        }

        self.verbose(10, || format!("Bound {} -> {}", name, implementation));
        true
    }

    /// 계약 `C`에 대한 싱글톤 인스턴스를 등록합니다.
    pub fn bind_singleton<C, I>(&self, instance: I) -> bool
    where
        C: ?Sized + 'static,
        I: Inject + Implements<C>,
    {
        self.bind_shared::<C, I>(shared(instance))
    }

    /// 이미 공유 핸들로 감싼 인스턴스를 싱글톤으로 등록합니다.
    ///
    /// 성공하면 인스턴스는 주입과 `prepare`를 거친 뒤 저장됩니다.
    /// 주입 도중 같은 계약이 바인딩되면 먼저 등록된 쪽이 유지되고 `false`를 반환합니다.
    pub fn bind_shared<C, I>(&self, instance: Shared<I>) -> bool
    where
        C: ?Sized + 'static,
        I: Inject + Implements<C>,
    {
        let contract = TypeId::of::<C>();
        let name = contract_name::<C>();
        let implementation = short_type_name(std::any::type_name::<I>());

        let free = self.inner.bindings.borrow().check_free(contract, name, implementation);
        if let Err(error) = free {
            self.report(error);
            return false;
        }

        let descriptor = Rc::new(InjectionDescriptor::<I>::compile());
        let typed: Rc<dyn Any> = Rc::new(I::upcast(instance.clone()));
        let entry = SingletonEntry {
            contract_name: name,
            implementation,
            entity: instance.clone(),
            typed: typed.clone(),
        };

        descriptor.apply(self, &instance);
        let free = self.inner.bindings.borrow().check_free(contract, name, implementation);
        if let Err(error) = free {
            self.report(error);
            return false;
        }
        self.prepare(instance);
        let id = entry.id();

        {
            let mut bindings = self.inner.bindings.borrow_mut();
            bindings.insert_singleton(contract, entry);
            bindings.insert_injector(contract, descriptor);
        }
        self.inner.store.borrow_mut().index(contract, id, typed);

        self.verbose(10, || {
            format!("Bound singleton {} -> {} Id={}", name, implementation, id)
        });
        true
    }

    pub fn is_bound<C: ?Sized + 'static>(&self) -> bool {
        self.inner.bindings.borrow().is_bound(TypeId::of::<C>())
    }

    pub fn has_injector<C: ?Sized + 'static>(&self) -> bool {
        self.inner.bindings.borrow().has_injector(TypeId::of::<C>())
    }

    // ------------------------------------------------------------------
    // 생성과 조회
    // ------------------------------------------------------------------

    /// 계약 `C`의 인스턴스를 반환합니다.
    ///
    /// 싱글톤이면 그 인스턴스를, 타입 바인딩이면 `args`와 일치하는 생성자로
    /// 새 인스턴스를 만들어 반환합니다. 실패 원인은 진단으로 한 번 기록됩니다.
    /// 싱글톤에 인자를 넘기면 에러를 기록하지만 싱글톤은 그대로 반환됩니다.
    /// 파괴된 싱글톤도 계속 반환되므로 호출자는 `is_valid()`를 확인해야 합니다.
    pub fn get<C: ?Sized + 'static>(&self, args: &[Arg]) -> Option<Shared<C>> {
        let mut args = args;
        if !args.is_empty() {
            let singleton = self.inner.bindings.borrow().singleton(TypeId::of::<C>());
            if singleton.is_some() {
                self.report(RegistryError::SingletonArguments {
                    contract: contract_name::<C>(),
                    args: arg_type_list(args),
                });
                args = &[];
            }
        }

        self.try_get::<C>(args).map_err(|error| self.report(error)).ok()
    }

    /// [`get`](Self::get)과 같지만 실패를 진단에 기록하지 않고 그대로 반환합니다.
    pub fn try_get<C: ?Sized + 'static>(&self, args: &[Arg]) -> RegistryResult<Shared<C>> {
        let contract = TypeId::of::<C>();
        let name = contract_name::<C>();

        let singleton = self.inner.bindings.borrow().singleton(contract);
        if let Some(entry) = singleton {
            if !args.is_empty() {
                return Err(RegistryError::SingletonArguments {
                    contract: name,
                    args: arg_type_list(args),
                });
            }
            return downcast_typed::<C>(&entry.typed, entry.implementation);
        }

        let produced = self.construct(contract, name, args)?;
        downcast_typed::<C>(&produced.typed, produced.implementation)
    }

    /// 바인딩된 팩토리로 새 인스턴스를 만들고 계약 색인에 올립니다.
    fn construct(
        &self,
        contract: TypeId,
        name: &'static str,
        args: &[Arg],
    ) -> RegistryResult<Produced> {
        let binding = self.inner.bindings.borrow().binding(contract);
        let binding = binding.ok_or(RegistryError::MissingBinding { contract: name })?;

        let in_progress = self.inner.constructing.borrow().contains(&contract);
        if in_progress {
            return Err(RegistryError::CircularDependency { contract: name });
        }

        self.inner.constructing.borrow_mut().push(contract);
        let produced = (binding.factory)(self, args);
        self.inner.constructing.borrow_mut().pop();
        let produced = produced?;

        self.inner
            .store
            .borrow_mut()
            .index(contract, produced.id, produced.typed.clone());
        self.verbose(20, || {
            format!("Made a {} for {} Id={}", produced.implementation, name, produced.id)
        });
        Ok(produced)
    }

    /// 주입 대상 하나에 넣을 값을 구합니다. 싱글톤이 우선입니다.
    pub(crate) fn resolve_dependency(
        &self,
        contract: TypeId,
        name: &'static str,
        args: &[Arg],
    ) -> RegistryResult<Rc<dyn Any>> {
        let singleton = self.inner.bindings.borrow().singleton(contract);
        if let Some(entry) = singleton {
            return Ok(entry.typed);
        }
        self.construct(contract, name, args).map(|produced| produced.typed)
    }

    pub fn get_by_id(&self, id: EntityId) -> Option<Shared<dyn Entity>> {
        let found = self.inner.store.borrow().get(id);
        if found.is_none() {
            self.report(RegistryError::InstanceNotFound { id });
        }
        found
    }

    pub fn has(&self, id: EntityId) -> bool {
        self.inner.store.borrow().contains(id)
    }

    /// 같은 할당을 가리키는 인스턴스가 저장되어 있는지 확인합니다.
    pub fn has_instance<T: ?Sized>(&self, instance: &Shared<T>) -> bool {
        self.inner
            .store
            .borrow()
            .contains_ptr(Rc::as_ptr(instance).cast::<()>())
    }

    /// 계약 `C`로 처음 만들어진 살아 있는 인스턴스
    pub fn first_of<C: ?Sized + 'static>(&self) -> Option<Shared<C>> {
        self.inner.store.borrow().first_of::<C>()
    }

    /// 삽입 순서대로 정렬된 인스턴스 사본
    pub fn instances(&self) -> Vec<Shared<dyn Entity>> {
        let snapshot = self.inner.store.borrow().snapshot();
        snapshot.into_iter().map(|stored| stored.entity).collect()
    }

    pub fn num_instances(&self) -> usize {
        self.inner.store.borrow().len()
    }

    pub fn num_singletons(&self) -> usize {
        self.inner.bindings.borrow().num_singletons()
    }

    // ------------------------------------------------------------------
    // 주입
    // ------------------------------------------------------------------

    /// 해결하지 못한 주입을 큐에 넣습니다.
    ///
    /// `resolve()`가 끝난 뒤에는 큐를 다시 비울 방법이 없으므로 보고만 하고 버립니다.
    pub(crate) fn defer(&self, entry: PendingInjection) {
        let attempted = self.inner.resolve_attempted.get();
        let loud = attempted || !matches!(entry.reason(), RegistryError::MissingBinding { .. });
        if loud {
            self.report(entry.reason().clone());
        } else {
            self.verbose(10, || format!("Deferred {}: {}", entry, entry.reason()));
        }
        self.inner.resolved.set(false);

        if attempted && !self.inner.resolving.get() {
            self.verbose(10, || format!("Dropped {}", entry));
            return;
        }
        self.inner.pending.borrow_mut().push(entry);
    }

    /// 레지스트리 밖에서 만든 인스턴스에 계약 `C`의 주입 기술자를 적용합니다.
    ///
    /// 기술자의 구체 타입이 `I`가 아니면 경고만 남깁니다.
    pub fn inject<C, I>(&self, instance: Shared<I>) -> Shared<I>
    where
        C: ?Sized + 'static,
        I: Entity,
    {
        let contract = TypeId::of::<C>();
        let injector = self.inner.bindings.borrow().injector(contract);
        let Some(injector) = injector else {
            self.verbose(20, || format!("No injector for {}", contract_name::<C>()));
            return instance;
        };

        match (*injector).as_any().downcast_ref::<InjectionDescriptor<I>>() {
            Some(descriptor) => {
                let deferred = descriptor.apply(self, &instance);
                self.verbose(20, || {
                    format!(
                        "Injected {} targets into {} ({} deferred)",
                        descriptor.len(),
                        descriptor.type_name(),
                        deferred
                    )
                });
            }
            None => self.report(RegistryError::InjectorMismatch {
                contract: contract_name::<C>(),
                expected: injector.target_name(),
                actual: short_type_name(std::any::type_name::<I>()),
            }),
        }
        instance
    }

    /// 지연된 주입을 한 번 다시 시도합니다.
    ///
    /// 두 번째 호출은 `AlreadyResolved`를 기록하고 `false`를 반환합니다.
    /// 큐가 비었을 때만 `true`입니다.
    pub fn resolve(&self) -> bool {
        if self.inner.resolve_attempted.replace(true) {
            self.report(RegistryError::AlreadyResolved);
            return false;
        }

        let snapshot = self.inner.pending.borrow_mut().take_all();
        self.verbose(10, || format!("Resolving {} pending injections", snapshot.len()));
        self.inner.resolving.set(true);

        let mut unresolved = Vec::new();
        for entry in snapshot {
            if !entry.is_target_alive() {
                self.report(RegistryError::TargetUnavailable {
                    target: entry.target_name(),
                    member: entry.member(),
                });
                continue;
            }

            let outcome = self
                .resolve_dependency(entry.contract(), entry.contract_name(), entry.args())
                .and_then(|value| entry.apply(&value));
            match outcome {
                Ok(()) => self.verbose(20, || format!("Resolved {}", entry)),
                Err(reason) => unresolved.push(entry.with_reason(reason)),
            }
        }

        self.inner.resolving.set(false);

        for entry in &unresolved {
            self.report(entry.unresolved_error());
        }
        self.inner.pending.borrow_mut().restore(unresolved);

        let resolved = self.inner.pending.borrow().is_empty();
        self.inner.resolved.set(resolved);
        resolved
    }

    /// `resolve()`가 남김없이 끝났는지 여부
    pub fn is_resolved(&self) -> bool {
        self.inner.resolved.get()
    }

    pub fn pending_count(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    // ------------------------------------------------------------------
    // 생명주기
    // ------------------------------------------------------------------

    /// 인스턴스에 식별자, 파괴 옵저버, 레지스트리 역참조를 연결합니다.
    ///
    /// 식별자가 새로 할당된 경우에만 저장소에 들어갑니다. 여러 번 호출해도 안전합니다.
    pub fn prepare<I: Entity>(&self, instance: Shared<I>) -> Shared<I> {
        let entity: Shared<dyn Entity> = instance.clone();
        self.prepare_entity(&entity, short_type_name(std::any::type_name::<I>()));
        instance
    }

    fn prepare_entity(&self, entity: &Shared<dyn Entity>, type_name: &'static str) {
        let registry_id = self.id();
        let (id, fresh) = {
            let Ok(mut instance) = entity.try_borrow_mut() else {
                self.report(RegistryError::TargetUnavailable {
                    target: type_name,
                    member: "prepare",
                });
                return;
            };
            if instance.core().is_destroyed() {
                self.verbose(20, || format!("Skipped prepare of destroyed {}", type_name));
                return;
            }

            let core = instance.core_mut();
            let fresh = core.assign_id(EntityId::generate());
            let observer = self.downgrade();
            core.subscribe_registry(registry_id, move |event| {
                if let Some(registry) = observer.upgrade() {
                    registry.instance_destroyed(event);
                }
            });
            core.set_registry(self.downgrade());
            (core.id(), fresh)
        };

        if fresh {
            self.inner
                .store
                .borrow_mut()
                .insert(id, entity.clone(), type_name);
            self.verbose(30, || format!("Prepared {} Id={}", type_name, id));
        }
    }

    /// 파괴 옵저버에서 호출됩니다.
    fn instance_destroyed(&self, event: &DestroyEvent) {
        let removed = self.inner.store.borrow_mut().remove(event.id);
        match removed {
            Some(entity) => {
                drop(entity);
                self.verbose(30, || {
                    format!("Removed {} Id={}", event.type_name, event.id)
                });
            }
            None => self.report(RegistryError::UnknownInstance {
                type_name: event.type_name,
                id: event.id,
            }),
        }
    }

    /// 저장된 모든 인스턴스의 `add_subscriptions`를 호출합니다.
    ///
    /// 사본을 순회하므로 호출 중 인스턴스가 추가되거나 제거되어도 안전합니다.
    /// 새로 활성화된 인스턴스 수를 반환합니다.
    pub fn add_all_subscriptions(&self) -> usize {
        self.instances()
            .iter()
            .filter(|entity| {
                entity
                    .try_borrow_mut()
                    .map(|mut entity| entity.add_subscriptions())
                    .unwrap_or(false)
            })
            .count()
    }

    // ------------------------------------------------------------------
    // 진단과 출력
    // ------------------------------------------------------------------

    /// 실패를 로그로 출력하고 진단 로그에 기록합니다.
    pub(crate) fn report(&self, error: RegistryError) {
        let severity = error.severity();
        let prefix = &self.inner.config.log_prefix;
        match severity {
            Severity::Warning => log::warn!("[{}] {}", prefix, error),
            Severity::Error => log::error!("[{}] {}", prefix, error),
        }
        self.inner.diagnostics.borrow_mut().push(severity, error);
    }

    /// 상세도 임계값 이하의 메시지만 `debug!`로 출력합니다. 메시지는 필요할 때만 만들어집니다.
    pub(crate) fn verbose(&self, level: u8, message: impl FnOnce() -> String) {
        if level <= self.inner.config.verbosity && log::log_enabled!(log::Level::Debug) {
            log::debug!("[{}] {}", self.inner.config.log_prefix, message());
        }
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner.diagnostics.borrow().to_vec()
    }

    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.inner.diagnostics.borrow_mut().drain()
    }

    /// 싱글톤과 살아 있는 인스턴스 목록
    pub fn print(&self) -> String {
        let singletons = self.inner.bindings.borrow().singleton_list();
        let instances = self.inner.store.borrow().snapshot();

        let mut out = format!("{} Singletons:\n", singletons.len());
        for entry in &singletons {
            out.push_str(&format!(
                "\t{} -> {} Id={}\n",
                entry.contract_name,
                entry.implementation,
                entry.id()
            ));
        }
        out.push_str(&format!("{} Instances:\n", instances.len()));
        for stored in &instances {
            out.push_str(&format!("\t{} Id={}\n", stored.type_name, stored.id));
        }
        out
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let (bindings, singletons) = {
            let table = self.inner.bindings.borrow();
            (table.binding_list(), table.singleton_list())
        };
        let instances = self.inner.store.borrow().snapshot();
        let pending: Vec<String> = self.inner.pending.borrow().iter().map(ToString::to_string).collect();

        RegistrySnapshot {
            id: self.id(),
            resolved: self.is_resolved(),
            bindings: bindings
                .into_iter()
                .map(|(contract, implementation)| BindingInfo {
                    contract,
                    implementation,
                })
                .collect(),
            singletons: singletons
                .iter()
                .map(|entry| SingletonInfo {
                    contract: entry.contract_name,
                    implementation: entry.implementation,
                    id: entry.id(),
                })
                .collect(),
            instances: instances
                .iter()
                .map(|stored| InstanceInfo {
                    id: stored.id,
                    type_name: stored.type_name,
                    state: stored.entity.try_borrow().ok().map(|entity| entity.state()),
                })
                .collect(),
            pending,
            diagnostics: self.inner.diagnostics.borrow().len(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        self.snapshot().to_json()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registry with {} instances and {} singles with id {}",
            self.num_instances(),
            self.num_singletons(),
            self.id()
        )
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("id", &self.inner.id)
            .field("instances", &self.num_instances())
            .field("singletons", &self.num_singletons())
            .field("pending", &self.pending_count())
            .finish()
    }
}
