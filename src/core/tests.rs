//! 레지스트리 전체 흐름 테스트

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use super::*;
use crate::{args, implements};

// ----------------------------------------------------------------------
// 테스트용 계약과 구현
// ----------------------------------------------------------------------

trait Foo: Entity {
    fn label(&self) -> &str;

    fn partner(&self) -> Option<Shared<dyn Bar>>;
}

struct FooImpl {
    core: EntityCore,
    label: String,
    partner: Option<Shared<dyn Bar>>,
}

impl FooImpl {
    fn new(label: impl Into<String>, partner: Option<Shared<dyn Bar>>) -> Self {
        Self {
            core: EntityCore::new(),
            label: label.into(),
            partner,
        }
    }
}

impl Entity for FooImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Foo for FooImpl {
    fn label(&self) -> &str {
        &self.label
    }

    fn partner(&self) -> Option<Shared<dyn Bar>> {
        self.partner.clone()
    }
}

impl Construct for FooImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::new(vec![Param::of::<String>()], |args| {
                FooImpl::new(args.get::<String>(0).unwrap_or_default(), None)
            }),
            Constructor::new(vec![Param::shared::<dyn Bar>()], |args| {
                FooImpl::new("paired", args.shared::<dyn Bar>(0))
            }),
            // 생성자 안에서 레지스트리를 통해 협력 객체를 만듭니다.
            Constructor::new(vec![Param::of::<bool>()], |args| {
                let partner = match args.get::<bool>(0) {
                    Some(true) => args.registry().get::<dyn Bar>(&args![]),
                    _ => None,
                };
                FooImpl::new("host", partner)
            }),
            Constructor::nullary(|| FooImpl::new("plain", None)),
        ]
    }
}

impl Inject for FooImpl {}

implements!(FooImpl => dyn Foo);

trait Bar: Entity {}

#[derive(Default)]
struct BarImpl {
    core: EntityCore,
}

impl Entity for BarImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Bar for BarImpl {}

impl Construct for BarImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::from_default()]
    }
}

impl Inject for BarImpl {}

implements!(BarImpl => dyn Bar);

trait Alpha: Entity {
    fn beta(&self) -> Option<Shared<dyn Beta>>;
}

#[derive(Default)]
struct AlphaImpl {
    core: EntityCore,
    beta: Option<Shared<dyn Beta>>,
}

impl Entity for AlphaImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Alpha for AlphaImpl {
    fn beta(&self) -> Option<Shared<dyn Beta>> {
        self.beta.clone()
    }
}

impl Construct for AlphaImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::from_default()]
    }
}

impl Inject for AlphaImpl {
    fn injections() -> Vec<Injection<Self>> {
        vec![Injection::new::<dyn Beta>("beta", |alpha: &mut AlphaImpl, beta| {
            alpha.beta = Some(beta)
        })]
    }
}

implements!(AlphaImpl => dyn Alpha);

trait Beta: Entity {}

#[derive(Default)]
struct BetaImpl {
    core: EntityCore,
}

impl Entity for BetaImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Beta for BetaImpl {}

impl Construct for BetaImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::from_default()]
    }
}

impl Inject for BetaImpl {}

implements!(BetaImpl => dyn Beta);

trait Chicken: Entity {}

trait Egg: Entity {}

#[derive(Default)]
struct ChickenImpl {
    core: EntityCore,
    egg: Option<Shared<dyn Egg>>,
}

#[derive(Default)]
struct EggImpl {
    core: EntityCore,
    chicken: Option<Shared<dyn Chicken>>,
}

impl Entity for ChickenImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Entity for EggImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Chicken for ChickenImpl {}

impl Egg for EggImpl {}

impl Construct for ChickenImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::from_default()]
    }
}

impl Construct for EggImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::from_default()]
    }
}

impl Inject for ChickenImpl {
    fn injections() -> Vec<Injection<Self>> {
        vec![Injection::new::<dyn Egg>("egg", |chicken: &mut ChickenImpl, egg| {
            chicken.egg = Some(egg)
        })]
    }
}

impl Inject for EggImpl {
    fn injections() -> Vec<Injection<Self>> {
        vec![Injection::new::<dyn Chicken>("chicken", |egg: &mut EggImpl, chicken| {
            egg.chicken = Some(chicken)
        })]
    }
}

implements!(ChickenImpl => dyn Chicken);
implements!(EggImpl => dyn Egg);

#[derive(Default)]
struct DeepBeta {
    core: EntityCore,
    chicken: Option<Shared<dyn Chicken>>,
}

impl Entity for DeepBeta {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Beta for DeepBeta {}

impl Construct for DeepBeta {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::from_default()]
    }
}

impl Inject for DeepBeta {
    fn injections() -> Vec<Injection<Self>> {
        vec![Injection::new::<dyn Chicken>("chicken", |beta: &mut DeepBeta, chicken| {
            beta.chicken = Some(chicken)
        })]
    }
}

implements!(DeepBeta => dyn Beta);

trait Keeper: Entity {}

trait Gate: Entity {}

/// 주입 도중 생성된 Gate가 같은 계약에 싱글톤을 먼저 등록합니다.
#[derive(Default)]
struct KeeperImpl {
    core: EntityCore,
    gate: Option<Shared<dyn Gate>>,
}

#[derive(Default)]
struct PlainKeeper {
    core: EntityCore,
}

#[derive(Default)]
struct GateImpl {
    core: EntityCore,
}

impl Entity for KeeperImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Entity for PlainKeeper {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Entity for GateImpl {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Keeper for KeeperImpl {}

impl Keeper for PlainKeeper {}

impl Gate for GateImpl {}

impl Inject for KeeperImpl {
    fn injections() -> Vec<Injection<Self>> {
        vec![Injection::new::<dyn Gate>("gate", |keeper: &mut KeeperImpl, gate| {
            keeper.gate = Some(gate)
        })]
    }
}

impl Inject for PlainKeeper {}

impl Inject for GateImpl {}

impl Construct for GateImpl {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::new(Vec::new(), |args| {
            args.registry()
                .bind_singleton::<dyn Keeper, _>(PlainKeeper::default());
            GateImpl::default()
        })]
    }
}

implements!(KeeperImpl => dyn Keeper);
implements!(PlainKeeper => dyn Keeper);
implements!(GateImpl => dyn Gate);

// ----------------------------------------------------------------------
// 보조 함수
// ----------------------------------------------------------------------

fn count_errors(registry: &Registry, matches: impl Fn(&RegistryError) -> bool) -> usize {
    registry
        .diagnostics()
        .iter()
        .filter(|diagnostic| matches(&diagnostic.error))
        .count()
}

fn id_of<C: Entity + ?Sized>(instance: &Shared<C>) -> EntityId {
    instance.borrow().id()
}

// ----------------------------------------------------------------------
// 기본 시나리오
// ----------------------------------------------------------------------

#[test]
fn test_two_gets_give_two_instances() {
    let registry = Registry::new();
    assert!(registry.bind::<dyn Foo, FooImpl>());

    let first = registry.get::<dyn Foo>(&args![]).expect("first foo");
    let second = registry.get::<dyn Foo>(&args![]).expect("second foo");

    assert_ne!(id_of(&first), id_of(&second));
    assert!(registry.has(id_of(&first)));
    assert!(registry.has(id_of(&second)));
    assert_eq!(registry.num_instances(), 2);
    assert!(registry.diagnostics().is_empty());
}

#[test]
fn test_duplicate_singleton_is_rejected() {
    let registry = Registry::new();
    assert!(registry.bind_singleton::<dyn Foo, _>(FooImpl::new("first", None)));
    assert!(!registry.bind_singleton::<dyn Foo, _>(FooImpl::new("second", None)));

    let foo = registry.get::<dyn Foo>(&args![]).expect("singleton");
    assert_eq!(foo.borrow().label(), "first");
    assert_eq!(registry.num_singletons(), 1);
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::DuplicateSingleton { .. })),
        1
    );
}

#[test]
fn test_missing_binding_reports_once() {
    let registry = Registry::new();
    assert!(registry.get::<dyn Bar>(&args![]).is_none());

    let diagnostics = registry.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].error,
        RegistryError::MissingBinding { contract: "Bar" }
    );
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn test_deferred_injection_is_filled_by_resolve() {
    let registry = Registry::new();
    registry.bind::<dyn Alpha, AlphaImpl>();

    let alpha = registry.get::<dyn Alpha>(&args![]).expect("alpha");
    assert!(alpha.borrow().beta().is_none());
    assert_eq!(registry.pending_count(), 1);
    assert!(registry.diagnostics().is_empty());

    registry.bind::<dyn Beta, BetaImpl>();
    assert!(registry.resolve());
    assert!(registry.is_resolved());
    assert_eq!(registry.pending_count(), 0);

    let beta = alpha.borrow().beta().expect("beta injected");
    assert_eq!(beta.borrow().type_name(), "BetaImpl");
    assert!(registry.has(id_of(&beta)));
}

#[test]
fn test_double_destroy_fires_once() {
    let registry = Registry::new();
    registry.bind::<dyn Foo, FooImpl>();
    let foo = registry.get::<dyn Foo>(&args![]).expect("foo");
    let _other = registry.get::<dyn Foo>(&args![]).expect("other");

    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    foo.borrow_mut()
        .core_mut()
        .on_destroyed(move |_| counter.set(counter.get() + 1));

    foo.borrow_mut().destroy();
    assert_eq!(registry.num_instances(), 1);

    foo.borrow_mut().destroy();
    assert_eq!(fired.get(), 1);
    assert_eq!(registry.num_instances(), 1);
    assert!(registry.diagnostics().is_empty());
}

#[test]
fn test_wrong_argument_type_is_constructor_mismatch() {
    let registry = Registry::new();
    registry.bind::<dyn Foo, FooImpl>();

    assert!(registry.get::<dyn Foo>(&args![7u32]).is_none());
    assert_eq!(registry.diagnostics().len(), 1);
    assert_eq!(
        registry.diagnostics()[0].error,
        RegistryError::ConstructorMismatch {
            implementation: "FooImpl",
            args: "u32".to_string(),
        }
    );
    assert_eq!(registry.num_instances(), 0);
}

// ----------------------------------------------------------------------
// 속성
// ----------------------------------------------------------------------

#[test]
fn test_ids_are_unique_and_set() {
    let registry = Registry::new();
    registry.bind::<dyn Foo, FooImpl>();

    let ids: HashSet<EntityId> = (0..20)
        .filter_map(|_| registry.get::<dyn Foo>(&args![]))
        .map(|foo| id_of(&foo))
        .collect();

    assert_eq!(ids.len(), 20);
    assert!(ids.iter().all(|id| !id.is_unset()));
    assert!(!ids.contains(&registry.id()));
}

#[test]
fn test_singleton_args_still_return_singleton() {
    let registry = Registry::new();
    registry.bind_singleton::<dyn Foo, _>(FooImpl::new("only", None));

    let plain = registry.get::<dyn Foo>(&args![]).expect("plain");
    let with_args = registry
        .get::<dyn Foo>(&args![String::from("ignored")])
        .expect("with args");

    assert!(Rc::ptr_eq(&plain, &with_args));
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::SingletonArguments { .. })),
        1
    );
    assert!(matches!(
        registry.try_get::<dyn Foo>(&args![1u32]),
        Err(RegistryError::SingletonArguments { .. })
    ));
    assert_eq!(registry.diagnostics().len(), 1);
}

#[test]
fn test_store_consistency_after_destroys() {
    let registry = Registry::new();
    registry.bind::<dyn Bar, BarImpl>();

    let bars: Vec<Shared<dyn Bar>> = (0..6)
        .filter_map(|_| registry.get::<dyn Bar>(&args![]))
        .collect();
    for bar in bars.iter().take(4) {
        bar.borrow_mut().destroy();
    }

    assert_eq!(registry.num_instances(), 2);
    assert!(bars[..4].iter().all(|bar| bar.borrow().id().is_unset()));
    assert!(bars[4..].iter().all(|bar| registry.has_instance(bar)));
}

#[test]
fn test_resolve_twice_is_an_error() {
    let registry = Registry::new();
    assert!(registry.resolve());
    assert!(!registry.resolve());
    assert_eq!(
        count_errors(&registry, |e| *e == RegistryError::AlreadyResolved),
        1
    );
}

#[test]
fn test_unresolved_injection_is_reported_and_kept() {
    let registry = Registry::new();
    registry.bind::<dyn Alpha, AlphaImpl>();
    let alpha = registry.get::<dyn Alpha>(&args![]).expect("alpha");

    assert!(!registry.resolve());
    assert!(!registry.is_resolved());
    assert_eq!(registry.pending_count(), 1);
    assert!(alpha.borrow().beta().is_none());

    let unresolved: Vec<String> = registry
        .diagnostics()
        .iter()
        .filter(|d| matches!(d.error, RegistryError::UnresolvedInjection { .. }))
        .map(|d| d.error.to_string())
        .collect();
    assert_eq!(unresolved.len(), 1);
    assert!(unresolved[0].contains("AlphaImpl.beta <- Beta"));
    assert!(unresolved[0].contains("no binding for Beta"));
}

#[test]
fn test_nested_missing_binding_is_loud_after_resolve() {
    let registry = Registry::new();
    registry.bind::<dyn Alpha, AlphaImpl>();
    assert!(registry.resolve());

    let alpha = registry.get::<dyn Alpha>(&args![]).expect("alpha");
    assert!(alpha.borrow().beta().is_none());
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::MissingBinding { .. })),
        1
    );
    // resolve 이후의 실패는 큐에 쌓이지 않습니다.
    assert_eq!(registry.pending_count(), 0);
    assert!(!registry.is_resolved());
}

#[test]
fn test_deferral_during_resolve_is_kept() {
    let registry = Registry::new();
    registry.bind::<dyn Alpha, AlphaImpl>();
    let alpha = registry.get::<dyn Alpha>(&args![]).expect("alpha");
    assert_eq!(registry.pending_count(), 1);

    // DeepBeta는 바인딩이 없는 Chicken을 요구합니다.
    registry.bind::<dyn Beta, DeepBeta>();
    assert!(!registry.resolve());

    assert!(alpha.borrow().beta().is_some());
    assert_eq!(registry.pending_count(), 1);
    assert_eq!(
        count_errors(&registry, |e| *e == RegistryError::MissingBinding { contract: "Chicken" }),
        1
    );
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::UnresolvedInjection { .. })),
        0
    );
}

#[test]
fn test_singleton_bound_during_its_own_injection_is_kept() {
    let registry = Registry::new();
    registry.bind::<dyn Gate, GateImpl>();

    assert!(!registry.bind_singleton::<dyn Keeper, _>(KeeperImpl::default()));

    let keeper = registry.get::<dyn Keeper>(&args![]).expect("keeper");
    assert_eq!(keeper.borrow().type_name(), "PlainKeeper");
    assert_eq!(registry.num_singletons(), 1);
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::DuplicateSingleton { .. })),
        1
    );
    assert!(registry
        .instances()
        .iter()
        .all(|instance| instance.borrow().type_name() != "KeeperImpl"));
}

#[test]
fn test_dropped_target_is_discarded_by_resolve() {
    let registry = Registry::new();
    registry.bind::<dyn Alpha, AlphaImpl>();
    let alpha = registry.get::<dyn Alpha>(&args![]).expect("alpha");
    alpha.borrow_mut().destroy();
    drop(alpha);

    registry.bind::<dyn Beta, BetaImpl>();
    assert!(registry.resolve());
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::TargetUnavailable { .. })),
        1
    );
    assert_eq!(registry.num_instances(), 0);
}

#[test]
fn test_circular_dependency_is_detected() {
    let registry = Registry::new();
    registry.bind::<dyn Chicken, ChickenImpl>();
    registry.bind::<dyn Egg, EggImpl>();

    let chicken = registry.get::<dyn Chicken>(&args![]);
    assert!(chicken.is_some());
    assert_eq!(
        count_errors(&registry, |e| *e == RegistryError::CircularDependency { contract: "Chicken" }),
        1
    );
    // 닭과 알은 모두 만들어지고, 알의 chicken 멤버만 지연됩니다.
    assert_eq!(registry.num_instances(), 2);
    assert_eq!(registry.pending_count(), 1);
}

#[test]
fn test_duplicate_bindings_share_one_namespace() {
    let registry = Registry::new();
    assert!(registry.bind::<dyn Foo, FooImpl>());
    assert!(!registry.bind::<dyn Foo, FooImpl>());
    assert!(!registry.bind_singleton::<dyn Foo, _>(FooImpl::new("late", None)));

    assert!(registry.bind_singleton::<dyn Bar, _>(BarImpl::default()));
    assert!(!registry.bind::<dyn Bar, BarImpl>());

    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::DuplicateBinding { .. })),
        2
    );
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::DuplicateSingleton { .. })),
        1
    );
    assert!(registry
        .diagnostics()
        .iter()
        .all(|d| d.severity == Severity::Warning));
}

#[test]
fn test_shared_and_null_constructor_arguments() {
    let registry = Registry::new();
    registry.bind::<dyn Foo, FooImpl>();
    registry.bind::<dyn Bar, BarImpl>();
    let bar = registry.get::<dyn Bar>(&args![]).expect("bar");

    let paired = registry.get::<dyn Foo>(&args![bar.clone()]).expect("paired");
    let partner = paired.borrow().partner().expect("partner");
    assert!(Rc::ptr_eq(&partner, &bar));

    let alone = registry.get::<dyn Foo>(&[Arg::null()]).expect("alone");
    assert_eq!(alone.borrow().label(), "paired");
    assert!(alone.borrow().partner().is_none());
}

#[test]
fn test_constructor_can_use_registry() {
    let registry = Registry::new();
    registry.bind::<dyn Foo, FooImpl>();
    registry.bind::<dyn Bar, BarImpl>();

    let host = registry.get::<dyn Foo>(&args![true]).expect("host");
    let partner = host.borrow().partner().expect("partner");
    assert!(registry.has_instance(&partner));
    assert_eq!(registry.num_instances(), 2);
}

#[test]
fn test_inject_external_instance() {
    let registry = Registry::new();
    registry.bind::<dyn Alpha, AlphaImpl>();
    registry.bind::<dyn Beta, BetaImpl>();
    assert!(registry.has_injector::<dyn Alpha>());

    let alpha = registry.inject::<dyn Alpha, AlphaImpl>(shared(AlphaImpl::default()));
    assert!(alpha.borrow().beta().is_some());
    assert!(!registry.has_instance(&alpha));

    registry.inject::<dyn Alpha, BetaImpl>(shared(BetaImpl::default()));
    assert_eq!(
        count_errors(&registry, |e| matches!(
            e,
            RegistryError::InjectorMismatch {
                expected: "AlphaImpl",
                actual: "BetaImpl",
                ..
            }
        )),
        1
    );

    registry.inject::<dyn Bar, AlphaImpl>(shared(AlphaImpl::default()));
    assert_eq!(registry.diagnostics().len(), 1);
}

#[test]
fn test_prepare_is_idempotent() {
    let registry = Registry::new();
    let foo = registry.prepare(shared(FooImpl::new("outside", None)));
    let id = foo.borrow().id();

    assert!(!id.is_unset());
    assert!(foo.borrow().is_valid());
    assert_eq!(foo.borrow().state(), LifecycleState::Prepared);
    assert!(foo
        .borrow()
        .registry()
        .is_some_and(|owner| owner.ptr_eq(&registry)));

    let again = registry.prepare(foo.clone());
    assert_eq!(again.borrow().id(), id);
    assert_eq!(registry.num_instances(), 1);
    assert_eq!(foo.borrow().core().observer_count(), 1);
}

#[test]
fn test_first_of_tracks_first_instance() {
    let registry = Registry::new();
    registry.bind::<dyn Foo, FooImpl>();
    assert!(registry.first_of::<dyn Foo>().is_none());

    let first = registry.get::<dyn Foo>(&args![]).expect("first");
    let _second = registry.get::<dyn Foo>(&args![]).expect("second");
    let found = registry.first_of::<dyn Foo>().expect("indexed");
    assert!(Rc::ptr_eq(&found, &first));
    drop(found);

    first.borrow_mut().destroy();
    assert!(registry.first_of::<dyn Foo>().is_none());
}

#[test]
fn test_destroy_unknown_instance_is_a_warning() {
    let home = Registry::new();
    let stranger = Registry::new();
    let foo = home.prepare(shared(FooImpl::new("traveller", None)));
    stranger.prepare(foo.clone());
    assert_eq!(stranger.num_instances(), 0);

    foo.borrow_mut().destroy();

    assert_eq!(home.num_instances(), 0);
    assert!(home.diagnostics().is_empty());
    assert_eq!(
        count_errors(&stranger, |e| matches!(e, RegistryError::UnknownInstance { .. })),
        1
    );
    assert_eq!(stranger.diagnostics()[0].severity, Severity::Warning);
}

#[test]
fn test_get_by_id_miss_is_reported() {
    let registry = Registry::new();
    registry.bind::<dyn Bar, BarImpl>();
    let bar = registry.get::<dyn Bar>(&args![]).expect("bar");

    let found = registry.get_by_id(id_of(&bar)).expect("stored");
    assert_eq!(found.borrow().type_name(), "BarImpl");
    assert!(found.borrow().downcast_ref::<BarImpl>().is_some());

    assert!(registry.get_by_id(EntityId::generate()).is_none());
    assert_eq!(
        count_errors(&registry, |e| matches!(e, RegistryError::InstanceNotFound { .. })),
        1
    );
}

#[test]
fn test_add_all_subscriptions_runs_once() {
    let registry = Registry::new();
    registry.bind::<dyn Bar, BarImpl>();
    let bar = registry.get::<dyn Bar>(&args![]).expect("bar");
    registry.get::<dyn Bar>(&args![]);

    assert_eq!(registry.add_all_subscriptions(), 2);
    assert_eq!(registry.add_all_subscriptions(), 0);
    assert_eq!(bar.borrow().state(), LifecycleState::Active);
}

#[test]
fn test_print_lists_singletons_then_instances() {
    let registry = Registry::new();
    registry.bind_singleton::<dyn Foo, _>(FooImpl::new("only", None));
    let foo = registry.get::<dyn Foo>(&args![]).expect("singleton");
    let id = id_of(&foo);

    let printed = registry.print();
    assert_eq!(
        printed,
        format!(
            "1 Singletons:\n\tFoo -> FooImpl Id={id}\n1 Instances:\n\tFooImpl Id={id}\n"
        )
    );
    assert_eq!(
        registry.to_string(),
        format!("Registry with 1 instances and 1 singles with id {}", registry.id())
    );
}

#[test]
fn test_snapshot_json() {
    let registry = Registry::new();
    registry.bind::<dyn Alpha, AlphaImpl>();
    registry.get::<dyn Alpha>(&args![]);

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.bindings.len(), 1);
    assert_eq!(snapshot.instances.len(), 1);
    assert_eq!(snapshot.pending, vec!["AlphaImpl.beta <- Beta".to_string()]);

    let json = registry.snapshot_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["bindings"][0]["contract"], "Alpha");
    assert_eq!(value["instances"][0]["type_name"], "AlphaImpl");
    assert_eq!(value["instances"][0]["state"], "Prepared");
}

#[test]
fn test_take_diagnostics_drains() {
    let registry = Registry::new();
    registry.get::<dyn Foo>(&args![]);
    assert_eq!(registry.take_diagnostics().len(), 1);
    assert!(registry.diagnostics().is_empty());
}

#[test]
fn test_diagnostics_are_bounded_by_config() {
    let config = crate::config::RegistryConfig::default().with_max_diagnostics(3);
    let registry = Registry::with_config(config);
    for _ in 0..10 {
        registry.get::<dyn Foo>(&args![]);
    }
    assert_eq!(registry.diagnostics().len(), 3);
}
