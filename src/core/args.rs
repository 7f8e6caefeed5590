//! 생성 인자와 생성자 테이블
//!
//! 구체 타입은 [`Construct`] trait으로 위치 기반 매개변수 목록을 가진
//! 생성자들을 정적으로 선언합니다. 레지스트리는 실행 시간에 전달된
//! [`Arg`] 목록과 각 생성자의 [`Param`] 목록을 순서대로 비교하여
//! 처음으로 일치하는 생성자를 호출합니다.
//!
//! ```rust,ignore
//! impl Construct for BoardModel {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![
//!             Constructor::new(vec![Param::of::<u32>(), Param::of::<u32>()], |args| {
//!                 BoardModel::new(args.get(0).unwrap_or(8), args.get(1).unwrap_or(8))
//!             }),
//!             Constructor::from_default(),
//!         ]
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

use super::entity::{Entity, Shared};
use super::registry::Registry;
use crate::utils::type_names::short_type_name;

/// 실행 시간 타입 정보를 가진 생성 인자
///
/// 값이 없는 인자(`Arg::null()`)는 null을 허용하는 매개변수에만 대응합니다.
#[derive(Clone)]
pub struct Arg {
    value: Option<Rc<dyn Any>>,
    type_id: Option<TypeId>,
    type_name: &'static str,
}

impl Arg {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Some(Rc::new(value)),
            type_id: Some(TypeId::of::<T>()),
            type_name: short_type_name(std::any::type_name::<T>()),
        }
    }

    pub fn null() -> Self {
        Self {
            value: None,
            type_id: None,
            type_name: "null",
        }
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.as_ref().and_then(|value| value.downcast_ref::<T>())
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arg({})", self.type_name)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// `Arg` 벡터를 만듭니다.
///
/// ```rust,ignore
/// let args = args![8u32, 8u32];
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::core::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::Arg::new($value)),+]
    };
}

/// 생성자 매개변수 선언
#[derive(Debug, Clone, Copy)]
pub struct Param {
    type_id: TypeId,
    type_name: &'static str,
    nullable: bool,
}

impl Param {
    /// null을 허용하지 않는 값 매개변수
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: short_type_name(std::any::type_name::<T>()),
            nullable: false,
        }
    }

    /// null을 허용하는 매개변수
    pub fn nullable<T: Any>() -> Self {
        Self {
            nullable: true,
            ..Self::of::<T>()
        }
    }

    /// 다른 관리 인스턴스를 가리키는 참조 매개변수 (`Shared<C>`), null 허용
    pub fn shared<C: ?Sized + 'static>() -> Self {
        Self::nullable::<Shared<C>>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// 인자 하나가 이 매개변수에 대입 가능한지 확인합니다.
    pub fn accepts(&self, arg: &Arg) -> bool {
        match arg.type_id() {
            None => self.nullable,
            Some(type_id) => type_id == self.type_id,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.type_name)
        } else {
            f.write_str(self.type_name)
        }
    }
}

/// 생성자에 전달되는 인자 묶음과 레지스트리 핸들
pub struct ConstructorArgs<'a> {
    args: &'a [Arg],
    registry: &'a Registry,
}

impl<'a> ConstructorArgs<'a> {
    pub(crate) fn new(args: &'a [Arg], registry: &'a Registry) -> Self {
        Self { args, registry }
    }

    /// `index` 위치의 인자를 복제하여 반환합니다. null이면 `None`입니다.
    pub fn get<T: Any + Clone>(&self, index: usize) -> Option<T> {
        self.args.get(index)?.downcast_ref::<T>().cloned()
    }

    /// `index` 위치의 `Shared<C>` 인자를 반환합니다.
    pub fn shared<C: ?Sized + 'static>(&self, index: usize) -> Option<Shared<C>> {
        self.get::<Shared<C>>(index)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// 중첩 생성을 위해 생성 중인 레지스트리 핸들을 넘겨줍니다.
    pub fn registry(&self) -> &Registry {
        self.registry
    }
}

type Invoke<T> = Rc<dyn Fn(&ConstructorArgs<'_>) -> T>;

/// 매개변수 목록이 선언된 생성자 하나
pub struct Constructor<T> {
    params: Vec<Param>,
    invoke: Invoke<T>,
}

impl<T> Clone for Constructor<T> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            invoke: self.invoke.clone(),
        }
    }
}

impl<T: 'static> Constructor<T> {
    pub fn new(params: Vec<Param>, invoke: impl Fn(&ConstructorArgs<'_>) -> T + 'static) -> Self {
        Self {
            params,
            invoke: Rc::new(invoke),
        }
    }

    /// 인자가 없는 생성자
    pub fn nullary(invoke: impl Fn() -> T + 'static) -> Self {
        Self::new(Vec::new(), move |_| invoke())
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// 인자 개수와 각 위치의 타입이 모두 맞는지 확인합니다.
    pub fn matches(&self, args: &[Arg]) -> bool {
        if self.params.len() != args.len() {
            return false;
        }
        self.params
            .iter()
            .zip(args)
            .all(|(param, arg)| param.accepts(arg))
    }

    pub fn invoke(&self, args: &ConstructorArgs<'_>) -> T {
        (self.invoke)(args)
    }

    /// 진단용 시그니처 문자열, 예: `(u32, String?)`
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        format!("({})", params.join(", "))
    }
}

impl<T: Default + 'static> Constructor<T> {
    pub fn from_default() -> Self {
        Self::nullary(T::default)
    }
}

/// 레지스트리가 생성할 수 있는 구체 타입
pub trait Construct: Entity + Sized {
    /// 선언 순서대로 검사되는 생성자 목록
    fn constructors() -> Vec<Constructor<Self>>;
}

/// 인자와 일치하는 첫 번째 생성자를 찾습니다.
///
/// 불일치 사유는 `on_reject`로 전달되어 상세 로그에만 쓰입니다.
pub(crate) fn select_constructor<'c, T: 'static>(
    constructors: &'c [Constructor<T>],
    args: &[Arg],
    mut on_reject: impl FnMut(&Constructor<T>, &str),
) -> Option<&'c Constructor<T>> {
    for constructor in constructors {
        if constructor.params.len() != args.len() {
            on_reject(constructor, "argument count differs");
            continue;
        }
        if let Some((param, arg)) = constructor
            .params
            .iter()
            .zip(args)
            .find(|(param, arg)| !param.accepts(arg))
        {
            on_reject(constructor, &format!("cannot assign {} to {}", arg, param));
            continue;
        }
        return Some(constructor);
    }
    None
}
