//! # 타입 이름 유틸리티
//!
//! 진단 메시지에 쓰이는 타입 이름과 인자 목록 포맷팅 함수들입니다.

use crate::core::Arg;

/// 모듈 경로를 제거한 짧은 타입 이름을 반환합니다.
///
/// `std::any::type_name`은 전체 경로를 포함하므로
/// (예: `entity_registry::domain::models::BoardModel`),
/// 제네릭 인자 앞부분의 마지막 경로 조각만 남깁니다.
/// 트레이트 객체 계약은 `dyn` 접두어 없이 trait 이름만 남습니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(short_type_name("app::models::Board"), "Board");
/// assert_eq!(short_type_name("dyn app::models::Board"), "Board");
/// ```
pub fn short_type_name(type_name: &'static str) -> &'static str {
    last_segment(type_name.strip_prefix("dyn ").unwrap_or(type_name))
}

fn last_segment(type_name: &'static str) -> &'static str {
    let head_end = type_name.find('<').unwrap_or(type_name.len());
    match type_name[..head_end].rfind("::") {
        Some(pos) => &type_name[pos + 2..],
        None => type_name,
    }
}

/// 인자들의 타입 목록을 쉼표로 이어 붙입니다. null 인자는 `null`로 표시됩니다.
pub fn arg_type_list(args: &[Arg]) -> String {
    args.iter()
        .map(Arg::type_name)
        .collect::<Vec<_>>()
        .join(", ")
}
