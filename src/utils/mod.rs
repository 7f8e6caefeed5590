//! 공통 유틸리티 함수 모듈
//!
//! 레지스트리 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 타입 이름 정리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`type_names`] - 진단 메시지용 짧은 타입 이름과 인자 목록 포맷팅
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use entity_registry::utils::type_names::short_type_name;
//! use entity_registry::utils::display_terminal::print_boxed_title;
//!
//! assert_eq!(short_type_name("dyn app::Board"), "Board");
//! print_boxed_title("Registry Ready");
//! ```

pub mod display_terminal;
pub mod type_names;
