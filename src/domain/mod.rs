//! # Domain Layer Module
//!
//! 레지스트리 위에서 조립되는 예제 도메인입니다.
//! 데모 바이너리와 테스트가 바인딩, 싱글톤, 지연 주입 흐름을 확인하는 데 사용합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! └── Models       - 계약 trait + 구체 구현 (Board, Player, Arbiter)
//!      │
//!      ▼
//! Core Layer (Registry)
//!      ├── bind / bind_singleton
//!      ├── get  → construct → inject → prepare
//!      └── resolve
//! ```
//!
//! ## 새 모델 추가 순서
//!
//! 1. `EntityCore` 필드를 가진 구조체 정의 + `Entity` 구현
//! 2. 계약 trait 정의 (`pub trait Dice: Entity`)
//! 3. `Construct`로 생성자 목록, `Inject`로 주입 대상 선언
//! 4. `implements!(DiceModel => dyn Dice)`
//! 5. `registry.bind::<dyn Dice, DiceModel>()`

pub mod models;

pub use models::*;
