//! 엔티티 레지스트리
//!
//! 게임 객체 프레임워크를 위한 Rust 기반 인스턴스 레지스트리입니다.
//! 계약 타입 기반 바인딩, 싱글톤, 정적 기술자 테이블을 이용한 지연 의존성 주입,
//! 그리고 식별자 기반 생명주기 관리를 제공합니다.
//!
//! # Features
//!
//! - **바인딩**: 계약 trait 객체를 구체 타입 또는 싱글톤 인스턴스에 연결
//! - **생성자 선택**: 실행 시간 인자 타입으로 첫 번째 일치 생성자 호출
//! - **2단계 주입**: 즉시 해결, 실패 시 `resolve()`까지 지연
//! - **생명주기**: 한 번만 할당되는 식별자와 한 번만 발화하는 파괴 옵저버
//! - **진단**: 예외 대신 `log` 출력과 기록되는 경고/에러
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Domain Models  │ ← 계약 trait + 구체 구현
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Registry     │ ← bind / get / resolve / prepare
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Bindings, Store │ ← 바인딩 테이블, 인스턴스 저장소
//! │  Pending Queue  │ ← 지연 주입 큐
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use entity_registry::args;
//! use entity_registry::core::Registry;
//! use entity_registry::domain::{Board, BoardModel, Player, PlayerModel};
//!
//! let registry = Registry::new();
//! registry.bind::<dyn Player, PlayerModel>();
//! let player = registry.get::<dyn Player>(&args![String::from("white")]);
//!
//! registry.bind::<dyn Board, BoardModel>();
//! registry.resolve();
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
