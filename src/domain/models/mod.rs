//! # Domain Models Module
//!
//! 레지스트리로 조립되는 예제 게임 모델들입니다.
//! 각 모델은 트레이트 객체 계약(`dyn Board` 등)과 그 기본 구현으로 이루어집니다.
//!
//! ## 의존 관계
//!
//! ```text
//! PlayerModel ──board──▶ dyn Board   (요청마다 새 BoardModel)
//!      │
//!      └──arbiter──▶ dyn Arbiter    (싱글톤 ArbiterModel)
//!                         │
//!                         └──board(8, 8)──▶ dyn Board
//! ```
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── mod.rs       ← 이 파일 (모듈 진입점)
//! ├── board.rs     ← Board / BoardModel
//! ├── player.rs    ← Player / PlayerModel
//! └── arbiter.rs   ← Arbiter / ArbiterModel
//! ```

pub mod arbiter;
pub mod board;
pub mod player;

pub use arbiter::{Arbiter, ArbiterModel};
pub use board::{Board, BoardModel};
pub use player::{Player, PlayerModel};
