//! 심판 모델
//!
//! 게임 전체에 하나만 존재하는 싱글톤으로 등록하는 것을 전제로 합니다.

use crate::args;
use crate::core::{Entity, EntityCore, Inject, Injection, Shared};
use crate::domain::models::board::Board;
use crate::implements;

/// 차례를 관리하는 심판 계약
pub trait Arbiter: Entity {
    fn turn(&self) -> u32;

    /// 다음 차례로 넘어가고 새 차례 번호를 반환합니다.
    fn advance(&mut self) -> u32;

    fn board(&self) -> Option<Shared<dyn Board>>;
}

#[derive(Default)]
pub struct ArbiterModel {
    core: EntityCore,
    turn: u32,
    board: Option<Shared<dyn Board>>,
}

impl Entity for ArbiterModel {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Arbiter for ArbiterModel {
    fn turn(&self) -> u32 {
        self.turn
    }

    fn advance(&mut self) -> u32 {
        self.turn += 1;
        self.turn
    }

    fn board(&self) -> Option<Shared<dyn Board>> {
        self.board.clone()
    }
}

impl Inject for ArbiterModel {
    fn injections() -> Vec<Injection<Self>> {
        // 심판은 항상 표준 크기의 보드를 감시합니다.
        vec![
            Injection::new::<dyn Board>("board", |arbiter: &mut ArbiterModel, board| {
                arbiter.board = Some(board)
            })
            .with_args(args![8u32, 8u32]),
        ]
    }
}

implements!(ArbiterModel => dyn Arbiter);
