//! 플레이어 모델

use crate::core::{
    Construct, Constructor, Entity, EntityCore, Inject, Injection, Param, Shared,
};
use crate::domain::models::arbiter::Arbiter;
use crate::domain::models::board::Board;
use crate::implements;

/// 보드 위에서 움직이는 참가자 계약
pub trait Player: Entity {
    fn name(&self) -> &str;

    fn board(&self) -> Option<Shared<dyn Board>>;

    fn arbiter(&self) -> Option<Shared<dyn Arbiter>>;

    /// 보드와 심판이 모두 주입되었는지 여부
    fn is_seated(&self) -> bool {
        self.board().is_some() && self.arbiter().is_some()
    }
}

pub struct PlayerModel {
    core: EntityCore,
    name: String,
    board: Option<Shared<dyn Board>>,
    arbiter: Option<Shared<dyn Arbiter>>,
}

impl PlayerModel {
    pub const ANONYMOUS: &'static str = "anonymous";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: EntityCore::new(),
            name: name.into(),
            board: None,
            arbiter: None,
        }
    }
}

impl Entity for PlayerModel {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Player for PlayerModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> Option<Shared<dyn Board>> {
        self.board.clone()
    }

    fn arbiter(&self) -> Option<Shared<dyn Arbiter>> {
        self.arbiter.clone()
    }
}

impl Construct for PlayerModel {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::new(vec![Param::of::<String>()], |args| {
                PlayerModel::new(args.get::<String>(0).unwrap_or_default())
            }),
            Constructor::nullary(|| PlayerModel::new(Self::ANONYMOUS)),
        ]
    }
}

impl Inject for PlayerModel {
    fn injections() -> Vec<Injection<Self>> {
        vec![
            Injection::new::<dyn Board>("board", |player: &mut PlayerModel, board| {
                player.board = Some(board)
            }),
            Injection::new::<dyn Arbiter>("arbiter", |player: &mut PlayerModel, arbiter| {
                player.arbiter = Some(arbiter)
            }),
        ]
    }
}

implements!(PlayerModel => dyn Player);
