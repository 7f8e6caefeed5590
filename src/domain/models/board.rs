//! 보드 모델

use crate::core::{Construct, Constructor, Entity, EntityCore, Inject, Param};
use crate::implements;

/// 격자 보드 계약
pub trait Board: Entity {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn cells(&self) -> u32 {
        self.width() * self.height()
    }
}

/// 기본 보드 구현 (기본 크기 8x8)
#[derive(Debug)]
pub struct BoardModel {
    core: EntityCore,
    width: u32,
    height: u32,
}

impl BoardModel {
    pub const DEFAULT_SIZE: u32 = 8;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: EntityCore::new(),
            width,
            height,
        }
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)
    }
}

impl Entity for BoardModel {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

impl Board for BoardModel {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Construct for BoardModel {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::new(vec![Param::of::<u32>(), Param::of::<u32>()], |args| {
                BoardModel::new(
                    args.get(0).unwrap_or(Self::DEFAULT_SIZE),
                    args.get(1).unwrap_or(Self::DEFAULT_SIZE),
                )
            }),
            Constructor::from_default(),
        ]
    }
}

impl Inject for BoardModel {}

implements!(BoardModel => dyn Board);
