use std::time::Duration;

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use super::state::Position;

/// How directional key input steers the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputModel {
    /// A single heading; the most recent key wins, reversals are rejected
    LastKeyWins,
    /// Independent pressed flags per arrow key; both axes may be active
    Additive,
}

/// How the predator picks which egg to chase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPolicy {
    /// Minimum Manhattan distance, ties broken by insertion order
    NearestEgg,
    /// Always the oldest remaining egg, distance ignored
    FirstEgg,
}

/// What happens to the tail on an egg-pickup tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPolicy {
    /// Tail popped every tick; the snake stays one segment long
    ConstantLength,
    /// Tail kept on pickup ticks; the snake grows with its haul
    GrowOnPickup,
}

/// Where eggs are placed at the start of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EggLayout {
    /// Uniform tile-aligned placement avoiding the nest and predator start
    Random { count: usize },
    /// A deterministic layout, used verbatim
    Fixed { positions: Vec<Position> },
}

impl EggLayout {
    /// Total eggs a run will have under this layout
    pub fn capacity(&self) -> usize {
        match self {
            EggLayout::Random { count } => *count,
            EggLayout::Fixed { positions } => positions.len(),
        }
    }
}

/// Configuration for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid width in pixels
    pub width: i32,
    /// Grid height in pixels
    pub height: i32,
    /// Edge length of one tile; all movement is in whole tiles
    pub tile_size: i32,

    pub snake_start: Position,
    pub predator_start: Position,
    pub nest_position: Position,
    pub eggs: EggLayout,

    pub input_model: InputModel,
    pub target_policy: TargetPolicy,
    pub growth_policy: GrowthPolicy,
    /// Whether the predator consumes eggs it lands on
    pub predator_collects: bool,

    /// Minimum time between snake ticks, in milliseconds
    pub snake_interval_ms: u64,
    /// Minimum time between predator ticks, in milliseconds
    pub predator_interval_ms: u64,
    /// How long a finished run stays on screen before returning to Idle
    pub terminal_hold_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            tile_size: 50,
            snake_start: Position::new(100, 100),
            predator_start: Position::new(400, 300),
            nest_position: Position::new(250, 250),
            eggs: EggLayout::Random { count: 4 },
            input_model: InputModel::LastKeyWins,
            target_policy: TargetPolicy::NearestEgg,
            growth_policy: GrowthPolicy::ConstantLength,
            predator_collects: false,
            snake_interval_ms: 250,
            predator_interval_ms: 500,
            terminal_hold_ms: 1500,
        }
    }
}

impl GameConfig {
    /// Derive a configuration for a grid of the given pixel dimensions:
    /// nest at the center tile, snake and predator at the default
    /// layout's relative spots
    pub fn sized(width: i32, height: i32, tile_size: i32) -> Self {
        let tiles_wide = width / tile_size;
        let tiles_high = height / tile_size;
        Self {
            width,
            height,
            tile_size,
            snake_start: Position::new(
                tile_size * (tiles_wide / 6).max(1),
                tile_size * (tiles_high / 6).max(1),
            ),
            predator_start: Position::new(
                tile_size * (tiles_wide * 2 / 3),
                tile_size * (tiles_high / 2),
            ),
            nest_position: Position::new(
                tile_size * ((tiles_wide - 1) / 2),
                tile_size * ((tiles_high - 1) / 2),
            ),
            ..Default::default()
        }
    }

    pub fn snake_interval(&self) -> Duration {
        Duration::from_millis(self.snake_interval_ms)
    }

    pub fn predator_interval(&self) -> Duration {
        Duration::from_millis(self.predator_interval_ms)
    }

    pub fn terminal_hold(&self) -> Duration {
        Duration::from_millis(self.terminal_hold_ms)
    }

    /// Grid width in tiles
    pub fn tiles_wide(&self) -> i32 {
        self.width / self.tile_size
    }

    /// Grid height in tiles
    pub fn tiles_high(&self) -> i32 {
        self.height / self.tile_size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Reject configurations that could never produce a playable run
    pub fn validate(&self) -> Result<()> {
        ensure!(self.tile_size > 0, "tile size must be positive");
        ensure!(
            self.width > 0 && self.width % self.tile_size == 0,
            "grid width must be a positive multiple of the tile size"
        );
        ensure!(
            self.height > 0 && self.height % self.tile_size == 0,
            "grid height must be a positive multiple of the tile size"
        );
        ensure!(
            self.tiles_wide() >= 4 && self.tiles_high() >= 4,
            "grid must be at least 4 tiles on each side"
        );

        for (name, pos) in [
            ("snake start", self.snake_start),
            ("predator start", self.predator_start),
            ("nest", self.nest_position),
        ] {
            ensure!(self.contains(pos), "{name} lies outside the grid");
            ensure!(
                pos.is_tile_aligned(self.tile_size),
                "{name} is not tile-aligned; it would be unreachable"
            );
        }

        ensure!(
            self.snake_start != self.predator_start,
            "snake and predator cannot start on the same tile"
        );

        ensure!(self.eggs.capacity() > 0, "a run needs at least one egg");
        if let EggLayout::Fixed { positions } = &self.eggs {
            for (i, egg) in positions.iter().enumerate() {
                ensure!(self.contains(*egg), "egg {i} lies outside the grid");
                ensure!(
                    egg.is_tile_aligned(self.tile_size),
                    "egg {i} is not tile-aligned"
                );
                ensure!(
                    *egg != self.nest_position && *egg != self.predator_start,
                    "egg {i} coincides with the nest or predator start"
                );
                ensure!(
                    !positions[..i].contains(egg),
                    "egg {i} duplicates an earlier egg"
                );
            }
        }

        ensure!(self.snake_interval_ms > 0, "snake cadence must be positive");
        ensure!(
            self.predator_interval_ms > 0,
            "predator cadence must be positive"
        );
        Ok(())
    }
}
