use std::time::Instant;

use rand::Rng;

use super::{
    config::{EggLayout, GameConfig, GrowthPolicy, InputModel, TargetPolicy},
    heading::{AxisFlags, Heading, HeadingCommand},
    scheduler::Cadence,
    state::{GameState, Nest, Position, RunState, Snake},
};

/// How a run ended; reported exactly once per terminal transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every egg delivered to the nest
    Won,
    /// The predator caught the snake
    Lost,
}

/// Pick the egg the predator chases this tick. Deterministic: a tie on
/// distance goes to the earliest-placed egg.
pub fn select_target(
    eggs: &[Position],
    predator: Position,
    policy: TargetPolicy,
) -> Option<Position> {
    match policy {
        TargetPolicy::FirstEgg => eggs.first().copied(),
        TargetPolicy::NearestEgg => eggs
            .iter()
            .copied()
            .min_by_key(|egg| egg.manhattan(predator)),
    }
}

/// The simulation engine: run lifecycle, snake movement and collision
/// resolution, and predator pursuit. Owns the two tick tracks and the
/// egg-placement rng; all entity state lives in the caller's `GameState`.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
    snake_track: Cadence,
    predator_track: Cadence,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let snake_track = Cadence::new(config.snake_interval());
        let predator_track = Cadence::new(config.predator_interval());
        Self {
            config,
            rng: rand::thread_rng(),
            snake_track,
            predator_track,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Idle state shown before the first run: entities at their start
    /// positions, no eggs on the ground yet
    pub fn initial_state(&self) -> GameState {
        GameState::new(
            Snake::new(self.config.snake_start, self.neutral_heading()),
            self.config.predator_start,
            Vec::new(),
            Nest::new(self.config.nest_position, self.config.eggs.capacity()),
        )
    }

    /// Begin a run: re-initialize every entity, scatter the eggs, and
    /// restart both tick tracks. Any leftover terminal deadline from the
    /// previous run is cleared here, so it can never end the new run.
    pub fn start(&mut self, state: &mut GameState, now: Instant) {
        state.snake = Snake::new(self.config.snake_start, self.neutral_heading());
        state.predator = self.config.predator_start;
        state.eggs = self.generate_eggs();
        state.nest = Nest::new(self.config.nest_position, state.eggs.len());
        state.collected = 0;
        state.run_state = RunState::Playing;
        state.terminal_deadline = None;
        self.snake_track.restart(now);
        self.predator_track.restart(now);
    }

    /// Store a steering change for the next snake tick; ignored unless Playing
    pub fn apply_input(&self, state: &mut GameState, command: HeadingCommand) {
        if state.run_state == RunState::Playing {
            state.snake.heading.apply(command);
        }
    }

    /// One frame of simulation: poll both tick tracks while Playing, or
    /// wait out the terminal hold. Returns the outcome on the exact frame
    /// a run ends, and `None` on every other call.
    pub fn advance(&mut self, state: &mut GameState, now: Instant) -> Option<Outcome> {
        match state.run_state {
            RunState::Playing => {
                let mut outcome = None;
                if self.snake_track.fire(now) {
                    outcome = self.snake_tick(state);
                }
                if state.run_state == RunState::Playing && self.predator_track.fire(now) {
                    outcome = self.predator_tick(state);
                }
                if outcome.is_some() {
                    state.terminal_deadline = Some(now + self.config.terminal_hold());
                }
                outcome
            }
            RunState::Won | RunState::Lost => {
                if state.terminal_deadline.is_some_and(|deadline| now >= deadline) {
                    state.run_state = RunState::Idle;
                    state.terminal_deadline = None;
                }
                None
            }
            RunState::Idle => None,
        }
    }

    /// One snake movement tick: advance the head, resolve egg pickup,
    /// nest delivery, and predator contact
    fn snake_tick(&self, state: &mut GameState) -> Option<Outcome> {
        if state.run_state != RunState::Playing {
            return None;
        }

        let (dx, dy) = state.snake.heading.delta();
        if (dx, dy) == (0, 0) {
            return None;
        }

        let tile = self.config.tile_size;
        let new_head = state.snake.head().moved_by(dx * tile, dy * tile);

        // Leaving the grid loses the run; the snake stays put
        if !self.config.contains(new_head) {
            state.run_state = RunState::Lost;
            return Some(Outcome::Lost);
        }

        state.snake.push_head(new_head);

        let mut ate_egg = false;
        if let Some(index) = state.eggs.iter().position(|egg| *egg == new_head) {
            state.eggs.remove(index);
            state.collected += 1;
            ate_egg = true;
        }

        if state.nest_full() && new_head == state.nest.position {
            // Delivery tick: the tail stays, the run is over
            state.run_state = RunState::Won;
            return Some(Outcome::Won);
        }

        let keep_tail = ate_egg && self.config.growth_policy == GrowthPolicy::GrowOnPickup;
        if !keep_tail {
            state.snake.pop_tail();
        }

        if new_head == state.predator {
            state.run_state = RunState::Lost;
            return Some(Outcome::Lost);
        }

        None
    }

    /// One predator tick: chase the targeted egg one tile per axis.
    /// Both axes may move in the same tick, unlike the snake.
    fn predator_tick(&self, state: &mut GameState) -> Option<Outcome> {
        if state.run_state != RunState::Playing {
            return None;
        }

        let Some(target) = select_target(&state.eggs, state.predator, self.config.target_policy)
        else {
            return None;
        };

        let tile = self.config.tile_size;
        let mut pos = state.predator;
        if pos.x < target.x {
            pos.x += tile;
        }
        if pos.x > target.x {
            pos.x -= tile;
        }
        if pos.y < target.y {
            pos.y += tile;
        }
        if pos.y > target.y {
            pos.y -= tile;
        }
        state.predator = pos;

        if self.config.predator_collects {
            // Stolen eggs vanish without crediting the snake
            state.eggs.retain(|egg| *egg != pos);
        }

        if pos == state.snake.head() {
            state.run_state = RunState::Lost;
            return Some(Outcome::Lost);
        }

        None
    }

    fn neutral_heading(&self) -> Heading {
        match self.config.input_model {
            InputModel::LastKeyWins => Heading::LastKeyWins(None),
            InputModel::Additive => Heading::Additive(AxisFlags::default()),
        }
    }

    fn generate_eggs(&mut self) -> Vec<Position> {
        let layout = self.config.eggs.clone();
        match layout {
            EggLayout::Fixed { positions } => positions,
            EggLayout::Random { count } => {
                let mut eggs = Vec::with_capacity(count);
                while eggs.len() < count {
                    let x = self.rng.gen_range(0..self.config.tiles_wide()) * self.config.tile_size;
                    let y = self.rng.gen_range(0..self.config.tiles_high()) * self.config.tile_size;
                    let pos = Position::new(x, y);
                    if pos != self.config.nest_position
                        && pos != self.config.predator_start
                        && !eggs.contains(&pos)
                    {
                        eggs.push(pos);
                    }
                }
                eggs
            }
        }
    }
}
