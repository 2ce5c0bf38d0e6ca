use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// A position on the game grid, in pixels, aligned to the tile size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance to another position
    pub fn manhattan(&self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Check that both coordinates are multiples of the tile size
    pub fn is_tile_aligned(&self, tile_size: i32) -> bool {
        self.x % tile_size == 0 && self.y % tile_size == 0
    }
}

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Steering state consumed on each snake tick
    pub heading: Heading,
}

impl Snake {
    /// Create a fresh snake of length 1 with a neutral heading
    pub fn new(head: Position, heading: Heading) -> Self {
        Self {
            body: vec![head],
            heading,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Prepend a new head segment
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    /// Drop the tail segment, restoring the pre-move length
    pub fn pop_tail(&mut self) {
        self.body.pop();
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake has no segments (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The home the eggs must be delivered to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nest {
    pub position: Position,
    /// Total eggs in the run; the nest is full once all are delivered
    pub capacity: usize,
}

impl Nest {
    pub fn new(position: Position, capacity: usize) -> Self {
        Self { position, capacity }
    }

    pub fn is_full(&self, collected: usize) -> bool {
        collected >= self.capacity
    }
}

/// Phase of the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting on the instruction screen for a start signal
    Idle,
    /// Ticks active
    Playing,
    /// Terminal: all eggs delivered
    Won,
    /// Terminal: the predator caught the snake
    Lost,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Won | RunState::Lost)
    }
}

/// Complete simulation state, owned by the play loop and read by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub run_state: RunState,
    pub snake: Snake,
    pub predator: Position,
    /// Remaining eggs, insertion-ordered
    pub eggs: Vec<Position>,
    pub nest: Nest,
    /// Eggs delivered so far this run
    pub collected: usize,
    /// When a terminal run auto-resets to Idle; cleared on start
    pub terminal_deadline: Option<Instant>,
}

impl GameState {
    pub fn new(snake: Snake, predator: Position, eggs: Vec<Position>, nest: Nest) -> Self {
        Self {
            run_state: RunState::Idle,
            snake,
            predator,
            eggs,
            nest,
            collected: 0,
            terminal_deadline: None,
        }
    }

    pub fn eggs_remaining(&self) -> usize {
        self.eggs.len()
    }

    pub fn nest_full(&self) -> bool {
        self.nest.is_full(self.collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.moved_by(50, 0), Position::new(150, 100));
        assert_eq!(pos.moved_by(-50, 0), Position::new(50, 100));
        assert_eq!(pos.moved_by(0, 50), Position::new(100, 150));
        assert_eq!(pos.moved_by(0, -50), Position::new(100, 50));
    }

    #[test]
    fn test_manhattan_distance() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.manhattan(Position::new(100, 0)), 100);
        assert_eq!(origin.manhattan(Position::new(0, 50)), 50);
        assert_eq!(origin.manhattan(Position::new(-50, 50)), 100);
        assert_eq!(origin.manhattan(origin), 0);
    }

    #[test]
    fn test_tile_alignment() {
        assert!(Position::new(100, 250).is_tile_aligned(50));
        assert!(Position::new(0, 0).is_tile_aligned(50));
        assert!(!Position::new(275, 250).is_tile_aligned(50));
        assert!(!Position::new(100, 101).is_tile_aligned(50));
    }

    #[test]
    fn test_fresh_snake_is_single_segment() {
        let snake = Snake::new(Position::new(100, 100), Heading::LastKeyWins(None));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(100, 100));
        assert!(snake.heading.is_neutral());
    }

    #[test]
    fn test_snake_push_and_pop() {
        let mut snake = Snake::new(Position::new(100, 100), Heading::LastKeyWins(None));

        snake.push_head(Position::new(150, 100));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(150, 100));

        snake.pop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(150, 100));
    }

    #[test]
    fn test_nest_fullness() {
        let nest = Nest::new(Position::new(250, 250), 4);
        assert!(!nest.is_full(0));
        assert!(!nest.is_full(3));
        assert!(nest.is_full(4));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RunState::Idle.is_terminal());
        assert!(!RunState::Playing.is_terminal());
        assert!(RunState::Won.is_terminal());
        assert!(RunState::Lost.is_terminal());
    }
}
