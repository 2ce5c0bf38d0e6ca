/// Direction the snake can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A directional key transition reported by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingCommand {
    Press(Direction),
    Release(Direction),
}

/// Per-axis pressed state for the additive input model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl AxisFlags {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    /// Unit delta from the currently pressed flags; opposite flags cancel
    pub fn delta(&self) -> (i32, i32) {
        let dx = i32::from(self.right) - i32::from(self.left);
        let dy = i32::from(self.down) - i32::from(self.up);
        (dx, dy)
    }
}

/// The snake's steering state, in one of the two supported input models.
///
/// `LastKeyWins` holds a single direction (or none before the first key)
/// and rejects immediate reversals. `Additive` tracks each arrow key's
/// pressed state independently; both axes may be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    LastKeyWins(Option<Direction>),
    Additive(AxisFlags),
}

impl Heading {
    pub fn apply(&mut self, command: HeadingCommand) {
        match self {
            Heading::LastKeyWins(current) => {
                // Key releases carry no meaning in this model
                if let HeadingCommand::Press(direction) = command {
                    let reversal = current.is_some_and(|c| c.is_opposite(direction));
                    if !reversal {
                        *current = Some(direction);
                    }
                }
            }
            Heading::Additive(flags) => match command {
                HeadingCommand::Press(direction) => flags.set(direction, true),
                HeadingCommand::Release(direction) => flags.set(direction, false),
            },
        }
    }

    /// Unit delta for the next snake tick; (0, 0) means no movement
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::LastKeyWins(current) => current.map_or((0, 0), |d| d.delta()),
            Heading::Additive(flags) => flags.delta(),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.delta() == (0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_last_key_wins_starts_neutral() {
        let heading = Heading::LastKeyWins(None);
        assert!(heading.is_neutral());
        assert_eq!(heading.delta(), (0, 0));
    }

    #[test]
    fn test_last_key_wins_takes_latest_press() {
        let mut heading = Heading::LastKeyWins(None);
        heading.apply(HeadingCommand::Press(Direction::Right));
        assert_eq!(heading.delta(), (1, 0));

        heading.apply(HeadingCommand::Press(Direction::Up));
        assert_eq!(heading.delta(), (0, -1));
    }

    #[test]
    fn test_last_key_wins_rejects_reversal() {
        let mut heading = Heading::LastKeyWins(Some(Direction::Right));
        heading.apply(HeadingCommand::Press(Direction::Left));
        assert_eq!(heading.delta(), (1, 0)); // still moving right
    }

    #[test]
    fn test_last_key_wins_ignores_release() {
        let mut heading = Heading::LastKeyWins(Some(Direction::Up));
        heading.apply(HeadingCommand::Release(Direction::Up));
        assert_eq!(heading.delta(), (0, -1));
    }

    #[test]
    fn test_additive_tracks_press_and_release() {
        let mut heading = Heading::Additive(AxisFlags::default());
        assert!(heading.is_neutral());

        heading.apply(HeadingCommand::Press(Direction::Right));
        assert_eq!(heading.delta(), (1, 0));

        heading.apply(HeadingCommand::Press(Direction::Down));
        assert_eq!(heading.delta(), (1, 1)); // both axes active

        heading.apply(HeadingCommand::Release(Direction::Right));
        assert_eq!(heading.delta(), (0, 1));
    }

    #[test]
    fn test_additive_opposite_flags_cancel() {
        let mut heading = Heading::Additive(AxisFlags::default());
        heading.apply(HeadingCommand::Press(Direction::Left));
        heading.apply(HeadingCommand::Press(Direction::Right));
        assert_eq!(heading.delta(), (0, 0));

        heading.apply(HeadingCommand::Release(Direction::Left));
        assert_eq!(heading.delta(), (1, 0));
    }
}
