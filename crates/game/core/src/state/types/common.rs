use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downward, matching screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring tile in `direction` (may be off-grid).
    pub fn offset(self, direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// One greedy step toward `target`: each axis independently moves by at
    /// most one unit. Diagonal steps are allowed.
    pub fn step_toward(self, target: Position) -> Self {
        Self::new(
            self.x + (target.x - self.x).signum(),
            self.y + (target.y - self.y).signum(),
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four unit movement vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Down,
        CardinalDirection::Left,
        CardinalDirection::Right,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::Up => (0, -1),
            CardinalDirection::Down => (0, 1),
            CardinalDirection::Left => (-1, 0),
            CardinalDirection::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            CardinalDirection::Up => CardinalDirection::Down,
            CardinalDirection::Down => CardinalDirection::Up,
            CardinalDirection::Left => CardinalDirection::Right,
            CardinalDirection::Right => CardinalDirection::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_toward_moves_each_axis_by_one() {
        let from = Position::new(15, 15);
        assert_eq!(from.step_toward(Position::new(5, 5)), Position::new(14, 14));
        assert_eq!(from.step_toward(Position::new(15, 20)), Position::new(15, 16));
        assert_eq!(from.step_toward(from), from);
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in CardinalDirection::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
