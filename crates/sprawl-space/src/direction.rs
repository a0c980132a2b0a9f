//! The four lattice directions.

/// One of the four cardinal directions on a y-down lattice.
///
/// Declaration order is the scan order used by the growth engine:
/// up, right, down, left (clockwise from north).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward row `y - 1`.
    Up,
    /// Toward column `x + 1`.
    Right,
    /// Toward row `y + 1`.
    Down,
    /// Toward column `x - 1`.
    Left,
}

impl Direction {
    /// All directions in clockwise scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(dx, dy)` unit offset.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// The direction pointing back.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Rotate a quarter turn clockwise (on screen).
    pub fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Rotate a quarter turn counter-clockwise (on screen).
    pub fn turn_left(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Right => Self::Up,
            Self::Down => Self::Right,
            Self::Left => Self::Down,
        }
    }
}
