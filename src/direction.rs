use crate::coordinate::Coordinate;

/// Compass heading, clockwise order North → East → South → West
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Quarter turn relative to the current heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Turn {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Right is the next heading clockwise, left the previous one.
    pub fn turn(&self, turn: Turn) -> Direction {
        match (self, turn) {
            (Direction::North, Turn::Left) => Direction::West,
            (Direction::North, Turn::Right) => Direction::East,
            (Direction::East, Turn::Left) => Direction::North,
            (Direction::East, Turn::Right) => Direction::South,
            (Direction::South, Turn::Left) => Direction::East,
            (Direction::South, Turn::Right) => Direction::West,
            (Direction::West, Turn::Left) => Direction::South,
            (Direction::West, Turn::Right) => Direction::North,
        }
    }

    /// Cell one step from `from`. Stepping off the grid gives an invalid coordinate.
    pub fn next_coordinate(&self, from: Coordinate) -> Coordinate {
        let (x, y) = (from.x() as i32, from.y() as i32);
        match self {
            Direction::North => Coordinate::new(x, y - 1),
            Direction::East => Coordinate::new(x + 1, y),
            Direction::South => Coordinate::new(x, y + 1),
            Direction::West => Coordinate::new(x - 1, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn left_then_right_cancels() {
        for d in Direction::ALL {
            assert_eq!(d.turn(Turn::Left).turn(Turn::Right), d);
            assert_eq!(d.turn(Turn::Right).turn(Turn::Left), d);
        }
    }

    #[test]
    fn right_follows_the_clockwise_cycle() {
        let mut d = Direction::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(d);
            d = d.turn(Turn::Right);
        }
        assert_eq!(seen, Direction::ALL);
        assert_eq!(d, Direction::North);
        assert_eq!(Direction::North.turn(Turn::Left), Direction::West);
        assert_eq!(Direction::South.turn(Turn::Left), Direction::East);
    }

    #[test]
    fn steps_move_one_cell() {
        let c = Coordinate::CENTER;
        assert_eq!(Direction::North.next_coordinate(c), Coordinate::new(2, 1));
        assert_eq!(Direction::East.next_coordinate(c), Coordinate::new(3, 2));
        assert_eq!(Direction::South.next_coordinate(c), Coordinate::new(2, 3));
        assert_eq!(Direction::West.next_coordinate(c), Coordinate::new(1, 2));
    }

    #[test]
    fn stepping_off_the_edge_is_invalid() {
        let east_edge = Coordinate::new(4, 1);
        let next = Direction::East.next_coordinate(east_edge);
        assert_eq!(next.x(), Coordinate::OFF_GRID);
        assert!(!next.is_valid());

        assert!(!Direction::North.next_coordinate(Coordinate::new(0, 0)).is_valid());
        assert!(!Direction::West.next_coordinate(Coordinate::new(0, 3)).is_valid());
        assert!(!Direction::South.next_coordinate(Coordinate::new(3, 4)).is_valid());
    }
}
