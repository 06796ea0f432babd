use crate::config::{CELL_COUNT, GRID_SIZE};
use crate::traits::RandomSource;

/// A cell on the LED matrix, origin top-left, `x` east and `y` south.
///
/// Any axis outside `0..GRID_SIZE` is stored as [`Coordinate::OFF_GRID`], so
/// stepping off an edge produces a coordinate that is not [valid](Self::is_valid)
/// instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinate {
    x: i8,
    y: i8,
}

impl Coordinate {
    /// Sentinel value of an axis that left the grid
    pub const OFF_GRID: i8 = -1;

    /// Geometric centre of the grid
    pub const CENTER: Coordinate = Coordinate::new(GRID_SIZE as i32 / 2, GRID_SIZE as i32 / 2);

    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x: normalize(x),
            y: normalize(y),
        }
    }

    /// Uniformly random cell, both axes drawn from `0..=GRID_SIZE - 1`
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        let last = GRID_SIZE as i32 - 1;
        let x = rng.range_inclusive(0, last);
        let y = rng.range_inclusive(0, last);
        Self::new(x, y)
    }

    /// Every cell of the grid in row-major order
    pub fn all() -> impl Iterator<Item = Coordinate> {
        let size = GRID_SIZE as i32;
        (0..CELL_COUNT as i32).map(move |i| Coordinate::new(i % size, i / size))
    }

    pub const fn x(&self) -> i8 {
        self.x
    }

    pub const fn y(&self) -> i8 {
        self.y
    }

    pub const fn is_valid(&self) -> bool {
        in_range(self.x as i32) && in_range(self.y as i32)
    }

    /// Manhattan distance, computed on the stored axes (sentinels included)
    pub fn distance_to(&self, other: Coordinate) -> i32 {
        let dx = (self.x as i32 - other.x as i32).abs();
        let dy = (self.y as i32 - other.y as i32).abs();
        dx + dy
    }
}

const fn in_range(v: i32) -> bool {
    v >= 0 && v < GRID_SIZE as i32
}

const fn normalize(v: i32) -> i8 {
    if in_range(v) {
        v as i8
    } else {
        Coordinate::OFF_GRID
    }
}
