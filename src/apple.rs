use heapless::Vec;

use crate::config::{CELL_COUNT, MAX_APPLE_DRAWS};
use crate::coordinate::Coordinate;
use crate::snake::Snake;
use crate::traits::RandomSource;

/// Pick a cell for the next apple, off the snake and away from `previous`.
///
/// Random draws are tried first. After `MAX_APPLE_DRAWS` misses the free
/// cells are scanned instead, and `previous` is only reused when it is the
/// last free cell. Returns `None` once the snake fills the board.
pub fn place_apple<R: RandomSource>(
    snake: &Snake,
    previous: Option<Coordinate>,
    rng: &mut R,
) -> Option<Coordinate> {
    let acceptable = |c: Coordinate| c.is_valid() && !snake.body_contains(c) && Some(c) != previous;

    for _ in 0..MAX_APPLE_DRAWS {
        let candidate = Coordinate::random(rng);
        if acceptable(candidate) {
            return Some(candidate);
        }
    }

    let mut free: Vec<Coordinate, CELL_COUNT> = Coordinate::all().filter(|c| acceptable(*c)).collect();
    if free.is_empty() {
        if let Some(last) = previous.filter(|c| !snake.body_contains(*c)) {
            free.push(last).ok()?;
        }
    }
    if free.is_empty() {
        return None;
    }

    let last = free.len() as i32 - 1;
    let pick = rng.range_inclusive(0, last).clamp(0, last);
    free.get(pick as usize).copied()
}
