//! Greedy one-step steering for the idle demo, before the player starts.
//!
//! It only looks at the three cells reachable on the next tick and happily
//! drives into dead ends. Good enough to make the matrix look alive.

use crate::coordinate::Coordinate;
use crate::direction::{Direction, Turn};
use crate::snake::Snake;

#[derive(Clone, Copy)]
struct Candidate {
    direction: Direction,
    next: Coordinate,
    distance: i32,
}

/// Heading the snake should take this tick to close in on `apple`.
///
/// Candidates are straight ahead, left, then right. Going straight is kept
/// unless it hits a wall, or a turn is strictly closer to the apple and leads
/// to a free, on-grid cell. With no apple only walls make it turn.
pub fn steer(snake: &Snake, apple: Option<Coordinate>) -> Direction {
    let head = snake.head();
    let heading = snake.direction();

    let candidate = |direction: Direction| {
        let next = direction.next_coordinate(head);
        let distance = apple.map_or(0, |apple| next.distance_to(apple));
        Candidate {
            direction,
            next,
            distance,
        }
    };

    let straight = candidate(heading);
    let candidates = [
        straight,
        candidate(heading.turn(Turn::Left)),
        candidate(heading.turn(Turn::Right)),
    ];

    candidates
        .into_iter()
        .fold(straight, |best, other| {
            if !best.next.is_valid() {
                other
            } else if other.distance < best.distance
                && other.next.is_valid()
                && !snake.body_contains(other.next)
            {
                other
            } else {
                best
            }
        })
        .direction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn north_snake_at_top() -> Snake {
        Snake::from_segments(
            Direction::North,
            &[Coordinate::new(2, 1), Coordinate::new(2, 2)],
        )
        .unwrap()
    }

    #[test]
    fn keeps_going_when_the_apple_is_ahead() {
        let snake = Snake::new(Direction::North);
        assert_eq!(steer(&snake, Some(Coordinate::new(2, 0))), Direction::North);
    }

    #[test]
    fn turns_towards_an_apple_behind_and_to_the_right() {
        let snake = north_snake_at_top();
        assert_eq!(steer(&snake, Some(Coordinate::new(3, 3))), Direction::East);
    }

    #[test]
    fn turns_towards_an_apple_behind_and_to_the_left() {
        let snake = north_snake_at_top();
        assert_eq!(steer(&snake, Some(Coordinate::new(0, 4))), Direction::West);
    }

    #[test]
    fn ties_keep_the_current_heading() {
        // All three candidates are 3 away
        let snake = north_snake_at_top();
        assert_eq!(steer(&snake, Some(Coordinate::new(2, 3))), Direction::North);
    }

    #[test]
    fn never_turns_into_its_own_body() {
        // Head (1,1) heading North, body wraps to its right
        let snake = Snake::from_segments(
            Direction::North,
            &[
                Coordinate::new(1, 1),
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
                Coordinate::new(2, 1),
                Coordinate::new(2, 0),
            ],
        )
        .unwrap();
        // East (2,1) would be closest to the apple but is occupied
        assert_eq!(steer(&snake, Some(Coordinate::new(4, 1))), Direction::North);
    }

    #[test]
    fn wall_ahead_forces_a_turn_even_away_from_the_apple() {
        let snake = Snake::from_segments(
            Direction::North,
            &[Coordinate::new(0, 0), Coordinate::new(0, 1)],
        )
        .unwrap();
        // Left is off-grid too, right is the only way out
        assert_eq!(steer(&snake, Some(Coordinate::new(0, 4))), Direction::East);
    }

    #[test]
    fn no_apple_only_avoids_walls() {
        let snake = Snake::new(Direction::North);
        assert_eq!(steer(&snake, None), Direction::North);

        let cornered = Snake::from_segments(
            Direction::West,
            &[Coordinate::new(0, 2), Coordinate::new(1, 2)],
        )
        .unwrap();
        assert_eq!(steer(&cornered, None), Direction::South);
    }
}
