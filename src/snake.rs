use heapless::Deque;

use crate::config::CELL_COUNT;
use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::game::Error;

const _: () = assert!(CELL_COUNT >= 2);

/// The snake body, head first, plus its heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Deque<Coordinate, CELL_COUNT>,
    direction: Direction,
}

impl Snake {
    /// Two segments trailing away from the grid centre, opposite to `direction`
    pub fn new(direction: Direction) -> Self {
        let behind = direction.opposite();
        let head = behind.next_coordinate(Coordinate::CENTER);
        let tail = behind.next_coordinate(head);

        let mut body: Deque<Coordinate, CELL_COUNT> = Deque::new();
        // Capacity is at least two
        body.push_back(head).ok();
        body.push_back(tail).ok();

        Self { body, direction }
    }

    /// Snake with an explicit body, head first. `None` unless there are
    /// between two and `CELL_COUNT` segments.
    pub fn from_segments(direction: Direction, segments: &[Coordinate]) -> Option<Self> {
        if segments.len() < 2 {
            return None;
        }
        let mut body: Deque<Coordinate, CELL_COUNT> = Deque::new();
        for segment in segments {
            body.push_back(*segment).ok()?;
        }
        Some(Self { body, direction })
    }

    pub fn head(&self) -> Coordinate {
        // Never empty once constructed
        self.body.front().copied().unwrap_or(Coordinate::new(-1, -1))
    }

    pub fn tail(&self) -> Coordinate {
        self.body.back().copied().unwrap_or(Coordinate::new(-1, -1))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Coordinate> {
        self.body.iter()
    }

    /// Move one cell along the heading. With `remove_tail` the tail is dropped
    /// and returned, otherwise the snake grows by one segment.
    ///
    /// No collision checking happens here.
    pub fn advance(&mut self, remove_tail: bool) -> Result<Option<Coordinate>, Error> {
        let next = self.direction.next_coordinate(self.head());
        let removed = if remove_tail { self.body.pop_back() } else { None };
        self.body.push_front(next).map_err(|_| Error::BodyFull)?;
        Ok(removed)
    }

    pub fn body_contains(&self, coordinate: Coordinate) -> bool {
        self.body.iter().any(|segment| *segment == coordinate)
    }

    /// Whether moving the head to `next` runs into the body. The tail does not
    /// count, it moves out of the way on this same tick.
    pub fn would_bite(&self, next: Coordinate) -> bool {
        let tail = self.tail();
        self.body
            .iter()
            .filter(|segment| **segment != tail)
            .any(|segment| *segment == next)
    }
}
