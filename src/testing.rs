//! Test doubles shared by the module tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use crate::coordinate::Coordinate;
use crate::traits::{GameInput, GamePlatform, InputEvent, LedMatrix, RandomSource};

/// Replays a fixed list of values, looping when exhausted
pub struct ScriptedRng {
    values: Vec<i32>,
    next: usize,
    last_range: Option<(i32, i32)>,
}

impl ScriptedRng {
    pub fn new(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
            last_range: None,
        }
    }

    /// Script that yields the cells in order, as (x, y) pairs
    pub fn cells(cells: &[Coordinate]) -> Self {
        let values: Vec<i32> = cells
            .iter()
            .flat_map(|c| [c.x() as i32, c.y() as i32])
            .collect();
        Self::new(&values)
    }

    pub fn last_range(&self) -> Option<(i32, i32)> {
        self.last_range
    }
}

impl RandomSource for ScriptedRng {
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.last_range = Some((low, high));
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        low + v.rem_euclid(high - low + 1)
    }
}

pub struct QueuedInput {
    events: VecDeque<InputEvent>,
}

impl QueuedInput {
    pub fn new(events: &[InputEvent]) -> Self {
        Self {
            events: events.iter().copied().collect(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl GameInput for QueuedInput {
    type Error = ();

    async fn read_input(&mut self) -> Result<InputEvent, Self::Error> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::None))
    }
}

/// Input whose every read fails
pub struct FailingInput;

impl GameInput for FailingInput {
    type Error = ();

    async fn read_input(&mut self) -> Result<InputEvent, Self::Error> {
        Err(())
    }
}

/// Records requested delays instead of sleeping
#[derive(Default)]
pub struct RecordingPlatform {
    pub delays: RefCell<Vec<u32>>,
}

impl GamePlatform for RecordingPlatform {
    async fn delay_ms(&self, ms: u32) {
        self.delays.borrow_mut().push(ms);
    }

    fn current_time_ms(&self) -> u32 {
        self.delays.borrow().iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixCall {
    Clear,
    Plot(Coordinate, u8),
    Show(String),
    StopAnimation,
    Update,
}

/// Logs every call made to the matrix
#[derive(Default)]
pub struct RecordingMatrix {
    pub calls: Vec<MatrixCall>,
}

impl RecordingMatrix {
    pub fn shown(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                MatrixCall::Show(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// LEDs plotted since the last clear
    pub fn frame(&self) -> Vec<(Coordinate, u8)> {
        let start = self
            .calls
            .iter()
            .rposition(|call| *call == MatrixCall::Clear)
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|call| match call {
                MatrixCall::Plot(at, level) => Some((*at, *level)),
                _ => None,
            })
            .collect()
    }
}

impl LedMatrix for RecordingMatrix {
    type Error = ();

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.calls.push(MatrixCall::Clear);
        Ok(())
    }

    fn plot_brightness(&mut self, at: Coordinate, level: u8) -> Result<(), Self::Error> {
        self.calls.push(MatrixCall::Plot(at, level));
        Ok(())
    }

    async fn show_string(&mut self, text: &str) -> Result<(), Self::Error> {
        self.calls.push(MatrixCall::Show(text.into()));
        Ok(())
    }

    fn stop_animation(&mut self) -> Result<(), Self::Error> {
        self.calls.push(MatrixCall::StopAnimation);
        Ok(())
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        self.calls.push(MatrixCall::Update);
        Ok(())
    }
}
