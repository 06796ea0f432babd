use crate::traits::InputEvent;

/// Turns sampled levels of buttons A and B into press events.
///
/// A lone button reports on release. Holding both at any point of a gesture
/// makes it a chord, reported once as [`InputEvent::Start`] when both are up
/// again, with the single-button events of that gesture swallowed.
#[derive(Debug, Default, Clone)]
pub struct ButtonDecoder {
    a_down: bool,
    b_down: bool,
    chord: bool,
}

impl ButtonDecoder {
    pub const fn new() -> Self {
        Self {
            a_down: false,
            b_down: false,
            chord: false,
        }
    }

    /// Feed one sample, `true` meaning pressed
    pub fn update(&mut self, a_down: bool, b_down: bool) -> Option<InputEvent> {
        let a_released = self.a_down && !a_down;
        let b_released = self.b_down && !b_down;
        self.a_down = a_down;
        self.b_down = b_down;

        if a_down && b_down {
            self.chord = true;
            return None;
        }

        if self.chord {
            if !a_down && !b_down {
                self.chord = false;
                return Some(InputEvent::Start);
            }
            return None;
        }

        if a_released {
            Some(InputEvent::TurnLeft)
        } else if b_released {
            Some(InputEvent::TurnRight)
        } else {
            None
        }
    }
}
