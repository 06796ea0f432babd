use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embassy_time::{Duration, Instant, Timer};

use crate::traits::{GameInput, GamePlatform, InputEvent};

/// Input fed by the button task through an Embassy channel
pub struct ChannelInput<'a, M: RawMutex, const N: usize> {
    receiver: Receiver<'a, M, InputEvent, N>,
}

impl<'a, M: RawMutex, const N: usize> ChannelInput<'a, M, N> {
    pub fn new(receiver: Receiver<'a, M, InputEvent, N>) -> Self {
        Self { receiver }
    }
}

impl<M: RawMutex, const N: usize> GameInput for ChannelInput<'_, M, N> {
    type Error = Infallible;

    async fn read_input(&mut self) -> Result<InputEvent, Self::Error> {
        Ok(self.receiver.try_receive().unwrap_or(InputEvent::None))
    }
}

#[derive(Clone, Copy)]
pub struct PicoPlatform {
    start_time: Instant,
}

impl PicoPlatform {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for PicoPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl GamePlatform for PicoPlatform {
    async fn delay_ms(&self, ms: u32) {
        Timer::after(Duration::from_millis(ms as u64)).await;
    }

    fn current_time_ms(&self) -> u32 {
        self.start_time.elapsed().as_millis() as u32
    }
}
