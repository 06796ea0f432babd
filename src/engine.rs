use core::convert::Infallible;
use core::fmt::Write;

use heapless::String;

use crate::config::{APPLE_BRIGHTNESS, READY_MESSAGE};
use crate::direction::Turn;
use crate::game::{self, Game, GameState, Tick};
use crate::traits::{GameInput, GamePlatform, InputEvent, LedMatrix, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The display refused a draw
    Matrix(E),
    Game(game::Error),
    /// End-of-round text did not fit its buffer
    Message,
}

impl<E> From<game::Error> for Error<E> {
    fn from(err: game::Error) -> Self {
        Error::Game(err)
    }
}

pub struct GameEngine<I, P, M, R>
where
    I: GameInput,
    P: GamePlatform,
    M: LedMatrix,
    R: RandomSource,
{
    input: I,
    platform: P,
    matrix: M,
    game: Game<R>,
}

impl<I, P, M, R> GameEngine<I, P, M, R>
where
    I: GameInput,
    P: GamePlatform,
    M: LedMatrix,
    R: RandomSource,
{
    pub fn new(input: I, platform: P, matrix: M, rng: R) -> Self {
        Self {
            input,
            platform,
            matrix,
            game: Game::new(rng),
        }
    }

    /// Run forever, only returning if the display fails
    pub async fn run(&mut self) -> Result<Infallible, Error<M::Error>> {
        info!("engine running, autopilot until A+B");
        loop {
            self.step().await?;
        }
    }

    /// Handle queued input, then play one tick
    pub async fn step(&mut self) -> Result<(), Error<M::Error>> {
        self.drain_input().await?;

        match self.game.tick()? {
            Tick::Skipped => {
                self.platform.delay_ms(self.game.tick_interval_ms()).await;
            }
            Tick::Crashed(summary) => {
                self.matrix.clear().map_err(Error::Matrix)?;
                self.matrix.update().map_err(Error::Matrix)?;
                if let Some(summary) = summary {
                    info!("round over, length {} won {}", summary.score, summary.won());
                    let mut text: String<32> = String::new();
                    write!(text, "{}", summary).map_err(|_| Error::Message)?;
                    self.matrix.show_string(&text).await.map_err(Error::Matrix)?;
                }
            }
            Tick::Moved { .. } => {
                self.render()?;
                self.platform.delay_ms(self.game.tick_interval_ms()).await;
            }
        }
        Ok(())
    }

    async fn drain_input(&mut self) -> Result<(), Error<M::Error>> {
        loop {
            match self.input.read_input().await {
                Ok(InputEvent::None) => return Ok(()),
                Ok(event) => self.handle(event).await?,
                Err(_) => {
                    warn!("input read failed, skipping");
                    return Ok(());
                }
            }
        }
    }

    async fn handle(&mut self, event: InputEvent) -> Result<(), Error<M::Error>> {
        debug!("input {}", event);
        match event {
            InputEvent::TurnLeft => self.game.turn(Turn::Left),
            InputEvent::TurnRight => self.game.turn(Turn::Right),
            InputEvent::Start => {
                if self.game.state() != GameState::Idle {
                    debug!("start ignored, round in progress");
                    return Ok(());
                }
                // Button timing is the best entropy on the board
                self.game.stir_rng(self.platform.current_time_ms());
                if self.game.begin_start() {
                    info!("starting a new round");
                    self.matrix.stop_animation().map_err(Error::Matrix)?;
                    self.matrix.show_string(READY_MESSAGE).await.map_err(Error::Matrix)?;
                    self.game.finish_start();
                }
            }
            InputEvent::None => {}
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), Error<M::Error>> {
        self.matrix.clear().map_err(Error::Matrix)?;
        for segment in self.game.snake().segments() {
            self.matrix.plot(*segment).map_err(Error::Matrix)?;
        }
        if let Some(apple) = self.game.apple() {
            self.matrix
                .plot_brightness(apple, APPLE_BRIGHTNESS)
                .map_err(Error::Matrix)?;
        }
        self.matrix.update().map_err(Error::Matrix)
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<R> {
        &mut self.game
    }

    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
