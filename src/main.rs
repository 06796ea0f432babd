#![no_std]
#![no_main]

use core::cell::RefCell;
use defmt::{debug, info};
use embassy_embedded_hal::shared_bus::blocking::spi::SpiDeviceWithConfig;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
// Provides the parallel port and display interface builders
use mipidsi::interface::SpiInterface;

// Provides the Display builder
use mipidsi::{models::ST7789, options::ColorInversion, Builder};

use matrix_snake::buttons::ButtonDecoder;
use matrix_snake::config::{BUTTON_POLL_MS, DISPLAY_HEIGHT, DISPLAY_WIDTH, RNG_SEED};
use matrix_snake::engine::GameEngine;
use matrix_snake::hardware::pico_waveshare::{ChannelInput, PicoPlatform};
use matrix_snake::matrix::LcdMatrix;
use matrix_snake::random::XorShift32;
use matrix_snake::traits::InputEvent;

type SpiBus = BlockingMutex<NoopRawMutex, RefCell<Spi<'static, embassy_rp::peripherals::SPI1, embassy_rp::spi::Blocking>>>;

// Decoded button events, consumed by the engine between ticks
static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, 8> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Matrix Snake starting!");

    // Configure SPI for display
    let mosi = p.PIN_11; // SDA
    let clk = p.PIN_10; // SCL
    let cs = p.PIN_9; // CS
    let dc = p.PIN_8; // DC
    let rst = p.PIN_12; // RST
    let bl = p.PIN_13; // Backlight

    let mut spi_config = SpiConfig::default();
    spi_config.frequency = 62_500_000; // 62.5 MHz

    // Use blocking SPI
    let spi = Spi::new_blocking_txonly(p.SPI1, clk, mosi, spi_config.clone());

    // Create shared SPI bus
    static SPI_BUS: StaticCell<SpiBus> = StaticCell::new();
    let spi_bus = SPI_BUS.init(BlockingMutex::new(RefCell::new(spi)));

    // Create SPI device with CS pin
    let spi_device = SpiDeviceWithConfig::new(spi_bus, Output::new(cs, Level::High), spi_config);

    // Buffer for mipidsi
    static BUFFER: StaticCell<[u8; 64]> = StaticCell::new();
    let buffer = BUFFER.init([0; 64]);

    // Create SPI interface
    let spi_interface = SpiInterface::new(spi_device, Output::new(dc, Level::Low), buffer);

    // Create reset pin
    let reset_pin = Output::new(rst, Level::High);

    let mut display = Builder::new(ST7789, spi_interface)
        .display_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
        .display_offset(53, 40) // Waveshare LCD 1.14" offset for 90° rotation
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(reset_pin)
        .init(&mut embassy_time::Delay)
        .unwrap();

    // Turn on backlight
    let _backlight = Output::new(bl, Level::High);

    display.clear(Rgb565::BLACK).unwrap();

    // User buttons on pico lcd 1.14 :
    // gp15 : Button A (turn left)
    // gp17 : Button B (turn right)
    // A + B together starts a round
    let button_a = Input::new(p.PIN_15, Pull::Up);
    let button_b = Input::new(p.PIN_17, Pull::Up);
    spawner.spawn(button_task(button_a, button_b)).unwrap();

    info!("Display initialized, autopilot running until A+B");

    let platform = PicoPlatform::new();
    let matrix = LcdMatrix::new(display, platform);
    let rng = XorShift32::new(RNG_SEED ^ Instant::now().as_ticks() as u32);
    let mut engine = GameEngine::new(ChannelInput::new(INPUT_CHANNEL.receiver()), platform, matrix, rng);

    if let Err(err) = engine.run().await {
        defmt::panic!("engine stopped: {}", defmt::Debug2Format(&err));
    }
}

#[embassy_executor::task]
async fn button_task(button_a: Input<'static>, button_b: Input<'static>) {
    let sender = INPUT_CHANNEL.sender();
    let mut decoder = ButtonDecoder::new();

    loop {
        Timer::after_millis(BUTTON_POLL_MS).await;

        // Buttons pull low when pressed
        if let Some(event) = decoder.update(button_a.is_low(), button_b.is_low()) {
            debug!("Button event: {}", event);
            sender.send(event).await;
        }
    }
}
