//! Tumbler - Sequence Lock Firmware
//!
//! Main firmware binary for RP2040-based sequence locks. At boot it draws a
//! random button sequence that uses every button at least once, then waits
//! for the user to enter it. A correct entry releases the lock.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use {defmt_rtt as _, panic_probe as _};

use tumbler_core::{generate, Controller};
use tumbler_drivers::{ButtonBank, LedBar, RelayLock};
use tumbler_hal_rp2040::{RpInput, RpOutput};

use crate::config::{NUM_INPUTS, NUM_STEPS};

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tumbler firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let pins = config::take_pins(p);
    info!("Peripherals initialized");

    // Lock pin starts at its secured level
    let lock_pin = if config::LOCK_INVERTED {
        RpOutput::new_low(pins.lock)
    } else {
        RpOutput::new_high(pins.lock)
    };
    let lock = RelayLock::new(lock_pin, config::LOCK_INVERTED);

    let buttons = ButtonBank::active_low(pins.inputs.map(RpInput::pull_up));
    let leds = LedBar::new(pins.indicators.map(RpOutput::new_low));
    info!(
        "{} buttons, {} progress LEDs, lock secured",
        NUM_INPUTS, NUM_STEPS
    );

    // Draw this round's sequence from the ring oscillator
    let mut rng = RoscRng;
    let generated = match generate::<NUM_STEPS, _>(NUM_INPUTS as u8, &mut rng) {
        Ok(generated) => generated,
        Err(e) => defmt::panic!("Cannot generate sequence: {}", e),
    };
    if generated.rejected > 0 {
        debug!(
            "Discarded {} sequences that skipped a button",
            generated.rejected
        );
    }
    debug!("Sequence: {}", generated.sequence.steps());

    let lock_config = config::lock_config();
    info!(
        "Debounce {} ms ({})",
        lock_config.debounce_ms, lock_config.debounce_mode
    );

    let controller = match Controller::new(buttons, leds, lock, lock_config, generated.sequence) {
        Ok(controller) => controller,
        Err(e) => defmt::panic!("Invalid lock configuration: {}", e),
    };

    spawner.spawn(tasks::lock_task(controller)).unwrap();

    info!("Lock task spawned, waiting for input");
}
