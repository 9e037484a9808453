//! Lock control task
//!
//! Polls the buttons on a fixed tick, feeds them through the controller
//! and, once the sequence is solved, runs the LED wave forever. Nothing
//! else happens after solving; only a power cycle starts a new round.

use defmt::*;
use embassy_time::{Duration, Ticker, Timer};

use tumbler_core::{Controller, PressOutcome, TickReport};
use tumbler_drivers::{ButtonBank, LedBar, RelayLock, WaveAnimation};
use tumbler_hal_rp2040::{EmbassyClock, Monotonic, RpInput, RpOutput};

use crate::config::{NUM_INPUTS, NUM_STEPS, TICK_MS};

/// Controller wired to RP2040 pins
pub type LockController = Controller<
    ButtonBank<RpInput<'static>, NUM_INPUTS>,
    LedBar<RpOutput<'static>, NUM_STEPS>,
    RelayLock<RpOutput<'static>>,
    NUM_INPUTS,
    NUM_STEPS,
>;

/// Lock task - main control loop
#[embassy_executor::task]
pub async fn lock_task(mut controller: LockController) {
    info!("Lock task started, {} ms tick", TICK_MS);

    let clock = EmbassyClock::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));

    loop {
        let report = controller.tick(clock.now_ms());
        log_report(&report);

        if report.unlocked {
            break;
        }

        ticker.next().await;
    }

    celebrate(controller.display_mut()).await;
}

fn log_report(report: &TickReport) {
    if report.is_quiet() {
        return;
    }

    for press in report.presses.iter() {
        match press.outcome {
            PressOutcome::Advanced { step } => {
                info!("Correct input! Onto step #{}", step);
            }
            PressOutcome::Solved => {
                info!("Puzzle solved");
            }
            PressOutcome::Reset { from } => {
                warn!(
                    "Incorrect input {} at step {}. Back to the beginning",
                    press.channel, from
                );
            }
            PressOutcome::Ignored => {
                trace!("Input {} ignored, already solved", press.channel);
            }
        }
    }
}

/// Wave the progress LEDs until power is removed
async fn celebrate(leds: &mut LedBar<RpOutput<'static>, NUM_STEPS>) -> ! {
    info!("Lock released");

    let mut wave = WaveAnimation::new(NUM_STEPS);
    loop {
        if let Some(frame) = wave.next() {
            leds.apply(frame);
        }
        Timer::after_millis(WaveAnimation::FRAME_MS).await;
    }
}
