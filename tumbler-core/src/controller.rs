//! Lock controller coordinating debounce, matching and outputs
//!
//! The controller is the single owner of all round state:
//! - Samples the input bank and debounces it
//! - Feeds accepted presses to the matcher in channel order
//! - Releases the lock when the sequence is solved
//! - Refreshes the progress display once per tick

use heapless::Vec;
use rand_core::RngCore;

use crate::config::{check_dimensions, ConfigError, LockConfig, MAX_INPUTS};
use crate::input::{Debouncer, Edge};
use crate::sequence::{generate, Generated, Sequence};
use crate::state::{MatchState, Matcher, PressOutcome};
use crate::traits::{InputBank, LockActuator, ProgressDisplay};

/// An accepted press and what it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Press {
    /// Input index
    pub channel: u8,
    /// Effect on the matcher
    pub outcome: PressOutcome,
}

/// Summary of one control-loop iteration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Presses accepted this tick, in channel order
    pub presses: Vec<Press, MAX_INPUTS>,
    /// Progress after the tick
    pub step: usize,
    /// Matcher state after the tick
    pub state: MatchState,
    /// The lock was released during this tick
    pub unlocked: bool,
}

impl TickReport {
    /// Check if nothing happened this tick
    pub fn is_quiet(&self) -> bool {
        self.presses.is_empty()
    }
}

/// Controller state for one lock
pub struct Controller<B, D, L, const INPUTS: usize, const STEPS: usize> {
    /// Button inputs
    inputs: B,
    /// Progress indicators
    display: D,
    /// Lock output
    lock: L,
    /// Debounce filter for the inputs
    debouncer: Debouncer<INPUTS>,
    /// Sequence matcher
    matcher: Matcher<STEPS>,
}

impl<B, D, L, const INPUTS: usize, const STEPS: usize> Controller<B, D, L, INPUTS, STEPS>
where
    B: InputBank<INPUTS>,
    D: ProgressDisplay,
    L: LockActuator,
{
    /// Create a controller for `sequence`
    ///
    /// Secures the lock and clears the display. The display must have one
    /// indicator per step.
    pub fn new(
        inputs: B,
        mut display: D,
        mut lock: L,
        config: LockConfig,
        sequence: Sequence<STEPS>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        check_dimensions(STEPS, INPUTS)?;
        check_input_count::<INPUTS, STEPS>(&sequence)?;
        if display.len() != STEPS {
            return Err(ConfigError::DisplayLengthMismatch {
                expected: STEPS,
                actual: display.len(),
            });
        }

        lock.secure();
        display.show_progress(0);

        Ok(Self {
            inputs,
            display,
            lock,
            debouncer: Debouncer::new(&config),
            matcher: Matcher::new(sequence),
        })
    }

    /// Run one control-loop iteration at `now_ms`
    pub fn tick(&mut self, now_ms: u32) -> TickReport {
        let raw = self.inputs.read_asserted();
        let edges = self.debouncer.update(now_ms, &raw);

        let mut presses = Vec::new();
        let mut unlocked = false;

        for (channel, edge) in edges.iter().enumerate() {
            if *edge != Some(Edge::Pressed) {
                continue;
            }

            let channel = channel as u8;
            let outcome = self.matcher.press(channel);
            if outcome == PressOutcome::Solved {
                self.lock.unlock();
                unlocked = true;
            }

            // Capacity is MAX_INPUTS and INPUTS was checked against it
            let _ = presses.push(Press { channel, outcome });
        }

        let step = self.matcher.current_step();
        self.display.show_progress(step);

        TickReport {
            presses,
            step,
            state: self.matcher.state(),
            unlocked,
        }
    }

    /// Start the same sequence over and secure the lock
    pub fn reset(&mut self) {
        self.matcher.reset();
        self.lock.secure();
        self.display.show_progress(0);
    }

    /// Start a new round with a freshly drawn sequence
    pub fn new_round<R: RngCore>(&mut self, rng: &mut R) -> Result<Generated<STEPS>, ConfigError> {
        let generated = generate::<STEPS, R>(INPUTS as u8, rng)?;
        self.matcher.restart(generated.sequence);
        self.lock.secure();
        self.display.show_progress(0);
        Ok(generated)
    }

    /// Current matcher state
    pub fn state(&self) -> MatchState {
        self.matcher.state()
    }

    /// Number of correct inputs so far
    pub fn current_step(&self) -> usize {
        self.matcher.current_step()
    }

    /// Check if the lock has been released
    pub fn is_unlocked(&self) -> bool {
        self.lock.is_unlocked()
    }

    /// The sequence being matched
    pub fn sequence(&self) -> &Sequence<STEPS> {
        self.matcher.sequence()
    }

    /// Get access to the input bank
    pub fn inputs_mut(&mut self) -> &mut B {
        &mut self.inputs
    }

    /// Get access to the progress display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get mutable access to the progress display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Get access to the lock output
    pub fn lock(&self) -> &L {
        &self.lock
    }
}

fn check_input_count<const INPUTS: usize, const STEPS: usize>(
    sequence: &Sequence<STEPS>,
) -> Result<(), ConfigError> {
    let actual = sequence.input_count() as usize;
    if actual != INPUTS {
        return Err(ConfigError::InputCountMismatch {
            expected: INPUTS,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::DebounceMode;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct MockInputs {
        pressed: [bool; 3],
    }

    impl InputBank<3> for MockInputs {
        fn read_asserted(&mut self) -> [bool; 3] {
            self.pressed
        }
    }

    struct MockDisplay {
        lit: [bool; 5],
        refreshes: usize,
    }

    impl ProgressDisplay for MockDisplay {
        fn len(&self) -> usize {
            self.lit.len()
        }

        fn show_progress(&mut self, step: usize) {
            for (i, led) in self.lit.iter_mut().enumerate() {
                *led = i < step;
            }
            self.refreshes += 1;
        }
    }

    /// Two LEDs, too few for a five step sequence
    struct ShortDisplay {
        lit: [bool; 2],
    }

    impl ProgressDisplay for ShortDisplay {
        fn len(&self) -> usize {
            self.lit.len()
        }

        fn show_progress(&mut self, step: usize) {
            for (i, led) in self.lit.iter_mut().enumerate() {
                *led = i < step;
            }
        }
    }

    struct MockLock {
        unlocked: bool,
        unlock_calls: usize,
    }

    impl LockActuator for MockLock {
        fn secure(&mut self) {
            self.unlocked = false;
        }

        fn unlock(&mut self) {
            self.unlocked = true;
            self.unlock_calls += 1;
        }

        fn is_unlocked(&self) -> bool {
            self.unlocked
        }
    }

    type TestController = Controller<MockInputs, MockDisplay, MockLock, 3, 5>;

    fn controller(steps: [u8; 5]) -> TestController {
        controller_with(steps, LockConfig::default())
    }

    fn controller_with(steps: [u8; 5], config: LockConfig) -> TestController {
        Controller::new(
            MockInputs { pressed: [false; 3] },
            MockDisplay {
                lit: [true; 5],
                refreshes: 0,
            },
            MockLock {
                unlocked: true,
                unlock_calls: 0,
            },
            config,
            Sequence::from_steps(steps, 3).unwrap(),
        )
        .unwrap()
    }

    /// Test clock and button driver
    struct Bench {
        ctl: TestController,
        now: u32,
        outcomes: std::vec::Vec<Press>,
    }

    impl Bench {
        fn new(ctl: TestController) -> Self {
            Self {
                ctl,
                now: 1_000,
                outcomes: std::vec::Vec::new(),
            }
        }

        fn hold(&mut self, pressed: [bool; 3], ms: u32) {
            self.ctl.inputs_mut().pressed = pressed;
            for _ in 0..ms {
                let report = self.ctl.tick(self.now);
                self.outcomes.extend(report.presses.iter().copied());
                self.now += 1;
            }
        }

        /// Clean press and release of one button
        fn press(&mut self, channel: usize) {
            let mut pressed = [false; 3];
            pressed[channel] = true;
            self.hold(pressed, 80);
            self.hold([false; 3], 80);
        }
    }

    #[test]
    fn test_new_secures_lock_and_clears_display() {
        let ctl = controller([0, 2, 1, 0, 2]);
        assert!(!ctl.is_unlocked());
        assert_eq!(ctl.display().lit, [false; 5]);
        assert_eq!(ctl.state(), MatchState::Idle);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let result: Result<TestController, _> = Controller::new(
            MockInputs { pressed: [false; 3] },
            MockDisplay {
                lit: [false; 5],
                refreshes: 0,
            },
            MockLock {
                unlocked: false,
                unlock_calls: 0,
            },
            LockConfig::default(),
            Sequence::from_steps([0, 1, 0, 1, 0], 2).unwrap(),
        );
        assert_eq!(
            result.err(),
            Some(ConfigError::InputCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_new_rejects_short_display() {
        let result: Result<Controller<MockInputs, ShortDisplay, MockLock, 3, 5>, _> =
            Controller::new(
                MockInputs { pressed: [false; 3] },
                ShortDisplay { lit: [false; 2] },
                MockLock {
                    unlocked: false,
                    unlock_calls: 0,
                },
                LockConfig::default(),
                Sequence::from_steps([0, 2, 1, 0, 2], 3).unwrap(),
            );
        assert_eq!(
            result.err(),
            Some(ConfigError::DisplayLengthMismatch {
                expected: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn test_correct_sequence_unlocks_once() {
        let mut bench = Bench::new(controller([0, 2, 1, 0, 2]));

        for (i, channel) in [0, 2, 1, 0].into_iter().enumerate() {
            bench.press(channel);
            assert_eq!(bench.ctl.current_step(), i + 1);
            assert!(!bench.ctl.is_unlocked());
        }
        bench.press(2);

        assert_eq!(bench.ctl.current_step(), 5);
        assert_eq!(bench.ctl.state(), MatchState::Solved);
        assert!(bench.ctl.is_unlocked());
        assert_eq!(bench.ctl.lock().unlock_calls, 1);

        // Presses after solving change nothing
        bench.press(1);
        assert_eq!(bench.ctl.lock().unlock_calls, 1);
        assert_eq!(
            bench.outcomes.last().map(|p| p.outcome),
            Some(PressOutcome::Ignored)
        );
    }

    #[test]
    fn test_sequence_twice_after_reset() {
        let mut bench = Bench::new(controller([0, 2, 1, 0, 2]));

        for channel in [0, 2, 1, 0, 2] {
            bench.press(channel);
        }
        assert_eq!(bench.ctl.lock().unlock_calls, 1);

        bench.ctl.reset();
        assert!(!bench.ctl.is_unlocked());
        assert_eq!(bench.ctl.current_step(), 0);

        for channel in [0, 2, 1, 0, 2] {
            bench.press(channel);
        }
        assert_eq!(bench.ctl.lock().unlock_calls, 2);
        assert!(bench.ctl.is_unlocked());
    }

    #[test]
    fn test_wrong_input_resets_progress() {
        let mut bench = Bench::new(controller([1, 0, 1, 0, 2]));

        bench.press(0);
        assert_eq!(bench.ctl.current_step(), 0);
        assert_eq!(
            bench.outcomes.last().map(|p| p.outcome),
            Some(PressOutcome::Reset { from: 0 })
        );

        bench.press(1);
        assert_eq!(bench.ctl.current_step(), 1);
        bench.press(0);
        bench.press(1);
        assert_eq!(bench.ctl.current_step(), 3);

        bench.press(2);
        assert_eq!(bench.ctl.current_step(), 0);
        assert_eq!(bench.ctl.display().lit, [false; 5]);
        bench.press(1);
        assert_eq!(bench.ctl.current_step(), 1);
    }

    #[test]
    fn test_progress_display_tracks_step() {
        let mut bench = Bench::new(controller([0, 2, 1, 0, 2]));
        let expected = [
            [false, false, false, false, false],
            [true, false, false, false, false],
            [true, true, false, false, false],
            [true, true, true, false, false],
            [true, true, true, true, false],
            [true, true, true, true, true],
        ];

        assert_eq!(bench.ctl.display().lit, expected[0]);
        for (k, channel) in [0, 2, 1, 0, 2].into_iter().enumerate() {
            bench.press(channel);
            assert_eq!(bench.ctl.display().lit, expected[k + 1]);
        }
    }

    #[test]
    fn test_display_refreshed_every_tick() {
        let mut bench = Bench::new(controller([0, 2, 1, 0, 2]));
        let before = bench.ctl.display().refreshes;
        bench.hold([false; 3], 10);
        assert_eq!(bench.ctl.display().refreshes, before + 10);
    }

    #[test]
    fn test_report_quiet_until_press_accepted() {
        let mut ctl = controller([0, 2, 1, 0, 2]);
        assert!(ctl.tick(1_000).is_quiet());

        ctl.inputs_mut().pressed = [true, false, false];
        for now in 1_001..1_040 {
            assert!(ctl.tick(now).is_quiet());
        }

        let report = (1_040..1_100)
            .map(|now| ctl.tick(now))
            .find(|report| !report.is_quiet())
            .unwrap();
        assert_eq!(report.presses.len(), 1);
        assert_eq!(report.presses[0].channel, 0);
    }

    #[test]
    fn test_simultaneous_presses_in_channel_order() {
        // Channel 0 is wrong, channel 1 would match; 0 is processed first
        let mut bench = Bench::new(controller([1, 0, 2, 0, 1]));
        bench.hold([true, true, false], 80);

        assert_eq!(
            bench.outcomes.as_slice(),
            &[
                Press {
                    channel: 0,
                    outcome: PressOutcome::Reset { from: 0 }
                },
                Press {
                    channel: 1,
                    outcome: PressOutcome::Advanced { step: 1 }
                },
            ]
        );
    }

    #[test]
    fn test_simultaneous_wrong_after_right() {
        // Channel 0 matches, then channel 2 resets it in the same tick
        let mut bench = Bench::new(controller([0, 1, 2, 0, 1]));
        bench.hold([true, false, true], 80);
        assert_eq!(bench.ctl.current_step(), 0);
        assert_eq!(bench.outcomes.len(), 2);
        assert!(bench.outcomes[1].outcome.is_wrong());
    }

    #[test]
    fn test_bounce_on_other_line_delays_press() {
        let mut shared = Bench::new(controller([0, 2, 1, 0, 2]));
        let mut independent = Bench::new(controller_with(
            [0, 2, 1, 0, 2],
            LockConfig {
                debounce_mode: DebounceMode::PerChannel,
                ..LockConfig::default()
            },
        ));

        for bench in [&mut shared, &mut independent] {
            // Button 0 held while button 1 chatters for 30 ms
            for i in 0..30 {
                bench.hold([true, i % 2 == 0, false], 1);
            }
            bench.hold([true, false, false], 25);
        }

        // Per-channel timing accepted the press after 50 ms; shared is still waiting
        assert_eq!(independent.ctl.current_step(), 1);
        assert_eq!(shared.ctl.current_step(), 0);

        shared.hold([true, false, false], 30);
        assert_eq!(shared.ctl.current_step(), 1);
    }

    #[test]
    fn test_new_round_draws_fresh_sequence() {
        let mut bench = Bench::new(controller([0, 2, 1, 0, 2]));
        for channel in [0, 2, 1, 0, 2] {
            bench.press(channel);
        }
        assert!(bench.ctl.is_unlocked());

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let generated = bench.ctl.new_round(&mut rng).unwrap();
        assert_eq!(bench.ctl.sequence(), &generated.sequence);
        assert_eq!(bench.ctl.state(), MatchState::Idle);
        assert!(!bench.ctl.is_unlocked());

        for &channel in generated.sequence.steps() {
            bench.press(channel as usize);
        }
        assert!(bench.ctl.is_unlocked());
        assert_eq!(bench.ctl.lock().unlock_calls, 2);
    }
}
