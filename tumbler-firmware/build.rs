//! Build script for tumbler-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates lock.toml and generates the pin and timing constants

use std::collections::BTreeSet;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Highest usable GPIO on the RP2040
const MAX_GPIO: u8 = 29;

/// Must match `tumbler_core::config::MAX_INPUTS`
const MAX_INPUTS: usize = 16;

/// Must match `tumbler_core::config::MAX_STEPS`
const MAX_STEPS: usize = 32;

#[derive(Debug, Deserialize)]
struct LockFile {
    lock: LockSection,
    debounce: DebounceSection,
    #[serde(rename = "loop")]
    control_loop: LoopSection,
    inputs: PinList,
    indicators: PinList,
}

#[derive(Debug, Deserialize)]
struct LockSection {
    pin: String,
}

#[derive(Debug, Deserialize)]
struct DebounceSection {
    delay_ms: u32,
    mode: String,
}

#[derive(Debug, Deserialize)]
struct LoopSection {
    tick_ms: u32,
}

#[derive(Debug, Deserialize)]
struct PinList {
    pins: Vec<String>,
}

/// Validated configuration ready for code generation
struct LockConfig {
    lock_pin: u8,
    lock_inverted: bool,
    input_pins: Vec<u8>,
    indicator_pins: Vec<u8>,
    debounce_ms: u32,
    per_channel: bool,
    tick_ms: u32,
}

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate lock.toml at compile time
fn validate_config() -> LockConfig {
    println!("cargo:rerun-if-changed=lock.toml");

    let config_path = Path::new("lock.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read lock.toml", &[e.to_string()]),
    };

    let file: LockFile = match toml::from_str(&config_content) {
        Ok(file) => file,
        Err(e) => fail(
            "Invalid lock.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    let mut used = BTreeSet::new();

    let mut claim = |label: String, pin: &str, allow_invert: bool, errors: &mut Vec<String>| {
        match parse_pin_string(pin) {
            Some((_, true)) if !allow_invert => {
                errors.push(format!("{} '{}' cannot be inverted", label, pin));
                None
            }
            Some((num, inverted)) => {
                if !used.insert(num) {
                    errors.push(format!("{} gpio{} is already in use", label, num));
                }
                Some((num, inverted))
            }
            None => {
                errors.push(format!("{} '{}' is not a valid pin (gpio0-gpio29)", label, pin));
                None
            }
        }
    };

    let lock = claim("[lock] pin".to_string(), &file.lock.pin, true, &mut errors);

    let input_pins: Vec<u8> = file
        .inputs
        .pins
        .iter()
        .enumerate()
        .filter_map(|(i, pin)| claim(format!("[inputs] pin {}", i), pin, false, &mut errors))
        .map(|(num, _)| num)
        .collect();

    let indicator_pins: Vec<u8> = file
        .indicators
        .pins
        .iter()
        .enumerate()
        .filter_map(|(i, pin)| claim(format!("[indicators] pin {}", i), pin, false, &mut errors))
        .map(|(num, _)| num)
        .collect();

    let inputs = file.inputs.pins.len();
    let steps = file.indicators.pins.len();

    if inputs == 0 {
        errors.push("[inputs] needs at least one pin".to_string());
    }
    if inputs > MAX_INPUTS {
        errors.push(format!("[inputs] has {} pins, at most {} supported", inputs, MAX_INPUTS));
    }
    if steps > MAX_STEPS {
        errors.push(format!("[indicators] has {} pins, at most {} supported", steps, MAX_STEPS));
    }
    if steps < inputs {
        errors.push(format!(
            "[indicators] has {} pins but [inputs] has {}; every button must appear in the sequence",
            steps, inputs
        ));
    }

    if file.debounce.delay_ms == 0 {
        errors.push("[debounce] delay_ms must be greater than 0".to_string());
    }
    let per_channel = match file.debounce.mode.as_str() {
        "shared" => false,
        "per_channel" => true,
        other => {
            errors.push(format!(
                "[debounce] mode '{}' must be 'shared' or 'per_channel'",
                other
            ));
            false
        }
    };

    if file.control_loop.tick_ms == 0 || file.control_loop.tick_ms >= file.debounce.delay_ms {
        errors.push("[loop] tick_ms must be between 1 and debounce delay_ms".to_string());
    }

    if !errors.is_empty() {
        fail("Invalid lock.toml", &errors);
    }

    let (lock_pin, lock_inverted) = lock.unwrap();

    println!(
        "cargo:warning=lock.toml validated: {} inputs, {} steps",
        inputs, steps
    );

    LockConfig {
        lock_pin,
        lock_inverted,
        input_pins,
        indicator_pins,
        debounce_ms: file.debounce.delay_ms,
        per_channel,
        tick_ms: file.control_loop.tick_ms,
    }
}

/// Write `lock_config.rs` into OUT_DIR
fn generate_config(config: &LockConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let take = |pins: &[u8]| {
        pins.iter()
            .map(|pin| format!("tumbler_hal_rp2040::take_pin!(p, {})", pin))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mode = if config.per_channel {
        "PerChannel"
    } else {
        "Shared"
    };

    let code = format!(
        "// Generated by build.rs from lock.toml\n\
         \n\
         /// Number of buttons\n\
         pub const NUM_INPUTS: usize = {inputs};\n\
         /// Sequence length (one progress LED per step)\n\
         pub const NUM_STEPS: usize = {steps};\n\
         /// Debounce window (ms)\n\
         pub const DEBOUNCE_MS: u32 = {debounce};\n\
         /// Debounce timing mode\n\
         pub const DEBOUNCE_MODE: tumbler_core::DebounceMode = tumbler_core::DebounceMode::{mode};\n\
         /// Control loop period (ms)\n\
         pub const TICK_MS: u64 = {tick};\n\
         /// Lock relay is secured while LOW\n\
         pub const LOCK_INVERTED: bool = {inverted};\n\
         \n\
         /// Pins assigned in lock.toml\n\
         pub struct BoardPins {{\n\
         \x20   pub inputs: [embassy_rp::Peri<'static, embassy_rp::gpio::AnyPin>; NUM_INPUTS],\n\
         \x20   pub indicators: [embassy_rp::Peri<'static, embassy_rp::gpio::AnyPin>; NUM_STEPS],\n\
         \x20   pub lock: embassy_rp::Peri<'static, embassy_rp::gpio::AnyPin>,\n\
         }}\n\
         \n\
         /// Take the configured pins out of the peripherals\n\
         pub fn take_pins(p: embassy_rp::Peripherals) -> BoardPins {{\n\
         \x20   BoardPins {{\n\
         \x20       inputs: [{input_pins}],\n\
         \x20       indicators: [{indicator_pins}],\n\
         \x20       lock: tumbler_hal_rp2040::take_pin!(p, {lock}),\n\
         \x20   }}\n\
         }}\n",
        inputs = config.input_pins.len(),
        steps = config.indicator_pins.len(),
        debounce = config.debounce_ms,
        mode = mode,
        tick = config.tick_ms,
        inverted = config.lock_inverted,
        input_pins = take(&config.input_pins),
        indicator_pins = take(&config.indicator_pins),
        lock = config.lock_pin,
    );

    fs::write(out_dir.join("lock_config.rs"), code).unwrap();
}

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> (11, false)
/// - "!gpio12" -> (12, true) (inverted)
fn parse_pin_string(s: &str) -> Option<(u8, bool)> {
    let s = s.trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let num: u8 = s.strip_prefix("gpio")?.parse().ok()?;
    if num > MAX_GPIO {
        return None;
    }

    Some((num, inverted))
}

/// Abort the build with a boxed error listing
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
