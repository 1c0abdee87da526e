#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PwmController`**: Owned handle to the tri-channel PWM timer; the only
//!   writer of the compare registers after boot
//! - **`DutyCycle`**: One atomic red/green/blue duty update, relative to the
//!   counting top (100)
//! - **`TimerConfig`**: Immutable timer setup (prescale, top, output action,
//!   pin routing, initial duty)
//! - **`FadeAnimator`**: Periodic task producing the breathing effect
//! - **`Heartbeat`**: One-time bring-up plus periodic liveness logging
//! - **`PwmTimer`** / **`LedPins`**: Traits to implement for your hardware
//! - **`TickClock`**: Trait to implement for your scheduler's clock
//!
//! Duty-cycle values are raw compare-register integers. When implementing
//! `PwmTimer` for your hardware, write them to the compare buffers
//! unmodified; the controller performs no scaling or clamping.

pub mod fade;
pub mod heartbeat;
pub mod pwm;
pub mod time;
pub mod timer;

pub use fade::{FadeAnimator, FadeTiming, RAMP_STEPS, ramp};
pub use heartbeat::{BootError, HEARTBEAT_PERIOD, Heartbeat};
pub use pwm::{ChannelLocations, DutyCycle, PWM_PERIOD, PwmController, TimerConfig, init_led_pins};
pub use time::{TickClock, duration_to_ticks};
pub use timer::{LedPins, OutputAction, Prescale, PwmChannel, PwmTimer};
