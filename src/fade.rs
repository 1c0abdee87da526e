//! Fade-in/fade-out animation task.
//!
//! [`FadeAnimator`] owns the [`PwmController`] and drives a continuous
//! breathing effect: ramp the duty cycle up over twenty steps, hold at full
//! brightness, ramp back down, hold dark, repeat.

use crate::pwm::{DutyCycle, PwmController};
use crate::time::TickClock;
use crate::timer::PwmTimer;
use fugit::MillisDurationU32;

/// Number of ramp steps in each fade direction.
pub const RAMP_STEPS: u32 = 20;

/// Returns the duty-cycle triple for a ramp step.
///
/// The per-channel multipliers (2, 5, 1) are a perceptual-brightness
/// calibration: at step 20 the channels reach (40, 100, 20), the drive
/// levels that look equally bright on the reference board. Changing the
/// ratios changes the color tint of the fade, not just its endpoint.
#[inline]
pub fn ramp(step: u32) -> DutyCycle {
    DutyCycle::new(step * 2, step * 5, step)
}

/// Fade cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeTiming {
    /// Delay after each ramp step.
    pub step: MillisDurationU32,
    /// Delay at full brightness and after going dark.
    pub hold: MillisDurationU32,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            step: MillisDurationU32::from_ticks(20),
            hold: MillisDurationU32::from_ticks(50),
        }
    }
}

/// Periodic task producing the breathing effect.
///
/// Owns the PWM controller, making it the only writer of the compare
/// registers after boot.
pub struct FadeAnimator<'c, T: PwmTimer, C: TickClock> {
    controller: PwmController<T>,
    clock: &'c C,
    timing: FadeTiming,
}

impl<'c, T: PwmTimer, C: TickClock> FadeAnimator<'c, T, C> {
    /// Creates an animator around an initialized controller.
    pub fn new(controller: PwmController<T>, clock: &'c C, timing: FadeTiming) -> Self {
        Self {
            controller,
            clock,
            timing,
        }
    }

    /// Runs one full breathe cycle: ascend, hold, descend, dark, hold.
    ///
    /// With default timing one cycle takes 2 × 20 × 20 ms + 2 × 50 ms =
    /// 900 ms.
    pub fn run_cycle(&mut self) {
        for step in 0..RAMP_STEPS {
            self.controller.set_duty_cycle(ramp(step));
            self.clock.delay(self.timing.step);
        }

        self.clock.delay(self.timing.hold);

        for step in (1..=RAMP_STEPS).rev() {
            self.controller.set_duty_cycle(ramp(step));
            self.clock.delay(self.timing.step);
        }

        self.controller.set_duty_cycle(DutyCycle::OFF);
        self.clock.delay(self.timing.hold);
    }

    /// Runs the animation forever. Never returns.
    pub fn run(mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }
}
