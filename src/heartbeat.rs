//! One-time peripheral bring-up and periodic liveness signaling.

use crate::fade::{FadeAnimator, FadeTiming};
use crate::pwm::{PwmController, TimerConfig, init_led_pins};
use crate::time::TickClock;
use crate::timer::{LedPins, PwmTimer};
use fugit::MillisDurationU32;

/// Default heartbeat period: 10 seconds.
pub const HEARTBEAT_PERIOD: MillisDurationU32 = MillisDurationU32::from_ticks(10_000);

/// Errors detected during task bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    /// The scheduler reported a tick frequency of zero, meaning it is not
    /// running. Delays would never elapse, so bring-up refuses to continue.
    SchedulerNotReady,
}

impl core::fmt::Display for BootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BootError::SchedulerNotReady => {
                write!(f, "scheduler not ready: tick frequency is zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BootError {}

/// The bring-up and liveness task.
///
/// Created by [`bring_up`](Self::bring_up), which performs the one-time
/// hardware initialization and hands the fade animator to the platform for
/// spawning. Afterwards the heartbeat only sleeps and logs; it never touches
/// the timer again.
pub struct Heartbeat<'c, C: TickClock> {
    clock: &'c C,
    period_ticks: u32,
    pwm_tick_freq: u32,
    beats: u32,
}

impl<'c, C: TickClock> Heartbeat<'c, C> {
    /// Performs one-time bring-up with the default heartbeat period.
    ///
    /// Initializes the PWM timer, configures the LED pins and hands a ready
    /// [`FadeAnimator`] to the `spawn` closure, which must start it as an
    /// independent task. Initialization completes before `spawn` runs, so
    /// the animator's first duty-cycle write always sees configured
    /// hardware.
    ///
    /// # Errors
    /// * `SchedulerNotReady` - the clock reports a tick frequency of zero
    pub fn bring_up<T, P, S>(
        timer: T,
        pins: &mut P,
        clock: &'c C,
        config: TimerConfig,
        timing: FadeTiming,
        spawn: S,
    ) -> Result<Self, BootError>
    where
        T: PwmTimer,
        P: LedPins,
        S: FnOnce(FadeAnimator<'c, T, C>),
    {
        Self::bring_up_with_period(timer, pins, clock, config, timing, HEARTBEAT_PERIOD, spawn)
    }

    /// Performs one-time bring-up with an explicit heartbeat period.
    pub fn bring_up_with_period<T, P, S>(
        timer: T,
        pins: &mut P,
        clock: &'c C,
        config: TimerConfig,
        timing: FadeTiming,
        period: MillisDurationU32,
        spawn: S,
    ) -> Result<Self, BootError>
    where
        T: PwmTimer,
        P: LedPins,
        S: FnOnce(FadeAnimator<'c, T, C>),
    {
        let tick_freq = clock.tick_freq();
        if tick_freq == 0 {
            return Err(BootError::SchedulerNotReady);
        }

        let controller = PwmController::initialize(timer, config);
        let pwm_tick_freq = controller.tick_freq();
        init_led_pins(pins);

        spawn(FadeAnimator::new(controller, clock, timing));

        Ok(Self {
            clock,
            period_ticks: clock.ticks_for(period),
            pwm_tick_freq,
            beats: 0,
        })
    }

    /// Returns the heartbeat period in scheduler ticks.
    pub fn period_ticks(&self) -> u32 {
        self.period_ticks
    }

    /// Returns the PWM timer tick frequency captured at bring-up.
    pub fn pwm_tick_freq(&self) -> u32 {
        self.pwm_tick_freq
    }

    /// Returns the number of heartbeats emitted so far.
    pub fn beats(&self) -> u32 {
        self.beats
    }

    /// Sleeps one period, then emits one heartbeat record.
    pub fn beat(&mut self) {
        self.clock.delay_ticks(self.period_ticks);
        self.beats = self.beats.wrapping_add(1);

        #[cfg(feature = "defmt")]
        defmt::info!("Heartbeat");
    }

    /// Beats forever. Never returns.
    pub fn run(mut self) -> ! {
        loop {
            self.beat();
        }
    }
}
