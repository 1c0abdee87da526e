//! Tick-based timing abstraction for platform-agnostic task delays.

use fugit::MillisDurationU32;

/// Trait for abstracting the scheduler's clock.
///
/// Implement this for your scheduler (RTOS kernel, embassy timer, SysTick
/// loop) to give tasks a tick frequency and a timed suspension primitive.
/// Every delay in this crate goes through this trait, so it is the sole
/// suspension point of both tasks.
pub trait TickClock {
    /// Returns the scheduler tick frequency in Hz.
    ///
    /// A return value of `0` means the scheduler is not running yet.
    fn tick_freq(&self) -> u32;

    /// Suspends the calling task for the given number of ticks.
    fn delay_ticks(&self, ticks: u32);

    /// Converts a duration into scheduler ticks, rounding down.
    fn ticks_for(&self, duration: MillisDurationU32) -> u32 {
        duration_to_ticks(self.tick_freq(), duration)
    }

    /// Suspends the calling task for the given duration.
    fn delay(&self, duration: MillisDurationU32) {
        self.delay_ticks(self.ticks_for(duration));
    }
}

/// Converts a duration into ticks at the given tick frequency, rounding down.
///
/// The intermediate product is widened to `u64` so high tick frequencies
/// (e.g. 500 kHz) don't overflow for second-scale durations.
pub fn duration_to_ticks(tick_freq: u32, duration: MillisDurationU32) -> u32 {
    (u64::from(duration.to_millis()) * u64::from(tick_freq) / 1000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use fugit::ExtU32;

    #[test]
    fn millisecond_tick_rate_maps_one_to_one() {
        assert_eq!(duration_to_ticks(1000, 20u32.millis()), 20);
        assert_eq!(duration_to_ticks(1000, 10_000u32.millis()), 10_000);
    }

    #[test]
    fn high_tick_rate_does_not_overflow() {
        // 500 kHz kernel tick, 10 second period
        assert_eq!(duration_to_ticks(500_000, 10_000u32.millis()), 5_000_000);
    }

    #[test]
    fn sub_tick_durations_round_down_to_zero() {
        assert_eq!(duration_to_ticks(100, 5u32.millis()), 0);
    }
}
