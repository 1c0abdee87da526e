//! PWM duty-cycle controller owning the timer peripheral.
//!
//! [`PwmController::initialize`] consumes the [`PwmTimer`] value and returns
//! the only handle that can touch timer state afterwards. Single-writer
//! access to the compare registers is therefore enforced by ownership: move
//! the controller into the one task that animates the LED and no other code
//! can write a duty cycle.

use crate::timer::{LedPins, OutputAction, Prescale, PwmChannel, PwmTimer};

/// Default counting top value. Duty-cycle values are expressed relative to
/// this period, so a compare value of 50 is a 50% duty.
pub const PWM_PERIOD: u32 = 100;

/// One atomic red/green/blue duty-cycle update.
///
/// All three values are always written together so the channels never show
/// a mixed old/new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycle {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl DutyCycle {
    /// All channels off.
    pub const OFF: Self = Self::new(0, 0, 0);

    /// Equal perceived brightness at full drive.
    ///
    /// Red needs less drive than green to look equally bright, so the three
    /// maxima differ: red 40, green 100, blue 20. Found empirically on the
    /// reference board.
    pub const EQUAL_BRIGHTNESS: Self = Self::new(40, 100, 20);

    /// Creates a duty-cycle triple.
    #[inline]
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Returns the value for a single channel.
    pub fn channel(self, channel: PwmChannel) -> u32 {
        match channel {
            PwmChannel::Red => self.red,
            PwmChannel::Green => self.green,
            PwmChannel::Blue => self.blue,
        }
    }
}

/// Output route location per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelLocations {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ChannelLocations {
    /// Reference board wiring: red on PB12 (location 7), green on PB11
    /// (location 5), blue on PA5 (location 3).
    pub const BOARD_DEFAULT: Self = Self {
        red: 7,
        green: 5,
        blue: 3,
    };

    /// Returns the route location for a single channel.
    pub fn channel(self, channel: PwmChannel) -> u8 {
        match channel {
            PwmChannel::Red => self.red,
            PwmChannel::Green => self.green,
            PwmChannel::Blue => self.blue,
        }
    }
}

/// Immutable timer configuration, applied once at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Clock prescale divisor.
    pub prescale: Prescale,
    /// Counting top value (PWM period).
    pub top: u32,
    /// Output pin action on compare match.
    pub action: OutputAction,
    /// Output route location per channel.
    pub locations: ChannelLocations,
    /// Duty cycle written before the counter starts.
    pub initial_duty: DutyCycle,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            prescale: Prescale::Div64,
            top: PWM_PERIOD,
            action: OutputAction::Toggle,
            locations: ChannelLocations::BOARD_DEFAULT,
            initial_duty: DutyCycle::EQUAL_BRIGHTNESS,
        }
    }
}

/// Owned handle to the running PWM timer.
///
/// Created once by [`initialize`](Self::initialize); there is no way to
/// obtain a second handle to the same timer, and no way to initialize the
/// same timer twice, because initialization consumes the peripheral value.
pub struct PwmController<T: PwmTimer> {
    timer: T,
    tick_freq: u32,
}

impl<T: PwmTimer> PwmController<T> {
    /// Consumes the timer peripheral, configures it for tri-channel PWM and
    /// starts it running.
    ///
    /// Configures all three capture-compare channels with the configured
    /// output action, sets the counting top, writes the initial duty triple,
    /// routes the channel outputs to their pin locations and starts the
    /// counter with the configured prescale.
    pub fn initialize(mut timer: T, config: TimerConfig) -> Self {
        for channel in PwmChannel::ALL {
            timer.configure_channel(channel, config.action);
        }

        timer.set_top(config.top);

        for channel in PwmChannel::ALL {
            timer.set_compare(channel, config.initial_duty.channel(channel));
        }

        for channel in PwmChannel::ALL {
            timer.connect_output(channel, config.locations.channel(channel));
        }

        timer.start(config.prescale);

        let tick_freq = timer.clock_freq() >> config.prescale.exponent();
        Self { timer, tick_freq }
    }

    /// Returns the timer tick frequency in Hz: source clock divided by the
    /// prescale factor.
    pub fn tick_freq(&self) -> u32 {
        self.tick_freq
    }

    /// Writes all three compare buffers in one call.
    ///
    /// No clamping is performed; values above the counting top pass through
    /// unmodified and produce hardware-defined (non-crashing but visually
    /// incorrect) PWM output. Callers keep values within `[0, top]`.
    pub fn set_duty_cycle(&mut self, duty: DutyCycle) {
        self.timer.set_compare_buffered(PwmChannel::Red, duty.red);
        self.timer.set_compare_buffered(PwmChannel::Green, duty.green);
        self.timer.set_compare_buffered(PwmChannel::Blue, duty.blue);
    }
}

/// Configures the three LED pins as push-pull digital outputs.
///
/// Must run before the timer's routed PWM output can reach the LEDs.
/// Idempotent in effect.
pub fn init_led_pins<P: LedPins>(pins: &mut P) {
    pins.set_push_pull();
}
