//! Hardware abstraction for the tri-channel PWM timer and LED pins.
//!
//! Implement [`PwmTimer`] for your timer peripheral and [`LedPins`] for the
//! three LED output pins to let [`PwmController`](crate::pwm::PwmController)
//! drive them. The trait surface mirrors what a capture-compare timer
//! offers: per-channel PWM configuration, a counting top, immediate and
//! buffered compare writes, output routing and a prescaled start.

/// The three capture-compare channels, one per LED color.
///
/// Channel indices follow the reference board wiring: red on channel 0,
/// green on channel 1, blue on channel 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    Red,
    Green,
    Blue,
}

impl PwmChannel {
    /// All channels in register order.
    pub const ALL: [PwmChannel; 3] = [PwmChannel::Red, PwmChannel::Green, PwmChannel::Blue];

    /// Returns the hardware channel index.
    pub fn index(self) -> usize {
        match self {
            PwmChannel::Red => 0,
            PwmChannel::Green => 1,
            PwmChannel::Blue => 2,
        }
    }
}

/// Output pin action on compare match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputAction {
    /// Leave the output untouched.
    None,
    /// Toggle the output.
    #[default]
    Toggle,
    /// Drive the output low.
    Clear,
    /// Drive the output high.
    Set,
}

/// Clock prescale divisor applied before the counter.
///
/// The discriminant is the exponent: `Div64` divides by 2^6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Prescale {
    Div1 = 0,
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
    Div256 = 8,
    Div512 = 9,
    Div1024 = 10,
}

impl Prescale {
    /// Returns the division factor (`1 << exponent`).
    pub fn divisor(self) -> u32 {
        1 << (self as u32)
    }

    /// Returns the prescale exponent.
    pub fn exponent(self) -> u32 {
        self as u32
    }
}

/// Trait for abstracting the PWM timer peripheral.
///
/// Methods are infallible: peripheral register writes on the target hardware
/// cannot report failure. Implementations for mock hardware should record
/// the calls instead.
pub trait PwmTimer {
    /// Returns the source clock frequency in Hz, before prescaling.
    fn clock_freq(&self) -> u32;

    /// Configures a capture-compare channel for PWM with the given output
    /// action on compare match.
    fn configure_channel(&mut self, channel: PwmChannel, action: OutputAction);

    /// Sets the counting top value (the PWM period).
    fn set_top(&mut self, top: u32);

    /// Writes a compare value immediately.
    ///
    /// Used for the initial duty before the counter starts.
    fn set_compare(&mut self, channel: PwmChannel, value: u32);

    /// Writes a compare value through the buffer register, latched at the
    /// next counter wrap so a running PWM period is never cut short.
    fn set_compare_buffered(&mut self, channel: PwmChannel, value: u32);

    /// Routes the channel output to the physical pin at `location`.
    fn connect_output(&mut self, channel: PwmChannel, location: u8);

    /// Applies the prescale divisor and starts the counter.
    fn start(&mut self, prescale: Prescale);
}

/// Trait for abstracting the three LED output pins.
pub trait LedPins {
    /// Configures all three pins as push-pull digital outputs.
    ///
    /// Re-applying the same pin mode is safe; implementations need not
    /// guard against repeated calls.
    fn set_push_pull(&mut self);
}
