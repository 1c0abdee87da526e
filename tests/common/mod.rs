//! Shared test infrastructure for rgb-fader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use rgb_fader::{DutyCycle, LedPins, OutputAction, Prescale, PwmChannel, PwmTimer, TickClock};

/// Source clock of the mock timer (32 MHz, as on the reference board)
pub const CLOCK_FREQ: u32 = 32_000_000;

// ============================================================================
// Mock Timer
// ============================================================================

/// Record of every hardware access the mock timer has seen
#[derive(Default)]
pub struct TimerLog {
    pub configured: heapless::Vec<(PwmChannel, OutputAction), 8>,
    pub top: Option<u32>,
    pub compares: heapless::Vec<(PwmChannel, u32), 8>,
    pub routed: heapless::Vec<(PwmChannel, u8), 8>,
    pub started: Option<Prescale>,
    /// Completed buffered triples, pushed once the blue channel is written
    pub duty_writes: heapless::Vec<DutyCycle, 64>,
    pending: DutyCycle,
}

/// Mock PWM timer that records all register accesses in a shared log
pub struct MockTimer {
    log: Rc<RefCell<TimerLog>>,
}

impl MockTimer {
    /// Creates a mock timer plus a handle to its access log
    pub fn new() -> (Self, Rc<RefCell<TimerLog>>) {
        let log = Rc::new(RefCell::new(TimerLog::default()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl PwmTimer for MockTimer {
    fn clock_freq(&self) -> u32 {
        CLOCK_FREQ
    }

    fn configure_channel(&mut self, channel: PwmChannel, action: OutputAction) {
        self.log
            .borrow_mut()
            .configured
            .push((channel, action))
            .unwrap();
    }

    fn set_top(&mut self, top: u32) {
        self.log.borrow_mut().top = Some(top);
    }

    fn set_compare(&mut self, channel: PwmChannel, value: u32) {
        self.log.borrow_mut().compares.push((channel, value)).unwrap();
    }

    fn set_compare_buffered(&mut self, channel: PwmChannel, value: u32) {
        let mut log = self.log.borrow_mut();
        match channel {
            PwmChannel::Red => log.pending.red = value,
            PwmChannel::Green => log.pending.green = value,
            PwmChannel::Blue => {
                log.pending.blue = value;
                let triple = log.pending;
                log.duty_writes.push(triple).unwrap();
            }
        }
    }

    fn connect_output(&mut self, channel: PwmChannel, location: u8) {
        self.log.borrow_mut().routed.push((channel, location)).unwrap();
    }

    fn start(&mut self, prescale: Prescale) {
        self.log.borrow_mut().started = Some(prescale);
    }
}

// ============================================================================
// Mock LED Pins
// ============================================================================

/// Mock GPIO pins counting how often push-pull mode was applied
#[derive(Default)]
pub struct MockPins {
    pub configure_count: u32,
}

impl MockPins {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedPins for MockPins {
    fn set_push_pull(&mut self) {
        self.configure_count += 1;
    }
}

// ============================================================================
// Mock Tick Clock
// ============================================================================

/// Mock scheduler clock with settable tick frequency and recorded delays
pub struct MockClock {
    tick_freq: Cell<u32>,
    delays: RefCell<heapless::Vec<u32, 128>>,
}

impl MockClock {
    pub fn new(tick_freq: u32) -> Self {
        Self {
            tick_freq: Cell::new(tick_freq),
            delays: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn set_tick_freq(&self, tick_freq: u32) {
        self.tick_freq.set(tick_freq);
    }

    /// All delays requested so far, in ticks
    pub fn delays(&self) -> heapless::Vec<u32, 128> {
        self.delays.borrow().clone()
    }

    /// Total time slept so far, in ticks
    pub fn total_ticks(&self) -> u64 {
        self.delays.borrow().iter().map(|&t| u64::from(t)).sum()
    }
}

impl TickClock for MockClock {
    fn tick_freq(&self) -> u32 {
        self.tick_freq.get()
    }

    fn delay_ticks(&self, ticks: u32) {
        self.delays.borrow_mut().push(ticks).unwrap();
    }
}
