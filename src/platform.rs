//!# Interrupt platform
//! The controller attaches context-free handlers (`fn()`) to the falling edge of its INT line.
//! [InterruptPlatform] abstracts the board support doing so.
//!
//! Boards without edge interrupts on the wired GPIO can use [PolledEdges], which samples
//! [embedded_hal::digital::InputPin]s and runs the attached handler on every high to low transition.
//!
//! ```
//!# use mcp2515_legacy::platform::{InterruptPlatform, PolledEdges};
//!# use core::convert::Infallible;
//!# use embedded_hal::digital::{ErrorType, InputPin};
//!# use core::sync::atomic::{AtomicBool, Ordering};
//!# struct Line(bool);
//!# impl ErrorType for Line { type Error = Infallible; }
//!# impl InputPin for Line {
//!#     fn is_high(&mut self) -> Result<bool, Infallible> { Ok(self.0) }
//!#     fn is_low(&mut self) -> Result<bool, Infallible> { Ok(!self.0) }
//!# }
//! static FIRED: AtomicBool = AtomicBool::new(false);
//!
//! let mut edges = PolledEdges::new([(21, Line(true))]);
//! edges.attach_falling_edge(21, || FIRED.store(true, Ordering::SeqCst));
//!
//! edges.poll().unwrap();
//! assert!(!FIRED.load(Ordering::SeqCst));
//! ```

use embedded_hal::digital::InputPin;
use log::{debug, warn};

/// Board support for GPIO interrupts
pub trait InterruptPlatform {
    /// Configures the pin as input
    fn pin_mode_input(&mut self, pin: u8);

    /// Runs `handler` on each falling edge of the pin
    fn attach_falling_edge(&mut self, pin: u8, handler: fn());
}

/// Platform without interrupt support, for controllers in polling mode
#[derive(Copy, Clone, Debug, Default)]
pub struct NoInterrupts;

impl InterruptPlatform for NoInterrupts {
    fn pin_mode_input(&mut self, _pin: u8) {}

    fn attach_falling_edge(&mut self, pin: u8, _handler: fn()) {
        warn!("No interrupt support, falling edge of pin {pin} is ignored");
    }
}

/// Software edge detection on input pins
pub struct PolledEdges<P: InputPin, const N: usize> {
    lines: [EdgeLine<P>; N],
}

struct EdgeLine<P> {
    gpio: u8,
    pin: P,
    /// INT is active low, lines idle high
    was_high: bool,
    handler: Option<fn()>,
}

impl<P: InputPin, const N: usize> PolledEdges<P, N> {
    /// Creates the detector for the given (GPIO number, pin) pairs
    pub fn new(pins: [(u8, P); N]) -> Self {
        Self {
            lines: pins.map(|(gpio, pin)| EdgeLine {
                gpio,
                pin,
                was_high: true,
                handler: None,
            }),
        }
    }

    /// Samples all lines with attached handler and runs the handlers of lines which went low
    pub fn poll(&mut self) -> Result<(), P::Error> {
        for line in self.lines.iter_mut() {
            let Some(handler) = line.handler else {
                continue;
            };

            let high = line.pin.is_high()?;
            if line.was_high && !high {
                handler();
            }
            line.was_high = high;
        }

        Ok(())
    }

    /// Releases the pins
    pub fn free(self) -> [(u8, P); N] {
        self.lines.map(|line| (line.gpio, line.pin))
    }
}

impl<P: InputPin, const N: usize> InterruptPlatform for PolledEdges<P, N> {
    fn pin_mode_input(&mut self, pin: u8) {
        if !self.lines.iter().any(|line| line.gpio == pin) {
            debug!("Pin {pin} is not sampled");
        }
    }

    fn attach_falling_edge(&mut self, pin: u8, handler: fn()) {
        match self.lines.iter_mut().find(|line| line.gpio == pin) {
            Some(line) => {
                line.handler = Some(handler);
                line.was_high = true;
            }
            None => warn!("Pin {pin} is not sampled, handler not attached"),
        }
    }
}
