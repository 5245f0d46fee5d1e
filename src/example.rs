//! # Dummy structures for doc examples
//!
//! [ExampleDriver] behaves like a device in loopback mode: a sent frame becomes readable.
use crate::config::{CanClock, CanSpeed};
use crate::driver::{CanDriver, DriverError};
use crate::filter::{Mask, RxFilter};
use crate::frame::CanFrame;
use crate::platform::InterruptPlatform;

#[derive(Default, Debug)]
pub struct ExampleDriver {
    pending: Option<CanFrame>,
}

impl CanDriver for ExampleDriver {
    fn reset(&mut self) -> Result<(), DriverError> {
        self.pending = None;
        Ok(())
    }

    fn set_bitrate(&mut self, _speed: CanSpeed, _clock: CanClock) -> Result<(), DriverError> {
        Ok(())
    }

    fn set_normal_mode(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn set_loopback_mode(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn set_listen_only_mode(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn set_filter_mask(&mut self, _mask: Mask, _extended: bool, _value: u32) -> Result<(), DriverError> {
        Ok(())
    }

    fn set_filter(&mut self, _filter: RxFilter, _extended: bool, _value: u32) -> Result<(), DriverError> {
        Ok(())
    }

    fn send_message(&mut self, frame: &CanFrame) -> Result<(), DriverError> {
        if self.pending.is_some() {
            return Err(DriverError::AllTxBusy);
        }

        self.pending = Some(*frame);
        Ok(())
    }

    fn read_message(&mut self) -> Result<CanFrame, DriverError> {
        self.pending.take().ok_or(DriverError::NoMessage)
    }

    fn interrupts(&mut self) -> u8 {
        // RX0IF
        self.pending.map_or(0x0, |_| 0x01)
    }

    fn error_flags(&mut self) -> u8 {
        0x0
    }

    fn read_register(&mut self, _address: u8) -> u8 {
        0x0
    }
}

/// Platform accepting every pin, handlers are never called
#[derive(Default, Debug)]
pub struct ExamplePlatform {
    pub attached: Option<u8>,
}

impl InterruptPlatform for ExamplePlatform {
    fn pin_mode_input(&mut self, _pin: u8) {}

    fn attach_falling_edge(&mut self, pin: u8, _handler: fn()) {
        self.attached = Some(pin);
    }
}
