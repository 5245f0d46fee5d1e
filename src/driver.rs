//!# Wrapped register-level driver
//! [CanDriver] is the capability the [Controller](crate::can::Controller) needs from the underlying
//! MCP2515 driver. Each operation reports success or a native [DriverError].

use crate::config::{CanClock, CanSpeed};
use crate::filter::{Mask, RxFilter};
use crate::frame::CanFrame;

/// Native error codes of the wrapped driver
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DriverError {
    /// Unspecified failure, e.g. mode change not confirmed by the device
    Fail,
    /// All transmit buffers are pending
    AllTxBusy,
    /// Configuration could not be applied
    FailInit,
    /// Transmission request failed
    FailTx,
    /// Receive buffers are empty
    NoMessage,
}

/// Register-level CAN controller driver
pub trait CanDriver {
    /// Resets the device to its power-on defaults (configuration mode)
    fn reset(&mut self) -> Result<(), DriverError>;

    /// Programs the bit timing registers
    fn set_bitrate(&mut self, speed: CanSpeed, clock: CanClock) -> Result<(), DriverError>;

    fn set_normal_mode(&mut self) -> Result<(), DriverError>;

    fn set_loopback_mode(&mut self) -> Result<(), DriverError>;

    fn set_listen_only_mode(&mut self) -> Result<(), DriverError>;

    /// Programs an acceptance mask
    fn set_filter_mask(&mut self, mask: Mask, extended: bool, value: u32) -> Result<(), DriverError>;

    /// Programs an acceptance filter
    fn set_filter(&mut self, filter: RxFilter, extended: bool, value: u32) -> Result<(), DriverError>;

    /// Queues the frame in a free transmit buffer
    fn send_message(&mut self, frame: &CanFrame) -> Result<(), DriverError>;

    /// Reads one frame, [DriverError::NoMessage] if both receive buffers are empty
    fn read_message(&mut self) -> Result<CanFrame, DriverError>;

    /// Raw CANINTF byte, see [InterruptFlags](crate::registers::InterruptFlags)
    fn interrupts(&mut self) -> u8;

    /// Raw EFLG byte, see [ErrorFlags](crate::registers::ErrorFlags)
    fn error_flags(&mut self) -> u8;

    fn read_register(&mut self, address: u8) -> u8;
}
