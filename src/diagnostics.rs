//!# Diagnostics
//! Untranslated access to registers and error flags, for callers implementing their own
//! bus-health handling (bus-off recovery, detection of a locked up device, ...).
//!
//! ```
//!# use mcp2515_legacy::can::Controller;
//!# use mcp2515_legacy::example::ExampleDriver;
//! let mut controller = Controller::polling(ExampleDriver::default());
//!
//! let flags = controller.error_flags();
//! assert!(!flags.is_bus_off());
//! assert!(!flags.has_rx_overflow());
//! ```

use crate::can::Controller;
use crate::driver::CanDriver;
use crate::registers::ErrorFlags;

impl<D: CanDriver> Controller<D> {
    /// Reads a register of the device.
    /// A non-responding device typically returns `0x00` or `0xFF` for every address.
    pub fn read_register(&mut self, address: u8) -> u8 {
        self.driver.read_register(address)
    }

    /// Raw EFLG byte
    pub fn error_flags_raw(&mut self) -> u8 {
        self.driver.error_flags()
    }

    /// Decoded EFLG byte
    pub fn error_flags(&mut self) -> ErrorFlags {
        ErrorFlags::from(self.driver.error_flags())
    }
}
