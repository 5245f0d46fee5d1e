//!# Raw driver access
//! Sends and receives frames with the native [DriverError] of the wrapped driver.
//! Neither status translation nor the last message state of the controller are involved.

use crate::can::Controller;
use crate::driver::{CanDriver, DriverError};
use crate::frame::CanFrame;

impl<D: CanDriver> Controller<D> {
    pub fn raw_send(&mut self, frame: &CanFrame) -> Result<(), DriverError> {
        self.driver.send_message(frame)
    }

    pub fn raw_read(&mut self) -> Result<CanFrame, DriverError> {
        self.driver.read_message()
    }
}
