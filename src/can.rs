//!# Legacy CAN controller
//! [Controller] exposes the legacy status-code API on top of a [CanDriver].
//!
//!```
//!# use mcp2515_legacy::can::Controller;
//!# use mcp2515_legacy::example::{ExampleDriver, ExamplePlatform};
//!# use mcp2515_legacy::status::Status;
//!# use mcp2515_legacy::config::SpeedConfig;
//!#
//! let mut platform = ExamplePlatform::default();
//!
//! // Controller with INT line wired to GPIO 21
//! let mut controller = Controller::new(ExampleDriver::default(), 21);
//! assert_eq!(Status::Ok, controller.begin(SpeedConfig::Kbps500MHz16 as u8, &mut platform));
//!
//! // Unknown selector
//! assert_eq!(Status::FailInit, controller.begin(7, &mut platform));
//! ```

use crate::config::{CanClock, CanSpeed, SpeedConfig};
use crate::driver::{CanDriver, DriverError};
use crate::filter::{Mask, RxFilter};
use crate::frame::{CanFrame, CAN_EFF_FLAG, MAX_PAYLOAD};
use crate::message::LastMessage;
use crate::platform::InterruptPlatform;
use crate::registers::InterruptFlags;
use crate::slots::{bind_interrupt, Slot, MAX_SLOTS, NO_PIN, SLOTS};
use crate::status::Status;
use log::debug;

/// Legacy-style CAN controller instance
pub struct Controller<D: CanDriver> {
    /// Wrapped register-level driver
    pub(crate) driver: D,

    /// Interrupt slot, fixed for the lifetime of the instance
    slot: Slot,

    /// INT line, None => polling only
    int_pin: Option<u8>,

    /// State of the last successfully read frame
    last: LastMessage,
}

impl<D: CanDriver> Controller<D> {
    /// Creates a controller and acquires its interrupt slot.
    /// * `int_pin`: GPIO of the INT line, [NO_PIN] for polling-only operation
    pub fn new(driver: D, int_pin: u8) -> Self {
        Self {
            driver,
            slot: SLOTS.acquire(int_pin),
            int_pin: (int_pin != NO_PIN).then_some(int_pin),
            last: LastMessage::default(),
        }
    }

    /// Creates a polling-only controller
    pub fn polling(driver: D) -> Self {
        Self::new(driver, NO_PIN)
    }

    /// Resets and configures the controller for the given legacy speed selector,
    /// enters normal mode and binds the INT line if configured
    pub fn begin<P: InterruptPlatform>(&mut self, selector: u8, platform: &mut P) -> Status {
        match SpeedConfig::try_from(selector) {
            Ok(config) => self.configure(config, platform),
            Err(error) => {
                debug!("Rejecting speed selector: {error:?}");
                Status::FailInit
            }
        }
    }

    /// Same as [Controller::begin] with a typed speed configuration
    pub fn configure<P: InterruptPlatform>(&mut self, config: SpeedConfig, platform: &mut P) -> Status {
        let (speed, clock) = config.bitrate();

        if let Err(error) = self.start(speed, clock) {
            debug!("Configuration {config:?} failed: {error:?}");
            return Status::FailInit;
        }

        if let Some(pin) = self.int_pin {
            bind_interrupt(self.slot, pin, platform);
        }

        Status::Ok
    }

    /// Configures the given acceptance mask (0-1)
    pub fn init_mask(&mut self, index: u8, extended: bool, value: u32) -> Status {
        let Some(mask) = Mask::new(index) else {
            debug!("Invalid mask index {index}");
            return Status::FailInit;
        };

        Status::from_result(self.driver.set_filter_mask(mask, extended, value), Status::FailInit)
    }

    /// Configures the given acceptance filter (0-5)
    pub fn init_filter(&mut self, index: u8, extended: bool, value: u32) -> Status {
        let Some(filter) = RxFilter::new(index) else {
            debug!("Invalid filter index {index}");
            return Status::FailInit;
        };

        Status::from_result(self.driver.set_filter(filter, extended, value), Status::FailInit)
    }

    /// Sends a single frame, no retransmission on failure.
    /// Length is clamped to 8 bytes, `data` must hold at least the clamped length.
    pub fn send(&mut self, id: u32, extended: bool, len: u8, data: &[u8]) -> Status {
        let len = (len as usize).min(MAX_PAYLOAD);
        if data.len() < len {
            debug!("Payload buffer of {} bytes shorter than length {len}", data.len());
            return Status::FailTx;
        }

        let mut frame = CanFrame {
            can_id: if extended { id | CAN_EFF_FLAG } else { id },
            can_dlc: len as u8,
            data: [0; MAX_PAYLOAD],
        };
        frame.data[..len].copy_from_slice(&data[..len]);

        Status::from_result(self.driver.send_message(&frame), Status::FailTx)
    }

    /// Reads one frame into the last message state.
    /// Payload is copied into `buf` (up to its size) and length written to `len` if given.
    pub fn read_into(&mut self, len: Option<&mut u8>, buf: Option<&mut [u8]>) -> Status {
        // Taken before the read, an interrupt raised meanwhile stays pending
        let pending = SLOTS.take(self.slot);

        let frame = match self.driver.read_message() {
            Ok(frame) => frame,
            Err(error) => {
                if pending {
                    SLOTS.raise(self.slot);
                }

                return match error {
                    DriverError::NoMessage => Status::NoMsg,
                    error => {
                        debug!("Reading message failed: {error:?}");
                        Status::Fail
                    }
                };
            }
        };

        self.last = LastMessage::from_frame(&frame);
        let data = self.last.data();

        if let Some(buf) = buf {
            let count = data.len().min(buf.len());
            buf[..count].copy_from_slice(&data[..count]);
        }

        if let Some(len) = len {
            *len = self.last.len();
        }

        Status::Ok
    }

    /// [Controller::read_into] that additionally reports id and format of the frame.
    /// Outputs are left untouched if no frame was read.
    pub fn read_all(
        &mut self,
        id: Option<&mut u32>,
        extended: Option<&mut bool>,
        len: Option<&mut u8>,
        buf: Option<&mut [u8]>,
    ) -> Status {
        let status = self.read_into(len, buf);
        if status != Status::Ok {
            return status;
        }

        if let Some(id) = id {
            *id = self.last.id();
        }

        if let Some(extended) = extended {
            *extended = self.last.is_extended();
        }

        Status::Ok
    }

    /// Interrupt-based availability check.
    /// Only asks the driver if the INT line fired since the last read.
    pub fn check_receive(&mut self) -> Status {
        if self.int_pin.is_none() {
            return Status::NoMsg;
        }

        if !SLOTS.take(self.slot) {
            return Status::NoMsg;
        }

        if self.rx_pending() {
            // Stays pending until the frame is read
            SLOTS.raise(self.slot);
            return Status::MsgAvailable;
        }

        debug!("Spurious interrupt on slot {}", self.slot.index());
        Status::NoMsg
    }

    /// Polling-based availability check, works without INT line
    pub fn check_poll(&mut self) -> Status {
        if self.rx_pending() {
            return Status::MsgAvailable;
        }

        Status::NoMsg
    }

    /// [Status::CtrlError] if any error flag is set
    pub fn check_error(&mut self) -> Status {
        match self.driver.error_flags() {
            0 => Status::Ok,
            _ => Status::CtrlError,
        }
    }

    pub fn set_mode_normal(&mut self) -> Status {
        Status::from_result(self.driver.set_normal_mode(), Status::Fail)
    }

    pub fn set_mode_loopback(&mut self) -> Status {
        Status::from_result(self.driver.set_loopback_mode(), Status::Fail)
    }

    pub fn set_mode_listen_only(&mut self) -> Status {
        Status::from_result(self.driver.set_listen_only_mode(), Status::Fail)
    }

    /// Id of the last received frame
    pub fn can_id(&self) -> u32 {
        self.last.id()
    }

    /// State of the last received frame
    pub fn last_message(&self) -> &LastMessage {
        &self.last
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// True if this instance shares its interrupt slot with another controller
    pub fn is_slot_shared(&self) -> bool {
        self.slot.is_shared() || (self.slot.index() == MAX_SLOTS - 1 && SLOTS.is_overflowed())
    }

    /// INT line, None if polling only
    pub fn interrupt_pin(&self) -> Option<u8> {
        self.int_pin
    }

    /// Releases the wrapped driver
    pub fn release(self) -> D {
        self.driver
    }

    /// Reset, bit timing and normal mode, aborting on the first failing step
    fn start(&mut self, speed: CanSpeed, clock: CanClock) -> Result<(), DriverError> {
        self.driver.reset()?;
        self.driver.set_bitrate(speed, clock)?;
        self.driver.set_normal_mode()?;

        Ok(())
    }

    /// True if any receive buffer full flag is set
    fn rx_pending(&mut self) -> bool {
        InterruptFlags::from(self.driver.interrupts()).rx_pending()
    }
}
