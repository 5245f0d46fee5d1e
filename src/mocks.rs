use crate::config::{CanClock, CanSpeed};
use crate::driver::{CanDriver, DriverError};
use crate::filter::{Mask, RxFilter};
use crate::frame::CanFrame;
use crate::platform::InterruptPlatform;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin};
use mockall::mock;

mock! {
    pub Driver {}

    impl CanDriver for Driver {
        fn reset(&mut self) -> Result<(), DriverError>;
        fn set_bitrate(&mut self, speed: CanSpeed, clock: CanClock) -> Result<(), DriverError>;
        fn set_normal_mode(&mut self) -> Result<(), DriverError>;
        fn set_loopback_mode(&mut self) -> Result<(), DriverError>;
        fn set_listen_only_mode(&mut self) -> Result<(), DriverError>;
        fn set_filter_mask(&mut self, mask: Mask, extended: bool, value: u32) -> Result<(), DriverError>;
        fn set_filter(&mut self, filter: RxFilter, extended: bool, value: u32) -> Result<(), DriverError>;
        fn send_message(&mut self, frame: &CanFrame) -> Result<(), DriverError>;
        fn read_message(&mut self) -> Result<CanFrame, DriverError>;
        fn interrupts(&mut self) -> u8;
        fn error_flags(&mut self) -> u8;
        fn read_register(&mut self, address: u8) -> u8;
    }
}

mock! {
    pub Platform {}

    impl InterruptPlatform for Platform {
        fn pin_mode_input(&mut self, pin: u8);
        fn attach_falling_edge(&mut self, pin: u8, handler: fn());
    }
}

/// Input pin returning the scripted levels, one per read
#[derive(Debug, PartialEq, Eq)]
pub struct TestPin {
    pub levels: Vec<bool>,
}

impl TestPin {
    pub fn new(levels: Vec<bool>) -> Self {
        Self { levels }
    }

    fn next_level(&mut self) -> bool {
        assert!(!self.levels.is_empty(), "Unexpected pin read");
        self.levels.remove(0)
    }
}

impl ErrorType for TestPin {
    type Error = Infallible;
}

impl InputPin for TestPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.next_level())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.next_level())
    }
}
